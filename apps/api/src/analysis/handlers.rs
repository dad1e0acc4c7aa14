//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::FileKind;
use crate::skills::{build_report, SkillGapReport};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

/// The parts of the upload form this service reads.
#[derive(Debug, Default)]
struct AnalyzeForm {
    resume: Option<UploadedFile>,
    jd: Option<String>,
}

#[derive(Debug)]
struct UploadedFile {
    filename: String,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Multipart form: `resume` (PDF/PNG/JPG file) and `jd` (job description text).
/// Extracts the resume text, then reports matched and missing skills.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SkillGapReport>, AppError> {
    let form = read_form(multipart).await?;

    let resume = form
        .resume
        .ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;
    if resume.filename.trim().is_empty() {
        return Err(AppError::Validation("No selected file".to_string()));
    }
    let kind = FileKind::from_filename(&resume.filename)?;

    let jd_text = form.jd.unwrap_or_default();
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation("No job description provided".to_string()));
    }

    let resume_text = state.extractor.extract(&resume.bytes, kind).await?;
    if resume_text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Could not extract text from the resume.".to_string(),
        ));
    }

    let report = build_report(&state.matcher, &resume_text, &jd_text);
    info!(
        "Analyzed {:?} resume ({} bytes): {} resume skills, {} JD skills, {} missing",
        kind,
        resume.bytes.len(),
        report.resume_skills.len(),
        report.jd_skills.len(),
        report.missing_skills.len()
    );

    Ok(Json(report))
}

/// POST /api/analyze/text
///
/// Same analysis for callers that already have the resume as plain text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<SkillGapReport>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let report = build_report(&state.matcher, &request.resume_text, &request.jd_text);
    Ok(Json(report))
}

/// GET /api/skills
///
/// Lists the recognised skills in display order.
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: state.matcher.vocabulary().skills().to_vec(),
    })
}

/// Collects the `resume` and `jd` fields; unknown fields are skipped.
async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                form.resume = Some(UploadedFile { filename, bytes });
            }
            "jd" => {
                form.jd = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(form)
}
