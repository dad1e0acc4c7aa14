// Skill extraction and gap analysis.
// Pure and synchronous: safe to call from any number of handlers at once.

pub mod gap;
pub mod matcher;
pub mod vocabulary;

use serde::Serialize;

pub use gap::{analyze, Recommendation};
pub use matcher::SkillMatcher;
pub use vocabulary::Vocabulary;

/// Full result for one resume/JD pair, serialized as the response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGapReport {
    pub resume_skills: Vec<String>,
    pub jd_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Matches both texts against the vocabulary and reports the gap.
pub fn build_report(matcher: &SkillMatcher, resume_text: &str, jd_text: &str) -> SkillGapReport {
    let resume_skills = matcher.find_skills(resume_text);
    let jd_skills = matcher.find_skills(jd_text);
    let gap = analyze(&resume_skills, &jd_skills);

    SkillGapReport {
        resume_skills: resume_skills.into_iter().collect(),
        jd_skills: jd_skills.into_iter().collect(),
        missing_skills: gap.missing,
        recommendations: gap.recommendations,
    }
}
