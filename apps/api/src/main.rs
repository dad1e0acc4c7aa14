mod analysis;
mod config;
mod errors;
mod extraction;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::{DocumentExtractor, PdfTextExtractor, TesseractOcr};
use crate::routes::build_router;
use crate::skills::{SkillMatcher, Vocabulary};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PathUp API v{}", env!("CARGO_PKG_VERSION"));

    // A bad vocabulary refuses to start rather than degrading every match.
    let vocabulary = Vocabulary::default_skills()?;
    let matcher = SkillMatcher::new(vocabulary)?;
    info!(
        "Skill matcher ready ({} skills)",
        matcher.vocabulary().len()
    );

    let extractor = DocumentExtractor::new(
        PdfTextExtractor,
        TesseractOcr::new(config.tesseract_cmd.clone(), config.ocr_timeout_secs),
    );
    info!(
        "Text extractor ready (OCR: {}, timeout {}s)",
        config.tesseract_cmd, config.ocr_timeout_secs
    );

    let state = AppState {
        config: config.clone(),
        matcher: Arc::new(matcher),
        extractor: Arc::new(extractor),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
