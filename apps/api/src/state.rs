use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::skills::SkillMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Precompiled matcher over the vocabulary chosen at startup. Read-only.
    pub matcher: Arc<SkillMatcher>,
    /// Pluggable extractor. Default: DocumentExtractor (pdf-extract + Tesseract).
    pub extractor: Arc<dyn TextExtractor>,
}
