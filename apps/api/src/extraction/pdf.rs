use tracing::{debug, warn};

use crate::extraction::ExtractionError;

/// Reads the text layer of a PDF with `pdf-extract`.
///
/// Parsing is CPU-bound and the parser can panic on malformed input, so it runs
/// inside `spawn_blocking`; a panic surfaces as a join error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub async fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let owned = bytes.to_vec();
        let size = owned.len();

        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&owned))
            .await
            .map_err(|e| {
                warn!("PDF parser aborted: {e}");
                ExtractionError::Pdf(format!("parser aborted: {e}"))
            })?
            .map_err(|e| {
                warn!("PDF parse error: {e}");
                ExtractionError::Pdf(e.to_string())
            })?;

        debug!("Extracted {} chars from {size}-byte PDF", text.len());
        Ok(text)
    }
}
