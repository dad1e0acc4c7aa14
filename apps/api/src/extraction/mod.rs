//! Text extraction from uploaded resumes.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; the default is
//! `DocumentExtractor`, which dispatches PDFs to `pdf-extract` and images to
//! the Tesseract CLI. Failures are reported as `ExtractionError` so callers can
//! tell "decoding failed" apart from "decoded, but no text".

pub mod ocr;
pub mod pdf;

use async_trait::async_trait;
use thiserror::Error;

pub use ocr::TesseractOcr;
pub use pdf::PdfTextExtractor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
}

impl FileKind {
    /// Detects the kind from the text after the last `.` (case-insensitive).
    /// A bare `.pdf` counts as a PDF.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractionError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or_else(|| ExtractionError::UnsupportedFileType(filename.to_string()))?;

        match extension.as_str() {
            "pdf" => Ok(FileKind::Pdf),
            "png" | "jpg" | "jpeg" => Ok(FileKind::Image),
            _ => Err(ExtractionError::UnsupportedFileType(filename.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("OCR timed out after {0} seconds")]
    Timeout(u64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the document's text. `Ok` with blank text means the file
    /// decoded fine but contained nothing readable.
    async fn extract(&self, bytes: &[u8], kind: FileKind) -> Result<String, ExtractionError>;
}

/// Default extractor: PDF text layer or OCR, chosen by file kind.
pub struct DocumentExtractor {
    pdf: PdfTextExtractor,
    ocr: TesseractOcr,
}

impl DocumentExtractor {
    pub fn new(pdf: PdfTextExtractor, ocr: TesseractOcr) -> Self {
        Self { pdf, ocr }
    }
}

#[async_trait]
impl TextExtractor for DocumentExtractor {
    async fn extract(&self, bytes: &[u8], kind: FileKind) -> Result<String, ExtractionError> {
        match kind {
            FileKind::Pdf => self.pdf.extract(bytes).await,
            FileKind::Image => self.ocr.extract(bytes).await,
        }
    }
}
