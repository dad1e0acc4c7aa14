//! Image OCR through the Tesseract command-line tool.
//!
//! The upload is written to a temporary file (removed on drop) and
//! `tesseract <file> stdout` is run as a child process under a timeout.

use std::io::Write;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::extraction::ExtractionError;

#[derive(Debug, Clone)]
pub struct TesseractOcr {
    command: String,
    timeout_secs: u64,
}

impl TesseractOcr {
    pub fn new(command: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            command: command.into(),
            timeout_secs,
        }
    }

    pub async fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        // Tesseract sniffs the image format from content, the suffix only helps debugging.
        let mut file = tempfile::Builder::new()
            .prefix("pathup-upload-")
            .suffix(".img")
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;

        let child = Command::new(&self.command)
            .arg(file.path())
            .arg("stdout")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                warn!("Failed to start OCR command '{}': {e}", self.command);
                ExtractionError::Ocr(format!("could not run '{}': {e}", self.command))
            })?;

        let output = tokio::time::timeout(
            Duration::from_secs(self.timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| {
            warn!("OCR timed out after {}s", self.timeout_secs);
            ExtractionError::Timeout(self.timeout_secs)
        })??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("OCR exited with {}: {}", output.status, stderr.trim());
            return Err(ExtractionError::Ocr(format!(
                "exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("OCR produced {} chars", text.len());
        Ok(text)
    }
}
