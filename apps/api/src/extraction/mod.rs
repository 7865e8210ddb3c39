//! PDF Text Extraction: raw document bytes → normalized plain text.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; production uses `PdfTextExtractor`.

pub mod document;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::PipelineError;

/// Converts an uploaded document into normalized text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: Vec<u8>) -> Result<String, PipelineError>;
}

/// `pdf-extract` backed extractor.
///
/// Parsing is CPU-bound and runs on the blocking pool. The parsed document is
/// owned by the blocking task and dropped there whether or not parsing succeeds.
/// A panic inside the parser surfaces as a `JoinError` and is reported as an
/// extraction failure instead of tearing down the request.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, bytes: Vec<u8>) -> Result<String, PipelineError> {
        if bytes.is_empty() {
            return Err(PipelineError::Extraction("Document is empty".to_string()));
        }

        let byte_len = bytes.len();
        let raw = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| PipelineError::Extraction(format!("PDF parser aborted: {e}")))?
            .map_err(|e| PipelineError::Extraction(format!("Failed to parse PDF: {e}")))?;

        let text = normalize_whitespace(&raw);
        if text.is_empty() {
            return Err(PipelineError::Extraction(
                "PDF contains no extractable text".to_string(),
            ));
        }

        debug!(byte_len, chars = text.chars().count(), "PDF text extracted");
        Ok(text)
    }
}

/// Collapses every run of whitespace (newlines included) to one space and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
