use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open document: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for format-specific text recovery backends.
///
/// Implementors turn one document file into plain text; the extraction
/// pipeline (period resolution, field matching, aggregation) lives in the
/// rest of this crate and never touches the filesystem itself. An empty
/// string is a valid return value and means "no text found", which is
/// distinct from an `Err` ("error reading").
pub trait TextBackend: Send + Sync {
    /// Extract the full text content of a document, in document order.
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;
}
