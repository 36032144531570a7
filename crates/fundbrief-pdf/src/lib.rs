use std::path::Path;

use lopdf::Document;

use fundbrief_core::{BackendError, TextBackend};

/// lopdf-based implementation of [`TextBackend`].
///
/// Pure Rust, no system dependencies. Text is recovered page by page in
/// page order; each page that yields any text contributes that text followed
/// by a newline, and pages with no extractable text contribute nothing.
#[derive(Debug, Default)]
pub struct PdfTextBackend;

impl PdfTextBackend {
    pub fn new() -> Self {
        Self
    }
}

impl TextBackend for PdfTextBackend {
    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let document = Document::load(path).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut text = String::new();
        for page_number in document.get_pages().keys() {
            let page_text = document
                .extract_text(&[*page_number])
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            if !page_text.is_empty() {
                text.push_str(&page_text);
                text.push('\n');
            }
        }

        Ok(text)
    }
}
