use std::path::{Path, PathBuf};

use thiserror::Error;

use fundbrief_core::TextBackend;
use fundbrief_docx::DocxTextBackend;
use fundbrief_pdf::PdfTextBackend;

pub mod batch;

// Re-export domain types for convenience
pub use batch::{run_pipeline, scan_folder};
pub use fundbrief_core::{ReportRecord, ResultSet};

#[derive(Error, Debug)]
pub enum IngestError {
    /// Folder enumeration failure — the only fatal condition in the
    /// pipeline. Everything below it fails soft per document or per field.
    #[error("failed to read report folder {path}: {source}")]
    Folder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extensions considered report candidates during folder discovery.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Returns true if the path has a supported report extension.
pub fn is_report_path(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Recover the plain text of a report document, fail-soft.
///
/// Dispatches on the (case-insensitive) extension: `.pdf` goes to the lopdf
/// backend, `.docx`/`.doc` to the ZIP/XML backend, anything else yields an
/// empty string without attempting a read. A backend error is logged with
/// its path and mapped to an empty string — it never propagates, so one
/// unreadable document can never abort a batch.
pub fn recover_text(path: &Path) -> String {
    let result = match extension_of(path).as_str() {
        "pdf" => PdfTextBackend::new().extract_text(path),
        "docx" | "doc" => DocxTextBackend::new().extract_text(path),
        _ => return String::new(),
    };

    match result {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "text recovery failed, treating as empty");
            String::new()
        }
    }
}

/// Build one [`ReportRecord`] for a document path.
///
/// Recovers text for the document and composes it with the period resolved
/// from the basename. Deterministic given identical inputs; a document whose
/// text cannot be recovered still produces a record, with all metric fields
/// absent and whatever period the filename carries.
pub fn build_record(path: &Path) -> ReportRecord {
    let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let text = recover_text(path);
    ReportRecord::compose(filename, &text)
}
