//! DOCX text recovery.
//!
//! A `.docx` file is a ZIP archive whose body lives in `word/document.xml`.
//! The document is SAX-parsed with quick-xml: text runs (`<w:t>`) are
//! accumulated per paragraph (`<w:p>`), and paragraphs are newline-joined in
//! document order. Legacy binary `.doc` files fail the ZIP open and are left
//! to the caller's fail-soft boundary.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use fundbrief_core::{BackendError, TextBackend};

/// ZIP + quick-xml implementation of [`TextBackend`] for `.docx`/`.doc`.
#[derive(Debug, Default)]
pub struct DocxTextBackend;

impl DocxTextBackend {
    pub fn new() -> Self {
        Self
    }
}

impl TextBackend for DocxTextBackend {
    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let file = File::open(path).map_err(|e| BackendError::OpenError(e.to_string()))?;
        let mut archive =
            zip::ZipArchive::new(file).map_err(|e| BackendError::OpenError(e.to_string()))?;
        let body = archive
            .by_name("word/document.xml")
            .map_err(|e| BackendError::ExtractionError(format!("no document body: {}", e)))?;

        parse_document_xml(BufReader::new(body))
    }
}

/// Collect paragraph texts from the WordprocessingML body, newline-joined.
fn parse_document_xml<R: std::io::BufRead>(reader: R) -> Result<String, BackendError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(false);

    let mut buf = Vec::with_capacity(4096);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_run_text = false;

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            // Self-closing <w:p/> is an empty paragraph; it still separates.
            Ok(Event::Empty(ref e)) if e.name().as_ref() == b"w:p" => {
                paragraphs.push(std::mem::take(&mut current))
            }
            Ok(Event::Text(ref e)) if in_run_text => {
                let text = e
                    .unescape()
                    .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(BackendError::ExtractionError(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs.join("\n"))
}
