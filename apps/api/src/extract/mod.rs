//! Text extraction for uploaded resumes (PDF, DOCX, plain text).
//!
//! Uploads are decoded straight from the request bytes; nothing touches disk.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::debug;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read Word document: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Classifies an upload by MIME type, falling back to the file extension.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Self {
        match content_type.map(|ct| ct.trim().to_ascii_lowercase()).as_deref() {
            Some("application/pdf") => return DocumentKind::Pdf,
            Some(DOCX_MIME) => return DocumentKind::Docx,
            _ => {}
        }

        let name = file_name.unwrap_or_default().to_ascii_lowercase();
        if name.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if name.ends_with(".docx") {
            DocumentKind::Docx
        } else {
            DocumentKind::PlainText
        }
    }
}

/// Decodes an uploaded document into plain text.
///
/// Blocking: call from `spawn_blocking` inside async handlers.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractionError> {
    debug!(?kind, size = bytes.len(), "decoding upload");

    match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string())),
        DocumentKind::Docx => extract_docx(bytes),
        DocumentKind::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;
    let mut body = archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut xml = String::new();
    body.read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;

    docx_xml_to_text(&xml)
}

/// Flattens WordprocessingML into text: `w:t` runs are unescaped, tabs become
/// `\t`, and breaks, carriage returns and paragraph ends become `\n`.
/// Tabs and breaks only count inside a run, so tab-stop definitions are skipped.
fn docx_xml_to_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractionError::Docx(e.to_string()))?;

        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" if in_run => text.push('\t'),
                b"w:br" | b"w:cr" if in_run => text.push('\n'),
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let run = t
                    .unescape()
                    .map_err(|e| ExtractionError::Docx(e.to_string()))?;
                text.push_str(&run);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text.trim_end().to_string())
}
