pub mod ocr;
pub mod pdf;
mod text_layer;

#[cfg(test)]
mod test_pdf;

use std::path::Path;

use crate::error::ProcessError;

pub use ocr::{OcrProcessor, PageRecognizer};
pub use pdf::PdfTextExtractor;

/// One uploaded PDF: a display label (usually the file name) and its bytes.
/// The core only ever reads it.
#[derive(Debug, Clone)]
pub struct Document {
    pub label: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(label: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            bytes,
        }
    }

    /// Reads a document from disk, labelled with its file name.
    pub fn from_path(path: &Path) -> Result<Self, ProcessError> {
        let bytes = std::fs::read(path).map_err(|e| ProcessError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        let label = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf")
            .to_string();

        Ok(Self { label, bytes })
    }
}

/// Full text of one document plus how it was obtained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Page texts joined with `\n`, spacing already repaired.
    pub text: String,
    pub page_count: usize,
    /// Pages without a text layer that went through OCR successfully.
    pub ocr_pages: usize,
    /// Pages that produced no text by any means.
    pub empty_pages: usize,
}

pub trait TextExtractor: Send + Sync {
    /// Extracts the text of every page. Only a document that cannot be opened
    /// at all is an error; unreadable pages contribute empty text.
    fn extract_text(&self, document: &Document) -> Result<Extraction, ProcessError>;
}
