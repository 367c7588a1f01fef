use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::OcrConfig;
use crate::error::ProcessError;
use crate::processor::ocr::{OcrProcessor, PageRecognizer};
use crate::processor::text_layer::page_text;
use crate::processor::{Document, Extraction, TextExtractor};
use crate::text::repair_spacing;

/// Two-tier extractor: the page's text layer first, OCR for pages without one.
pub struct PdfTextExtractor {
    recognizer: Option<Arc<dyn PageRecognizer>>,
}

impl PdfTextExtractor {
    pub fn new(recognizer: Option<Arc<dyn PageRecognizer>>) -> Self {
        Self { recognizer }
    }

    /// Uses [`OcrProcessor`] for the fallback when OCR is enabled.
    pub fn from_config(config: &OcrConfig) -> Self {
        let recognizer: Option<Arc<dyn PageRecognizer>> = if config.enabled {
            Some(Arc::new(OcrProcessor::new(config)))
        } else {
            None
        };
        Self::new(recognizer)
    }

    pub fn ocr_enabled(&self) -> bool {
        self.recognizer.is_some()
    }

    /// OCR text for each of `page_numbers`, `None` where recognition failed
    /// or OCR is disabled.
    fn ocr_pages(&self, document: &Document, page_numbers: &[u32]) -> Vec<Option<String>> {
        let Some(recognizer) = self.recognizer.as_ref() else {
            return vec![None; page_numbers.len()];
        };
        let _ocr_span = tracing::info_span!(
            "processor.ocr_fallback",
            pages = page_numbers.len(),
            reason = "no_text_layer"
        )
        .entered();

        let results = recognizer.recognize_pages(&document.bytes, page_numbers);
        page_numbers
            .iter()
            .zip(results)
            .map(|(page_number, result)| match result {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!(
                        "OCR failed for page {} of {}: {}",
                        page_number, document.label, e
                    );
                    None
                }
            })
            .collect()
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, document: &Document) -> Result<Extraction, ProcessError> {
        let _span = tracing::info_span!("processor.pdf", document = %document.label).entered();

        let doc = lopdf::Document::load_mem(&document.bytes)
            .map_err(|e| ProcessError::DocumentOpen(e.to_string()))?;

        let pages = doc.get_pages();
        let mut extraction = Extraction {
            page_count: pages.len(),
            ..Extraction::default()
        };

        let mut page_texts: Vec<Option<String>> = pages
            .iter()
            .map(|(&page_number, &page_id)| match page_text(&doc, page_id) {
                Ok(text) if !text.trim().is_empty() => Some(text),
                Ok(_) => None,
                Err(e) => {
                    debug!(
                        "No text layer on page {} of {}: {}",
                        page_number, document.label, e
                    );
                    None
                }
            })
            .collect();

        let scanned: Vec<(usize, u32)> = pages
            .keys()
            .enumerate()
            .filter(|(index, _)| page_texts[*index].is_none())
            .map(|(index, &page_number)| (index, page_number))
            .collect();

        if !scanned.is_empty() {
            let page_numbers: Vec<u32> = scanned.iter().map(|&(_, page)| page).collect();
            let recognized = self.ocr_pages(document, &page_numbers);
            for (&(index, _), text) in scanned.iter().zip(recognized) {
                if text.is_some() {
                    extraction.ocr_pages += 1;
                }
                page_texts[index] = text;
            }
        }

        extraction.empty_pages = page_texts
            .iter()
            .filter(|text| text.as_deref().map_or(true, |t| t.trim().is_empty()))
            .count();

        let joined = page_texts
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect::<Vec<_>>()
            .join("\n");
        extraction.text = repair_spacing(&joined);

        debug!(
            "Extracted {} chars from {} ({} pages, {} via OCR, {} empty)",
            extraction.text.len(),
            document.label,
            extraction.page_count,
            extraction.ocr_pages,
            extraction.empty_pages
        );

        Ok(extraction)
    }
}
