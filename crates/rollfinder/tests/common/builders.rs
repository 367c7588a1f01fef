//! Builders for test PDFs and OCR stand-ins.

#![allow(dead_code)]

use std::sync::Mutex;

use lopdf::{dictionary, Document, Object, Stream};

use rollfinder::processor::PageRecognizer;
use rollfinder::ProcessError;

/// Builds a PDF page by page, each page holding its content stream (or
/// nothing, for a scan).
pub struct PdfBuilder {
    pages: Vec<Option<String>>,
}

impl PdfBuilder {
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// A page where every line lands in its own text object.
    pub fn page(mut self, lines: &[&str]) -> Self {
        let content: String = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                format!(
                    "BT /F1 12 Tf 50 {} Td ({}) Tj ET\n",
                    720 - (i as i64) * 18,
                    line
                )
            })
            .collect();
        self.pages.push(Some(content));
        self
    }

    /// A page set as one text object, the way report generators write
    /// columns: the first line placed with `Td`, then alternately `T*` and a
    /// relative `Td` down to the next baseline.
    pub fn text_block(mut self, lines: &[&str]) -> Self {
        let mut content = String::from("BT /F1 12 Tf 18 TL 50 720 Td\n");
        for (i, line) in lines.iter().enumerate() {
            match i {
                0 => {}
                _ if i % 2 == 1 => content.push_str("T*\n"),
                _ => content.push_str("0 -18 Td\n"),
            }
            content.push_str(&format!("({}) Tj\n", line));
        }
        content.push_str("ET\n");
        self.pages.push(Some(content));
        self
    }

    /// A page with no content stream, like a scan without a text layer.
    pub fn blank_page(mut self) -> Self {
        self.pages.push(None);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids = Vec::new();
        for page in &self.pages {
            let mut page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Resources" => resources_id,
            };
            if let Some(content) = page {
                let content_id =
                    doc.add_object(Stream::new(dictionary! {}, content.clone().into_bytes()));
                page_dict.set("Contents", content_id);
            }
            kids.push(Object::from(doc.add_object(page_dict)));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("Failed to serialize test PDF");
        bytes
    }
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Bytes that lopdf refuses to open.
pub fn corrupt_pdf() -> Vec<u8> {
    b"This is not a PDF file".to_vec()
}

/// Returns canned text per page (or fails) and records which pages it saw,
/// one batch per document.
pub struct FakeRecognizer {
    text: Option<String>,
    batches: Mutex<Vec<Vec<u32>>>,
}

impl FakeRecognizer {
    pub fn returning(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            batches: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            text: None,
            batches: Mutex::new(Vec::new()),
        }
    }

    /// Every page asked for, in order.
    pub fn calls(&self) -> Vec<u32> {
        self.batches().concat()
    }

    pub fn batches(&self) -> Vec<Vec<u32>> {
        self.batches.lock().unwrap().clone()
    }
}

impl PageRecognizer for FakeRecognizer {
    fn recognize_pages(
        &self,
        _pdf_bytes: &[u8],
        page_numbers: &[u32],
    ) -> Vec<Result<String, ProcessError>> {
        self.batches.lock().unwrap().push(page_numbers.to_vec());
        page_numbers
            .iter()
            .map(|_| {
                self.text
                    .clone()
                    .ok_or_else(|| ProcessError::OcrFailed("no engine in tests".to_string()))
            })
            .collect()
    }
}
