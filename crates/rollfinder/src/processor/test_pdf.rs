//! In-memory PDFs for the processor unit tests.

use lopdf::{dictionary, Dictionary, Object, Stream};

/// Builds a PDF page by page. Every page shares one resource dictionary with
/// a Courier font named `F1`.
pub(crate) struct TestPdf {
    pages: Vec<Option<String>>,
    extra_fonts: Vec<(String, Dictionary)>,
}

impl TestPdf {
    pub(crate) fn new() -> Self {
        Self {
            pages: Vec::new(),
            extra_fonts: Vec::new(),
        }
    }

    /// A page with one text object per line.
    pub(crate) fn lines(self, lines: &[&str]) -> Self {
        let content: String = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                format!(
                    "BT /F1 12 Tf 50 {} Td ({}) Tj ET\n",
                    700 - (i as i64) * 20,
                    line
                )
            })
            .collect();
        self.content(&content)
    }

    /// A page with a raw content stream.
    pub(crate) fn content(mut self, content: &str) -> Self {
        self.pages.push(Some(content.to_string()));
        self
    }

    /// A page without a content stream, like a scan.
    pub(crate) fn scanned_page(mut self) -> Self {
        self.pages.push(None);
        self
    }

    /// Adds an Identity-H font with no ToUnicode map, which lopdf cannot decode.
    pub(crate) fn identity_font(mut self, name: &str) -> Self {
        self.extra_fonts.push((
            name.to_string(),
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type0",
                "BaseFont" => "Arial",
                "Encoding" => "Identity-H",
            },
        ));
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let mut doc = lopdf::Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = dictionary! {
            "F1" => doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => "Courier",
            }),
        };
        for (name, font) in &self.extra_fonts {
            fonts.set(name.as_bytes(), doc.add_object(font.clone()));
        }
        let resources_id = doc.add_object(dictionary! { "Font" => fonts });

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

        let mut pdf_bytes = Vec::new();
        doc.save_to(&mut pdf_bytes).unwrap();
        pdf_bytes
    }
}
