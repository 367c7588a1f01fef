//! Page text read straight from the content stream.
//!
//! lopdf's own `extract_text` only breaks lines at the end of a text object
//! and gives up on the whole page when one font cannot be decoded. Roster
//! PDFs often set a full column of names inside a single `BT`/`ET` block, so
//! line breaks have to follow the text-positioning operators instead.

use std::collections::BTreeMap;

use lopdf::content::Content;
use lopdf::{Document, Encoding, Object, ObjectId};
use tracing::debug;

/// `TJ` adjustments below this (thousandths of an em) separate words.
const WORD_GAP: f32 = -100.0;

/// Text of one page, one output line per baseline.
///
/// Only a missing or undecodable content stream is an error. Strings in a
/// font whose encoding lopdf cannot resolve are skipped.
pub(crate) fn page_text(doc: &Document, page_id: ObjectId) -> lopdf::Result<String> {
    let encodings = font_encodings(doc, page_id);
    let content = Content::decode(&doc.get_page_content(page_id)?)?;

    let mut layer = TextLayer::default();
    let mut encoding: Option<&Encoding> = None;

    for op in &content.operations {
        let operands = &op.operands;
        match op.operator.as_str() {
            "Tf" => {
                encoding = operands
                    .first()
                    .and_then(|name| name.as_name().ok())
                    .and_then(|name| encodings.get(name));
            }
            "Tj" => layer.show(operands.first(), encoding),
            "TJ" => {
                if let Some(Ok(items)) = operands.first().map(Object::as_array) {
                    for item in items {
                        match item.as_float() {
                            Ok(adjust) if adjust < WORD_GAP => layer.word_gap(),
                            Ok(_) => {}
                            Err(_) => layer.show(Some(item), encoding),
                        }
                    }
                }
            }
            "'" => {
                layer.line_break();
                layer.show(operands.first(), encoding);
            }
            "\"" => {
                layer.line_break();
                layer.show(operands.get(2), encoding);
            }
            "T*" => layer.line_break(),
            "Td" | "TD" => {
                let tx = number(operands.first());
                let ty = number(operands.get(1));
                if ty != 0.0 {
                    layer.line_break();
                } else if tx != 0.0 {
                    layer.word_gap();
                }
            }
            "Tm" => layer.set_matrix_baseline(number(operands.get(5))),
            "ET" => layer.line_break(),
            _ => {}
        }
    }

    Ok(layer.finish())
}

/// Encodings of the page's fonts, keyed by resource name. Fonts lopdf cannot
/// decode are left out, so their strings are skipped.
fn font_encodings(doc: &Document, page_id: ObjectId) -> BTreeMap<Vec<u8>, Encoding<'_>> {
    let fonts = match doc.get_page_fonts(page_id) {
        Ok(fonts) => fonts,
        Err(e) => {
            debug!("No font resources on page object {:?}: {}", page_id, e);
            return BTreeMap::new();
        }
    };

    let mut encodings = BTreeMap::new();
    for (name, font) in fonts {
        match font.get_font_encoding(doc) {
            Ok(encoding) => {
                encodings.insert(name, encoding);
            }
            Err(e) => debug!(
                "Skipping text in font /{}: {}",
                String::from_utf8_lossy(&name),
                e
            ),
        }
    }
    encodings
}

fn number(operand: Option<&Object>) -> f32 {
    operand.and_then(|o| o.as_float().ok()).unwrap_or(0.0)
}

#[derive(Default)]
struct TextLayer {
    text: String,
    matrix_baseline: Option<f32>,
}

impl TextLayer {
    fn show(&mut self, operand: Option<&Object>, encoding: Option<&Encoding>) {
        let (Some(bytes), Some(encoding)) = (operand.and_then(|o| o.as_str().ok()), encoding) else {
            return;
        };
        match Document::decode_text(encoding, bytes) {
            Ok(decoded) => self.text.push_str(&decoded),
            Err(e) => debug!("Skipping undecodable string: {}", e),
        }
    }

    fn line_break(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
    }

    fn word_gap(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with(char::is_whitespace) {
            self.text.push(' ');
        }
    }

    /// `Tm` positions absolutely: a new y starts a line, the same y continues it.
    fn set_matrix_baseline(&mut self, y: f32) {
        match self.matrix_baseline {
            Some(previous) if previous != y => self.line_break(),
            _ => self.word_gap(),
        }
        self.matrix_baseline = Some(y);
    }

    fn finish(self) -> String {
        self.text.trim_end().to_string()
    }
}
