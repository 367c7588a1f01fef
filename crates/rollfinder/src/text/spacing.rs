use std::sync::LazyLock;

use regex::Regex;

/// A lowercase letter directly followed by an uppercase one. The regex crate
/// has no lookaround, so both letters are captured and written back with a
/// space between them. A letter can never sit on both sides of a boundary, so
/// non-overlapping matches cover every boundary in one pass.
static RE_CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zàáéíóúç])([A-ZÀÁÉÍÓÚÇ])").unwrap());

/// Re-inserts word boundaries that PDF text extraction tends to drop, e.g.
/// `"JoaoSilva"` becomes `"Joao Silva"`. Text that is already spaced is
/// returned unchanged.
pub fn repair_spacing(text: &str) -> String {
    RE_CASE_BOUNDARY.replace_all(text, "$1 $2").into_owned()
}
