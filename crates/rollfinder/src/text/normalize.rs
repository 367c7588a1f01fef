use unicode_normalization::UnicodeNormalization;

/// Canonical comparison form of a name: compatibility-decomposed, every
/// non-ASCII code point dropped (which removes the combining accents), ASCII
/// lowercased and trimmed.
///
/// Characters with no ASCII decomposition (`ß`, `ø`, CJK, ...) disappear
/// entirely. The result depends only on the input string.
pub fn normalize(text: &str) -> String {
    let ascii: String = text.nfkd().filter(char::is_ascii).collect();
    ascii.to_ascii_lowercase().trim().to_string()
}
