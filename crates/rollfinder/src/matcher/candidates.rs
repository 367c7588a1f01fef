use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ProcessError;
use crate::processor::{Document, TextExtractor};
use crate::text::normalize;

/// A capitalized word of at least two letters, one whitespace character, then
/// a run of letters and spaces. Greedy on purpose: a line such as
/// `"Maria Oliveira Santos"` becomes a single candidate.
static RE_FULL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-ZÀ-Ú][A-ZÀ-Úa-zà-ú]+\s[A-ZÀ-Úa-zà-ú ]+\b").unwrap()
});

/// Normalized likely-full-names found in one document, sorted and unique.
pub type CandidateNameSet = BTreeSet<String>;

/// Runs the full-name heuristic over `text` and normalizes every hit.
///
/// This is not entity recognition. Ordinary capitalized phrases slip in, and
/// single-word or all-lowercase names are missed.
pub fn candidate_names(text: &str) -> CandidateNameSet {
    RE_FULL_NAME
        .find_iter(text)
        .map(|m| normalize(m.as_str()))
        .filter(|name| !name.is_empty())
        .collect()
}

pub fn extract_candidate_names(
    extractor: &dyn TextExtractor,
    document: &Document,
) -> Result<CandidateNameSet, ProcessError> {
    let extraction = extractor.extract_text(document)?;
    Ok(candidate_names(&extraction.text))
}
