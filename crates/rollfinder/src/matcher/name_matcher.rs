use std::sync::Arc;

use crate::error::ProcessError;
use crate::matcher::candidates::{candidate_names, CandidateNameSet};
use crate::processor::{Document, TextExtractor};
use crate::text::normalize;

/// A name to look for: the raw form is what gets displayed, the normalized
/// form is what gets compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetName {
    raw: String,
    normalized: String,
}

impl TargetName {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Normalizes each raw name once, keeping the input order.
pub fn prepare_targets<S: AsRef<str>>(names: &[S]) -> Vec<TargetName> {
    names.iter().map(|n| TargetName::new(n.as_ref())).collect()
}

/// The targets whose normalized form is a candidate, in target order and in
/// raw form. Exact equality only. A target that normalizes to nothing never
/// matches.
pub fn match_names<'a>(candidates: &CandidateNameSet, targets: &'a [TargetName]) -> Vec<&'a str> {
    targets
        .iter()
        .filter(|t| !t.normalized.is_empty() && candidates.contains(&t.normalized))
        .map(|t| t.raw.as_str())
        .collect()
}

/// Outcome of matching one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMatches {
    pub label: String,
    /// Matched target names in raw form.
    pub names: Vec<String>,
    pub candidate_count: usize,
    pub page_count: usize,
    pub ocr_pages: usize,
}

pub struct NameMatcher {
    extractor: Arc<dyn TextExtractor>,
}

impl NameMatcher {
    pub fn new(extractor: Arc<dyn TextExtractor>) -> Self {
        Self { extractor }
    }

    /// Extracts `document`, collects its candidate names and tests every
    /// target against them. Fails only when the document cannot be opened.
    pub fn match_document(
        &self,
        document: &Document,
        targets: &[TargetName],
    ) -> Result<DocumentMatches, ProcessError> {
        let extraction = self.extractor.extract_text(document)?;
        let candidates = candidate_names(&extraction.text);

        tracing::debug!(
            document = %document.label,
            candidates = candidates.len(),
            "Candidate names: {:?}",
            candidates
        );

        let names = match_names(&candidates, targets)
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(DocumentMatches {
            label: document.label.clone(),
            names,
            candidate_count: candidates.len(),
            page_count: extraction.page_count,
            ocr_pages: extraction.ocr_pages,
        })
    }
}
