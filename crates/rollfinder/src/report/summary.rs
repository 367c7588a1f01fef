use std::collections::HashMap;

use serde::Serialize;

use crate::report::table::ResultTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentCount {
    pub document: String,
    pub count: usize,
}

/// Data behind the two charts: matches per document (bar) and found versus
/// not found (pie).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    /// Highest count first, ties by label.
    pub per_document: Vec<DocumentCount>,
    /// Table rows. A name found in two documents counts twice.
    pub found: usize,
    pub not_found: usize,
}

impl SummaryView {
    pub fn found_percent(&self) -> f64 {
        percent(self.found, self.found + self.not_found)
    }

    pub fn not_found_percent(&self) -> f64 {
        percent(self.not_found, self.found + self.not_found)
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

/// `not_found` saturates at zero: per-document rows can outnumber the names
/// that were searched for.
pub fn summarize(table: &ResultTable, total_target_count: usize) -> SummaryView {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in table.rows() {
        *counts.entry(row.document.as_str()).or_default() += 1;
    }

    let mut per_document: Vec<DocumentCount> = counts
        .into_iter()
        .map(|(document, count)| DocumentCount {
            document: document.to_string(),
            count,
        })
        .collect();
    per_document.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.document.cmp(&b.document)));

    let found = table.len();

    SummaryView {
        per_document,
        found,
        not_found: total_target_count.saturating_sub(found),
    }
}
