use crate::matcher::{DocumentMatches, TargetName};
use crate::report::{MatchRecord, ResultTable};

use super::error::{DocumentFailure, EmptyInput};

/// What an analysis run produced. Halting, finding nothing and finding
/// something are distinct variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Nothing was processed.
    EmptyInputs(EmptyInput),
    /// Every document was processed (or failed) and no name matched.
    NoMatches { failures: Vec<DocumentFailure> },
    Matched {
        table: ResultTable,
        failures: Vec<DocumentFailure>,
    },
}

impl AnalysisOutcome {
    pub fn table(&self) -> Option<&ResultTable> {
        match self {
            AnalysisOutcome::Matched { table, .. } => Some(table),
            _ => None,
        }
    }

    pub fn failures(&self) -> &[DocumentFailure] {
        match self {
            AnalysisOutcome::EmptyInputs(_) => &[],
            AnalysisOutcome::NoMatches { failures } | AnalysisOutcome::Matched { failures, .. } => {
                failures
            }
        }
    }

    /// True when at least one document was skipped.
    pub fn is_partial(&self) -> bool {
        !self.failures().is_empty()
    }
}

/// State accumulated across the documents of one run.
pub struct RunContext {
    pub targets: Vec<TargetName>,
    pub records: Vec<MatchRecord>,
    pub failures: Vec<DocumentFailure>,
}

impl RunContext {
    pub fn new(targets: Vec<TargetName>) -> Self {
        Self {
            targets,
            records: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn add_matches(&mut self, matches: DocumentMatches) {
        let label = matches.label;
        self.records.extend(
            matches
                .names
                .into_iter()
                .map(|name| MatchRecord::new(name, label.clone())),
        );
    }

    pub fn add_failure(&mut self, document: &str, error: String) {
        self.failures.push(DocumentFailure {
            document: document.to_string(),
            error,
        });
    }

    pub fn into_outcome(self) -> AnalysisOutcome {
        let table = ResultTable::from_records(self.records);
        if table.is_empty() {
            AnalysisOutcome::NoMatches {
                failures: self.failures,
            }
        } else {
            AnalysisOutcome::Matched {
                table,
                failures: self.failures,
            }
        }
    }
}
