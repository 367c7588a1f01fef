use std::fmt;

/// Which input was missing when a run refused to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyInput {
    NoNames,
    NoDocuments,
}

impl fmt::Display for EmptyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyInput::NoNames => write!(f, "No names were supplied"),
            EmptyInput::NoDocuments => write!(f, "No PDF documents were supplied"),
        }
    }
}

/// A document skipped because it could not be opened. Non-fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    pub document: String,
    pub error: String,
}
