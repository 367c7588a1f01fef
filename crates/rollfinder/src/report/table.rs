use std::collections::BTreeSet;
use std::fmt::Write;

use serde::Serialize;

pub const CSV_HEADER: &str = "No,Name,Document";

/// A target name (raw form) found in a document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MatchRecord {
    pub name: String,
    pub document: String,
}

impl MatchRecord {
    pub fn new(name: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            document: document.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    /// 1-based display position.
    pub number: usize,
    pub name: String,
    pub document: String,
}

/// Deduplicated match records sorted by raw name, then document label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = MatchRecord>,
    {
        let unique: BTreeSet<MatchRecord> = records.into_iter().collect();

        let rows = unique
            .into_iter()
            .enumerate()
            .map(|(i, record)| ResultRow {
                number: i + 1,
                name: record.name,
                document: record.document,
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Comma-separated export with a header row, one line per row.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(CSV_HEADER);
        out.push('\n');

        for row in &self.rows {
            let _ = writeln!(
                out,
                "{},{},{}",
                row.number,
                csv_escape(&row.name),
                csv_escape(&row.document)
            );
        }

        out
    }
}

/// Quotes a field if it contains a comma, quote, or line break.
pub fn csv_escape(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
