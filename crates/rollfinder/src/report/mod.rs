//! Terminal artifacts of an analysis: the result table, its CSV export and
//! the summary behind the charts.

pub mod summary;
pub mod table;

pub use summary::{summarize, DocumentCount, SummaryView};
pub use table::{csv_escape, MatchRecord, ResultRow, ResultTable, CSV_HEADER};
