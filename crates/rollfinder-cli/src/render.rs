//! Plain-text renderings of the result table and the two summary charts.

use std::fmt::Write;

use rollfinder::{ResultTable, SummaryView};

const BAR_WIDTH: usize = 40;

/// Aligned three-column table with a header row.
pub fn table(table: &ResultTable) -> String {
    let number_width = table
        .rows()
        .last()
        .map_or(2, |row| row.number.to_string().len().max(2));
    let name_width = column_width(table.rows().iter().map(|r| r.name.as_str()), "Name");

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>nw$}  {:<w$}  Document",
        "No",
        "Name",
        nw = number_width,
        w = name_width
    );
    for row in table.rows() {
        let _ = writeln!(
            out,
            "{:>nw$}  {:<w$}  {}",
            row.number,
            row.name,
            row.document,
            nw = number_width,
            w = name_width
        );
    }
    out
}

/// Horizontal bar per document, scaled so the largest count fills the bar.
pub fn bar_chart(summary: &SummaryView) -> String {
    let label_width = column_width(
        summary.per_document.iter().map(|d| d.document.as_str()),
        "Document",
    );
    let max = summary
        .per_document
        .iter()
        .map(|d| d.count)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "Matches per document");
    for entry in &summary.per_document {
        let width = if max == 0 {
            0
        } else {
            (entry.count * BAR_WIDTH).div_ceil(max)
        };
        let _ = writeln!(
            out,
            "  {:<w$}  {} {}",
            entry.document,
            "#".repeat(width),
            entry.count,
            w = label_width
        );
    }
    out
}

/// The two pie slices as counts and percentages.
pub fn pie_chart(summary: &SummaryView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Found vs not found");
    let _ = writeln!(
        out,
        "  Found      {:>5}  {:5.1}%",
        summary.found,
        summary.found_percent()
    );
    let _ = writeln!(
        out,
        "  Not found  {:>5}  {:5.1}%",
        summary.not_found,
        summary.not_found_percent()
    );
    out
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}
