//! Parsing the list of names to search for.

use std::path::Path;

use crate::error::InputError;

/// How a name list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameListFormat {
    /// Comma-separated table without header; names are in the first column.
    Table,
    /// One name per line.
    Lines,
}

pub fn parse_names(text: &str, format: NameListFormat) -> Result<Vec<String>, InputError> {
    match format {
        NameListFormat::Table => names_from_table(text),
        NameListFormat::Lines => Ok(names_from_lines(text)),
    }
}

pub fn load_names(path: &Path, format: NameListFormat) -> Result<Vec<String>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|e| InputError::ReadNames {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_names(&text, format)
}

/// Pasted text: every non-blank line, trimmed.
pub fn names_from_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// First column of a headerless comma-separated table. Rows whose first
/// value is missing or blank are dropped, values are trimmed. Double-quoted
/// fields may contain commas, doubled quotes and line breaks.
pub fn names_from_table(text: &str) -> Result<Vec<String>, InputError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut names = Vec::new();
    let mut field = String::new();
    let mut column = 0usize;
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut quote_line = 0usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    if column == 0 {
                        field.push('"');
                    }
                }
                '"' => in_quotes = false,
                _ => {
                    if c == '\n' {
                        line += 1;
                    }
                    if column == 0 {
                        field.push(c);
                    }
                }
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                quote_line = line;
            }
            ',' => column += 1,
            '\n' => {
                finish_record(&mut names, &mut field);
                column = 0;
                line += 1;
            }
            '\r' => {}
            _ => {
                if column == 0 {
                    field.push(c);
                }
            }
        }
    }

    if in_quotes {
        return Err(InputError::Csv {
            line: quote_line,
            reason: "unterminated quoted field".to_string(),
        });
    }

    finish_record(&mut names, &mut field);
    Ok(names)
}

fn finish_record(names: &mut Vec<String>, field: &mut String) {
    let name = field.trim();
    if !name.is_empty() {
        names.push(name.to_string());
    }
    field.clear();
}
