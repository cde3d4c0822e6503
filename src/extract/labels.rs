//! Subtitle label CSV model
//!
//! The editor-side scripts export one CSV per clip with the fixed column
//! schema `file, label, start, end, duration[, aspect_ratio]`, where the
//! timestamps are frame numbers relative to the timeline start frame. This
//! module reads that contract; it never writes it.

use std::fs;
use std::path::Path;

use crate::core::{MessageError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    /// Source clip filename, as named on the timeline.
    pub file: String,
    /// Subtitle text used as the label for the extracted still.
    pub label: String,
    /// First frame of the labeled range, relative to timeline start.
    pub start: u64,
    /// One past the last frame of the labeled range.
    pub end: u64,
    pub duration: u64,
    pub aspect_ratio: Option<String>,
}

/// Split one CSV line into fields, honoring double-quoted fields with `""`
/// escapes. Labels are free text and may contain commas.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_frame(value: &str, column: &str, path: &str, line: usize) -> Result<u64> {
    value.trim().parse().map_err(|_| {
        MessageError::csv(
            path,
            line,
            format!("column '{}' is not a frame number: '{}'", column, value),
        )
    })
}

impl LabelRow {
    /// Parse one data row. `line` is the 1-based line number used for error
    /// reporting.
    pub fn parse(raw: &str, path: &str, line: usize) -> Result<Self> {
        let fields = split_fields(raw);
        if fields.len() != 5 && fields.len() != 6 {
            return Err(MessageError::csv(
                path,
                line,
                format!("expected 5 or 6 fields, found {}", fields.len()),
            ));
        }

        Ok(Self {
            file: fields[0].trim().to_string(),
            label: fields[1].trim().to_string(),
            start: parse_frame(&fields[2], "start", path, line)?,
            end: parse_frame(&fields[3], "end", path, line)?,
            duration: parse_frame(&fields[4], "duration", path, line)?,
            aspect_ratio: fields.get(5).map(|s| s.trim().to_string()),
        })
    }
}

fn is_header(line: &str) -> bool {
    split_fields(line)
        .first()
        .map(|first| first.trim().eq_ignore_ascii_case("file"))
        .unwrap_or(false)
}

/// Read every data row from a label CSV. A leading header row is recognized
/// and skipped; blank lines are ignored; any malformed row is a hard error.
pub fn read_label_csv(path: impl AsRef<Path>) -> Result<Vec<LabelRow>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let path_str = path.display().to_string();

    let mut rows = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if rows.is_empty() && idx == 0 && is_header(line) {
            continue;
        }
        rows.push(LabelRow::parse(line, &path_str, idx + 1)?);
    }
    Ok(rows)
}
