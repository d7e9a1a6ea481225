//! Positional text table parser (history output)
//!
//! Brief history output is a header line, a separator row of dash runs,
//! then one data row per changeset, ended by a blank line:
//!
//! ```text
//! Changeset User        Date       Comment
//! --------- ----------- ---------- -----------------------------
//! 42        alice       Jan 1,2020 Initial import
//! ```
//!
//! The table carries no delimiters, so column boundaries are inferred from
//! the dash runs of the separator row and data rows are sliced at those
//! byte offsets.

use std::io::BufRead;

use super::super::{LineSource, TfError};
use super::DASH_RUN_REGEX;

/// One column of a text table: byte offset and width of its dash run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub start: usize,
    pub len: usize,
}

/// Derive column spans from a separator row
///
/// Each maximal run of `-` becomes one column. This inference is the one
/// place that depends on the tool's separator layout; all slicing goes
/// through the spans it returns.
pub fn column_spans(separator: &str) -> Vec<ColumnSpan> {
    DASH_RUN_REGEX
        .find_iter(separator)
        .map(|m| ColumnSpan {
            start: m.start(),
            len: m.len(),
        })
        .collect()
}

/// Pull parser for a positional text table
///
/// Reads the header and separator lazily on the first [`next_row`] call,
/// then yields one data row per call until a blank line or end of stream.
/// This is the streaming interface: rows already read remain available to
/// the caller even if a later read fails.
///
/// [`next_row`]: TextTable::next_row
pub struct TextTable<R: BufRead> {
    lines: LineSource<R>,
    header_lines: usize,
    spans: Option<Vec<ColumnSpan>>,
    row: Option<String>,
    done: bool,
}

impl<R: BufRead> TextTable<R> {
    /// Create a table parser that skips `header_lines` lines above the
    /// separator row
    pub fn new(reader: R, header_lines: usize) -> Self {
        Self {
            lines: LineSource::new(reader),
            header_lines,
            spans: None,
            row: None,
            done: false,
        }
    }

    /// Advance to the next data row
    ///
    /// Returns `Ok(false)` once the table is exhausted (blank line, end of
    /// stream, or no separator row at all).
    pub fn next_row(&mut self) -> Result<bool, TfError> {
        if self.done {
            return Ok(false);
        }
        if self.spans.is_none() && !self.read_separator()? {
            self.done = true;
            return Ok(false);
        }
        match self.lines.next_line()? {
            Some(line) if !line.trim().is_empty() => {
                self.row = Some(line);
                Ok(true)
            }
            _ => {
                self.row = None;
                self.done = true;
                Ok(false)
            }
        }
    }

    /// Get a column of the current row, sliced at the separator offsets
    ///
    /// Trailing whitespace is trimmed, interior whitespace kept. A row
    /// shorter than the column's start yields `""`; an index beyond the
    /// separator's column count yields `None`, as does a call before the
    /// first row or after the last.
    pub fn column(&self, index: usize) -> Option<&str> {
        let row = self.row.as_deref()?;
        let span = self.spans.as_ref()?.get(index)?;
        Some(slice_span(row, span))
    }

    /// Number of columns the separator row defined (0 before the first row)
    pub fn column_count(&self) -> usize {
        self.spans.as_ref().map_or(0, Vec::len)
    }

    /// Skip the header and read the separator row; false if the table has
    /// no rows
    fn read_separator(&mut self) -> Result<bool, TfError> {
        for _ in 0..self.header_lines {
            if self.lines.next_line()?.is_none() {
                return Ok(false);
            }
        }
        match self.lines.next_line()? {
            Some(line) if !line.trim().is_empty() => {
                self.spans = Some(column_spans(&line));
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// Slice one column out of a data row
///
/// Offsets are byte offsets; the tool emits fixed-width ASCII tables, so a
/// span landing inside a multi-byte sequence means the row is not table
/// data and the column reads as empty rather than a panic.
fn slice_span<'a>(line: &'a str, span: &ColumnSpan) -> &'a str {
    if span.start >= line.len() {
        return "";
    }
    let end = line.len().min(span.start + span.len);
    line.get(span.start..end).unwrap_or("").trim_end()
}
