//! Detailed labels parser (`tf labels -format:detailed`)
//!
//! Detailed output repeats one block per label:
//!
//! ```text
//! Label  : Nightly build
//! Scope  : $/ProjectName
//! Owner  : alice
//! Date   : 21 October 2009 07:23:55
//! Comment: Some comment
//!
//! Changeset Item
//! --------- ------------------------------------------
//! 42        $/ProjectName/src/main.rs
//! ===========================================================
//! ```
//!
//! Only the five prefixed field lines are interpreted; everything between
//! one block and the next `Label` line (including the changeset-item
//! table) is skipped without inspection.

use std::io::BufRead;

use chrono::NaiveDateTime;

use super::super::constants::prefixes;
use super::super::{LineSource, TfError, dates};
use super::PROJECT_PATH_REGEX;
use crate::model::LabelEntry;

/// Scanner over the label blocks of detailed labels output
///
/// Field buffers persist across blocks: a follow-up line that does not
/// carry its expected prefix leaves the field holding the previous block's
/// value. The tool has always emitted the five lines in fixed order, and
/// downstream consumers rely on this carrying-over rather than a hard
/// failure when a field line is absent.
pub struct LabelsScanner<R: BufRead> {
    lines: LineSource<R>,
    label: String,
    scope: String,
    owner: String,
    date: Option<NaiveDateTime>,
    comment: String,
}

impl<R: BufRead> LabelsScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineSource::new(reader),
            label: String::new(),
            scope: String::new(),
            owner: String::new(),
            date: None,
            comment: String::new(),
        }
    }

    /// Advance to the next complete label block
    ///
    /// Returns `Ok(false)` at end of stream. A block cut off by end of
    /// stream before all five lines were read is dropped without error.
    pub fn next_label(&mut self) -> Result<bool, TfError> {
        loop {
            let Some(line) = self.lines.next_line()? else {
                return Ok(false);
            };
            let Some(rest) = line.strip_prefix(prefixes::LABEL) else {
                continue;
            };
            self.label = rest.to_string();

            // The four follow-up lines are read unconditionally in fixed
            // order; each field updates only when its prefix matches.
            let Some(line) = self.lines.next_line()? else {
                return Ok(false);
            };
            if let Some(rest) = line.strip_prefix(prefixes::SCOPE) {
                self.scope = rest.to_string();
            }

            let Some(line) = self.lines.next_line()? else {
                return Ok(false);
            };
            if let Some(rest) = line.strip_prefix(prefixes::OWNER) {
                self.owner = rest.to_string();
            }

            let Some(line) = self.lines.next_line()? else {
                return Ok(false);
            };
            if let Some(rest) = line.strip_prefix(prefixes::DATE) {
                self.date = dates::parse_label_date(rest);
            }

            let Some(line) = self.lines.next_line()? else {
                return Ok(false);
            };
            if let Some(rest) = line.strip_prefix(prefixes::COMMENT) {
                self.comment = rest.to_string();
            }

            return Ok(true);
        }
    }

    /// Scope path of the current label block
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The current block as a label entry
    pub fn entry(&self) -> LabelEntry {
        LabelEntry {
            label: self.label.clone(),
            project_scope: self.scope.clone(),
            owner: self.owner.clone(),
            date: self.date,
            comment: self.comment.clone(),
        }
    }
}

/// Reduce a project path to its comparison target
///
/// Labels are scoped to the server-side project root, so `$/Name/sub/dir`
/// compares as `$/Name`. A path with no recognizable project root is used
/// verbatim.
pub fn normalize_project_path(project_path: &str) -> &str {
    match PROJECT_PATH_REGEX.find(project_path) {
        Some(m) => m.as_str(),
        None => project_path,
    }
}

/// Parse detailed labels output, keeping labels scoped to `project_path`
///
/// Scope comparison is case-insensitive against the normalized project
/// path. Blocks with a different scope are consumed in full so later
/// blocks still parse.
pub fn parse_labels<R: BufRead>(
    reader: R,
    project_path: &str,
) -> Result<Vec<LabelEntry>, TfError> {
    let target = normalize_project_path(project_path);
    let mut scanner = LabelsScanner::new(reader);
    let mut labels = Vec::new();

    while scanner.next_label()? {
        if scanner.scope().eq_ignore_ascii_case(target) {
            labels.push(scanner.entry());
        }
    }

    Ok(labels)
}
