//! Label entry model

use chrono::NaiveDateTime;

use crate::tf::dates;

/// One label block from detailed labels output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    /// Label name
    pub label: String,

    /// Server path the label is scoped to (e.g. `$/ProjectName`)
    pub project_scope: String,

    /// Account that created the label, may be empty
    pub owner: String,

    /// Label date; `None` when the tool emitted a date outside the fixed
    /// format
    pub date: Option<NaiveDateTime>,

    /// Label comment, may be empty
    pub comment: String,
}

impl LabelEntry {
    /// Display string for version pick lists: `"name - Oct 21, 2009 - comment"`
    ///
    /// The date segment is omitted when the date is absent.
    pub fn display_value(&self) -> String {
        match self.date {
            Some(date) => format!(
                "{} - {} - {}",
                self.label,
                dates::display_date(date.date()),
                self.comment
            ),
            None => format!("{} - {}", self.label, self.comment),
        }
    }
}
