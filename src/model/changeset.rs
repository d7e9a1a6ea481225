//! Changeset history entry model

use chrono::NaiveDate;

use crate::tf::dates;

/// One row of brief history output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangesetEntry {
    /// Tool-assigned changeset identifier; opaque, used as key and display
    pub version: String,

    /// Author of the changeset, may be empty
    pub author: String,

    /// Check-in date
    pub date: NaiveDate,

    /// First line of the check-in comment; empty when the row has none
    pub message: String,
}

impl ChangesetEntry {
    /// Display string for version pick lists: `"42 - Jan 1, 2020 - msg"`
    pub fn display_value(&self) -> String {
        format!(
            "{} - {} - {}",
            self.version,
            dates::display_date(self.date),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> ChangesetEntry {
        ChangesetEntry {
            version: "42".to_string(),
            author: "alice".to_string(),
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            message: "Initial import".to_string(),
        }
    }

    #[test]
    fn test_display_value() {
        assert_eq!(sample_entry().display_value(), "42 - Jan 1, 2020 - Initial import");
    }

    #[test]
    fn test_display_value_empty_message() {
        let entry = ChangesetEntry {
            message: String::new(),
            ..sample_entry()
        };
        assert_eq!(entry.display_value(), "42 - Jan 1, 2020 - ");
    }
}
