//! Date handling for TF output
//!
//! The two output formats carry dates in different layouts and with
//! different failure contracts: a malformed date in a history row aborts
//! the parse, while a malformed date in a label group degrades to an
//! absent field. Both behaviors are relied upon downstream, so they are
//! kept separate here rather than unified.

use chrono::{NaiveDate, NaiveDateTime};

use super::TfError;
use super::constants::formats;

/// Parse the date column of a brief history row (e.g. "Jan 1,2020")
///
/// Failure is fatal to the surrounding history parse.
pub fn parse_history_date(value: &str) -> Result<NaiveDate, TfError> {
    NaiveDate::parse_from_str(value.trim(), formats::HISTORY_DATE).map_err(|_| {
        TfError::DateFormat {
            value: value.to_string(),
        }
    })
}

/// Parse the date field of a detailed label group
/// (e.g. "21 October 2009 07:23:55")
///
/// Returns `None` when the field does not match the fixed format; the
/// label record is still emitted with the date absent.
pub fn parse_label_date(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), formats::LABEL_DATE).ok()
}

/// Render a parsed history date for display lists (e.g. "Jan 1, 2020")
pub fn display_date(date: NaiveDate) -> String {
    date.format(formats::DISPLAY_DATE).to_string()
}
