//! Brief history parser (`tf history -format:brief`)

use std::io::BufRead;

use super::super::{TfError, dates};
use super::table::TextTable;
use crate::model::ChangesetEntry;

/// Parse brief history output into a list of changeset entries
///
/// Columns map positionally: changeset version, author, date, comment.
/// The comment column may be missing entirely (three-column table); the
/// message then defaults to empty. A date that does not parse aborts the
/// whole call — callers that want the rows read so far should drive
/// [`TextTable`] themselves.
pub fn parse_history<R: BufRead>(
    reader: R,
    header_lines: usize,
) -> Result<Vec<ChangesetEntry>, TfError> {
    let mut table = TextTable::new(reader, header_lines);
    let mut entries = Vec::new();

    while table.next_row()? {
        let date = dates::parse_history_date(table.column(2).unwrap_or(""))?;
        entries.push(ChangesetEntry {
            version: table.column(0).unwrap_or("").to_string(),
            author: table.column(1).unwrap_or("").to_string(),
            date,
            message: table.column(3).unwrap_or("").to_string(),
        });
    }

    Ok(entries)
}
