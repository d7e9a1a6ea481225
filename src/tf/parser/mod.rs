//! TF output parsers
//!
//! Parses the captured output of TF subcommands into structured data.
//! History output is a positional text table; labels output is a sequence
//! of fixed-prefix field blocks. Both are scanned line by line and never
//! buffered whole.

mod history;
mod labels;
mod table;

pub use history::parse_history;
pub use labels::{LabelsScanner, normalize_project_path, parse_labels};
pub use table::{ColumnSpan, TextTable, column_spans};


use regex::Regex;
use std::sync::LazyLock;

/// Regex for one column span in a history separator row
///
/// The separator under the header is a run of dashes per column:
/// `--------- ----------- ---------- ------------`
/// Each maximal dash run defines one column's start offset and width.
static DASH_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("Invalid dash run regex"));

/// Regex for the server-side project root inside a project path
///
/// Matches `$/Name` in inputs like `$/Name/sub/folder`; labels are scoped
/// to the project root, so only that leading segment takes part in scope
/// comparison.
static PROJECT_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$/[a-zA-Z0-9 _-]+").expect("Invalid project path regex"));
