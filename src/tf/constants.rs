//! TF-specific constants
//!
//! Centralized definitions for TF subcommand names, flags, and the fixed
//! field layout of the detailed labels output.

/// Number of header lines above the separator row in brief history output
pub const HISTORY_HEADER_LINES: usize = 1;

/// TF subcommands
pub mod commands {
    pub const HISTORY: &str = "history";
    pub const LABELS: &str = "labels";
}

/// TF command flags
pub mod flags {
    /// Suppress interactive prompts
    pub const NOPROMPT: &str = "-noprompt";
    /// Include items below the given path
    pub const RECURSIVE: &str = "-recursive";
    /// One-line-per-changeset history layout
    pub const FORMAT_BRIEF: &str = "-format:brief";
    /// Blocked label layout with one field per line
    pub const FORMAT_DETAILED: &str = "-format:detailed";
}

/// Fixed field prefixes in `labels -format:detailed` output
///
/// The tool pads field names to a common width, so the spacing before the
/// colon is part of the prefix.
pub mod prefixes {
    pub const LABEL: &str = "Label  : ";
    pub const SCOPE: &str = "Scope  : ";
    pub const OWNER: &str = "Owner  : ";
    pub const DATE: &str = "Date   : ";
    pub const COMMENT: &str = "Comment: ";
}

/// Date format strings (chrono strftime syntax)
pub mod formats {
    /// Date column in brief history output (e.g. "Jan 1,2020")
    pub const HISTORY_DATE: &str = "%b %d,%Y";
    /// Date field in detailed labels output (e.g. "21 October 2009 07:23:55")
    pub const LABEL_DATE: &str = "%d %B %Y %H:%M:%S";
    /// Display rendering of parsed dates (e.g. "Jan 1, 2020")
    pub const DISPLAY_DATE: &str = "%b %-d, %Y";
}

/// Special values
pub mod special {
    /// Replacement text for masked arguments when a list is echoed
    pub const MASK: &str = "********";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_prefixes_align() {
        // The tool pads every field name to the same column
        let all = [
            prefixes::LABEL,
            prefixes::SCOPE,
            prefixes::OWNER,
            prefixes::DATE,
            prefixes::COMMENT,
        ];
        for prefix in all {
            assert_eq!(prefix.len(), 9);
            assert!(prefix.ends_with(": "));
        }
    }

    #[test]
    fn test_history_header_lines() {
        assert_eq!(HISTORY_HEADER_LINES, 1);
    }
}
