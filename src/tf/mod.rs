//! TF command layer
//!
//! This module owns the textual contract with the TF command-line client:
//! building the argument lists for the subcommands whose output we consume,
//! and parsing that output into structured data.

pub mod command;
pub mod constants;
pub mod dates;
mod line_source;
/// Parser module (public for integration testing)
pub mod parser;

pub use command::{ArgumentList, Connection, history_arguments, labels_arguments};
pub use line_source::LineSource;

use std::io;
use thiserror::Error;

/// Errors that can occur when parsing TF command output
#[derive(Error, Debug)]
pub enum TfError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Cannot parse date {value:?} in history output")]
    DateFormat { value: String },
}
