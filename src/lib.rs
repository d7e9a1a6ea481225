//! Tfspec - parsers for TF version-control console output
//!
//! Turns the free-text output of the TF command-line client into typed
//! records (changeset history entries and labels).
//!
//! This library provides:
//! - [`tf`]: TF command argument builders and output parsing
//! - [`model`]: Domain models
//! - [`contents`]: Ordered key/display contents maps and caching

pub mod contents;
pub mod model;
pub mod tf;
