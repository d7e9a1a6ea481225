//! Data models for Tfspec
//!
//! Plain data structures representing the records extracted from TF
//! console output.

mod changeset;
mod label;

pub use changeset::ChangesetEntry;
pub use label::LabelEntry;
