//! Defines the data structures and models used throughout the application.
//!
//! Currently this is the single `Entry` contact record, shared by the
//! address book, the CSV import adapter, and the CLI display code.

mod entry;

pub use entry::*;
