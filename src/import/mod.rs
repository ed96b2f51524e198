//! Provides adapters for bringing entries in from external sources.
//!
//! Currently this is CSV files only, via the `csv` submodule.

mod csv;

pub use csv::*;
