//! Reads contact entries out of CSV sources.
//!
//! The expected format is a header row containing at least the columns
//! `name`, `phone_number`, and `email` (in any order; extra columns are
//! ignored), followed by one data row per entry. Blank lines are skipped
//! by the reader.

use crate::error::{AppError, Result};
use crate::models::Entry;
use std::io::Read;
use tracing::{debug, error};

/// The column headers a CSV source must provide.
pub const REQUIRED_COLUMNS: [&str; 3] = ["name", "phone_number", "email"];

/// Reads every entry from a CSV source, in file order.
///
/// The rows are deserialized by header name, so column order does not
/// matter. Returns `AppError::MissingColumns` if the header row lacks any
/// required column, and `AppError::Csv` for malformed rows (ragged record
/// lengths, invalid UTF-8, and so on).
pub fn read_entries<R: Read>(source: R) -> Result<Vec<Entry>> {
    let mut reader = csv::Reader::from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| {
            error!("Failed to read CSV header row: {}", e);
            AppError::Csv(e.into())
        })?
        .clone();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|header| header == **required))
        .copied()
        .collect();
    if !missing.is_empty() {
        error!("CSV header {:?} is missing columns {:?}", headers, missing);
        return Err(AppError::MissingColumns(missing.join(", ")));
    }

    let mut entries = Vec::new();
    for row in reader.deserialize::<Entry>() {
        let entry = row.map_err(|e| {
            error!("Failed to parse CSV row: {}", e);
            AppError::Csv(e.into())
        })?;
        entries.push(entry);
    }

    debug!("Read {} entries from CSV source", entries.len());

    Ok(entries)
}
