// ABOUTME: JSON file source of weight records for bulk import into a store
// ABOUTME: Parses an array of {date, weight} records; validation happens on store writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// One weight record as it appears in an import file
///
/// ```json
/// [{ "date": "2025-03-01", "weight": 164 }]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightRecord {
    /// Calendar date (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Measured weight
    pub weight: u32,
}

/// Parse weight records from a JSON string
///
/// # Errors
///
/// Returns `INVALID_FORMAT` when the JSON is well-formed but a record does not
/// match `{date: YYYY-MM-DD, weight: unsigned}`, and `SERIALIZATION_ERROR`
/// when the text is not valid JSON at all
pub fn parse_records(json: &str) -> AppResult<Vec<WeightRecord>> {
    serde_json::from_str(json).map_err(|e| {
        if e.is_data() {
            AppError::invalid_format(format!("Invalid weight record: {e}")).with_source(e)
        } else {
            AppError::from(e)
        }
    })
}

/// Read weight records from a JSON file, in file order
///
/// # Errors
///
/// Returns `STORAGE_ERROR` if the file cannot be read, otherwise the errors
/// of [`parse_records`]
pub fn load_records(path: &Path) -> AppResult<Vec<WeightRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read {}: {e}", path.display())).with_source(e)
    })?;
    let records = parse_records(&contents)?;
    debug!(path = %path.display(), records = records.len(), "Loaded weight records");
    Ok(records)
}
