//! Dataset loader: turns a CSV source (file path, raw bytes or an
//! uploaded base64 payload) into a [`Dataset`].
//!
//! The header must carry exactly the nine schema columns, in any order.
//! A row whose `date` does not parse fails the whole load (fail-fast, not
//! row-skipping) so the caller never sees a silently truncated dataset.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDate;
use model::{Dataset, TransactionRecord, COLUMNS};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Date format of the `date` column.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error types for dataset loading
#[derive(Error, Debug)]
pub enum LoadError {
    /// The default data file is absent; downgraded to an empty dataset at
    /// startup
    #[error("Data file not found: {path}")]
    MissingSource { path: PathBuf },

    /// The upload payload could not be decoded into CSV bytes
    #[error("Invalid upload payload: {0}")]
    Decode(String),

    /// CSV structure or field-type error
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Header is missing one or more schema columns
    #[error("Missing required columns: {0}")]
    MissingColumns(String),

    /// Header carries columns outside the schema
    #[error("Unexpected columns: {0}")]
    UnexpectedColumns(String),

    /// A `date` cell failed to parse; fails the whole load
    #[error("Unparseable date {value:?} on line {line}")]
    InvalidDate { line: usize, value: String },

    /// Filesystem error other than absence
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Raw CSV row with the date still unparsed, so date errors can be
/// reported with their line number instead of as an opaque serde failure.
#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    product_category: String,
    operation_type: String,
    quantity: u32,
    revenue: f64,
    cost: f64,
    profit: f64,
    employee: String,
    warehouse_zone: String,
}

/// Loads the dataset from a CSV file on disk.
pub fn load_path(path: &Path) -> Result<Dataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingSource {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_bytes(&bytes)
}

/// Loads the dataset from in-memory CSV bytes.
pub fn load_bytes(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_reader(bytes);
    check_header(reader.headers()?)?;

    let mut rows = Vec::new();
    for (index, raw) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = raw?;
        // Line 1 is the header, so data starts on line 2.
        let line = index + 2;
        let date = NaiveDate::parse_from_str(&raw.date, DATE_FORMAT).map_err(|_| {
            LoadError::InvalidDate {
                line,
                value: raw.date.clone(),
            }
        })?;
        rows.push(TransactionRecord {
            date,
            product_category: raw.product_category,
            operation_type: raw.operation_type,
            quantity: raw.quantity,
            revenue: raw.revenue,
            cost: raw.cost,
            profit: raw.profit,
            employee: raw.employee,
            warehouse_zone: raw.warehouse_zone,
        });
    }

    debug!(rows = rows.len(), "parsed dataset");
    Ok(Dataset::new(rows))
}

/// Decodes an upload payload of the form
/// `<content-type-descriptor>,<base64 bytes>` into raw CSV bytes.
pub fn decode_upload(contents: &str) -> Result<Vec<u8>, LoadError> {
    let (_descriptor, encoded) = contents.split_once(',').ok_or_else(|| {
        LoadError::Decode("missing content-type descriptor before the payload".to_string())
    })?;
    STANDARD
        .decode(encoded)
        .map_err(|e| LoadError::Decode(format!("base64 decode failed: {}", e)))
}

/// Decodes and parses an uploaded payload in one step.
pub fn load_upload(contents: &str) -> Result<Dataset, LoadError> {
    let bytes = decode_upload(contents)?;
    load_bytes(&bytes)
}

/// Serializes a dataset back to CSV at the given path.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<(), LoadError> {
    let mut writer = csv::Writer::from_path(path).map_err(LoadError::Csv)?;
    for record in dataset.rows() {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn check_header(headers: &csv::StringRecord) -> Result<(), LoadError> {
    let found: Vec<&str> = headers.iter().collect();

    let missing: Vec<&str> = COLUMNS
        .iter()
        .copied()
        .filter(|column| !found.contains(column))
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing.join(", ")));
    }

    let unexpected: Vec<&str> = found
        .iter()
        .copied()
        .filter(|column| !COLUMNS.contains(column))
        .collect();
    if !unexpected.is_empty() {
        return Err(LoadError::UnexpectedColumns(unexpected.join(", ")));
    }

    Ok(())
}
