//! Batch ingestion of mortgage records from delimited text
//!
//! Input is headerless comma-delimited text, one record per line, fields in
//! the order {amount, rate code, frequency code, amortization}. Every line
//! yields an outcome; a bad record is reported and never aborts the batch.

use crate::error::MortgageError;
use crate::mortgage::Mortgage;
use log::warn;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default bulk input shipped with the crate
pub const DEFAULT_RECORDS_PATH: &str = "data/mortgage_records.txt";

/// Why a single record was rejected
#[derive(Debug, Error)]
pub enum RecordError {
    /// Field missing or unparsable as a number where one was required
    #[error("{0}")]
    Malformed(String),

    /// Fields parsed but failed mortgage validation
    #[error(transparent)]
    Validation(#[from] MortgageError),
}

/// Failure to read the bulk input at all
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("The file was not found.")]
    SourceNotFound(PathBuf),

    #[error("failed to read records: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-line result of the batch
#[derive(Debug)]
pub enum RecordOutcome {
    Valid(Mortgage),
    Rejected { raw: String, error: RecordError },
}

/// Parse and validate every record from a reader
///
/// Empty lines are skipped. Rejections are logged and carried in the
/// returned outcomes alongside the offending raw line.
pub fn load_records_from_reader<R: Read>(reader: R) -> Vec<RecordOutcome> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut outcomes = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("line {}: unreadable record: {}", index + 1, e);
                outcomes.push(RecordOutcome::Rejected {
                    raw: format!("<line {}>", index + 1),
                    error: RecordError::Malformed(e.to_string()),
                });
                continue;
            }
        };
        let raw = record.iter().collect::<Vec<_>>().join(",");
        match parse_record(&record) {
            Ok(mortgage) => outcomes.push(RecordOutcome::Valid(mortgage)),
            Err(error) => {
                warn!("rejected record '{}': {}", raw, error);
                outcomes.push(RecordOutcome::Rejected { raw, error });
            }
        }
    }
    outcomes
}

fn parse_record(record: &csv::StringRecord) -> Result<Mortgage, RecordError> {
    if record.len() < 4 {
        return Err(RecordError::Malformed(format!(
            "expected 4 fields, found {}",
            record.len()
        )));
    }

    let amount_field = record[0].trim();
    let amount: f64 = amount_field.parse().map_err(|_| {
        RecordError::Malformed(format!("amount '{}' is not a number", amount_field))
    })?;

    let rate_code = record[1].trim();
    let frequency_code = record[2].trim();

    let amortization_field = record[3].trim();
    let amortization: u32 = amortization_field.parse().map_err(|_| {
        RecordError::Malformed(format!(
            "amortization '{}' is not a whole number of years",
            amortization_field
        ))
    })?;

    Ok(Mortgage::new(amount, rate_code, frequency_code, amortization)?)
}

/// Load records from a file path
///
/// A missing file is reported as [`IngestError::SourceNotFound`] so callers
/// can distinguish it from other read failures.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<RecordOutcome>, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            IngestError::SourceNotFound(path.to_path_buf())
        } else {
            IngestError::Io(e)
        }
    })?;
    Ok(load_records_from_reader(file))
}

/// Load the bundled default records file
pub fn load_default_records() -> Result<Vec<RecordOutcome>, IngestError> {
    load_records(DEFAULT_RECORDS_PATH)
}
