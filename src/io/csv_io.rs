use std::fs;
use std::io::{self, Read};
use std::path::Path;

use thiserror::Error;

use crate::state::data_model::{Dataset, Row};
use crate::state::validator::{self, ValidationError};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Please upload a valid CSV file")]
    FileType,
    #[error("Invalid CSV format: {0}")]
    Format(#[from] ValidationError),
    #[error("Failed to parse CSV: {0}")]
    Parse(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub fn check_file_type(path: &Path) -> Result<(), UploadError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        Ok(())
    } else {
        Err(UploadError::FileType)
    }
}

pub fn load_csv(path: &Path) -> Result<Dataset, UploadError> {
    check_file_type(path)?;
    let content = fs::read(path)?;
    parse_csv(content.as_slice())
}

/// Reads a header row plus records into a validated [`Dataset`].
///
/// Blank lines are skipped. A short record yields a row without the trailing
/// keys; fields beyond the header are dropped.
pub fn parse_csv<R: Read>(reader: R) -> Result<Dataset, UploadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = Row::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            // first of any duplicated header wins
            row.entry(header.clone())
                .or_insert_with(|| value.to_string());
        }
        rows.push(row);
    }

    validator::validate_rows(&rows)?;
    Ok(Dataset::new(headers, rows))
}
