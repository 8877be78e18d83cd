// File: crates/chart-data/src/import.rs
// Summary: CSV upload ingestion: headers become columns, cells auto-detect numbers.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::palette;
use crate::types::{CellValue, ChartData, Column, Row};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("CSV file has no header row")]
    EmptyFile,
    #[error("CSV header {} is blank", .index + 1)]
    BlankHeader { index: usize },
    #[error("duplicate CSV header '{name}'")]
    DuplicateHeader { name: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read an uploaded CSV into chart data.
///
/// The first record is the header row; headers become columns with palette
/// colors by index. Fields are trimmed, numeric-looking fields become
/// numbers, blank lines are skipped, and short records are padded with
/// empty cells so row completeness is still checked by the validator.
pub fn read_csv<R: Read>(reader: R) -> Result<ChartData, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(ImportError::EmptyFile);
    }
    for (index, name) in headers.iter().enumerate() {
        if name.is_empty() {
            return Err(ImportError::BlankHeader { index });
        }
        if headers[..index].contains(name) {
            return Err(ImportError::DuplicateHeader { name: name.clone() });
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(index, name)| Column::new(name.as_str(), palette::color_for(index)))
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let mut row = Row::new();
        for (index, name) in headers.iter().enumerate() {
            let raw = record.get(index).unwrap_or("").trim();
            row.insert(name, detect_scalar(raw));
        }
        rows.push(row);
    }

    Ok(ChartData { columns, rows })
}

pub fn read_csv_path(path: impl AsRef<Path>) -> Result<ChartData, ImportError> {
    read_csv(File::open(path)?)
}

/// The upload tab's autodetect: numeric-looking fields become numbers.
fn detect_scalar(raw: &str) -> CellValue {
    match raw.parse::<f64>() {
        Ok(n) if !n.is_nan() => CellValue::Num(n),
        _ => CellValue::Str(raw.to_string()),
    }
}
