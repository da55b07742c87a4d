//! CSV dataset loading
//!
//! Reads a complaint export into a [`Dataset`]. Header names are matched
//! loosely (`"Complaint Type"` and `"complaint_type"` are the same column).
//! When there is no `response_time_days` column, it is derived from
//! `created_date` and `closed_date`; rows missing either date are dropped.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::domain::complaint::{
    ComplaintRecord, Dataset, BOROUGH_COLUMN, COMPLAINT_TYPE_COLUMN, RESPONSE_TIME_COLUMN,
};

pub const CREATED_DATE_COLUMN: &str = "created_date";
pub const CLOSED_DATE_COLUMN: &str = "closed_date";

const SECONDS_PER_DAY: f64 = 86_400.0;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %I:%M:%S %p",
];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("row {row}: `{value}` in `{column}` is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {row}: negative response time {value}")]
    NegativeResponseTime { row: usize, value: f64 },
    #[error("row {row}: `{value}` in `{column}` is not a date")]
    InvalidDate {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Where the response time of a row comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseSource {
    Column(usize),
    Dates { created: usize, closed: usize },
}

#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    complaint_type: usize,
    borough: usize,
    response: ResponseSource,
}

fn normalize_header(header: &str) -> String {
    header
        .trim()
        .to_ascii_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

fn find_column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| normalize_header(h) == name)
}

impl ColumnLayout {
    fn resolve(headers: &[String]) -> Result<Self, DatasetError> {
        let require = |name: &'static str| {
            find_column(headers, name).ok_or(DatasetError::MissingColumn(name))
        };

        let complaint_type = require(COMPLAINT_TYPE_COLUMN)?;
        let borough = require(BOROUGH_COLUMN)?;
        let response = match find_column(headers, RESPONSE_TIME_COLUMN) {
            Some(i) => ResponseSource::Column(i),
            None => {
                // Report the column the caller most likely meant to provide.
                let created = find_column(headers, CREATED_DATE_COLUMN)
                    .ok_or(DatasetError::MissingColumn(RESPONSE_TIME_COLUMN))?;
                let closed = require(CLOSED_DATE_COLUMN)?;
                ResponseSource::Dates { created, closed }
            }
        };

        Ok(Self {
            complaint_type,
            borough,
            response,
        })
    }

    /// Response time in days, or `None` when the row has none and is skipped.
    fn response_time(&self, cells: &[String], row: usize) -> Result<Option<f64>, DatasetError> {
        match self.response {
            ResponseSource::Column(i) => {
                let raw = cells[i].trim();
                if raw.is_empty() {
                    return Ok(None);
                }
                let value: f64 = raw.parse().map_err(|_| DatasetError::InvalidNumber {
                    row,
                    column: RESPONSE_TIME_COLUMN,
                    value: raw.to_string(),
                })?;
                if value.is_nan() {
                    return Ok(None);
                }
                if value.is_infinite() {
                    return Err(DatasetError::InvalidNumber {
                        row,
                        column: RESPONSE_TIME_COLUMN,
                        value: raw.to_string(),
                    });
                }
                if value < 0.0 {
                    return Err(DatasetError::NegativeResponseTime { row, value });
                }
                Ok(Some(value))
            }
            ResponseSource::Dates { created, closed } => {
                let Some(created) = parse_datetime(&cells[created], row, CREATED_DATE_COLUMN)?
                else {
                    return Ok(None);
                };
                let Some(closed) = parse_datetime(&cells[closed], row, CLOSED_DATE_COLUMN)? else {
                    return Ok(None);
                };
                let seconds = (closed - created).num_seconds();
                if seconds < 0 {
                    return Ok(None);
                }
                Ok(Some(seconds as f64 / SECONDS_PER_DAY))
            }
        }
    }
}

/// Parses a timestamp in one of the accepted formats. Blank cells give `None`.
fn parse_datetime(
    raw: &str,
    row: usize,
    column: &'static str,
) -> Result<Option<NaiveDateTime>, DatasetError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });
    match parsed {
        Some(datetime) => Ok(Some(datetime)),
        None => Err(DatasetError::InvalidDate {
            row,
            column,
            value: raw.to_string(),
        }),
    }
}

/// Reads a dataset from any CSV source. Row numbers in errors count data
/// rows from 1.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let layout = ColumnLayout::resolve(&columns)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        let row_number = i + 1;
        let cells: Vec<String> = row.iter().map(str::to_string).collect();
        let Some(days) = layout.response_time(&cells, row_number)? else {
            tracing::debug!(row = row_number, "skipping row without a response time");
            skipped += 1;
            continue;
        };
        let record = ComplaintRecord::new(
            days,
            cells[layout.complaint_type].as_str(),
            cells[layout.borough].as_str(),
        )
        .with_cells(cells);
        records.push(record);
    }

    if skipped > 0 {
        tracing::info!(skipped, "dropped rows without a response time");
    }
    Ok(Dataset::new(columns, records))
}

/// Loads a dataset from a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_dataset(file)?;
    tracing::info!(path = %path.display(), rows = dataset.len(), "loaded dataset");
    Ok(dataset)
}
