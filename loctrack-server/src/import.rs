//! CSV bulk import
//!
//! The upload is decoded as UTF-8 and read with a header row. Each record
//! becomes a [`RowOutcome`]; rejected rows are reported as `"Row N: ..."`
//! strings and never stop the rows after them. Only an undecodable or
//! structurally broken file aborts the whole import.

use std::fmt;

use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

use crate::db::LocationStore;
use crate::models::{Location, NewLocation};

/// Header names a file must carry, matched exactly
pub const REQUIRED_COLUMNS: [&str; 4] = ["Name", "Category", "Latitude", "Longitude"];

/// Row 1 is the header
const FIRST_DATA_ROW: usize = 2;

const UTF8_BOM: &str = "\u{feff}";

/// Failure that aborts the whole import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("file is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Why a single row was skipped
#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    MissingFields,
    InvalidCoordinates,
    /// The store refused the insert
    Store(String),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Missing required fields"),
            Self::InvalidCoordinates => write!(f, "Invalid coordinates"),
            Self::Store(msg) => write!(f, "{}", msg),
        }
    }
}

/// A rejected row and its 1-based file row number
#[derive(Debug, Clone, PartialEq)]
pub struct RowRejection {
    pub row: usize,
    pub error: RowError,
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {}", self.row, self.error)
    }
}

/// A data row parsed into an insert candidate, or the reason it can't be
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRow {
    pub row: usize,
    pub parsed: Result<NewLocation, RowError>,
}

/// Result of handling one row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Imported(Location),
    Rejected(RowRejection),
}

/// `{"imported": n, "errors": ["Row N: ..."]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub imported: usize,
    pub errors: Vec<String>,
}

impl ImportReport {
    pub fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Imported(_) => self.imported += 1,
            RowOutcome::Rejected(rejection) => self.errors.push(rejection.to_string()),
        }
    }
}

/// Column positions of the required fields in the header
#[derive(Debug, Clone, Copy)]
struct Columns {
    name: Option<usize>,
    category: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Self {
        let find = |column: &str| headers.iter().position(|h| h == column);
        let [name, category, latitude, longitude] = REQUIRED_COLUMNS;
        Self {
            name: find(name),
            category: find(category),
            latitude: find(latitude),
            longitude: find(longitude),
        }
    }

    fn candidate(&self, record: &StringRecord) -> Result<NewLocation, RowError> {
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i));

        let (Some(name), Some(category), Some(latitude), Some(longitude)) = (
            field(self.name),
            field(self.category),
            field(self.latitude),
            field(self.longitude),
        ) else {
            return Err(RowError::MissingFields);
        };

        Ok(NewLocation {
            name: name.to_owned(),
            category: category.to_owned(),
            latitude: parse_coordinate(latitude)?,
            longitude: parse_coordinate(longitude)?,
        })
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, RowError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(RowError::InvalidCoordinates)
}

/// Decode an upload as UTF-8, dropping a leading byte-order mark.
pub fn decode(bytes: &[u8]) -> Result<&str, ImportError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text))
}

/// Iterate the data rows of a CSV document.
///
/// Yields `Err` only for structural CSV errors; field-level problems are
/// carried in [`CsvRow::parsed`].
pub fn rows(text: &str) -> Result<impl Iterator<Item = Result<CsvRow, ImportError>> + '_, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let columns = Columns::locate(reader.headers()?);

    Ok(reader.into_records().enumerate().map(move |(i, record)| -> Result<CsvRow, ImportError> {
        let record = record?;
        Ok(CsvRow {
            row: i + FIRST_DATA_ROW,
            parsed: columns.candidate(&record),
        })
    }))
}

/// Parse every data row without touching a store.
pub fn parse_rows(text: &str) -> Result<Vec<CsvRow>, ImportError> {
    rows(text)?.collect()
}

/// Report what an import would do, without inserting anything.
///
/// `imported` counts the rows that parse cleanly.
pub fn check_csv(bytes: &[u8]) -> Result<ImportReport, ImportError> {
    let mut report = ImportReport::default();
    for row in rows(decode(bytes)?)? {
        let row = row?;
        report.record(match row.parsed {
            Ok(candidate) => RowOutcome::Imported(candidate.with_id(0)),
            Err(error) => RowOutcome::Rejected(RowRejection { row: row.row, error }),
        });
    }
    Ok(report)
}

/// Import a CSV upload into `store`, one insert per valid row.
pub async fn import_csv(store: &dyn LocationStore, bytes: &[u8]) -> Result<ImportReport, ImportError> {
    let text = decode(bytes)?;
    let mut report = ImportReport::default();

    for row in rows(text)? {
        let outcome = import_row(store, row?).await;
        if let RowOutcome::Rejected(rejection) = &outcome {
            tracing::debug!(row = rejection.row, error = %rejection.error, "Skipping CSV row");
        }
        report.record(outcome);
    }

    tracing::info!(
        imported = report.imported,
        rejected = report.errors.len(),
        "CSV import finished"
    );
    Ok(report)
}

async fn import_row(store: &dyn LocationStore, row: CsvRow) -> RowOutcome {
    let candidate = match row.parsed {
        Ok(candidate) => candidate,
        Err(error) => return RowOutcome::Rejected(RowRejection { row: row.row, error }),
    };

    match store.create(candidate).await {
        Ok(location) => RowOutcome::Imported(location),
        Err(e) => RowOutcome::Rejected(RowRejection {
            row: row.row,
            error: RowError::Store(e.to_string()),
        }),
    }
}
