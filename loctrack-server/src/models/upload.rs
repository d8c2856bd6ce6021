//! Upload file name validation

use super::ValidationError;

/// File name of an upload accepted by the CSV importer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFileName(String);

impl CsvFileName {
    /// Accept a file name ending in `.csv` (case-sensitive).
    ///
    /// # Example
    /// ```
    /// use loctrack_server::models::CsvFileName;
    ///
    /// assert!(CsvFileName::new("points.csv").is_ok());
    /// assert!(CsvFileName::new("points.txt").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if !s.ends_with(".csv") {
            return Err(ValidationError::NotCsv);
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CsvFileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_csv() {
        assert!(CsvFileName::new("locations.csv").is_ok());
        assert!(CsvFileName::new("dir/2024 export.csv").is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        for name in ["locations.txt", "locations.CSV", "locations.csv.gz", "csv", ""] {
            let err = CsvFileName::new(name).unwrap_err();
            assert!(matches!(err, ValidationError::NotCsv), "{name}");
        }
    }
}
