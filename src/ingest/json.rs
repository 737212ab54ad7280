//! JSON file ingestion source.
//!
//! Reads a JSON array of item records:
//!
//! ```json
//! [
//!   { "name": "Alpha Runner Sneaker", "price": 120, "rating": 4.6 },
//!   { "name": "Gamma Hat", "price": 40 }
//! ]
//! ```
//!
//! A missing `rating` reads as 0.

use super::source::CatalogSource;
use crate::domain::error::{CatalogError, Result};
use crate::domain::RawItem;
use std::path::{Path, PathBuf};

/// Catalog records stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    file_path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Decodes records from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the text is not an array of records.
    pub fn parse(contents: &str) -> Result<Vec<RawItem>> {
        serde_json::from_str(contents)
            .map_err(|e| CatalogError::Parse(format!("failed to parse catalog JSON: {e}")))
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<Vec<RawItem>> {
        let _span = tracing::debug_span!("json_load_catalog", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let records = Self::parse(&contents)?;

        tracing::debug!(count = records.len(), "catalog records loaded");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_records_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"name":"B","price":2,"rating":1.5},{"name":"A","price":1}]"#,
        )
        .unwrap();

        let records = JsonFileSource::new(&path).load().unwrap();
        assert_eq!(records, vec![RawItem::new("B", 2, 1.5), RawItem::new("A", 1, 0.0)]);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = JsonFileSource::parse(r#"{"name":"not an array"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = JsonFileSource::parse(r#"[{"name":"A","price":-5}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileSource::new(dir.path().join("absent.json")).load().unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
