//! Storage layer for flightlog.
//!
//! The whole collection lives in one JSON document: a UTF-8 text file
//! holding a single array of record objects, pretty-printed so it stays
//! hand-editable. Loading validates the array against the record schema
//! but keeps going on violations, reporting the first one.

pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::flights::FlightList;

use schema::SchemaValidator;

/// Storage engine for the flight data file.
///
/// Holds only the path; the file is read and written whole, once per
/// operation.
#[derive(Debug)]
pub struct Storage {
    /// Path to the JSON data file.
    path: PathBuf,
}

impl Storage {
    /// Create a storage handle for the given data file.
    ///
    /// The file itself is not touched until `load` or `save`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the data file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the collection from the data file.
    ///
    /// The parsed array is checked against the record schema. A violation is
    /// reported on stdout and logged, but the data is still returned as
    /// loaded, with missing fields defaulted.
    ///
    /// # Errors
    ///
    /// Returns `Error::FileNotFound` if the file does not exist, and I/O or
    /// JSON errors if it cannot be read or parsed as an array of records.
    pub fn load(&self) -> Result<FlightList> {
        if !self.exists() {
            return Err(Error::FileNotFound {
                path: self.path.clone(),
            });
        }

        debug!("Loading flights from {}", self.path.display());
        let text = fs::read_to_string(&self.path)?;
        let data: Value = serde_json::from_str(&text)?;

        let validator = SchemaValidator::new()?;
        if let Some(violation) = validator.first_violation(&data) {
            warn!("Schema violation in {}: {}", self.path.display(), violation);
            println!("Ошибка валидации: {violation}");
        } else {
            debug!("{} matches the record schema", self.path.display());
        }

        let flights: FlightList = serde_json::from_value(data)?;
        debug!("Loaded {} records", flights.len());
        Ok(flights)
    }

    /// Load the collection, or an empty one when the file does not exist.
    ///
    /// This is the read path of the CLI: a missing file means no flights
    /// have been recorded yet.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Storage::load`], minus the missing-file
    /// case.
    pub fn load_or_default(&self) -> Result<FlightList> {
        if self.exists() {
            self.load()
        } else {
            debug!("{} does not exist, starting empty", self.path.display());
            Ok(FlightList::new())
        }
    }

    /// Write the collection to the data file.
    ///
    /// Serializes as a pretty-printed JSON array using `indent` spaces per
    /// level, non-ASCII characters kept literal, overwriting any previous
    /// content.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, flights: &FlightList, indent: usize) -> Result<()> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());

        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        flights.serialize(&mut ser)?;

        fs::write(&self.path, buf)?;
        debug!("Saved {} records to {}", flights.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let storage = Storage::new(dir.path().join("flights.json"));
        (dir, storage)
    }

    fn sample_flights() -> FlightList {
        let mut flights = FlightList::new();
        flights.add("Moscow", 101, "Boeing");
        flights.add("Пермь", 202, "Ту-154");
        flights
    }

    #[test]
    fn test_new_does_not_create_file() {
        let (_dir, storage) = test_storage();
        assert!(!storage.exists());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let (_dir, storage) = test_storage();
        let err = storage.load().unwrap_err();

        assert!(err.is_file_not_found());
        assert_eq!(
            err.to_string(),
            format!("File {} not found.", storage.path().display())
        );
    }

    #[test]
    fn test_load_or_default_missing_file_is_empty() {
        let (_dir, storage) = test_storage();
        let flights = storage.load_or_default().unwrap();
        assert!(flights.is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let (_dir, storage) = test_storage();
        let flights = sample_flights();

        storage.save(&flights, 4).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(flights, loaded);
    }

    #[test]
    fn test_save_uses_requested_indent() {
        let (_dir, storage) = test_storage();
        storage.save(&sample_flights(), 4).unwrap();

        let text = fs::read_to_string(storage.path()).unwrap();
        assert!(text.contains("\n    {"));
        assert!(text.contains("\n        \"point\""));
    }

    #[test]
    fn test_save_keeps_non_ascii_literal() {
        let (_dir, storage) = test_storage();
        storage.save(&sample_flights(), 4).unwrap();

        let text = fs::read_to_string(storage.path()).unwrap();
        assert!(text.contains("Пермь"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_save_overwrites() {
        let (_dir, storage) = test_storage();
        storage.save(&sample_flights(), 4).unwrap();

        let mut shorter = FlightList::new();
        shorter.add("Perm", 1, "X");
        storage.save(&shorter, 4).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_load_schema_violation_still_returns_data() {
        let (_dir, storage) = test_storage();
        fs::write(storage.path(), r#"[{"number": 1, "type": "X"}]"#).unwrap();

        let flights = storage.load().unwrap();
        assert_eq!(flights.len(), 1);

        let record = flights.iter().next().unwrap();
        assert_eq!(record.point, "");
        assert_eq!(record.number, 1);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let (_dir, storage) = test_storage();
        fs::write(storage.path(), "not json").unwrap();

        let err = storage.load().unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_roundtrip_preserves_year_and_extras() {
        let (_dir, storage) = test_storage();
        fs::write(
            storage.path(),
            r#"[{"point": "A", "number": 1, "type": "X", "year": 1999, "crew": 5}]"#,
        )
        .unwrap();

        let flights = storage.load().unwrap();
        storage.save(&flights, 4).unwrap();
        let text = fs::read_to_string(storage.path()).unwrap();

        assert!(text.contains("\"year\": 1999"));
        assert!(text.contains("\"crew\": 5"));
    }

    #[test]
    fn test_added_record_has_no_year_key() {
        let (_dir, storage) = test_storage();
        let mut flights = FlightList::new();
        flights.add("Moscow", 101, "Boeing");
        storage.save(&flights, 4).unwrap();

        let text = fs::read_to_string(storage.path()).unwrap();
        assert!(!text.contains("year"));
    }

    #[test]
    fn test_save_empty_collection() {
        let (_dir, storage) = test_storage();
        storage.save(&FlightList::new(), 4).unwrap();

        let text = fs::read_to_string(storage.path()).unwrap();
        assert_eq!(text, "[]");
    }

    #[test]
    fn test_roundtrip_with_record_struct() {
        let (_dir, storage) = test_storage();
        let mut flights = FlightList::new();
        let mut record = Record::new("Владивосток", 702, "Ил-62");
        record.year = Some(1985);
        flights.push(record);

        storage.save(&flights, 2).unwrap();
        let loaded = storage.load().unwrap();
        assert_eq!(flights, loaded);
    }
}
