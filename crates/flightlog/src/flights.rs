//! The in-memory flight collection.
//!
//! A `FlightList` is what the storage layer reads and writes: an ordered
//! sequence of records, appended to by `add` and filtered by `select`.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// An ordered collection of flight records.
///
/// Insertion order is significant: it drives the 1-based numbering in the
/// rendered table. Duplicates are permitted. Serializes transparently as
/// the JSON array stored in the data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightList {
    records: Vec<Record>,
}

impl FlightList {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record built from the given fields, without a `year`.
    pub fn add(&mut self, point: impl Into<String>, number: i64, kind: impl Into<String>) {
        self.records.push(Record::new(point, number, kind));
    }

    /// Append an existing record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Records at least `period` years old, judged against the current
    /// calendar year.
    #[must_use]
    pub fn select(&self, period: i32) -> Self {
        self.select_in(period, chrono::Local::now().year())
    }

    /// Records at least `period` years old relative to the `reference` year.
    ///
    /// A record without a `year` counts as recorded in the reference year.
    /// Order is preserved; a negative `period` matches every record.
    #[must_use]
    pub fn select_in(&self, period: i32, reference: i32) -> Self {
        let records = self
            .records
            .iter()
            .filter(|record| {
                i64::from(reference) - i64::from(record.year_or(reference)) >= i64::from(period)
            })
            .cloned()
            .collect();
        Self { records }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl From<Vec<Record>> for FlightList {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a FlightList {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
