//! Core record type for flightlog.
//!
//! This module defines the flight record structure persisted in the
//! JSON data file.

use serde::{Deserialize, Serialize};

/// A single flight entry.
///
/// The three schema-required fields all default when absent so that a file
/// rejected by validation still loads and renders. Keys outside the schema
/// round-trip untouched through `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Destination of the flight.
    #[serde(default)]
    pub point: String,

    /// Flight number.
    #[serde(default)]
    pub number: i64,

    /// Aircraft type.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Year the flight was recorded, if known. Consumed only when selecting
    /// by elapsed period; never written by `add`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Fields outside the schema, preserved verbatim across load and save.
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// Create a new record without a `year` field.
    #[must_use]
    pub fn new(point: impl Into<String>, number: i64, kind: impl Into<String>) -> Self {
        Self {
            point: point.into(),
            number,
            kind: kind.into(),
            year: None,
            extra: serde_json::Map::new(),
        }
    }

    /// The year this record counts as recorded in, relative to `reference`.
    ///
    /// A record without a `year` counts as recorded in the reference year,
    /// so its elapsed period is zero.
    #[must_use]
    pub fn year_or(&self, reference: i32) -> i32 {
        self.year.unwrap_or(reference)
    }
}
