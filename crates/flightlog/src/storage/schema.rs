//! JSON Schema for the flight data file.
//!
//! The schema is the structural contract of the data file: a single array
//! of objects with required `point`, `number` and `type` fields. `year` is
//! intentionally unconstrained.

use jsonschema::{Draft, JSONSchema};
use serde_json::{json, Value};

use crate::error::{Error, Result};

/// Compiled validator for the flight record schema.
#[derive(Debug)]
pub struct SchemaValidator {
    compiled: JSONSchema,
}

impl SchemaValidator {
    /// Compile the embedded record schema.
    ///
    /// # Errors
    ///
    /// Returns `Error::SchemaCompile` if the embedded schema is not a valid
    /// Draft 7 schema.
    pub fn new() -> Result<Self> {
        let schema = record_schema();
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&schema)
            .map_err(|e| Error::SchemaCompile {
                message: e.to_string(),
            })?;
        Ok(Self { compiled })
    }

    /// The first schema violation in `data`, if any.
    #[must_use]
    pub fn first_violation(&self, data: &Value) -> Option<String> {
        match self.compiled.validate(data) {
            Ok(()) => None,
            Err(mut errors) => errors.next().map(|e| e.to_string()),
        }
    }

    /// Whether `data` satisfies the record schema.
    #[must_use]
    pub fn is_valid(&self, data: &Value) -> bool {
        self.compiled.is_valid(data)
    }
}

/// The record schema as a JSON value.
fn record_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "point": {"type": "string"},
                "number": {"type": "integer"},
                "type": {"type": "string"}
            },
            "required": ["point", "number", "type"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> SchemaValidator {
        SchemaValidator::new().expect("embedded schema compiles")
    }

    #[test]
    fn test_schema_compiles() {
        assert!(SchemaValidator::new().is_ok());
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(validator().is_valid(&json!([])));
    }

    #[test]
    fn test_valid_records_pass() {
        let data = json!([
            {"point": "Moscow", "number": 101, "type": "Boeing"},
            {"point": "Perm", "number": 202, "type": "Tu-154", "year": 1999},
        ]);
        let v = validator();
        assert!(v.is_valid(&data));
        assert!(v.first_violation(&data).is_none());
    }

    #[test]
    fn test_missing_required_field_is_reported() {
        let data = json!([{"number": 1, "type": "X"}]);
        let violation = validator().first_violation(&data);

        assert!(violation.is_some());
        assert!(violation.unwrap().contains("point"));
    }

    #[test]
    fn test_wrong_type_is_reported() {
        let data = json!([{"point": "A", "number": "one", "type": "X"}]);
        assert!(validator().first_violation(&data).is_some());
    }

    #[test]
    fn test_non_array_is_reported() {
        let data = json!({"point": "A", "number": 1, "type": "X"});
        assert!(validator().first_violation(&data).is_some());
    }

    #[test]
    fn test_year_is_unconstrained() {
        let data = json!([{"point": "A", "number": 1, "type": "X", "year": "not a year"}]);
        assert!(validator().is_valid(&data));
    }

    #[test]
    fn test_extra_fields_are_allowed() {
        let data = json!([{"point": "A", "number": 1, "type": "X", "crew": 5}]);
        assert!(validator().is_valid(&data));
    }
}
