//! JSON export and import.
//!
//! The backup format: the raw unscored record list, every stored field in
//! declaration order, pretty-printed. Import accepts only an array of
//! records; imported records are trusted as-is (no validation, no id
//! re-assignment, no clamping before scoring time).

use crate::models::Record;
use crate::{Error, Result};

/// Serializes the raw record list, pretty-printed.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export(records: &[Record]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(|e| Error::OperationFailed {
        operation: "write_json".to_string(),
        cause: e.to_string(),
    })
}

/// Parses imported text as a record list.
///
/// # Errors
///
/// Returns `InvalidInput` when the text is malformed JSON or the parsed
/// value is not an array of records. Callers on the import path drop the
/// error silently and keep the existing collection.
pub fn import(text: &str) -> Result<Vec<Record>> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| Error::InvalidInput(format!("malformed JSON: {e}")))?;

    if !value.is_array() {
        return Err(Error::InvalidInput(
            "import content is not a JSON array".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| Error::InvalidInput(format!("not an array of records: {e}")))
}
