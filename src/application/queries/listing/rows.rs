// src/application/queries/listing/rows.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use serde_json::Value;

/// Returns the `rows` array of a view result, rejecting anything else.
pub(super) fn view_rows<'a>(document: &'a Value, listing: &str) -> ApplicationResult<&'a [Value]> {
    match document.get("rows") {
        Some(Value::Array(rows)) => Ok(rows.as_slice()),
        Some(other) => {
            tracing::warn!(listing, kind = json_kind(other), "view result rows is not an array");
            Err(ApplicationError::invalid_document(format!(
                "invalid {listing} document returned from database"
            )))
        }
        None => {
            tracing::warn!(listing, "view result has no rows");
            Err(ApplicationError::invalid_document(format!(
                "invalid {listing} document returned from database"
            )))
        }
    }
}

/// Clones `row[field]`, yielding `null` when the row lacks it.
pub(super) fn row_field(row: &Value, field: &str) -> Value {
    row.get(field).cloned().unwrap_or(Value::Null)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
