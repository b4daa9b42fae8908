//! Rectangular CSV rendering of heterogeneous records.
//!
//! Each record is serialized to a JSON tree and flattened: nested objects
//! become dotted column names (`scores.Medical Accuracy`), arrays are kept
//! as a single JSON-encoded cell. The header is the union of all flattened
//! keys in order of first appearance; a record without a column gets an
//! empty cell.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::StoreError;

/// One flattened record: `(column, cell)` pairs in field order.
pub type FlatRow = Vec<(String, String)>;

/// Flatten a serializable record into ordered `(column, cell)` pairs.
pub fn flatten<T: Serialize>(record: &T) -> Result<FlatRow, StoreError> {
    let value = serde_json::to_value(record)?;
    let mut row = Vec::new();
    match value {
        Value::Object(map) => flatten_object("", &map, &mut row),
        other => row.push(("value".to_string(), cell(&other))),
    }
    Ok(row)
}

fn flatten_object(prefix: &str, map: &Map<String, Value>, row: &mut FlatRow) {
    for (key, value) in map {
        let column = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) => flatten_object(&column, nested, row),
            other => row.push((column, cell(other))),
        }
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Arrays and objects that reach here are kept as JSON text.
        other => other.to_string(),
    }
}

/// Column names across all rows, in order of first appearance.
pub fn union_columns(rows: &[FlatRow]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for (column, _) in row {
            if !columns.iter().any(|c| c == column) {
                columns.push(column.clone());
            }
        }
    }
    columns
}

/// Render records as UTF-8 CSV with a header row.
///
/// An empty slice renders as an empty byte stream (no header), since there
/// are no observed columns to name.
pub fn to_csv<T: Serialize>(records: &[T]) -> Result<Vec<u8>, StoreError> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let rows = records
        .iter()
        .map(flatten)
        .collect::<Result<Vec<_>, _>>()?;
    let columns = union_columns(&rows);

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&columns)?;

    for row in &rows {
        let cells = columns.iter().map(|column| {
            row.iter()
                .find(|(c, _)| c == column)
                .map(|(_, v)| v.as_str())
                .unwrap_or("")
        });
        writer.write_record(cells)?;
    }

    writer
        .into_inner()
        .map_err(|e| StoreError::CsvBuffer(e.to_string()))
}
