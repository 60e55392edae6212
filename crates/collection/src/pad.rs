use serde_json::{Map, Value};

use crate::error::CollectionError;
use crate::shape::{row_len, rows_of};

/// Pad every row of a record batch to the field count of the first row,
/// appending empty-string fields as needed.
///
/// Rows already at or beyond the first row's length are never truncated.
/// Object rows gain their padding under successive unused decimal keys.
///
/// # Errors
///
/// - `UnsupportedInput` if `rows` is a scalar or its first row is a scalar
///   (shallow check, first row only).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rowset_collection::pad_rows;
///
/// let rows = json!([[1, 2, 3], [4, 5], [6]]);
/// assert_eq!(
///     pad_rows(&rows).unwrap(),
///     json!([[1, 2, 3], [4, 5, ""], [6, "", ""]])
/// );
/// ```
pub fn pad_rows(rows: &Value) -> Result<Value, CollectionError> {
    let batch = rows_of(rows)?;
    let target = batch.first().map(|(_, row)| row_len(row)).unwrap_or(0);
    let padded: Vec<Value> = batch
        .iter()
        .map(|(_, row)| pad_row(row, target))
        .collect();
    match rows {
        Value::Object(obj) => {
            let mut new_obj = Map::new();
            for (key, row) in obj.keys().zip(padded) {
                new_obj.insert(key.clone(), row);
            }
            Ok(Value::Object(new_obj))
        }
        _ => Ok(Value::Array(padded)),
    }
}

fn pad_row(row: &Value, target: usize) -> Value {
    match row {
        Value::Array(arr) => {
            let mut padded = arr.clone();
            while padded.len() < target {
                padded.push(Value::String(String::new()));
            }
            Value::Array(padded)
        }
        Value::Object(obj) => {
            let mut padded = obj.clone();
            let mut next = 0usize;
            while padded.len() < target {
                let key = loop {
                    let candidate = next.to_string();
                    next += 1;
                    if !padded.contains_key(&candidate) {
                        break candidate;
                    }
                };
                padded.insert(key, Value::String(String::new()));
            }
            Value::Object(padded)
        }
        scalar => scalar.clone(),
    }
}
