//! Record-batch shape checks shared by the multi-dimensional operations.
//!
//! Validation is intentionally shallow: only the first row is inspected, so
//! rows of inconsistent shape beyond the first pass through undetected.
//! This matches the observed contract and is not strengthened here.

use serde_json::Value;

use crate::error::CollectionError;
use crate::key::Key;

/// Borrow the rows of a record batch as (key, row) pairs.
///
/// The batch may be an array (integer keys) or an object (label keys). An
/// empty batch yields an empty vec. Fails with `UnsupportedInput` when the
/// input is a scalar or its first row is a scalar.
pub(crate) fn rows_of(rows: &Value) -> Result<Vec<(Key, &Value)>, CollectionError> {
    let pairs: Vec<(Key, &Value)> = match rows {
        Value::Array(arr) => arr
            .iter()
            .enumerate()
            .map(|(i, v)| (Key::Index(i), v))
            .collect(),
        Value::Object(obj) => obj
            .iter()
            .map(|(k, v)| (Key::Name(k.clone()), v))
            .collect(),
        _ => {
            return Err(CollectionError::UnsupportedInput(
                "expected a multi-dimensional collection, got a scalar".to_string(),
            ))
        }
    };
    if let Some((key, first)) = pairs.first() {
        if !matches!(first, Value::Array(_) | Value::Object(_)) {
            return Err(CollectionError::UnsupportedInput(format!(
                "expected a multi-dimensional collection, row {key} is a scalar"
            )));
        }
    }
    Ok(pairs)
}

/// The field values of one row, in order.
///
/// Array rows yield their elements, object rows their values in insertion
/// order. A scalar row yields itself as a single field.
pub(crate) fn row_values(row: &Value) -> Vec<&Value> {
    match row {
        Value::Array(arr) => arr.iter().collect(),
        Value::Object(obj) => obj.values().collect(),
        scalar => vec![scalar],
    }
}

/// The field count of one row.
pub(crate) fn row_len(row: &Value) -> usize {
    match row {
        Value::Array(arr) => arr.len(),
        Value::Object(obj) => obj.len(),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_of_array_batch() {
        let batch = json!([[1, 2], [3, 4]]);
        let rows = rows_of(&batch).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, Key::Index(0));
    }

    #[test]
    fn test_rows_of_object_batch() {
        let batch = json!({"r1": [1], "r2": [2]});
        let rows = rows_of(&batch).unwrap();
        assert_eq!(rows[1].0, Key::Name("r2".to_string()));
    }

    #[test]
    fn test_rows_of_empty_batch() {
        assert!(rows_of(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_rows_of_scalar_first_row() {
        let err = rows_of(&json!(["scalar", [1]])).unwrap_err();
        assert!(matches!(err, CollectionError::UnsupportedInput(_)));
    }

    #[test]
    fn test_rows_of_shallow_only() {
        // Second row scalar goes undetected, by contract
        assert!(rows_of(&json!([[1], "scalar"])).is_ok());
    }

    #[test]
    fn test_row_values_order() {
        let row = json!({"a": 1, "b": 2});
        let values: Vec<&Value> = row_values(&row);
        assert_eq!(values, vec![&json!(1), &json!(2)]);
        assert_eq!(row_len(&row), 2);
    }
}
