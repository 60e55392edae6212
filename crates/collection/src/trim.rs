use serde_json::{Map, Value};

use crate::error::CollectionError;
use crate::scalar::is_falsy;
use crate::shape::{row_values, rows_of};

/// Drop every row of a record batch whose fields are all falsy.
///
/// Surviving rows keep their original keys: the result is an object keyed by
/// the original label, or the original decimal index for array batches, so
/// gaps in integer keys are preserved rather than renumbered.
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
/// use rowset_collection::trim_empty_rows;
///
/// let rows = json!([["", "value1", "value2"], ["", "", ""], ["value3", "", "value4"]]);
/// let trimmed = trim_empty_rows(&rows).unwrap();
/// assert_eq!(trimmed, json!({
///     "0": ["", "value1", "value2"],
///     "2": ["value3", "", "value4"]
/// }));
/// ```
pub fn trim_empty_rows(rows: &Value) -> Result<Value, CollectionError> {
    let batch = rows_of(rows)?;
    let mut trimmed = Map::new();
    for (key, row) in batch {
        if row_values(row).iter().any(|field| !is_falsy(field)) {
            trimmed.insert(key.to_string(), row.clone());
        }
    }
    Ok(Value::Object(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trim_preserves_original_keys() {
        let rows = json!([
            ["", "value1", "value2"],
            ["", "", ""],
            ["value3", "", "value4"]
        ]);
        let trimmed = trim_empty_rows(&rows).unwrap();
        assert_eq!(
            trimmed,
            json!({
                "0": ["", "value1", "value2"],
                "2": ["value3", "", "value4"]
            })
        );
    }

    #[test]
    fn test_trim_object_batch() {
        let rows = json!({"keep": {"a": "x"}, "drop": {"a": ""}});
        let trimmed = trim_empty_rows(&rows).unwrap();
        assert_eq!(trimmed, json!({"keep": {"a": "x"}}));
    }

    #[test]
    fn test_trim_falsy_variants() {
        // null, false, 0 and "0" all count as empty
        let rows = json!([[null, false, 0, "0"], ["value"]]);
        let trimmed = trim_empty_rows(&rows).unwrap();
        assert_eq!(trimmed, json!({"1": ["value"]}));
    }

    #[test]
    fn test_trim_nothing_to_drop() {
        let rows = json!([["a"], ["b"]]);
        let trimmed = trim_empty_rows(&rows).unwrap();
        assert_eq!(trimmed, json!({"0": ["a"], "1": ["b"]}));
    }

    #[test]
    fn test_trim_scalar_first_row_rejected() {
        let err = trim_empty_rows(&json!(["scalar"])).unwrap_err();
        assert!(matches!(err, CollectionError::UnsupportedInput(_)));
    }

    #[test]
    fn test_trim_empty_batch() {
        assert_eq!(trim_empty_rows(&json!([])).unwrap(), json!({}));
    }
}
