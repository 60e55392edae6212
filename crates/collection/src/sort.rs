use serde_json::Value;

use crate::error::CollectionError;
use crate::scalar::scalar_text;
use crate::shape::rows_of;

/// Stable sort of a record batch by the named field of each row.
///
/// Rows are compared by the byte order of the field's scalar text. Rows
/// lacking the field beyond the first sort as empty text; only the first row
/// is checked for the field's presence (shallow validation, by contract).
///
/// # Errors
///
/// - `KeyNotFound` if the first row lacks `field`.
/// - `UnsupportedInput` if `rows` is a scalar or its first row is a scalar.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rowset_collection::sort_by_field;
///
/// let rows = json!([{"sort": "one"}, {"sort": "alpha"}]);
/// assert_eq!(
///     sort_by_field(&rows, "sort").unwrap(),
///     json!([{"sort": "alpha"}, {"sort": "one"}])
/// );
/// ```
pub fn sort_by_field(rows: &Value, field: &str) -> Result<Value, CollectionError> {
    let batch = rows_of(rows)?;
    if let Some((_, first)) = batch.first() {
        if field_value(first, field).is_none() {
            return Err(CollectionError::KeyNotFound(field.to_string()));
        }
    }
    let mut sorted: Vec<Value> = batch.iter().map(|(_, row)| (*row).clone()).collect();
    sorted.sort_by(|a, b| sort_text(a, field).cmp(&sort_text(b, field)));
    Ok(Value::Array(sorted))
}

fn field_value<'a>(row: &'a Value, field: &str) -> Option<&'a Value> {
    match row {
        Value::Object(obj) => obj.get(field),
        Value::Array(arr) => field.parse::<usize>().ok().and_then(|i| arr.get(i)),
        _ => None,
    }
}

fn sort_text(row: &Value, field: &str) -> String {
    field_value(row, field)
        .and_then(scalar_text)
        .unwrap_or_default()
}
