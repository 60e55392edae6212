use serde_json::{Map, Value};

use crate::error::CollectionError;
use crate::scalar::scalar_text;
use crate::shape::{row_len, row_values, rows_of};

/// Rebuild every row of a record batch as a mapping from the first row's
/// field names to the row's values, positionally.
///
/// The first row is treated as the header; its scalar texts become the
/// field names. The header row itself is projected too, mapping every field
/// name to itself. Unlike most batch operations this one checks every row's
/// size against the header before projecting anything.
///
/// # Errors
///
/// - `SizeMismatch` if any row's field count differs from the header's.
/// - `UnsupportedInput` if `rows` is a scalar or its first row is a scalar.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rowset_collection::project_header_row;
///
/// let rows = json!([
///     ["key1", "key2"],
///     ["value1", "value2"]
/// ]);
/// assert_eq!(project_header_row(&rows).unwrap(), json!([
///     {"key1": "key1", "key2": "key2"},
///     {"key1": "value1", "key2": "value2"}
/// ]));
/// ```
pub fn project_header_row(rows: &Value) -> Result<Value, CollectionError> {
    let batch = rows_of(rows)?;
    let Some((_, header)) = batch.first() else {
        return Ok(Value::Array(Vec::new()));
    };
    let names: Vec<String> = row_values(header)
        .iter()
        .map(|v| scalar_text(v).unwrap_or_else(|| v.to_string()))
        .collect();

    // Size check over the whole batch precedes any projection
    for (key, row) in &batch {
        let len = row_len(row);
        if len != names.len() {
            return Err(CollectionError::SizeMismatch {
                key: key.to_string(),
                actual: len,
                expected: names.len(),
            });
        }
    }

    let projected: Vec<Value> = batch
        .iter()
        .map(|(_, row)| {
            let mut obj = Map::new();
            for (name, value) in names.iter().zip(row_values(row)) {
                obj.insert(name.clone(), value.clone());
            }
            Value::Object(obj)
        })
        .collect();
    Ok(Value::Array(projected))
}
