use serde_json::{Map, Value};

use crate::scalar::scalar_text;

/// Build a mapping from `keys` to `values` by position.
///
/// A shorter `values` is padded with numeric zero; a longer one is truncated
/// to the length of `keys`. Empty `keys` gives an empty mapping. Keys are
/// rendered as text (map keys are strings), duplicates keep the last value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rowset_collection::safe_zip;
///
/// let zipped = safe_zip(&[json!(1), json!(2), json!(3)], &[json!(2), json!(3), json!(4), json!(5)]);
/// assert_eq!(serde_json::Value::Object(zipped), json!({"1": 2, "2": 3, "3": 4}));
/// ```
pub fn safe_zip(keys: &[Value], values: &[Value]) -> Map<String, Value> {
    let mut combined = Map::new();
    for (i, key) in keys.iter().enumerate() {
        let name = scalar_text(key).unwrap_or_else(|| key.to_string());
        let value = values.get(i).cloned().unwrap_or_else(|| Value::from(0));
        combined.insert(name, value);
    }
    combined
}
