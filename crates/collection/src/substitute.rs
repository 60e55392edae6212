use serde_json::{Map, Value};

/// Replace every occurrence of `needle` with `replacement` in the text of
/// scalar elements, at all nesting levels.
///
/// Returns a new collection of the same shape. A leaf whose text is
/// unchanged keeps its original scalar; a changed leaf becomes a string.
/// Applying the substitution twice yields the same result as once whenever
/// `needle` does not occur in the replaced output.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rowset_collection::replace_recursive;
///
/// let content = json!(["one", "two", "three"]);
/// assert_eq!(
///     replace_recursive(&content, "two", "2"),
///     json!(["one", "2", "three"])
/// );
/// ```
pub fn replace_recursive(content: &Value, needle: &str, replacement: &str) -> Value {
    replace_recursive_pairs(content, &[(needle, replacement)])
}

/// Replace multiple needles at once, pairing needle and replacement by
/// position.
///
/// Pairs are applied in order to each scalar's text, so a later needle can
/// see the output of an earlier replacement.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rowset_collection::replace_recursive_pairs;
///
/// let content = json!({"a": "one two", "b": ["two three"]});
/// let replaced = replace_recursive_pairs(&content, &[("two", "2"), ("three", "3")]);
/// assert_eq!(replaced, json!({"a": "one 2", "b": ["2 3"]}));
/// ```
pub fn replace_recursive_pairs(content: &Value, pairs: &[(&str, &str)]) -> Value {
    match content {
        Value::Array(arr) => Value::Array(
            arr.iter()
                .map(|v| replace_recursive_pairs(v, pairs))
                .collect(),
        ),
        Value::Object(obj) => {
            let mut new_obj = Map::new();
            for (key, val) in obj {
                new_obj.insert(key.clone(), replace_recursive_pairs(val, pairs));
            }
            Value::Object(new_obj)
        }
        scalar => {
            let text = match scalar {
                Value::String(s) => s.clone(),
                other => crate::scalar::scalar_text(other).unwrap_or_default(),
            };
            let mut replaced = text.clone();
            for (needle, replacement) in pairs {
                if !needle.is_empty() {
                    replaced = replaced.replace(needle, replacement);
                }
            }
            if replaced == text {
                scalar.clone()
            } else {
                Value::String(replaced)
            }
        }
    }
}
