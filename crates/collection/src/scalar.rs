//! Scalar classification and text rendering shared across operations.

use serde_json::Value;

/// Whether a value is a scalar (not an array or object).
pub fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Render a scalar as text.
///
/// Strings are returned verbatim, numbers in their decimal form, booleans as
/// `true`/`false`, and null as the empty string. Returns `None` for arrays
/// and objects.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rowset_collection::scalar::scalar_text;
///
/// assert_eq!(scalar_text(&json!("abc")), Some("abc".to_string()));
/// assert_eq!(scalar_text(&json!(12)), Some("12".to_string()));
/// assert_eq!(scalar_text(&json!(null)), Some(String::new()));
/// assert_eq!(scalar_text(&json!([1])), None);
/// ```
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Whether a numeric parse of the scalar succeeds.
///
/// Numbers are numeric; strings are numeric when they parse as a float
/// (leading/trailing whitespace rejected). Booleans, null, and collections
/// are not.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rowset_collection::scalar::is_numeric_scalar;
///
/// assert!(is_numeric_scalar(&json!(2)));
/// assert!(is_numeric_scalar(&json!("3.5")));
/// assert!(!is_numeric_scalar(&json!("2w")));
/// assert!(!is_numeric_scalar(&json!(true)));
/// ```
pub fn is_numeric_scalar(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => {
            !s.is_empty()
                && s.trim() == s
                && !s.contains(|c: char| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
                && s.parse::<f64>().is_ok()
        }
        _ => false,
    }
}

/// Whether a scalar or collection counts as falsy.
///
/// Falsy values: null, `false`, numeric zero, the empty string, the string
/// `"0"`, and empty arrays/objects. This is the emptiness notion used by
/// row trimming and the XML escape's empty-input check.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(arr) => arr.is_empty(),
        Value::Object(obj) => obj.is_empty(),
    }
}
