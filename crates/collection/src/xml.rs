use serde_json::{Map, Value};

use crate::error::CollectionError;
use crate::scalar::is_falsy;

// Replacement pairs, applied in order. The \r\n and \n entries are literal
// two-character backslash sequences as they appear in the data, not control
// characters; \r\n must precede \n so the pair is consumed in one pass.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("&", "&amp;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("\\r\\n", " "),
    ("\\n", " "),
];

/// Make every string element of an arbitrarily nested collection XML
/// compliant.
///
/// Replaces `&`, `<`, `>` with their entities and the literal backslash
/// sequences `\r\n` and `\n` with a space. Non-string scalars pass through
/// unchanged.
///
/// # Errors
///
/// - `InvalidArgument` if `content` is empty (falsy: null, `""`, an empty
///   collection, `false`, zero).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rowset_collection::escape_for_xml;
///
/// let content = json!([["&"], ["<"]]);
/// assert_eq!(escape_for_xml(&content).unwrap(), json!([["&amp;"], ["&lt;"]]));
/// ```
pub fn escape_for_xml(content: &Value) -> Result<Value, CollectionError> {
    if is_falsy(content) {
        return Err(CollectionError::InvalidArgument(
            "empty content".to_string(),
        ));
    }
    Ok(escape_walk(content))
}

fn escape_walk(content: &Value) -> Value {
    match content {
        Value::Array(arr) => Value::Array(arr.iter().map(escape_walk).collect()),
        Value::Object(obj) => {
            let mut new_obj = Map::new();
            for (key, val) in obj {
                new_obj.insert(key.clone(), escape_walk(val));
            }
            Value::Object(new_obj)
        }
        Value::String(s) => {
            let mut escaped = s.clone();
            for (needle, replacement) in REPLACEMENTS {
                escaped = escaped.replace(needle, replacement);
            }
            Value::String(escaped)
        }
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_fixture() {
        let content = json!([["&"], ["<"]]);
        assert_eq!(
            escape_for_xml(&content).unwrap(),
            json!([["&amp;"], ["&lt;"]])
        );
    }

    #[test]
    fn test_all_entities() {
        let content = json!(["a & b < c > d"]);
        assert_eq!(
            escape_for_xml(&content).unwrap(),
            json!(["a &amp; b &lt; c &gt; d"])
        );
    }

    #[test]
    fn test_literal_backslash_sequences_become_spaces() {
        // The data contains backslash-r-backslash-n as text, not a CRLF
        let content = json!(["one\\r\\ntwo\\nthree"]);
        assert_eq!(escape_for_xml(&content).unwrap(), json!(["one two three"]));
    }

    #[test]
    fn test_real_control_characters_untouched() {
        let content = json!(["one\r\ntwo"]);
        assert_eq!(escape_for_xml(&content).unwrap(), json!(["one\r\ntwo"]));
    }

    #[test]
    fn test_ampersand_escaped_before_angle_brackets() {
        // &lt; produced by the < pass keeps its & intact
        let content = json!(["<&>"]);
        assert_eq!(escape_for_xml(&content).unwrap(), json!(["&amp;&lt;&gt;"]));
    }

    #[test]
    fn test_deep_nesting() {
        let content = json!({"a": [{"b": ["x & y"]}]});
        assert_eq!(
            escape_for_xml(&content).unwrap(),
            json!({"a": [{"b": ["x &amp; y"]}]})
        );
    }

    #[test]
    fn test_non_string_scalars_pass_through() {
        let content = json!([1, true, null, "x"]);
        assert_eq!(escape_for_xml(&content).unwrap(), json!([1, true, null, "x"]));
    }

    #[test]
    fn test_empty_input_rejected() {
        for empty in [json!(null), json!(""), json!([]), json!({})] {
            let err = escape_for_xml(&empty).unwrap_err();
            assert!(matches!(err, CollectionError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_scalar_string_allowed() {
        assert_eq!(escape_for_xml(&json!("a&b")).unwrap(), json!("a&amp;b"));
    }
}
