use std::str::FromStr;

use serde_json::Value;

use crate::error::CollectionError;
use crate::key::Key;
use crate::scalar::{is_numeric_scalar, is_scalar, scalar_text};

/// The kind of scalar element a search looks for.
///
/// The two kinds overlap: a numeric string such as `"2"` matches both
/// `Numeric` (its numeric parse succeeds) and `Str` (it is a string).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Elements for which a numeric parse succeeds (numbers and numeric
    /// strings).
    Numeric,
    /// String elements, numeric or not.
    Str,
}

impl FromStr for ScalarKind {
    type Err = CollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numeric" => Ok(ScalarKind::Numeric),
            "string" => Ok(ScalarKind::Str),
            other => Err(CollectionError::InvalidArgument(format!(
                "unknown search kind {other:?}, expected \"numeric\" or \"string\""
            ))),
        }
    }
}

impl ScalarKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            ScalarKind::Numeric => is_numeric_scalar(value),
            ScalarKind::Str => matches!(value, Value::String(_)),
        }
    }
}

/// Find the n-th element of the given kind in a flat collection.
///
/// Scans left to right, counting elements that match `kind`, and returns the
/// key of the n-th match as a one-element vec. Returns an empty vec when
/// fewer than `n` matches exist (including `n == 0`).
///
/// # Errors
///
/// - `UnsupportedInput` if any element is itself a collection (only flat
///   collections of scalars are searchable) or if `collection` is a scalar.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rowset_collection::{find_nth_by_type, Key, ScalarKind};
///
/// let haystack = json!(["one", "2w", "3a"]);
/// assert_eq!(
///     find_nth_by_type(ScalarKind::Str, &haystack, 3).unwrap(),
///     vec![Key::Index(2)]
/// );
///
/// let haystack = json!(["one", 2, 3]);
/// assert_eq!(
///     find_nth_by_type(ScalarKind::Numeric, &haystack, 2).unwrap(),
///     vec![Key::Index(2)]
/// );
/// ```
pub fn find_nth_by_type(
    kind: ScalarKind,
    collection: &Value,
    n: usize,
) -> Result<Vec<Key>, CollectionError> {
    let mut found = Vec::new();
    let mut count = 0usize;
    for (key, value) in iter_flat(collection)? {
        if count < n && kind.matches(value) {
            count += 1;
            if count == n {
                found.push(key);
            }
        }
    }
    Ok(found)
}

/// Whether `needle`, case-folded, equals any case-folded element of
/// `haystack`.
///
/// Elements are compared by their scalar text, lowercased.
///
/// # Errors
///
/// - `UnsupportedInput` if `haystack` is a scalar or contains a nested
///   collection.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rowset_collection::contains_case_insensitive;
///
/// let haystack = json!(["one", "two", "three"]);
/// assert!(contains_case_insensitive("Two", &haystack).unwrap());
/// assert!(!contains_case_insensitive("four", &haystack).unwrap());
/// ```
pub fn contains_case_insensitive(
    needle: &str,
    haystack: &Value,
) -> Result<bool, CollectionError> {
    let folded = needle.to_lowercase();
    for (_, value) in iter_flat(haystack)? {
        let text = scalar_text(value).unwrap_or_default();
        if text.to_lowercase() == folded {
            return Ok(true);
        }
    }
    Ok(false)
}

// Iterates a flat collection as (key, scalar) pairs, rejecting nested
// elements.
fn iter_flat(collection: &Value) -> Result<Vec<(Key, &Value)>, CollectionError> {
    let pairs: Vec<(Key, &Value)> = match collection {
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
                "expected a collection, got a scalar".to_string(),
            ))
        }
    };
    for (key, value) in &pairs {
        if !is_scalar(value) {
            return Err(CollectionError::UnsupportedInput(format!(
                "expected a flat collection, element {key} is nested"
            )));
        }
    }
    Ok(pairs)
}
