use std::str::FromStr;

use serde_json::{Map, Value};

use crate::dates::parse_date_best_effort;
use crate::error::CollectionError;
use crate::key::Key;
use crate::scalar::scalar_text;
use crate::shape::rows_of;

/// The per-field formatting to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Strip thousands separators and render with exactly two decimals.
    Number,
    /// Reparse as a date and render as `YYYY-MM-DD`.
    Date,
}

impl FromStr for FieldFormat {
    type Err = CollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(FieldFormat::Number),
            "date" => Ok(FieldFormat::Date),
            other => Err(CollectionError::InvalidArgument(format!(
                "unknown format {other:?}, expected \"number\" or \"date\""
            ))),
        }
    }
}

/// Reformat every scalar element keyed `field_key` in a record batch, at all
/// nesting levels.
///
/// Number formatting strips `,` thousands separators, coerces values that
/// fail a numeric parse to zero, and renders with two decimals. Date
/// formatting reparses the value best-effort and renders `YYYY-MM-DD`;
/// values no format matches are left unchanged.
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
/// use rowset_collection::{format_field, FieldFormat};
///
/// let rows = json!([{"key1": "1/1/12"}, {"key1": "2/1/12"}]);
/// assert_eq!(
///     format_field(&rows, "key1", FieldFormat::Date).unwrap(),
///     json!([{"key1": "2012-01-01"}, {"key1": "2012-02-01"}])
/// );
/// ```
pub fn format_field(
    rows: &Value,
    field_key: &str,
    format: FieldFormat,
) -> Result<Value, CollectionError> {
    rows_of(rows)?;
    Ok(format_walk(rows, field_key, format))
}

fn format_walk(value: &Value, field_key: &str, format: FieldFormat) -> Value {
    match value {
        Value::Array(arr) => Value::Array(
            arr.iter()
                .enumerate()
                .map(|(i, v)| format_leaf(&Key::Index(i), v, field_key, format))
                .collect(),
        ),
        Value::Object(obj) => {
            let mut new_obj = Map::new();
            for (k, v) in obj {
                new_obj.insert(
                    k.clone(),
                    format_leaf(&Key::Name(k.clone()), v, field_key, format),
                );
            }
            Value::Object(new_obj)
        }
        scalar => scalar.clone(),
    }
}

fn format_leaf(key: &Key, value: &Value, field_key: &str, format: FieldFormat) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) => format_walk(value, field_key, format),
        scalar if key.matches(field_key) => {
            let text = scalar_text(scalar).unwrap_or_default();
            match format {
                FieldFormat::Number => Value::String(format_number(&text)),
                FieldFormat::Date => match parse_date_best_effort(&text) {
                    Some(date) => Value::String(date.format("%Y-%m-%d").to_string()),
                    None => scalar.clone(),
                },
            }
        }
        scalar => scalar.clone(),
    }
}

// Values that fail the numeric parse coerce to zero, matching the observed
// behavior.
fn format_number(text: &str) -> String {
    let stripped = text.replace(',', "");
    let number: f64 = stripped.trim().parse().unwrap_or(0.0);
    format!("{number:.2}")
}
