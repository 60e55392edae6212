use proptest::prelude::*;
use serde_json::{json, Value};

use rowset_collection::{pad_rows, replace_recursive, safe_zip};

fn string_values(items: Vec<String>) -> Vec<Value> {
    items.into_iter().map(Value::String).collect()
}

proptest! {
    #[test]
    fn safe_zip_result_length_equals_keys(
        keys in proptest::collection::vec("[a-z]{1,6}", 0..12),
        values in proptest::collection::vec("[a-z]{0,6}", 0..16),
    ) {
        let mut unique = keys.clone();
        unique.sort();
        unique.dedup();
        let zipped = safe_zip(&string_values(unique.clone()), &string_values(values.clone()));
        prop_assert_eq!(zipped.len(), unique.len());

        // Tail past the values' length is numeric zero
        for (i, key) in unique.iter().enumerate() {
            if i >= values.len() {
                prop_assert_eq!(&zipped[key], &json!(0));
            } else {
                prop_assert_eq!(&zipped[key], &json!(values[i].clone()));
            }
        }
    }

    #[test]
    fn pad_rows_never_shortens(
        lengths in proptest::collection::vec(0usize..6, 1..8),
    ) {
        let batch: Vec<Value> = lengths
            .iter()
            .map(|&len| json!(vec!["x"; len]))
            .collect();
        let padded = pad_rows(&Value::Array(batch)).unwrap();
        let first_len = lengths[0];
        for (i, row) in padded.as_array().unwrap().iter().enumerate() {
            let row_len = row.as_array().unwrap().len();
            prop_assert_eq!(row_len, lengths[i].max(first_len));
        }
    }

    #[test]
    fn replace_recursive_is_idempotent(
        words in proptest::collection::vec("[a-d]{1,5}", 1..8),
    ) {
        let content = Value::Array(string_values(words));
        let once = replace_recursive(&content, "ab", "Z");
        let twice = replace_recursive(&once, "ab", "Z");
        prop_assert_eq!(once, twice);
    }
}
