use serde_json::{Map, Value};

use crate::error::CollectionError;
use crate::key::Key;

/// Move the element at `key` to the front of the collection.
///
/// Array elements shift down by one and are re-keyed sequentially; object
/// entries keep their name-to-value association, only the order changes.
/// Returns a new collection.
///
/// # Errors
///
/// - `KeyNotFound` if `key` is absent (or of the wrong kind for the
///   collection).
/// - `UnsupportedInput` if `collection` is a scalar.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rowset_collection::{move_to_front, Key};
///
/// let content = json!(["one", "two", "three"]);
/// let moved = move_to_front(&content, &Key::Index(2)).unwrap();
/// assert_eq!(moved, json!(["three", "one", "two"]));
/// ```
pub fn move_to_front(collection: &Value, key: &Key) -> Result<Value, CollectionError> {
    match (collection, key) {
        (Value::Array(arr), Key::Index(index)) => {
            if *index >= arr.len() {
                return Err(CollectionError::KeyNotFound(key.to_string()));
            }
            let mut moved = arr.clone();
            let element = moved.remove(*index);
            moved.insert(0, element);
            Ok(Value::Array(moved))
        }
        (Value::Object(obj), Key::Name(name)) => {
            let element = obj
                .get(name)
                .ok_or_else(|| CollectionError::KeyNotFound(key.to_string()))?
                .clone();
            let mut moved = Map::new();
            moved.insert(name.clone(), element);
            for (k, v) in obj {
                if k != name {
                    moved.insert(k.clone(), v.clone());
                }
            }
            Ok(Value::Object(moved))
        }
        (Value::Array(_), Key::Name(_)) | (Value::Object(_), Key::Index(_)) => {
            Err(CollectionError::KeyNotFound(key.to_string()))
        }
        _ => Err(CollectionError::UnsupportedInput(
            "expected a collection, got a scalar".to_string(),
        )),
    }
}
