use std::str::FromStr;

use md5::Md5;
use serde_json::{Map, Value};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::error::CollectionError;
use crate::key::Key;
use crate::scalar::scalar_text;

/// A named digest algorithm.
///
/// The supported subset is what the RustCrypto digest crates provide plus
/// IEEE CRC-32 (the common zlib-style checksum). Algorithm names are parsed
/// with [`FromStr`]; an unknown name is an `InvalidArgument` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    #[default]
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Crc32,
}

impl FromStr for DigestAlgorithm {
    type Err = CollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha1" => Ok(DigestAlgorithm::Sha1),
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "sha384" => Ok(DigestAlgorithm::Sha384),
            "sha512" => Ok(DigestAlgorithm::Sha512),
            // Name kept from the zlib-style checksum; the BZIP2-polynomial
            // variant is not provided.
            "crc32" | "crc32b" => Ok(DigestAlgorithm::Crc32),
            other => Err(CollectionError::InvalidArgument(format!(
                "unknown digest algorithm {other:?}"
            ))),
        }
    }
}

impl DigestAlgorithm {
    /// Digest `input` and return the lowercase hex form.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowset_collection::DigestAlgorithm;
    ///
    /// assert_eq!(
    ///     DigestAlgorithm::Md5.digest_hex(b"two"),
    ///     "b8a9f715dbb64fd5c56e7783c6820a61"
    /// );
    /// ```
    pub fn digest_hex(&self, input: &[u8]) -> String {
        match self {
            DigestAlgorithm::Md5 => hex::encode(Md5::digest(input)),
            DigestAlgorithm::Sha1 => hex::encode(Sha1::digest(input)),
            DigestAlgorithm::Sha256 => hex::encode(Sha256::digest(input)),
            DigestAlgorithm::Sha384 => hex::encode(Sha384::digest(input)),
            DigestAlgorithm::Sha512 => hex::encode(Sha512::digest(input)),
            DigestAlgorithm::Crc32 => format!("{:08x}", crc32fast::hash(input)),
        }
    }
}

/// Replace the value of every scalar element keyed `field_key` with its
/// digest, at all nesting levels of a record batch.
///
/// Object entries match by name equality, array elements by the decimal
/// form of their index. Returns a new collection of the same shape; nothing
/// is validated about the batch's structure.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rowset_collection::{hash_field, DigestAlgorithm};
///
/// let rows = json!(["two"]);
/// assert_eq!(
///     hash_field(&rows, "0", DigestAlgorithm::Md5),
///     json!(["b8a9f715dbb64fd5c56e7783c6820a61"])
/// );
/// ```
pub fn hash_field(rows: &Value, field_key: &str, algorithm: DigestAlgorithm) -> Value {
    match rows {
        Value::Array(arr) => Value::Array(
            arr.iter()
                .enumerate()
                .map(|(i, v)| hash_leaf(&Key::Index(i), v, field_key, algorithm))
                .collect(),
        ),
        Value::Object(obj) => {
            let mut new_obj = Map::new();
            for (k, v) in obj {
                new_obj.insert(
                    k.clone(),
                    hash_leaf(&Key::Name(k.clone()), v, field_key, algorithm),
                );
            }
            Value::Object(new_obj)
        }
        scalar => scalar.clone(),
    }
}

fn hash_leaf(key: &Key, value: &Value, field_key: &str, algorithm: DigestAlgorithm) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) => hash_field(value, field_key, algorithm),
        scalar if key.matches(field_key) => {
            let text = scalar_text(scalar).unwrap_or_default();
            Value::String(algorithm.digest_hex(text.as_bytes()))
        }
        scalar => scalar.clone(),
    }
}
