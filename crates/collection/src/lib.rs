//! rowset-collection - record-batch and collection transformations.
//!
//! Operations over ordered, key-addressable containers represented as
//! `serde_json::Value` (with `preserve_order`, so object keys keep their
//! insertion order): searching by element type, recursive substitution,
//! reordering, multi-key sorting, safe zip-combine, case-insensitive
//! search, content hashing, sparse-row trimming, ragged-array padding,
//! header-row projection, per-field formatting, XML escaping, and delimited
//! export.
//!
//! Every operation is a stateless value transformation: inputs are borrowed,
//! outputs are new values, and nothing persists across calls. Record-batch
//! operations validate shape shallowly (first row only), by contract.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use rowset_collection::{pad_rows, project_header_row};
//!
//! let rows = json!([["name", "amount"], ["coffee", "3.50"], ["tea"]]);
//! let padded = pad_rows(&rows).unwrap();
//! let projected = project_header_row(&padded).unwrap();
//! assert_eq!(projected[2], json!({"name": "tea", "amount": ""}));
//! ```

pub mod combine;
pub mod csv;
pub mod dates;
pub mod digest;
pub mod error;
pub mod format;
pub mod key;
pub mod pad;
pub mod project;
pub mod reorder;
pub mod scalar;
pub mod search;
pub mod sort;
pub mod substitute;
pub mod trim;
pub mod xml;

mod shape;

// Re-exports for convenience
pub use combine::safe_zip;
pub use csv::{write_delimited, write_delimited_default};
pub use digest::{hash_field, DigestAlgorithm};
pub use error::CollectionError;
pub use format::{format_field, FieldFormat};
pub use key::Key;
pub use pad::pad_rows;
pub use project::project_header_row;
pub use reorder::move_to_front;
pub use search::{contains_case_insensitive, find_nth_by_type, ScalarKind};
pub use sort::sort_by_field;
pub use substitute::{replace_recursive, replace_recursive_pairs};
pub use trim::trim_empty_rows;
pub use xml::escape_for_xml;
