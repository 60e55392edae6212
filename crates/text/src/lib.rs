//! rowset-text - string and line transformations.
//!
//! This crate covers the text side of the rowset toolkit: parsing delimited
//! lines into fields, joining flat string sequences with quoting, and
//! normalizing/splitting line endings. It has no dependency on
//! `rowset-collection`; callers compose the two (e.g. split a file into
//! lines here, then parse each line as a record batch there).

pub mod csv;
pub mod join;
pub mod lines;

// Re-exports for convenience
pub use csv::{parse_delimited_line, parse_delimited_lines};
pub use join::{join_quoted, join_quoted_with};
pub use lines::{normalize_line_endings, split_lines, split_lines_on};
