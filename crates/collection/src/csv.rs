use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use crate::error::CollectionError;
use crate::scalar::scalar_text;
use crate::shape::{row_values, rows_of};

/// Serialize a record batch to a delimited text file, one row per line.
///
/// Fields containing the delimiter, a quote, or a line break are enclosed in
/// double quotes with embedded quotes doubled. The existence check precedes
/// any write: when the destination exists and `overwrite` is false, nothing
/// is touched. The file handle is flushed explicitly and closed on all exit
/// paths.
///
/// # Errors
///
/// - `AlreadyExists` if the destination exists and `overwrite` is false.
/// - `UnsupportedInput` if `rows` is a scalar or its first row is a scalar.
/// - `Io` for destination create/write failures.
///
/// # Examples
///
/// ```no_run
/// use serde_json::json;
/// use rowset_collection::write_delimited;
///
/// let rows = json!([["a", "b,c"], ["d", "e"]]);
/// write_delimited(&rows, "out.csv", ',', false).unwrap();
/// ```
pub fn write_delimited<P: AsRef<Path>>(
    rows: &Value,
    path: P,
    delimiter: char,
    overwrite: bool,
) -> Result<(), CollectionError> {
    let path = path.as_ref();
    let batch = rows_of(rows)?;
    if path.exists() && !overwrite {
        return Err(CollectionError::AlreadyExists(
            path.display().to_string(),
        ));
    }
    let mut writer = BufWriter::new(File::create(path)?);
    for (_, row) in &batch {
        let line = row_values(row)
            .iter()
            .map(|field| quote_field(&scalar_text(field).unwrap_or_default(), delimiter))
            .collect::<Vec<String>>()
            .join(&delimiter.to_string());
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// [`write_delimited`] with the comma delimiter and no overwriting.
pub fn write_delimited_default<P: AsRef<Path>>(
    rows: &Value,
    path: P,
) -> Result<(), CollectionError> {
    write_delimited(rows, path, ',', false)
}

fn quote_field(field: &str, delimiter: char) -> String {
    let needs_quoting =
        field.contains(delimiter) || field.contains('"') || field.contains('\n') || field.contains('\r');
    if needs_quoting {
        let mut quoted = String::with_capacity(field.len() + 2);
        quoted.push('"');
        for ch in field.chars() {
            if ch == '"' {
                quoted.push('"');
            }
            quoted.push(ch);
        }
        quoted.push('"');
        quoted
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_write_plain_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = json!([["a", "b"], ["c", "d"]]);
        write_delimited(&rows, &path, ',', false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\nc,d\n");
    }

    #[test]
    fn test_write_quotes_special_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = json!([["a,b", "say \"hi\"", "line\nbreak"]]);
        write_delimited(&rows, &path, ',', false).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\"a,b\",\"say \"\"hi\"\"\",\"line\nbreak\"\n"
        );
    }

    #[test]
    fn test_write_object_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = json!([{"x": 1, "y": "two"}]);
        write_delimited(&rows, &path, ',', false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1,two\n");
    }

    #[test]
    fn test_existing_destination_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "already here").unwrap();
        let rows = json!([["a"]]);
        let err = write_delimited(&rows, &path, ',', false).unwrap_err();
        assert!(matches!(err, CollectionError::AlreadyExists(_)));
        // Nothing was touched
        assert_eq!(fs::read_to_string(&path).unwrap(), "already here");
    }

    #[test]
    fn test_overwrite_permitted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "old").unwrap();
        let rows = json!([["new"]]);
        write_delimited(&rows, &path, ',', true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_alternate_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        let rows = json!([["a", "b"]]);
        write_delimited(&rows, &path, '\t', false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\tb\n");
    }

    #[test]
    fn test_scalar_first_row_rejected_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let err = write_delimited(&json!(["scalar"]), &path, ',', false).unwrap_err();
        assert!(matches!(err, CollectionError::UnsupportedInput(_)));
        assert!(!path.exists());
    }
}
