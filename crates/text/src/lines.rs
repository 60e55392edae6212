/// Convert all line endings in `text` to LF.
///
/// CRLF pairs are converted before lone CRs so a `\r\n` never turns into two
/// line feeds.
///
/// # Examples
///
/// ```
/// use rowset_text::lines::normalize_line_endings;
///
/// assert_eq!(
///     normalize_line_endings("line one\r\nline two\rline three"),
///     "line one\nline two\nline three"
/// );
/// ```
pub fn normalize_line_endings(text: &str) -> String {
    // Order matters: \r\n must be replaced before \r
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split `text` into lines on LF.
///
/// Equivalent to [`split_lines_on`] with `"\n"`.
///
/// # Examples
///
/// ```
/// use rowset_text::lines::split_lines;
///
/// assert_eq!(split_lines("one\ntwo\nthree"), vec!["one", "two", "three"]);
/// assert_eq!(split_lines("one\ntwo\n"), vec!["one", "two"]);
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    split_lines_on(text, "\n")
}

/// Split `text` into lines on `line_ending`.
///
/// If the final fragment is empty (the text ended with the separator) it is
/// dropped; a non-empty final fragment is kept. Only a single trailing empty
/// fragment is dropped, never more.
///
/// # Examples
///
/// ```
/// use rowset_text::lines::split_lines_on;
///
/// assert_eq!(split_lines_on("a\r\nb\r\n", "\r\n"), vec!["a", "b"]);
/// assert_eq!(split_lines_on("a\n\n", "\n"), vec!["a", ""]);
/// ```
pub fn split_lines_on(text: &str, line_ending: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split(line_ending).map(str::to_string).collect();
    if let Some(last) = lines.last() {
        if last.is_empty() {
            lines.pop();
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mixed_endings() {
        assert_eq!(
            normalize_line_endings("line one\r\nline two\rline three"),
            "line one\nline two\nline three"
        );
    }

    #[test]
    fn test_normalize_already_lf() {
        assert_eq!(normalize_line_endings("a\nb"), "a\nb");
    }

    #[test]
    fn test_normalize_crlf_not_doubled() {
        // \r\n collapses to one \n, not two
        assert_eq!(normalize_line_endings("a\r\nb"), "a\nb");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize_line_endings("a\r\nb\rc");
        assert_eq!(normalize_line_endings(&once), once);
    }

    #[test]
    fn test_split_basic() {
        assert_eq!(split_lines("one\ntwo\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_split_drops_trailing_empty_fragment() {
        assert_eq!(split_lines("one\ntwo\n"), vec!["one", "two"]);
    }

    #[test]
    fn test_split_keeps_interior_empty_lines() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_drops_only_one_trailing_fragment() {
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_custom_ending() {
        assert_eq!(split_lines_on("a\r\nb\r\n", "\r\n"), vec!["a", "b"]);
    }
}
