/// Join a flat sequence of strings into one line, wrapping each item in
/// single quotes and separating items with a space.
///
/// Equivalent to [`join_quoted_with`] using `'` and `' '`.
///
/// # Examples
///
/// ```
/// use rowset_text::join::join_quoted;
///
/// assert_eq!(join_quoted(&["one", "two"]), "'one' 'two'");
/// ```
pub fn join_quoted<S: AsRef<str>>(items: &[S]) -> String {
    join_quoted_with(items, "'", " ")
}

/// Join a flat sequence of strings into one line, wrapping each item in
/// `quote` and separating items with `quote + delimiter + quote`.
///
/// The leading and trailing quote are added once. An empty input yields just
/// the two outer quotes.
///
/// # Examples
///
/// ```
/// use rowset_text::join::join_quoted_with;
///
/// assert_eq!(join_quoted_with(&["a", "b", "c"], "\"", ", "), "\"a\", \"b\", \"c\"");
/// assert_eq!(join_quoted_with(&[] as &[&str], "'", " "), "''");
/// ```
pub fn join_quoted_with<S: AsRef<str>>(items: &[S], quote: &str, delimiter: &str) -> String {
    let mut separator = String::with_capacity(quote.len() * 2 + delimiter.len());
    separator.push_str(quote);
    separator.push_str(delimiter);
    separator.push_str(quote);

    let mut out = String::new();
    out.push_str(quote);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(&separator);
        }
        out.push_str(item.as_ref());
    }
    out.push_str(quote);
    out
}
