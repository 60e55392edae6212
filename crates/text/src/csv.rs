/// Parse one delimited line into its fields.
///
/// Standard CSV quoting rules apply: a field may be enclosed in double
/// quotes, in which case it can contain the delimiter and newlines, and a
/// literal quote is written as two quote characters. A quote is only special
/// at the start of a field; elsewhere it is plain data.
///
/// A trailing delimiter produces a trailing empty field.
///
/// # Examples
///
/// ```
/// use rowset_text::csv::parse_delimited_line;
///
/// assert_eq!(parse_delimited_line("a,b,c", ','), vec!["a", "b", "c"]);
/// assert_eq!(parse_delimited_line("\"a,b\",c", ','), vec!["a,b", "c"]);
/// assert_eq!(parse_delimited_line("\"say \"\"hi\"\"\"", ','), vec!["say \"hi\""]);
/// assert_eq!(parse_delimited_line("a,", ','), vec!["a", ""]);
/// ```
pub fn parse_delimited_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut at_field_start = true;
    let mut in_quotes = false;

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Doubled quote inside a quoted field is a literal quote
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
        } else if at_field_start && ch == '"' {
            in_quotes = true;
            at_field_start = false;
        } else if ch == delimiter {
            fields.push(std::mem::take(&mut field));
            at_field_start = true;
        } else {
            field.push(ch);
            at_field_start = false;
        }
    }
    fields.push(field);
    fields
}

/// Parse each line of a slice as one delimited record.
///
/// Returns one flat field vector per input line.
///
/// # Examples
///
/// ```
/// use rowset_text::csv::parse_delimited_lines;
///
/// let lines = ["content,to,parse", "content,to,parse"];
/// let parsed = parse_delimited_lines(&lines, ',');
/// assert_eq!(parsed, vec![
///     vec!["content", "to", "parse"],
///     vec!["content", "to", "parse"],
/// ]);
/// ```
pub fn parse_delimited_lines<S: AsRef<str>>(lines: &[S], delimiter: char) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| parse_delimited_line(line.as_ref(), delimiter))
        .collect()
}
