//! Best-effort date parsing for field formatting.
//!
//! Parsing is a pure function over the text alone; no process-wide timezone
//! or locale state is consulted.

use chrono::NaiveDate;

/// Parse `text` as a calendar date.
///
/// Accepted shapes, decided by the separator and the width of the leading
/// and trailing parts (chrono's flexible-width numeric fields would make a
/// flat format list ambiguous):
///
/// - `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYYMMDD`
/// - `M/D/YYYY` and `M/D/YY` (US order; two-digit years pivot at 69, so
///   `12` is 2012 and `70` is 1970)
/// - `M-D-YYYY`, `D-Mon-YYYY`
/// - month-name forms: `Mon D YYYY`, `Mon D, YYYY`, `D Mon YYYY`, full
///   month names included
///
/// Returns `None` when nothing matches.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rowset_collection::dates::parse_date_best_effort;
///
/// assert_eq!(
///     parse_date_best_effort("1/1/12"),
///     NaiveDate::from_ymd_opt(2012, 1, 1)
/// );
/// assert_eq!(
///     parse_date_best_effort("2024-03-09"),
///     NaiveDate::from_ymd_opt(2024, 3, 9)
/// );
/// assert_eq!(parse_date_best_effort("not a date"), None);
/// ```
pub fn parse_date_best_effort(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(parts) = split3(trimmed, '/') {
        return parse_slashed(trimmed, parts);
    }
    if let Some(parts) = split3(trimmed, '-') {
        return parse_dashed(trimmed, parts);
    }
    if trimmed.len() == 8 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::parse_from_str(trimmed, "%Y%m%d").ok();
    }
    parse_month_name(trimmed)
}

fn split3(text: &str, separator: char) -> Option<[&str; 3]> {
    let mut parts = text.split(separator);
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some([first, second, third])
}

fn parse_slashed(text: &str, [first, _, last]: [&str; 3]) -> Option<NaiveDate> {
    if first.len() == 4 {
        return NaiveDate::parse_from_str(text, "%Y/%m/%d").ok();
    }
    if last.len() == 4 {
        return NaiveDate::parse_from_str(text, "%m/%d/%Y").ok();
    }
    NaiveDate::parse_from_str(text, "%m/%d/%y").ok()
}

fn parse_dashed(text: &str, [first, second, _]: [&str; 3]) -> Option<NaiveDate> {
    if first.len() == 4 {
        return NaiveDate::parse_from_str(text, "%Y-%m-%d").ok();
    }
    if second.bytes().all(|b| b.is_ascii_alphabetic()) {
        return NaiveDate::parse_from_str(text, "%d-%b-%Y").ok();
    }
    NaiveDate::parse_from_str(text, "%m-%d-%Y").ok()
}

fn parse_month_name(text: &str) -> Option<NaiveDate> {
    const NAME_FORMATS: &[&str] = &[
        "%b %d, %Y",
        "%B %d, %Y",
        "%b %d %Y",
        "%B %d %Y",
        "%d %b %Y",
        "%d %B %Y",
    ];
    NAME_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse_date_best_effort("2012-01-01"), ymd(2012, 1, 1));
    }

    #[test]
    fn test_us_slash_two_digit_year() {
        assert_eq!(parse_date_best_effort("1/1/12"), ymd(2012, 1, 1));
        assert_eq!(parse_date_best_effort("2/1/12"), ymd(2012, 2, 1));
        assert_eq!(parse_date_best_effort("1/1/70"), ymd(1970, 1, 1));
    }

    #[test]
    fn test_us_slash_four_digit_year() {
        assert_eq!(parse_date_best_effort("12/31/1999"), ymd(1999, 12, 31));
    }

    #[test]
    fn test_iso_slash() {
        assert_eq!(parse_date_best_effort("2024/03/09"), ymd(2024, 3, 9));
    }

    #[test]
    fn test_compact_digits() {
        assert_eq!(parse_date_best_effort("20240309"), ymd(2024, 3, 9));
    }

    #[test]
    fn test_month_name_forms() {
        assert_eq!(parse_date_best_effort("31-Dec-1999"), ymd(1999, 12, 31));
        assert_eq!(parse_date_best_effort("Jan 2, 2020"), ymd(2020, 1, 2));
        assert_eq!(parse_date_best_effort("2 January 2020"), ymd(2020, 1, 2));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(parse_date_best_effort("  2012-01-01 "), ymd(2012, 1, 1));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_date_best_effort("not a date"), None);
        assert_eq!(parse_date_best_effort(""), None);
        assert_eq!(parse_date_best_effort("13/45/12"), None);
    }
}
