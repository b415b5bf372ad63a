//! Date parsing and range formatting for section renderers.
//!
//! Entry dates arrive as raw editor strings. Anything that is not a strict
//! `YYYY-MM-DD` calendar date counts as "not provided" — never a render error.

use chrono::NaiveDate;

/// Parses a strict `YYYY-MM-DD` date. Empty, malformed, or non-calendar
/// values (e.g. `2023-02-30`) return `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `MM/yyyy` — the only date display format the resume page uses.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%m/%Y").to_string()
}

/// Experience date range: `"MM/yyyy - MM/yyyy"`, with `"Present"` substituted
/// when the end date is absent or invalid. Returns `None` when the start date
/// itself is not a valid date (the range is then omitted entirely).
pub fn experience_range(start: &str, end: Option<&str>) -> Option<String> {
    let start = parse_date(start)?;
    let end_text = end
        .and_then(parse_date)
        .map(format_month_year)
        .unwrap_or_else(|| "Present".to_string());
    Some(format!("{} - {}", format_month_year(start), end_text))
}

/// Education date range: `"MM/yyyy"` alone when the end date is absent or
/// invalid — no `"Present"` placeholder. The asymmetry with experience ranges
/// is the documented product behavior.
pub fn education_range(start: &str, end: Option<&str>) -> Option<String> {
    let start = parse_date(start)?;
    let mut range = format_month_year(start);
    if let Some(end) = end.and_then(parse_date) {
        range.push_str(" - ");
        range.push_str(&format_month_year(end));
    }
    Some(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_strict_format_only() {
        assert!(parse_date("2023-01-15").is_some());
        assert!(parse_date("").is_none());
        assert!(parse_date("2023-1-15").is_none());
        assert!(parse_date("01/15/2023").is_none());
        assert!(parse_date("2023-02-30").is_none());
        assert!(parse_date("not a date").is_none());
    }

    #[test]
    fn test_experience_range_present_substitution() {
        assert_eq!(
            experience_range("2023-01-15", None).as_deref(),
            Some("01/2023 - Present")
        );
        assert_eq!(
            experience_range("2023-01-15", Some("garbage")).as_deref(),
            Some("01/2023 - Present")
        );
        assert_eq!(
            experience_range("2021-06-01", Some("2023-09-30")).as_deref(),
            Some("06/2021 - 09/2023")
        );
        assert_eq!(experience_range("invalid", None), None);
    }

    #[test]
    fn test_education_range_omits_present() {
        assert_eq!(
            education_range("2023-01-15", None).as_deref(),
            Some("01/2023")
        );
        assert_eq!(
            education_range("2023-01-15", Some("bad")).as_deref(),
            Some("01/2023")
        );
        assert_eq!(
            education_range("2019-09-01", Some("2023-06-15")).as_deref(),
            Some("09/2019 - 06/2023")
        );
        assert_eq!(education_range("", None), None);
    }
}
