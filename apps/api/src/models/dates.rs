use chrono::NaiveDate;

const PRESENT: &str = "Present";

/// Formats a résumé date for display.
///
/// `YYYY-MM` and `YYYY-MM-DD` become `Mon YYYY`, a bare year stays as is and
/// `present` in any case becomes `Present`. Anything else is shown verbatim.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case(PRESENT) {
        return PRESENT.to_string();
    }

    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"));
    match parsed {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Builds a `start – end` range. An absent end means the entry is ongoing.
/// Returns `None` only when neither date is present.
pub fn date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    let start = start.map(str::trim).filter(|s| !s.is_empty());
    let end = end.map(str::trim).filter(|s| !s.is_empty());
    match (start, end) {
        (Some(s), Some(e)) => Some(format!("{} – {}", format_date(s), format_date(e))),
        (Some(s), None) => Some(format!("{} – {PRESENT}", format_date(s))),
        (None, Some(e)) => Some(format_date(e)),
        (None, None) => None,
    }
}
