use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Sentinels the backend writes when a group has no usable date
const NO_DATE_SENTINELS: [&str; 3] = ["n/a", "9999-12-31", "nat"];

/// Parse a record date as the backend emits it.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.f]`, `YYYY-MM-DD HH:MM:SS` and
/// RFC 3339. Anything else (including `"N/A"`) yields `None`.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
}

/// Parse an "earliest date" summary field, mapping the backend's sentinels to `None`
pub fn parse_summary_date(raw: &str) -> Option<NaiveDate> {
    let normalized = raw.trim().to_ascii_lowercase();
    if NO_DATE_SENTINELS.contains(&normalized.as_str()) {
        return None;
    }
    parse_record_date(raw)
}

/// Whole days elapsed from `from` to `to`, clamped at zero
pub fn elapsed_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days().max(0)
}

/// Today's date in the local timezone, used as the delay reference
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date the way the backend expects form fields (`YYYY-MM-DD`)
pub fn format_form_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
