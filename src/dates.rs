//! Date Helpers
//!
//! Calendar-date formatting for requests and report cards.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Today's date in the browser's timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM-DD`, as sent in the create request
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse the value of an `<input type="date">`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Future dates are not selectable
pub fn clamp_to_today(date: NaiveDate, today: NaiveDate) -> NaiveDate {
    date.min(today)
}

/// Calendar date of a stored report date.
///
/// Accepts RFC 3339 timestamps (date taken in UTC), naive timestamps and plain dates.
pub fn parse_report_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc().date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// "Mon, Jan 5, 2025". Unparseable input is shown as-is.
pub fn format_report_date(value: &str) -> String {
    match parse_report_date(value) {
        Some(date) => date.format("%a, %b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}
