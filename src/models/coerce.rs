//! Lenient parsing of user-supplied numbers and dates.
//!
//! Request fields are accepted as loosely as a browser form would send them:
//! numbers may arrive as strings with trailing junk and dates in several
//! common spellings. Nothing here returns an error; unusable input yields
//! `None` and the caller picks the fallback.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Output format for dates in responses, e.g. `Sun Jan 15 2023`.
pub const DATE_DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Parses the leading integer of `input`: optional whitespace, an optional
/// sign, then digits. `"30min"` is 30, `"12.9"` is 12, `"abc"` is `None`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }

    format!("{}{}", sign, &rest[..digits_len]).parse().ok()
}

/// Truncates a float toward zero. Non-finite values have no integer form.
pub fn truncate_float(value: f64) -> Option<i64> {
    if value.is_finite() {
        Some(value.trunc() as i64)
    } else {
        None
    }
}

/// Parses a calendar date from `YYYY-MM-DD`, an RFC 3339 timestamp, a
/// `YYYY-MM-DDTHH:MM:SS` local timestamp, or the display format.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.with_timezone(&Utc).date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    NaiveDate::parse_from_str(input, DATE_DISPLAY_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}
