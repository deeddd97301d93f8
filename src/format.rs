//! Display formatting for episode dates and durations

use crate::feed::UNKNOWN_DURATION;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const UNKNOWN_DATE: &str = "Unknown Date";
const UNKNOWN: &str = "Unknown";

/// Render a feed date as "January 15, 2024", or "Unknown Date"
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Calendar date of a feed timestamp, in the timestamp's own offset
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Render a duration for display.
///
/// Whole seconds become `H:MM:SS` (or `M:SS` under an hour). Colon-delimited
/// values pass through untouched; empty or `00:00` is "Unknown".
pub fn format_duration(raw: &str) -> String {
    if raw.is_empty() || raw == UNKNOWN_DURATION {
        return UNKNOWN.to_string();
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(total) = raw.parse::<u64>() {
            let hours = total / 3600;
            let minutes = (total % 3600) / 60;
            let seconds = total % 60;

            return if hours > 0 {
                format!("{}:{:02}:{:02}", hours, minutes, seconds)
            } else {
                format!("{}:{:02}", minutes, seconds)
            };
        }
    }

    raw.to_string()
}
