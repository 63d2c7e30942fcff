//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, Utc};

/// Format a timestamp as "Jan 20, 2026". Missing dates render as "N/A".
pub fn format_date_short(date: Option<&DateTime<Utc>>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Format a timestamp as "January 20, 2026". Missing dates render as "Not available".
pub fn format_date_long(date: Option<&DateTime<Utc>>) -> String {
    date.map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "Not available".to_string())
}

/// Show `value`, or `placeholder` when it is blank.
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}
