//! Formatting utilities used for CLI outputs.

use chrono::{Duration, NaiveDateTime};

/// `H:MM`, hours are not wrapped at 24.
///
/// Both parts use floor division, so a negative span of 30 minutes is `-1:30`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.num_seconds();
    let hours = secs.div_euclid(3600);
    let minutes = secs.div_euclid(60).rem_euclid(60);
    format!("{}:{:02}", hours, minutes)
}

/// `YYYY-MM-DD Www HH:MM`
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %a %H:%M").to_string()
}

pub fn format_range(start: &NaiveDateTime, end: Option<&NaiveDateTime>) -> String {
    match end {
        Some(end) => format!("[{}]--[{}]", format_datetime(start), format_datetime(end)),
        None => format!("[{}]", format_datetime(start)),
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}
