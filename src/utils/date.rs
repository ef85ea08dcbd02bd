use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Formats accepted by the `--start` / `--end` flags.
pub const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y.%m.%d"];

/// Current local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// 00:00:00 at the start of `day`.
pub fn midnight(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
