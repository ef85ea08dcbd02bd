//! Timestamp encoding used by the `entries` table.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, Timelike};

/// Storage format, local wall-clock with seconds precision.
pub const DB_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

pub fn to_db(ts: &NaiveDateTime) -> String {
    ts.format(DB_TIMESTAMP).to_string()
}

/// Parse a stored timestamp. A fractional-second suffix is accepted and dropped.
pub fn from_db(s: &str) -> AppResult<NaiveDateTime> {
    let parsed = NaiveDateTime::parse_from_str(s, DB_TIMESTAMP)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))?;
    Ok(parsed.with_nanosecond(0).unwrap_or(parsed))
}
