use chrono::{Duration, NaiveDateTime};

/// One recorded time interval.
///
/// `end` is `None` while the clock is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,                    // ⇔ entries.id (INTEGER PRIMARY KEY)
    pub start: NaiveDateTime,       // ⇔ entries.start (TEXT "YYYY-MM-DD HH:MM:SS")
    pub end: Option<NaiveDateTime>, // ⇔ entries.end (NULL while open)
    pub description: String,        // ⇔ entries.description
}

impl Entry {
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// End of the interval, treating an open entry as running until `now`.
    pub fn effective_end(&self, now: NaiveDateTime) -> NaiveDateTime {
        self.end.unwrap_or(now)
    }

    pub fn duration(&self, now: NaiveDateTime) -> Duration {
        self.effective_end(now) - self.start
    }
}
