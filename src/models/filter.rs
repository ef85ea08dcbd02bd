use chrono::NaiveDate;

/// Predicates for `get_entries`, combined with AND. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Case-insensitive regular expression searched in the description.
    pub description_pattern: Option<String>,
    /// Keep entries starting at or after this day's midnight.
    pub start_date: Option<NaiveDate>,
    /// Keep entries ending at or before this day's midnight.
    pub end_date: Option<NaiveDate>,
}

impl EntryFilter {
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.description_pattern = Some(pattern.into());
        self
    }

    pub fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }
}
