use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{create_entry, end_open_entry};
use crate::errors::AppResult;
use crate::models::entry::Entry;
use chrono::NaiveDateTime;

/// High-level business logic for the `in` and `out` commands.
pub struct ClockLogic;

impl ClockLogic {
    /// Close whatever is running, then open a new entry at `now`.
    pub fn clock_in(pool: &mut DbPool, now: NaiveDateTime, description: &str) -> AppResult<Entry> {
        let closed = end_open_entry(&pool.conn, now)?;
        if closed > 0 {
            ttlog_or_warn(&pool.conn, "out", "", &format!("Closed {} entry(ies)", closed));
        }

        let entry = create_entry(&pool.conn, now, description)?;
        ttlog_or_warn(&pool.conn, "in", &entry.id.to_string(), description);

        Ok(entry)
    }

    /// Close the running entry. No-op when nothing is open.
    pub fn clock_out(pool: &mut DbPool, now: NaiveDateTime) -> AppResult<usize> {
        let closed = end_open_entry(&pool.conn, now)?;
        if closed > 0 {
            ttlog_or_warn(&pool.conn, "out", "", &format!("Closed {} entry(ies)", closed));
        }
        Ok(closed)
    }

    /// Block the current thread until Ctrl-C is received.
    pub fn wait_for_interrupt() -> AppResult<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(tokio::signal::ctrl_c())?;
        Ok(())
    }
}
