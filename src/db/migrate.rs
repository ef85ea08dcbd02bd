use crate::db::log::ttlog_or_warn;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

const ENTRIES_VERSION: &str = "0001_create_entries";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `entries` table exists.
fn entries_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='entries'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id          INTEGER PRIMARY KEY,
            start       DATETIME NOT NULL,
            "end"       DATETIME,
            description TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_entries_end ON entries("end");
        "#,
    )?;
    Ok(())
}

/// Public entry point: create whatever part of the schema is missing.
///
/// Invoked by db::init_db() on every open.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn).map_err(|e| AppError::Migration(format!("log table: {}", e)))?;

    if !entries_table_exists(conn)? {
        create_entries_table(conn)
            .map_err(|e| AppError::Migration(format!("{}: {}", ENTRIES_VERSION, e)))?;
        ttlog_or_warn(conn, "migration_applied", ENTRIES_VERSION, "Created entries table");
    }

    Ok(())
}
