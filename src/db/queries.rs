use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::filter::EntryFilter;
use crate::utils::date::midnight;
use crate::utils::time::{from_db, to_db};
use chrono::NaiveDateTime;
use regex::{Regex, RegexBuilder};
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

const SELECT_ENTRIES: &str = r#"SELECT id, start, "end", description FROM entries"#;

pub fn map_row(row: &Row) -> Result<Entry> {
    let start_str: String = row.get("start")?;
    let end_str: Option<String> = row.get("end")?;

    let start = from_db(&start_str).map_err(|e| conversion_failure(1, e))?;
    let end = end_str
        .as_deref()
        .map(from_db)
        .transpose()
        .map_err(|e| conversion_failure(2, e))?;

    Ok(Entry {
        id: row.get("id")?,
        start,
        end,
        description: row.get::<_, Option<String>>("description")?.unwrap_or_default(),
    })
}

fn conversion_failure(col: usize, e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(e))
}

/// Insert a new open entry and return it with its assigned id.
pub fn create_entry(conn: &Connection, start: NaiveDateTime, description: &str) -> AppResult<Entry> {
    conn.execute(
        "INSERT INTO entries (start, description) VALUES (?1, ?2)",
        params![to_db(&start), description],
    )?;

    Ok(Entry {
        id: conn.last_insert_rowid(),
        start,
        end: None,
        description: description.to_string(),
    })
}

/// Close every open entry at `now`. Returns how many rows were closed.
pub fn end_open_entry(conn: &Connection, now: NaiveDateTime) -> AppResult<usize> {
    let changed = conn.execute(
        r#"UPDATE entries SET "end" = ?1 WHERE "end" IS NULL"#,
        [to_db(&now)],
    )?;
    Ok(changed)
}

/// Compile the description pattern, case-insensitive.
pub fn compile_pattern(pattern: &str) -> AppResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| AppError::InvalidRegex(e.to_string()))
}

/// Load entries matching every predicate of `filter`, ordered by id.
///
/// Date bounds are evaluated by SQLite; the description pattern is
/// matched in memory once the rows are loaded.
pub fn get_entries(pool: &mut DbPool, filter: &EntryFilter) -> AppResult<Vec<Entry>> {
    let regex = filter
        .description_pattern
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(compile_pattern)
        .transpose()?;

    let mut sql = format!("{} WHERE 1 = 1", SELECT_ENTRIES);
    let mut args: Vec<String> = Vec::new();

    if let Some(start) = filter.start_date {
        args.push(to_db(&midnight(start)));
        sql.push_str(&format!(" AND start >= ?{}", args.len()));
    }
    if let Some(end) = filter.end_date {
        args.push(to_db(&midnight(end)));
        sql.push_str(&format!(r#" AND "end" <= ?{}"#, args.len()));
    }
    sql.push_str(" ORDER BY id ASC");

    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(args.iter()), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        let entry = r?;
        if regex.as_ref().is_none_or(|re| re.is_match(&entry.description)) {
            out.push(entry);
        }
    }
    Ok(out)
}

/// The running entry, if any. With several open rows the lowest id wins.
pub fn get_current(pool: &mut DbPool) -> AppResult<Option<Entry>> {
    let sql = format!(r#"{} WHERE "end" IS NULL ORDER BY id ASC LIMIT 1"#, SELECT_ENTRIES);
    let entry = pool.conn.query_row(&sql, [], map_row).optional()?;
    Ok(entry)
}

/// Rows of the internal `log` table, oldest first.
pub fn load_log(pool: &mut DbPool) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
