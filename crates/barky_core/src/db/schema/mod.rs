//! Bookmarks table definition and bootstrap helpers.
//!
//! # Responsibility
//! - Create the single `bookmarks` table when it is missing.
//! - Inspect table/column presence for repository readiness checks.
//!
//! # Invariants
//! - Bootstrap is idempotent (`CREATE TABLE IF NOT EXISTS`).
//! - `id` uses `AUTOINCREMENT`, so identifiers are never reused even after
//!   rows are deleted.

use crate::db::DbResult;
use rusqlite::{Connection, OptionalExtension};

/// Name of the only table owned by Barky.
pub const BOOKMARKS_TABLE: &str = "bookmarks";

/// Columns every bookmark row must carry, in select order.
pub const BOOKMARK_COLUMNS: &[&str] = &["id", "title", "url", "notes", "date_added"];

const BOOKMARKS_SQL: &str = include_str!("bookmarks.sql");

/// Creates the bookmarks table when it does not exist yet.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(BOOKMARKS_SQL)?;
    Ok(())
}

/// Drops the bookmarks table if present.
///
/// Dropping also forgets the `AUTOINCREMENT` high-water mark.
pub fn drop_bookmarks_table(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(&format!("DROP TABLE IF EXISTS {BOOKMARKS_TABLE};"))?;
    Ok(())
}

/// Returns whether `table` exists in the connected database.
pub fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

/// Returns whether `table` was declared with an `AUTOINCREMENT` key.
///
/// Tables without it let SQLite hand out the id of a deleted newest row again.
pub fn table_uses_autoincrement(conn: &Connection, table: &str) -> DbResult<bool> {
    let sql: Option<String> = conn
        .query_row(
            "SELECT sql
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1;",
            [table],
            |row| row.get(0),
        )
        .optional()?
        .flatten();
    Ok(sql.is_some_and(|sql| sql.to_ascii_uppercase().contains("AUTOINCREMENT")))
}

/// Returns whether `table` has a column called `column`.
pub fn table_has_column(conn: &Connection, table: &str, column: &str) -> DbResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
