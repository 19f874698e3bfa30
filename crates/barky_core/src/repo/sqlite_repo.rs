//! SQLite-backed bookmark repository.
//!
//! # Responsibility
//! - Persist bookmarks in the single `bookmarks` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - The repository owns exactly one connection for its whole lifetime.
//! - Ids come from `AUTOINCREMENT`; `clear()` does not reset the sequence.
//! - Read paths reject persisted rows that fail `Bookmark::validate()`.

use crate::db::schema::{
    table_exists, table_has_column, table_uses_autoincrement, BOOKMARKS_TABLE, BOOKMARK_COLUMNS,
};
use crate::db::{open_db, open_db_in_memory};
use crate::model::bookmark::{Bookmark, BookmarkId, BookmarkPatch};
use crate::repo::bookmark_repo::{sort_by_date, BookmarkRepository, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;

const BOOKMARK_SELECT_SQL: &str = "SELECT
    id,
    title,
    url,
    notes,
    date_added
FROM bookmarks";

/// SQLite-backed bookmark repository.
pub struct SqliteBookmarkRepository {
    conn: Connection,
}

impl SqliteBookmarkRepository {
    /// Wraps a connection whose schema is already in place.
    ///
    /// # Errors
    /// - `MissingRequiredTable` when `bookmarks` does not exist.
    /// - `MissingRequiredColumn` when a bookmark column is absent.
    /// - `MissingAutoIncrement` when `id` could be reused after deletion.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        ensure_connection_ready(&conn)?;
        Ok(Self { conn })
    }

    /// Opens (or creates) a database file and wraps it.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Self::try_new(open_db(path)?)
    }

    /// Opens a private in-memory database and wraps it.
    pub fn open_in_memory() -> RepoResult<Self> {
        Self::try_new(open_db_in_memory()?)
    }

    /// Borrowed access to the owned connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn select_all(&self, order_by: &str) -> RepoResult<Vec<Bookmark>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOKMARK_SELECT_SQL} ORDER BY {order_by};"))?;
        let mut rows = stmt.query([])?;
        let mut bookmarks = Vec::new();
        while let Some(row) = rows.next()? {
            bookmarks.push(parse_bookmark_row(row)?);
        }
        Ok(bookmarks)
    }

    fn exists(&self, id: BookmarkId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM bookmarks WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

impl BookmarkRepository for SqliteBookmarkRepository {
    fn add(&mut self, bookmark: &Bookmark) -> RepoResult<BookmarkId> {
        bookmark.validate()?;

        self.conn.execute(
            "INSERT INTO bookmarks (
                title,
                url,
                notes,
                date_added
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                bookmark.title.as_str(),
                bookmark.url.as_str(),
                bookmark.notes.as_deref(),
                bookmark.date_added.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn delete(&mut self, id: BookmarkId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM bookmarks WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn retrieve(&self, id: BookmarkId) -> RepoResult<Bookmark> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOKMARK_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return parse_bookmark_row(row);
        }

        Err(RepoError::NotFound(id))
    }

    fn list_by_date(&self) -> RepoResult<Vec<Bookmark>> {
        // Stored text mixes date layouts, so ordering happens after parsing.
        let mut bookmarks = self.select_all("id ASC")?;
        sort_by_date(&mut bookmarks);
        Ok(bookmarks)
    }

    fn list_by_title(&self) -> RepoResult<Vec<Bookmark>> {
        self.select_all("title COLLATE BINARY ASC, id ASC")
    }

    fn clear(&mut self) -> RepoResult<usize> {
        let removed = self.conn.execute("DELETE FROM bookmarks;", [])?;
        Ok(removed)
    }

    fn update(&mut self, id: BookmarkId, patch: &BookmarkPatch) -> RepoResult<bool> {
        patch.validate()?;

        if patch.is_empty() {
            return self.exists(id);
        }

        let mut assignments: Vec<&str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();
        let fields = [
            ("title = ?", patch.title.as_ref()),
            ("url = ?", patch.url.as_ref()),
            ("notes = ?", patch.notes.as_ref()),
            ("date_added = ?", patch.date_added.as_ref()),
        ];
        for (assignment, value) in fields {
            if let Some(value) = value {
                assignments.push(assignment);
                bind_values.push(Value::Text(value.clone()));
            }
        }
        bind_values.push(Value::Integer(id));

        let sql = format!(
            "UPDATE bookmarks SET {} WHERE id = ?;",
            assignments.join(", ")
        );
        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        Ok(changed > 0)
    }

    fn next_id(&self) -> RepoResult<BookmarkId> {
        let last: Option<BookmarkId> = self
            .conn
            .query_row(
                "SELECT seq FROM sqlite_sequence WHERE name = ?1;",
                [BOOKMARKS_TABLE],
                |row| row.get(0),
            )
            .optional()?;
        Ok(last.unwrap_or(0) + 1)
    }

    fn count(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM bookmarks;", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative bookmark count `{count}`")))
    }
}

fn parse_bookmark_row(row: &Row<'_>) -> RepoResult<Bookmark> {
    let bookmark = Bookmark {
        id: row.get("id")?,
        title: row.get("title")?,
        url: row.get("url")?,
        notes: row.get("notes")?,
        date_added: row.get("date_added")?,
    };
    bookmark.validate().map_err(|err| {
        RepoError::InvalidData(format!("bookmarks row {}: {err}", bookmark.id))
    })?;
    Ok(bookmark)
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, BOOKMARKS_TABLE)? {
        return Err(RepoError::MissingRequiredTable(BOOKMARKS_TABLE));
    }

    for &column in BOOKMARK_COLUMNS {
        if !table_has_column(conn, BOOKMARKS_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: BOOKMARKS_TABLE,
                column,
            });
        }
    }

    if !table_uses_autoincrement(conn, BOOKMARKS_TABLE)? {
        return Err(RepoError::MissingAutoIncrement(BOOKMARKS_TABLE));
    }

    Ok(())
}
