//! Bookmark repository contract and shared error/ordering helpers.
//!
//! # Responsibility
//! - Define the capability set every bookmark store provides.
//! - Keep ordering rules identical across store implementations.
//!
//! # Invariants
//! - Write paths must call `Bookmark::validate()` / `BookmarkPatch::validate()`
//!   before touching the store.
//! - Identifiers returned by `add` are unique and strictly increasing.
//! - Deleting or updating an unknown id is not an error; it reports `false`.

use crate::db::DbError;
use crate::model::bookmark::{Bookmark, BookmarkId, BookmarkPatch, BookmarkValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Coarse failure classes reported to callers of the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown identifier.
    NotFound,
    /// Missing or malformed field, rejected before reaching the store.
    InvalidInput,
    /// The underlying store failed or holds unusable state.
    StoreUnavailable,
}

/// Repository error for bookmark persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(BookmarkValidationError),
    Db(DbError),
    NotFound(BookmarkId),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    MissingAutoIncrement(&'static str),
}

impl RepoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::InvalidInput,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Db(_)
            | Self::InvalidData(_)
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. }
            | Self::MissingAutoIncrement(_) => ErrorKind::StoreUnavailable,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "bookmark not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted bookmark data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "database is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "table `{table}` is missing required column `{column}`")
            }
            Self::MissingAutoIncrement(table) => {
                write!(f, "table `{table}` must declare `id` with AUTOINCREMENT")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_)
            | Self::InvalidData(_)
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. }
            | Self::MissingAutoIncrement(_) => None,
        }
    }
}

impl From<BookmarkValidationError> for RepoError {
    fn from(value: BookmarkValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for bookmark storage.
pub trait BookmarkRepository {
    /// Stores `bookmark` under a freshly assigned id and returns that id.
    ///
    /// Any id already set on `bookmark` is ignored.
    fn add(&mut self, bookmark: &Bookmark) -> RepoResult<BookmarkId>;
    /// Removes the bookmark; `Ok(false)` when no such id exists.
    fn delete(&mut self, id: BookmarkId) -> RepoResult<bool>;
    /// Returns the bookmark or `RepoError::NotFound`.
    fn retrieve(&self, id: BookmarkId) -> RepoResult<Bookmark>;
    /// All bookmarks by parsed `date_added` ascending, ties in insertion order.
    fn list_by_date(&self) -> RepoResult<Vec<Bookmark>>;
    /// All bookmarks by title ascending (case-sensitive), ties in insertion order.
    fn list_by_title(&self) -> RepoResult<Vec<Bookmark>>;
    /// Removes every bookmark and returns how many were removed.
    fn clear(&mut self) -> RepoResult<usize>;
    /// Replaces the supplied fields; `Ok(false)` when no such id exists.
    fn update(&mut self, id: BookmarkId, patch: &BookmarkPatch) -> RepoResult<bool>;
    /// The id the next successful `add` will assign.
    fn next_id(&self) -> RepoResult<BookmarkId>;
    /// Number of stored bookmarks.
    fn count(&self) -> RepoResult<usize>;
}

/// Stable sort by parsed `date_added`; input must already be in insertion order.
pub(crate) fn sort_by_date(bookmarks: &mut [Bookmark]) {
    bookmarks.sort_by_cached_key(Bookmark::parsed_date);
}

/// Stable sort by title bytes; input must already be in insertion order.
pub(crate) fn sort_by_title(bookmarks: &mut [Bookmark]) {
    bookmarks.sort_by(|left, right| left.title.cmp(&right.title));
}

#[cfg(test)]
mod tests {
    use super::{sort_by_date, sort_by_title, ErrorKind, RepoError};
    use crate::db::DbError;
    use crate::model::bookmark::{Bookmark, BookmarkValidationError};

    fn bookmark(id: i64, title: &str, date_added: &str) -> Bookmark {
        let mut bookmark = Bookmark::new(title, "http://example.com").with_date_added(date_added);
        bookmark.id = id;
        bookmark
    }

    #[test]
    fn date_sort_compares_parsed_dates_not_text() {
        let mut items = vec![
            bookmark(1, "a", "02/10/22"),
            bookmark(2, "b", "2021-12-31"),
            bookmark(3, "c", "02/05/22"),
        ];
        sort_by_date(&mut items);
        let ids: Vec<_> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn date_sort_keeps_insertion_order_for_ties() {
        let mut items = vec![
            bookmark(1, "a", "02/05/22"),
            bookmark(2, "b", "2022-02-05"),
            bookmark(3, "c", "02/05/2022"),
        ];
        sort_by_date(&mut items);
        let ids: Vec<_> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn title_sort_is_case_sensitive() {
        let mut items = vec![
            bookmark(1, "banana", "02/05/22"),
            bookmark(2, "Cherry", "02/05/22"),
            bookmark(3, "apple", "02/05/22"),
        ];
        sort_by_title(&mut items);
        let titles: Vec<_> = items.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, vec!["Cherry", "apple", "banana"]);
    }

    #[test]
    fn error_kinds_map_to_caller_classes() {
        assert_eq!(RepoError::NotFound(7).kind(), ErrorKind::NotFound);
        assert_eq!(
            RepoError::from(BookmarkValidationError::EmptyUrl).kind(),
            ErrorKind::InvalidInput
        );
        let db_err = DbError::Sqlite(rusqlite::Error::InvalidQuery);
        assert_eq!(RepoError::from(db_err).kind(), ErrorKind::StoreUnavailable);
        assert_eq!(
            RepoError::MissingRequiredTable("bookmarks").kind(),
            ErrorKind::StoreUnavailable
        );
        assert_eq!(
            RepoError::MissingAutoIncrement("bookmarks").kind(),
            ErrorKind::StoreUnavailable
        );
    }
}
