//! Bookmark use-case service.
//!
//! # Responsibility
//! - Provide add/list/get/edit/delete/clear entry points for outer layers.
//! - Stamp `date_added` at add time unless the caller preserves a timestamp.
//! - Delegate persistence to the repository chosen at construction.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Service layer remains storage-agnostic.
//! - Log lines carry ids and outcomes only, never titles, urls or notes.

use crate::model::bookmark::{now_date_added, Bookmark, BookmarkId, BookmarkPatch};
use crate::repo::bookmark_repo::{BookmarkRepository, RepoResult};
use log::{info, warn};

/// Sort order for bookmark listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookmarkOrder {
    /// Parsed `date_added` ascending.
    #[default]
    DateAdded,
    /// Title ascending, case-sensitive.
    Title,
}

impl BookmarkOrder {
    /// Parses an order name as used by outer layers (`date_added`, `date`, `title`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "date_added" | "date" => Some(Self::DateAdded),
            "title" => Some(Self::Title),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DateAdded => "date_added",
            Self::Title => "title",
        }
    }
}

/// Request model for adding one bookmark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddBookmarkRequest {
    pub title: String,
    pub url: String,
    pub notes: Option<String>,
    /// Explicit timestamp, e.g. an import preserving the original star time.
    /// `None` stamps the current UTC time.
    pub date_added: Option<String>,
}

impl AddBookmarkRequest {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_date_added(mut self, date_added: impl Into<String>) -> Self {
        self.date_added = Some(date_added.into());
        self
    }

    fn to_bookmark(&self) -> Bookmark {
        Bookmark {
            id: 0,
            title: self.title.clone(),
            url: self.url.clone(),
            notes: self.notes.clone(),
            date_added: self.date_added.clone().unwrap_or_else(now_date_added),
        }
    }
}

/// Use-case service wrapper for bookmark operations.
pub struct BookmarkService<R: BookmarkRepository> {
    repo: R,
}

impl<R: BookmarkRepository> BookmarkService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Releases the underlying repository.
    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Adds one bookmark and returns its assigned id.
    pub fn add_bookmark(&mut self, request: &AddBookmarkRequest) -> RepoResult<BookmarkId> {
        let preserved = request.date_added.is_some();
        match self.repo.add(&request.to_bookmark()) {
            Ok(id) => {
                info!(
                    "event=bookmark_add module=service status=ok id={id} preserved_timestamp={preserved}"
                );
                Ok(id)
            }
            Err(err) => {
                warn!(
                    "event=bookmark_add module=service status=error error_kind={:?} error={err}",
                    err.kind()
                );
                Err(err)
            }
        }
    }

    /// Lists all bookmarks in the requested order.
    pub fn list_bookmarks(&self, order: BookmarkOrder) -> RepoResult<Vec<Bookmark>> {
        match order {
            BookmarkOrder::DateAdded => self.repo.list_by_date(),
            BookmarkOrder::Title => self.repo.list_by_title(),
        }
    }

    /// Gets one bookmark, or `RepoError::NotFound`.
    pub fn get_bookmark(&self, id: BookmarkId) -> RepoResult<Bookmark> {
        self.repo.retrieve(id)
    }

    /// Deletes one bookmark. Unknown ids are a no-op reported as `false`.
    pub fn delete_bookmark(&mut self, id: BookmarkId) -> RepoResult<bool> {
        match self.repo.delete(id) {
            Ok(removed) => {
                info!("event=bookmark_delete module=service status=ok id={id} removed={removed}");
                Ok(removed)
            }
            Err(err) => {
                warn!(
                    "event=bookmark_delete module=service status=error id={id} error_kind={:?} error={err}",
                    err.kind()
                );
                Err(err)
            }
        }
    }

    /// Replaces the supplied fields. Unknown ids are reported as `false`.
    pub fn edit_bookmark(&mut self, id: BookmarkId, patch: &BookmarkPatch) -> RepoResult<bool> {
        match self.repo.update(id, patch) {
            Ok(updated) => {
                info!("event=bookmark_edit module=service status=ok id={id} updated={updated}");
                Ok(updated)
            }
            Err(err) => {
                warn!(
                    "event=bookmark_edit module=service status=error id={id} error_kind={:?} error={err}",
                    err.kind()
                );
                Err(err)
            }
        }
    }

    /// Removes every bookmark and returns how many were removed.
    pub fn clear_bookmarks(&mut self) -> RepoResult<usize> {
        match self.repo.clear() {
            Ok(removed) => {
                info!("event=bookmark_clear module=service status=ok removed={removed}");
                Ok(removed)
            }
            Err(err) => {
                warn!(
                    "event=bookmark_clear module=service status=error error_kind={:?} error={err}",
                    err.kind()
                );
                Err(err)
            }
        }
    }

    /// The id the next add will receive.
    pub fn next_id(&self) -> RepoResult<BookmarkId> {
        self.repo.next_id()
    }

    /// Number of stored bookmarks.
    pub fn count(&self) -> RepoResult<usize> {
        self.repo.count()
    }
}
