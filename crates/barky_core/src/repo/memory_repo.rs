//! In-memory bookmark repository.
//!
//! # Responsibility
//! - Provide a storage-free `BookmarkRepository` for tests and fakes.
//!
//! # Invariants
//! - `seen` is kept in insertion (and therefore id) order.
//! - Ids are never reissued until `clear()` empties the repository; after
//!   that, numbering restarts at 1.

use crate::model::bookmark::{Bookmark, BookmarkId, BookmarkPatch};
use crate::repo::bookmark_repo::{
    sort_by_date, sort_by_title, BookmarkRepository, RepoError, RepoResult,
};

/// `Vec`-backed bookmark repository.
#[derive(Debug, Default)]
pub struct InMemoryBookmarkRepository {
    seen: Vec<Bookmark>,
    last_issued: BookmarkId,
}

impl InMemoryBookmarkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored bookmarks in insertion order.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.seen
    }

    fn position(&self, id: BookmarkId) -> Option<usize> {
        self.seen.iter().position(|bookmark| bookmark.id == id)
    }
}

impl BookmarkRepository for InMemoryBookmarkRepository {
    fn add(&mut self, bookmark: &Bookmark) -> RepoResult<BookmarkId> {
        bookmark.validate()?;

        let id = self.next_id()?;
        let mut stored = bookmark.clone();
        stored.id = id;
        self.seen.push(stored);
        self.last_issued = id;
        Ok(id)
    }

    fn delete(&mut self, id: BookmarkId) -> RepoResult<bool> {
        match self.position(id) {
            Some(index) => {
                self.seen.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn retrieve(&self, id: BookmarkId) -> RepoResult<Bookmark> {
        self.position(id)
            .map(|index| self.seen[index].clone())
            .ok_or(RepoError::NotFound(id))
    }

    fn list_by_date(&self) -> RepoResult<Vec<Bookmark>> {
        let mut bookmarks = self.seen.clone();
        sort_by_date(&mut bookmarks);
        Ok(bookmarks)
    }

    fn list_by_title(&self) -> RepoResult<Vec<Bookmark>> {
        let mut bookmarks = self.seen.clone();
        sort_by_title(&mut bookmarks);
        Ok(bookmarks)
    }

    fn clear(&mut self) -> RepoResult<usize> {
        let removed = self.seen.len();
        self.seen.clear();
        self.last_issued = 0;
        Ok(removed)
    }

    fn update(&mut self, id: BookmarkId, patch: &BookmarkPatch) -> RepoResult<bool> {
        patch.validate()?;

        match self.position(id) {
            Some(index) => {
                patch.apply_to(&mut self.seen[index]);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn next_id(&self) -> RepoResult<BookmarkId> {
        let max_existing = self
            .seen
            .iter()
            .map(|bookmark| bookmark.id)
            .max()
            .unwrap_or(0);
        Ok(max_existing.max(self.last_issued) + 1)
    }

    fn count(&self) -> RepoResult<usize> {
        Ok(self.seen.len())
    }
}
