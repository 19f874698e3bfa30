//! Command objects executed by presentation layers.
//!
//! # Responsibility
//! - Name each business operation as a value an HTTP route or shell can build.
//! - Translate service results into renderable outcomes.
//!
//! # Invariants
//! - Deleting an unknown id still reports [`DELETED_MESSAGE`].
//! - Editing an unknown id is silent and still reports [`UPDATED_MESSAGE`].
//! - `Get` of an unknown id surfaces `RepoError::NotFound`.

use crate::model::bookmark::{Bookmark, BookmarkId, BookmarkPatch};
use crate::repo::bookmark_repo::{BookmarkRepository, RepoResult};
use crate::service::bookmark_service::{AddBookmarkRequest, BookmarkOrder, BookmarkService};
use std::fmt::{Display, Formatter};

pub const ADDED_MESSAGE: &str = "Bookmark added!";
pub const DELETED_MESSAGE: &str = "Bookmark deleted!";
pub const UPDATED_MESSAGE: &str = "Bookmark updated!";
pub const CLEARED_MESSAGE: &str = "Bookmarks cleared!";

/// One business operation against the bookmark service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddBookmarkRequest),
    List(BookmarkOrder),
    Get(BookmarkId),
    Delete(BookmarkId),
    Edit(BookmarkId, BookmarkPatch),
    Clear,
}

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Status message for mutations without a payload.
    Message(&'static str),
    /// A bookmark was created under `id`.
    Created { id: BookmarkId, message: &'static str },
    Bookmarks(Vec<Bookmark>),
    Bookmark(Bookmark),
}

impl Command {
    /// Executes this command against `service`.
    pub fn execute<R: BookmarkRepository>(
        self,
        service: &mut BookmarkService<R>,
    ) -> RepoResult<CommandOutput> {
        match self {
            Self::Add(request) => {
                let id = service.add_bookmark(&request)?;
                Ok(CommandOutput::Created {
                    id,
                    message: ADDED_MESSAGE,
                })
            }
            Self::List(order) => service.list_bookmarks(order).map(CommandOutput::Bookmarks),
            Self::Get(id) => service.get_bookmark(id).map(CommandOutput::Bookmark),
            Self::Delete(id) => {
                service.delete_bookmark(id)?;
                Ok(CommandOutput::Message(DELETED_MESSAGE))
            }
            Self::Edit(id, patch) => {
                service.edit_bookmark(id, &patch)?;
                Ok(CommandOutput::Message(UPDATED_MESSAGE))
            }
            Self::Clear => {
                service.clear_bookmarks()?;
                Ok(CommandOutput::Message(CLEARED_MESSAGE))
            }
        }
    }
}

impl Display for CommandOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => write!(f, "{message}"),
            Self::Created { message, .. } => write!(f, "{message}"),
            Self::Bookmarks(bookmarks) => {
                for bookmark in bookmarks {
                    writeln!(f, "{}", format_bookmark_line(bookmark))?;
                }
                Ok(())
            }
            Self::Bookmark(bookmark) => write!(f, "{}", format_bookmark_line(bookmark)),
        }
    }
}

/// Renders one bookmark as a tab-separated listing row.
pub fn format_bookmark_line(bookmark: &Bookmark) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        bookmark.id,
        bookmark.title,
        bookmark.url,
        bookmark.notes.as_deref().unwrap_or(""),
        bookmark.date_added
    )
}
