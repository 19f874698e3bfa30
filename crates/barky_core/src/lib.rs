//! Core domain logic for Barky, a personal bookmark manager.
//! This crate is the single source of truth for bookmark invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::bookmark::{Bookmark, BookmarkId, BookmarkPatch, BookmarkValidationError};
pub use repo::bookmark_repo::{BookmarkRepository, ErrorKind, RepoError, RepoResult};
pub use repo::memory_repo::InMemoryBookmarkRepository;
pub use repo::sqlite_repo::SqliteBookmarkRepository;
pub use service::bookmark_service::{AddBookmarkRequest, BookmarkOrder, BookmarkService};
pub use service::command::{Command, CommandOutput};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
