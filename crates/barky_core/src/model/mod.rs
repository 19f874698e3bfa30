//! Bookmark domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by repository and service code.
//!
//! # Invariants
//! - Every persisted bookmark is identified by a repository-assigned
//!   `BookmarkId` that is never handed out twice by the same store.

pub mod bookmark;
