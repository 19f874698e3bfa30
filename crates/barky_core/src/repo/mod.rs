//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the bookmark storage capability set (`BookmarkRepository`).
//! - Provide in-memory and SQLite variants chosen at construction time.
//!
//! # Invariants
//! - Both variants apply the same validation and ordering rules.
//! - Repository APIs return semantic errors (`NotFound`, validation) in
//!   addition to store errors.

pub mod bookmark_repo;
pub mod memory_repo;
pub mod sqlite_repo;
