//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Expose command objects for HTTP/shell presentation layers.

pub mod bookmark_service;
pub mod command;
