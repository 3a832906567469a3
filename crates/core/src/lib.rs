//! Matchbook Core - Domain entities, services, and traits.
//!
//! This crate contains the client-held bookmark set and its reconciliation
//! logic. It is storage- and transport-agnostic and defines traits that are
//! implemented by the `storage-sqlite` and `sync-client` crates.

pub mod bookmarks;
pub mod constants;
pub mod errors;

// Re-export common types from the bookmarks module
pub use bookmarks::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
