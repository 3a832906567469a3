//! Matchbook SQLite storage - durable local slot for the bookmark snapshot.
//!
//! The browser client kept the set in one localStorage key; this crate keeps
//! the same single-slot shape in a small `app_state` key-value table, so the
//! snapshot survives restarts without needing a schema of its own.

mod store;

pub use store::SqliteBookmarkStore;
