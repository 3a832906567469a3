//! Matchbook Sync Client - HTTP client for the remote bookmark store.
//!
//! This crate provides the API client for the bookmark endpoints and an
//! implementation of `matchbook_core::BookmarkTransportTrait` on top of it,
//! so the synchronizer can be wired to a live server.
//!
//! # Usage
//!
//! ```rust,ignore
//! use matchbook_sync_client::BookmarkApiClient;
//!
//! let client = BookmarkApiClient::new("https://predicts.example.com");
//! let response = client.post_bookmark(42).await?;
//! assert!(response.bookmarked);
//! ```

mod client;
mod error;
mod transport;
mod types;

pub use client::BookmarkApiClient;
pub use error::{Result, SyncClientError};
pub use types::*;
