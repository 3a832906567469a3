//! Bookmarks module - domain models, service, and traits.

mod bookmarks_model;
mod bookmarks_service;
mod bookmarks_traits;

pub use bookmarks_model::{
    BookmarkSnapshot, BookmarkStats, BulkReport, FixtureId, ImportReport, ReconcileReport,
    RemoteBookmark,
};
pub use bookmarks_service::{BookmarkService, SyncConfig};
pub use bookmarks_traits::{BookmarkServiceTrait, BookmarkStoreTrait, BookmarkTransportTrait};
