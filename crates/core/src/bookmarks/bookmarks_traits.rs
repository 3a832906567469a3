//! Store, transport, and service traits for the bookmark synchronizer.

use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::Value;

use super::{
    BookmarkSnapshot, BookmarkStats, BulkReport, FixtureId, ImportReport, ReconcileReport,
    RemoteBookmark,
};
use crate::errors::{Result, TransportError};

/// Durable local slot holding the persisted bookmark snapshot.
///
/// The synchronizer is the only writer of this slot; anything else reading
/// it must treat it as read-only.
#[async_trait]
pub trait BookmarkStoreTrait: Send + Sync {
    /// Load the persisted id set. A missing slot is an empty set.
    async fn load(&self) -> Result<HashSet<i64>>;

    /// Overwrite the slot with the full current id set.
    async fn save(&self, ids: &HashSet<i64>) -> Result<()>;
}

/// Remote bookmark API.
///
/// Implementations report outcomes faithfully via [`TransportError`]; the
/// rollback-versus-defer policy lives in the service, not here.
#[async_trait]
pub trait BookmarkTransportTrait: Send + Sync {
    /// Create a bookmark remotely. Returns the server's resulting
    /// `bookmarked` flag on a successful response.
    async fn create_bookmark(&self, fixture_id: i64) -> std::result::Result<bool, TransportError>;

    /// Delete a bookmark remotely.
    async fn delete_bookmark(&self, fixture_id: i64) -> std::result::Result<(), TransportError>;

    /// Fetch the authoritative bookmark list.
    async fn list_bookmarks(&self) -> std::result::Result<Vec<RemoteBookmark>, TransportError>;
}

/// Service trait consumed by the UI layer.
#[async_trait]
pub trait BookmarkServiceTrait: Send + Sync {
    /// Insert `id` locally, persist, then sync to the remote store.
    ///
    /// `Ok(())` means fully synced. `Err(SyncDeferred)` means the bookmark is
    /// on locally but the remote call failed and a retry was scheduled.
    /// `Err(ServerRejected)` means the insertion was rolled back.
    async fn add(&self, id: FixtureId) -> Result<()>;

    /// Delete `id` locally, persist, then sync. The local removal is never
    /// rolled back; remote failure defers and schedules a retry.
    async fn remove(&self, id: FixtureId) -> Result<()>;

    /// Pure lookup against the local set. Never fails.
    async fn is_bookmarked(&self, id: FixtureId) -> bool;

    /// Number of locally bookmarked fixtures.
    async fn count(&self) -> usize;

    /// Current ids, sorted ascending.
    async fn ids(&self) -> Vec<FixtureId>;

    /// Converge the local set toward the remote store: push local-only ids,
    /// pull remote-only ids, persist once. Remote deletions are not detected
    /// by this protocol and never remove a local id.
    async fn reconcile(&self) -> Result<ReconcileReport>;

    /// Arm a single delayed reconcile. Re-arming replaces any pending timer.
    async fn schedule_retry(&self);

    /// Sequential `add` over `ids`, paced, element failures non-fatal.
    async fn bulk_add(&self, ids: &[FixtureId]) -> BulkReport;

    /// Sequential `remove` over `ids`, paced, element failures non-fatal.
    async fn bulk_remove(&self, ids: &[FixtureId]) -> BulkReport;

    /// Remove every currently bookmarked fixture.
    async fn remove_all(&self) -> BulkReport;

    /// Serializable export of the current set.
    async fn export_snapshot(&self) -> BookmarkSnapshot;

    /// Import a snapshot produced by [`export_snapshot`]. Malformed ids are
    /// skipped; a payload whose `fixture_ids` is not a list is rejected.
    ///
    /// [`export_snapshot`]: BookmarkServiceTrait::export_snapshot
    async fn import_snapshot(&self, value: Value) -> Result<ImportReport>;

    /// Current totals and sync status.
    async fn stats(&self) -> BookmarkStats;
}
