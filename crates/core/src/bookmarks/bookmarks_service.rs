//! Bookmark synchronizer service.
//!
//! Local-first mutation with background reconciliation: every add/remove is
//! applied to the in-memory set and persisted before the remote store is
//! told about it. Rollback policy is asymmetric: a rejected create is undone
//! locally, a failed delete is trusted locally and retried later.

use std::collections::HashSet;
use std::sync::{Arc, Weak};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, error, warn};
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::{
    BookmarkServiceTrait, BookmarkSnapshot, BookmarkStats, BookmarkStoreTrait,
    BookmarkTransportTrait, BulkReport, FixtureId, ImportReport, ReconcileReport,
};
use crate::constants::{
    DEFAULT_ADD_PACING_MS, DEFAULT_REMOVE_PACING_MS, DEFAULT_RETRY_BACKOFF_SECS,
};
use crate::errors::{Error, Result, TransportError};

/// Tunables for retry backoff and bulk pacing.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Delay before a deferred sync triggers a reconcile.
    pub retry_backoff: Duration,
    /// Pause between elements of a bulk add.
    pub add_pacing: Duration,
    /// Pause between elements of a bulk remove.
    pub remove_pacing: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            retry_backoff: Duration::from_secs(DEFAULT_RETRY_BACKOFF_SECS),
            add_pacing: Duration::from_millis(DEFAULT_ADD_PACING_MS),
            remove_pacing: Duration::from_millis(DEFAULT_REMOVE_PACING_MS),
        }
    }
}

pub struct BookmarkService {
    store: Arc<dyn BookmarkStoreTrait>,
    transport: Arc<dyn BookmarkTransportTrait>,
    config: SyncConfig,
    /// Guards each mutation together with its persistence write, so no
    /// interleaved operation observes a set inconsistent with its snapshot.
    ids: Mutex<HashSet<i64>>,
    /// At most one pending retry timer; re-arming replaces it.
    retry: Mutex<Option<JoinHandle<()>>>,
    last_synced_at: Mutex<Option<DateTime<Utc>>>,
    weak_self: Weak<BookmarkService>,
}

impl BookmarkService {
    /// Create a service hydrated from the local slot.
    ///
    /// A failed load is logged and the session starts with an empty set;
    /// the slot is rewritten on the next mutation.
    pub async fn hydrate(
        store: Arc<dyn BookmarkStoreTrait>,
        transport: Arc<dyn BookmarkTransportTrait>,
        config: SyncConfig,
    ) -> Arc<Self> {
        let initial = match store.load().await {
            Ok(ids) => ids,
            Err(e) => {
                error!("Error loading bookmarks from storage: {}", e);
                HashSet::new()
            }
        };

        Arc::new_cyclic(|weak| Self {
            store,
            transport,
            config,
            ids: Mutex::new(initial),
            retry: Mutex::new(None),
            last_synced_at: Mutex::new(None),
            weak_self: weak.clone(),
        })
    }

    /// Persist the full set. Called with the `ids` lock held so the write is
    /// part of the same atomic step as the mutation. Failures are logged;
    /// the in-memory set stays authoritative for the session.
    async fn persist(&self, ids: &HashSet<i64>) {
        if let Err(e) = self.store.save(ids).await {
            error!("Error saving bookmarks to storage: {}", e);
        }
    }

    async fn rollback_insert(&self, id: i64) {
        let mut ids = self.ids.lock().await;
        if ids.remove(&id) {
            self.persist(&ids).await;
        }
    }
}

#[async_trait]
impl BookmarkServiceTrait for BookmarkService {
    async fn add(&self, id: FixtureId) -> Result<()> {
        let id = id.value();

        // Local-first: insert and persist before the server hears about it.
        {
            let mut ids = self.ids.lock().await;
            if ids.insert(id) {
                self.persist(&ids).await;
            }
        }

        match self.transport.create_bookmark(id).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                debug!("Server declined bookmark {}", id);
                self.rollback_insert(id).await;
                Err(Error::ServerRejected)
            }
            Err(TransportError::Rejected { status, message }) => {
                debug!("Server rejected bookmark {} ({}): {}", id, status, message);
                self.rollback_insert(id).await;
                Err(Error::ServerRejected)
            }
            Err(TransportError::Unreachable(reason)) => {
                warn!("Bookmark {} kept locally, sync deferred: {}", id, reason);
                self.schedule_retry().await;
                Err(Error::SyncDeferred(reason))
            }
        }
    }

    async fn remove(&self, id: FixtureId) -> Result<()> {
        let id = id.value();

        {
            let mut ids = self.ids.lock().await;
            if ids.remove(&id) {
                self.persist(&ids).await;
            }
        }

        // Removal is trusted locally: no rollback on any remote failure.
        match self.transport.delete_bookmark(id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("Failed to delete bookmark {} remotely: {}", id, e);
                self.schedule_retry().await;
                Err(Error::SyncDeferred(e.to_string()))
            }
        }
    }

    async fn is_bookmarked(&self, id: FixtureId) -> bool {
        self.ids.lock().await.contains(&id.value())
    }

    async fn count(&self) -> usize {
        self.ids.lock().await.len()
    }

    async fn ids(&self) -> Vec<FixtureId> {
        let mut ids: Vec<i64> = self.ids.lock().await.iter().copied().collect();
        ids.sort_unstable();
        ids.into_iter().map(FixtureId::new).collect()
    }

    async fn reconcile(&self) -> Result<ReconcileReport> {
        let remote = self.transport.list_bookmarks().await.map_err(|e| {
            warn!("Bookmark sync failed: {}", e);
            Error::SyncDeferred(e.to_string())
        })?;
        let remote: HashSet<i64> = remote.into_iter().map(|b| b.fixture_id).collect();

        let (local_only, remote_only) = {
            let ids = self.ids.lock().await;
            let local_only: Vec<i64> = ids.difference(&remote).copied().collect();
            let remote_only: Vec<i64> = remote.difference(&ids).copied().collect();
            (local_only, remote_only)
        };

        // Push local-only ids, best effort. A failed push stays local-only
        // until the next pass; the id is never dropped here.
        let mut push_failures = 0;
        for id in &local_only {
            if let Err(e) = self.transport.create_bookmark(*id).await {
                warn!("Failed to sync bookmark {} to server: {}", id, e);
                push_failures += 1;
            }
        }

        // Pull remote-only ids and persist the merged set once. Ids missing
        // from the remote snapshot are kept: remote deletions do not
        // propagate through this protocol.
        {
            let mut ids = self.ids.lock().await;
            ids.extend(remote_only.iter().copied());
            self.persist(&ids).await;
        }

        *self.last_synced_at.lock().await = Some(Utc::now());

        Ok(ReconcileReport {
            pushed: local_only.len() - push_failures,
            pulled: remote_only.len(),
            push_failures,
        })
    }

    async fn schedule_retry(&self) {
        let Some(service) = self.weak_self.upgrade() else {
            return;
        };
        let backoff = self.config.retry_backoff;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(backoff).await;
            if let Err(e) = service.reconcile().await {
                debug!("Scheduled reconcile failed: {}", e);
            }
        });

        let mut retry = self.retry.lock().await;
        if let Some(previous) = retry.replace(handle) {
            previous.abort();
        }
    }

    async fn bulk_add(&self, ids: &[FixtureId]) -> BulkReport {
        let mut report = BulkReport::new(ids.len());
        for (i, id) in ids.iter().enumerate() {
            match self.add(*id).await {
                Ok(()) => report.succeeded += 1,
                Err(Error::SyncDeferred(_)) => report.deferred += 1,
                Err(e) => warn!("Failed to bookmark fixture {}: {}", id, e),
            }
            if i + 1 < ids.len() {
                tokio::time::sleep(self.config.add_pacing).await;
            }
        }
        report
    }

    async fn bulk_remove(&self, ids: &[FixtureId]) -> BulkReport {
        let mut report = BulkReport::new(ids.len());
        for (i, id) in ids.iter().enumerate() {
            match self.remove(*id).await {
                Ok(()) => report.succeeded += 1,
                Err(Error::SyncDeferred(_)) => report.deferred += 1,
                Err(e) => warn!("Failed to remove bookmark {}: {}", id, e),
            }
            if i + 1 < ids.len() {
                tokio::time::sleep(self.config.remove_pacing).await;
            }
        }
        report
    }

    async fn remove_all(&self) -> BulkReport {
        let current = self.ids().await;
        self.bulk_remove(&current).await
    }

    async fn export_snapshot(&self) -> BookmarkSnapshot {
        let ids: Vec<i64> = self.ids.lock().await.iter().copied().collect();
        BookmarkSnapshot::new(ids)
    }

    async fn import_snapshot(&self, value: Value) -> Result<ImportReport> {
        let Some(raw_ids) = value.get("fixture_ids").and_then(Value::as_array) else {
            return Err(Error::invalid_format("fixture_ids must be a list"));
        };

        let mut report = ImportReport::default();
        for raw in raw_ids {
            let id = match FixtureId::try_from(raw) {
                Ok(id) => id,
                Err(e) => {
                    warn!("Skipping malformed fixture id in import: {}", e);
                    report.skipped += 1;
                    continue;
                }
            };

            if self.is_bookmarked(id).await {
                continue;
            }

            match self.add(id).await {
                Ok(()) | Err(Error::SyncDeferred(_)) => report.imported += 1,
                Err(e) => {
                    warn!("Failed to import bookmark {}: {}", id, e);
                    report.skipped += 1;
                }
            }
            tokio::time::sleep(self.config.add_pacing).await;
        }

        Ok(report)
    }

    async fn stats(&self) -> BookmarkStats {
        let retry_pending = self
            .retry
            .lock()
            .await
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false);

        BookmarkStats {
            total: self.count().await,
            last_synced_at: *self.last_synced_at.lock().await,
            retry_pending,
        }
    }
}
