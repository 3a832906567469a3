//! Domain models for the bookmark synchronizer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Error;

/// A validated fixture identifier.
///
/// Identifiers enter the component from untrusted places (DOM attributes,
/// import files, query strings), so every boundary goes through an explicit
/// fallible parse instead of implicit coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureId(i64);

impl FixtureId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for FixtureId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| Error::InvalidId(s.to_string()))
    }
}

impl From<i64> for FixtureId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl TryFrom<&Value> for FixtureId {
    type Error = Error;

    /// Accepts JSON integers and integer-shaped strings, nothing else.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(Self)
                .ok_or_else(|| Error::InvalidId(n.to_string())),
            Value::String(s) => s.parse(),
            other => Err(Error::InvalidId(other.to_string())),
        }
    }
}

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A bookmark record as returned by the remote store.
///
/// Only `fixture_id` is required; anything else the server sends is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteBookmark {
    pub fixture_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Portable export of the current bookmark set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkSnapshot {
    pub exported_at: DateTime<Utc>,
    pub total_bookmarks: usize,
    /// Current ids, sorted ascending for a stable export.
    pub fixture_ids: Vec<i64>,
}

impl BookmarkSnapshot {
    pub fn new(mut fixture_ids: Vec<i64>) -> Self {
        fixture_ids.sort_unstable();
        Self {
            exported_at: Utc::now(),
            total_bookmarks: fixture_ids.len(),
            fixture_ids,
        }
    }
}

/// Tally of a bulk add/remove pass.
///
/// `succeeded` counts elements that were fully synced; `deferred` counts
/// elements that were applied locally but whose remote sync is pending a
/// retry. Element failures never abort the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BulkReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub deferred: usize,
}

impl BulkReport {
    pub fn new(attempted: usize) -> Self {
        Self {
            attempted,
            ..Default::default()
        }
    }
}

/// Result of importing a snapshot.
///
/// `skipped` counts malformed or server-rejected entries; ids that were
/// already bookmarked are neither imported nor skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

/// Result of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Local-only ids successfully pushed to the remote store.
    pub pushed: usize,
    /// Remote-only ids merged into the local set.
    pub pulled: usize,
    /// Push attempts that failed; they stay local-only until the next pass.
    pub push_failures: usize,
}

/// Point-in-time view of the synchronizer, for status displays.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BookmarkStats {
    pub total: usize,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub retry_pending: bool,
}
