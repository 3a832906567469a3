/// Key under which the bookmark set is persisted in the local slot
pub const BOOKMARKS_STORAGE_KEY: &str = "matchbook:bookmarks";

/// Delay before a deferred sync is retried
pub const DEFAULT_RETRY_BACKOFF_SECS: u64 = 30;

/// Pause between items in a bulk add, so the remote endpoint is not saturated
pub const DEFAULT_ADD_PACING_MS: u64 = 100;

/// Pause between items in a bulk remove
pub const DEFAULT_REMOVE_PACING_MS: u64 = 50;
