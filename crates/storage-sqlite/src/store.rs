//! Single-slot key-value store backed by SQLite.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use matchbook_core::bookmarks::BookmarkStoreTrait;
use matchbook_core::constants::BOOKMARKS_STORAGE_KEY;
use matchbook_core::errors::{Error, Result};

/// Durable slot for the bookmark snapshot.
///
/// The set is serialized as a JSON array of ids under a fixed key. The
/// synchronizer is the only writer; anything else reading the table must
/// treat the slot as read-only.
pub struct SqliteBookmarkStore {
    conn: Mutex<Connection>,
}

impl SqliteBookmarkStore {
    /// Open (or create) the store at `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path).map_err(persistence_err)?;
        Self::with_connection(conn)
    }

    /// In-memory store, state lost on drop.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(persistence_err)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS app_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(persistence_err)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

fn persistence_err(e: rusqlite::Error) -> Error {
    Error::Persistence(e.to_string())
}

#[async_trait]
impl BookmarkStoreTrait for SqliteBookmarkStore {
    async fn load(&self) -> Result<HashSet<i64>> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| Error::Persistence("storage lock poisoned".to_string()))?;

        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![BOOKMARKS_STORAGE_KEY],
                |row| row.get(0),
            )
            .optional()
            .map_err(persistence_err)?;

        match raw {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| Error::Persistence(format!("corrupt bookmark slot: {}", e))),
            None => Ok(HashSet::new()),
        }
    }

    async fn save(&self, ids: &HashSet<i64>) -> Result<()> {
        let mut list: Vec<i64> = ids.iter().copied().collect();
        list.sort_unstable();
        let json =
            serde_json::to_string(&list).map_err(|e| Error::Persistence(e.to_string()))?;

        let conn = self
            .conn
            .lock()
            .map_err(|_| Error::Persistence("storage lock poisoned".to_string()))?;

        conn.execute(
            "INSERT INTO app_state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![BOOKMARKS_STORAGE_KEY, json],
        )
        .map_err(persistence_err)?;

        debug!("Persisted {} bookmarks", list.len());
        Ok(())
    }
}
