//! Core error types for the bookmark synchronizer.
//!
//! This module defines transport- and storage-agnostic error types. HTTP
//! errors (from reqwest etc.) are converted into [`TransportError`] by the
//! client crate; the service layer applies the rollback-versus-defer policy
//! on top of them.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the bookmark synchronizer.
#[derive(Error, Debug)]
pub enum Error {
    /// The remote store explicitly refused a bookmark; the local insertion
    /// was rolled back before this was returned.
    #[error("Bookmark was rejected by the server")]
    ServerRejected,

    /// The remote store could not be reached or errored in a way that keeps
    /// local state authoritative. A retry has been scheduled.
    #[error("Sync deferred: {0}")]
    SyncDeferred(String),

    /// Malformed import payload.
    #[error("Invalid bookmark payload: {0}")]
    InvalidFormat(String),

    /// An identifier token failed to parse at a component boundary.
    #[error("Invalid fixture id: {0}")]
    InvalidId(String),

    /// Local durable read/write failed. Never surfaced from `add`/`remove`;
    /// the in-memory set stays correct for the rest of the session.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Raw transport outcome that no policy has been applied to yet.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// Create a deferred-sync error from any displayable reason.
    pub fn deferred(reason: impl Into<String>) -> Self {
        Self::SyncDeferred(reason.into())
    }

    /// Create an invalid-format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }
}

/// Policy-free description of a failed remote call.
///
/// The transport reports what happened; the service decides whether that
/// means rollback (`ServerRejected`) or keep-and-retry (`SyncDeferred`).
#[derive(Error, Debug)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("server replied {status}: {message}")]
    Rejected { status: u16, message: String },

    /// No usable response: connect failure, timeout, or malformed body.
    #[error("remote unreachable: {0}")]
    Unreachable(String),
}

impl TransportError {
    /// Create a rejection from status and message.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Create an unreachable error.
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::Unreachable(reason.into())
    }
}
