//! `BookmarkTransportTrait` implementation over the HTTP client.
//!
//! Maps client errors onto the core's policy-free transport outcomes: a
//! non-success status becomes `Rejected`, anything without a usable response
//! becomes `Unreachable`. The service decides what either means.

use async_trait::async_trait;

use matchbook_core::bookmarks::BookmarkTransportTrait;
use matchbook_core::errors::TransportError;
use matchbook_core::RemoteBookmark;

use crate::client::BookmarkApiClient;
use crate::error::SyncClientError;

fn classify(err: SyncClientError) -> TransportError {
    match err {
        SyncClientError::Api { status, message } => TransportError::rejected(status, message),
        other => TransportError::unreachable(other.to_string()),
    }
}

#[async_trait]
impl BookmarkTransportTrait for BookmarkApiClient {
    async fn create_bookmark(&self, fixture_id: i64) -> Result<bool, TransportError> {
        self.post_bookmark(fixture_id)
            .await
            .map(|response| response.bookmarked)
            .map_err(classify)
    }

    async fn delete_bookmark(&self, fixture_id: i64) -> Result<(), TransportError> {
        self.remove_bookmark(fixture_id)
            .await
            .map(|_| ())
            .map_err(classify)
    }

    async fn list_bookmarks(&self) -> Result<Vec<RemoteBookmark>, TransportError> {
        let records = self.fetch_bookmarks().await.map_err(classify)?;
        Ok(records
            .into_iter()
            .map(|record| RemoteBookmark {
                fixture_id: record.fixture_id,
                created_at: record.created_at,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_classify_as_rejected() {
        let err = classify(SyncClientError::api(403, "not allowed"));
        assert!(matches!(
            err,
            TransportError::Rejected { status: 403, .. }
        ));
    }

    #[test]
    fn test_json_errors_classify_as_unreachable() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = classify(SyncClientError::Json(json_err));
        assert!(matches!(err, TransportError::Unreachable(_)));
    }
}
