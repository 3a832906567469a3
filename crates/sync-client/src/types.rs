//! Wire types for the bookmark API.

use serde::{Deserialize, Serialize};

/// A bookmark record returned by `GET /api/bookmarks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkRecord {
    /// The bookmarked fixture.
    pub fixture_id: i64,
    /// When the bookmark was created, if the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Response body of `POST /api/bookmark/{id}` and `DELETE /api/bookmark/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkToggleResponse {
    /// Whether the fixture is bookmarked after the call.
    pub bookmarked: bool,
}

/// Error body the API returns on failure.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_record_tolerates_extra_fields() {
        let record: BookmarkRecord = serde_json::from_str(
            r#"{"fixture_id": 42, "created_at": "2026-08-01T10:00:00Z", "user_session": "abc"}"#,
        )
        .unwrap();

        assert_eq!(record.fixture_id, 42);
        assert_eq!(record.created_at.as_deref(), Some("2026-08-01T10:00:00Z"));
    }

    #[test]
    fn test_toggle_response_shape() {
        let response: BookmarkToggleResponse =
            serde_json::from_str(r#"{"bookmarked": true}"#).unwrap();
        assert!(response.bookmarked);
    }
}
