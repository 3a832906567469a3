//! Bookmark API client for communicating with the remote bookmark store.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Duration;

use crate::error::{Result, SyncClientError};
use crate::types::*;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the remote bookmark API.
///
/// This client handles all communication with the server for creating,
/// deleting, and listing bookmarks. Requests carry the session cookie jar,
/// since the server scopes bookmarks per session.
#[derive(Debug, Clone)]
pub struct BookmarkApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl BookmarkApiClient {
    /// Create a new bookmark API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the API (e.g., "https://predicts.example.com")
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create headers for an API request.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Parse a JSON response body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        debug!("API response ({}): {}", status, body);

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                return Err(SyncClientError::api(status.as_u16(), error.error));
            }
            return Err(SyncClientError::api(
                status.as_u16(),
                format!("Request failed: {}", body),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!(
                "Failed to deserialize response. Body: {}, Error: {}",
                body,
                e
            );
            SyncClientError::api(status.as_u16(), format!("Failed to parse response: {}", e))
        })
    }

    /// Create a bookmark for a fixture.
    ///
    /// POST /api/bookmark/{fixture_id}
    pub async fn post_bookmark(&self, fixture_id: i64) -> Result<BookmarkToggleResponse> {
        let url = format!("{}/api/bookmark/{}", self.base_url, fixture_id);
        debug!("Creating bookmark for fixture {}", fixture_id);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Remove a bookmark for a fixture.
    ///
    /// DELETE /api/bookmark/{fixture_id}
    pub async fn remove_bookmark(&self, fixture_id: i64) -> Result<BookmarkToggleResponse> {
        let url = format!("{}/api/bookmark/{}", self.base_url, fixture_id);
        debug!("Removing bookmark for fixture {}", fixture_id);

        let response = self.client.delete(&url).send().await?;

        Self::parse_response(response).await
    }

    /// Fetch the authoritative bookmark list.
    ///
    /// GET /api/bookmarks
    pub async fn fetch_bookmarks(&self) -> Result<Vec<BookmarkRecord>> {
        let url = format!("{}/api/bookmarks", self.base_url);

        let response = self.client.get(&url).send().await?;

        Self::parse_response(response).await
    }
}
