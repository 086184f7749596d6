//! Catalog service API client
//!
//! Fetches the video listing from `GET /videos/all?search=<query>` with a
//! bearer credential. Raw wire records are converted to [`VideoSummary`]
//! before they leave this module.

use serde::Deserialize;
use thiserror::Error;

use crate::models::VideoSummary;

const DEFAULT_BASE_URL: &str = "https://apis.ccbp.in";

/// Catalog API error types
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Request failed with status {0}")]
    RequestFailure(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Catalog API client
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Create a client against the production catalog service.
    ///
    /// No request timeout is configured: the listing call waits for a
    /// response or a transport-level failure.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the video listing, filtered by a free-text search query.
    ///
    /// The query is URL-encoded before interpolation. The bearer header is
    /// always sent, even when the credential store produced an empty token;
    /// the service decides what to do with an unauthenticated request.
    pub async fn videos(
        &self,
        token: &str,
        query: &str,
    ) -> Result<Vec<VideoSummary>, CatalogError> {
        let url = format!(
            "{}/videos/all?search={}",
            self.base_url,
            urlencoding::encode(query)
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/json")
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.text().await?;
                let parsed: VideosResponse = serde_json::from_str(&body)
                    .map_err(|e| CatalogError::InvalidResponse(format!("JSON parse error: {}", e)))?;
                Ok(parsed.into_summaries())
            }
            status => Err(CatalogError::RequestFailure(status.as_u16())),
        }
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    videos: Vec<VideoRaw>,
}

impl VideosResponse {
    fn into_summaries(self) -> Vec<VideoSummary> {
        // Order preserved exactly as returned by the service
        self.videos.into_iter().map(|v| v.into_summary()).collect()
    }
}

#[derive(Debug, Deserialize)]
struct VideoRaw {
    id: Option<String>,
    title: Option<String>,
    thumbnail_url: Option<String>,
    view_count: Option<u64>,
    published_at: Option<String>,
    channel: Option<ChannelRaw>,
}

#[derive(Debug, Default, Deserialize)]
struct ChannelRaw {
    name: Option<String>,
    profile_image_url: Option<String>,
}

impl VideoRaw {
    fn into_summary(self) -> VideoSummary {
        let channel = self.channel.unwrap_or_default();
        VideoSummary {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            thumbnail_url: self.thumbnail_url.unwrap_or_default(),
            view_count: self.view_count.unwrap_or_default(),
            published_at: self.published_at.unwrap_or_default(),
            channel_name: channel.name.unwrap_or_default(),
            channel_profile_image_url: channel.profile_image_url.unwrap_or_default(),
        }
    }
}
