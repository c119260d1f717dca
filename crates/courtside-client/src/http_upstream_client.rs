//! HTTP client for the upstream availability API.
//!
//! Talks plain HTTP/JSON to the upstream and reports each failure mode as its
//! own error variant. There is no retry or fallback here.

use async_trait::async_trait;
use courtside_config::UpstreamConfig;
use courtside_core::{Club, Court, CourtsideError, CourtsideResult, Slot, SlotDate};
use courtside_service::UpstreamReader;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shaku::Component;
use tracing::debug;

/// Upstream reader over HTTP.
#[derive(Component)]
#[shaku(interface = UpstreamReader)]
pub struct HttpUpstreamClient {
    client: Client,
    base_url: String,
}

impl HttpUpstreamClient {
    /// Creates a client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> CourtsideResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CourtsideError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Builds the Shaku parameters for a client configured from `config`.
    pub fn parameters(config: &UpstreamConfig) -> CourtsideResult<HttpUpstreamClientParameters> {
        let Self { client, base_url } = Self::new(config)?;
        Ok(HttpUpstreamClientParameters { client, base_url })
    }

    /// Creates a client around an existing reqwest client.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> CourtsideResult<T> {
        debug!("Upstream GET {} {:?}", path, query);

        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| CourtsideError::Upstream {
                endpoint: path.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!("Upstream {} responded {}", path, status);
            return Err(CourtsideError::UpstreamStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| CourtsideError::Upstream {
            endpoint: path.to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| CourtsideError::UpstreamPayload {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl UpstreamReader for HttpUpstreamClient {
    async fn fetch_clubs(&self, place_id: &str) -> CourtsideResult<Vec<Club>> {
        self.get_json("/clubs", &[("placeId", place_id)]).await
    }

    async fn fetch_courts(&self, club_id: i64) -> CourtsideResult<Vec<Court>> {
        self.get_json(&format!("/clubs/{}/courts", club_id), &[]).await
    }

    async fn fetch_slots(&self, club_id: i64, court_id: i64, date: SlotDate) -> CourtsideResult<Vec<Slot>> {
        let date = date.to_string();
        self.get_json(
            &format!("/clubs/{}/courts/{}/slots", club_id, court_id),
            &[("date", date.as_str())],
        )
        .await
    }
}

impl std::fmt::Debug for HttpUpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpUpstreamClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
