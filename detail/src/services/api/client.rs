//! # API Client
//!
//! Main HTTP client for GitHub API communication.

use crate::app::state::ProfileEntity;
use crate::core::config::{DetailConfig, DEFAULT_API_URL};
use crate::core::service::ProfileService;
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the GitHub REST API.
///
/// Holds a pooled `reqwest::Client`; cheap to share behind an `Arc`.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client for the public GitHub API with a 10 second timeout.
    pub fn new() -> Self {
        let config = DetailConfig::default();
        Self::with_base_url(DEFAULT_API_URL, config.http_timeout, &config.user_agent)
    }

    pub fn from_config(config: &DetailConfig) -> Self {
        Self::with_base_url(&config.api_url, config.http_timeout, &config.user_agent)
    }

    /// Client against an arbitrary API root (used by tests and enterprise hosts).
    pub fn with_base_url(base_url: &str, timeout: Duration, user_agent: &str) -> Self {
        // GitHub rejects requests without a User-Agent
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl ProfileService for ApiClient {
    async fn fetch_user(&self, login: &str) -> Result<ProfileEntity, String> {
        crate::services::api::users::get_user(self, login)
            .await
            .map(ProfileEntity::from)
    }
}
