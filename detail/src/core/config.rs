//! Screen configuration from environment variables

use std::time::Duration;

/// GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Contribution chart service; the login is appended to this prefix.
pub const DEFAULT_CHART_URL: &str = "https://ghchart.rshah.org/";
/// Key under which the selected login is returned to the caller.
pub const DEFAULT_USER_KEY: &str = "preference_user_name";

/// Runtime configuration for the detail screen and its HTTP collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailConfig {
    /// Base URL of the profile API (no trailing slash needed)
    pub api_url: String,
    /// Prefix of the chart image URL
    pub chart_url: String,
    /// Result key for the close payload
    pub user_key: String,
    /// Per-request HTTP timeout
    pub http_timeout: Duration,
    /// User-Agent header (required by the GitHub API)
    pub user_agent: String,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            chart_url: DEFAULT_CHART_URL.to_string(),
            user_key: DEFAULT_USER_KEY.to_string(),
            http_timeout: Duration::from_secs(10),
            user_agent: format!("detail/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl DetailConfig {
    /// Load configuration from environment variables
    ///
    /// - `DETAIL_API_URL`
    /// - `DETAIL_CHART_URL`
    /// - `DETAIL_USER_KEY`
    /// - `DETAIL_HTTP_TIMEOUT_SECS`
    /// - `DETAIL_USER_AGENT`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            api_url: lookup("DETAIL_API_URL").unwrap_or(defaults.api_url),
            chart_url: lookup("DETAIL_CHART_URL").unwrap_or(defaults.chart_url),
            user_key: lookup("DETAIL_USER_KEY").unwrap_or(defaults.user_key),
            http_timeout: lookup("DETAIL_HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            user_agent: lookup("DETAIL_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }
}
