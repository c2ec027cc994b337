//! Tracker API connection settings.

use serde::{Deserialize, Serialize};

/// Default API root for Pivotal Tracker v5.
fn default_base_url() -> String {
    String::from("https://www.pivotaltracker.com/services/v5")
}

/// Iterations requested per page.
const fn default_page_limit() -> u32 {
    20
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackerConfig {
    /// API token sent as `X-TrackerToken`.
    #[serde(default)]
    pub token: String,

    /// API root, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size for iteration requests.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: default_base_url(),
            page_limit: default_page_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TrackerConfig {
    /// Check if a token is available.
    pub fn is_configured(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// API root with any trailing slash removed.
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
