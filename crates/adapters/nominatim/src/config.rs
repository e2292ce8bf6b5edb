//! Nominatim adapter configuration.

use serde::Deserialize;

/// Public OpenStreetMap instance.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("servicebay/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    10
}

/// Connection settings for the reverse-geocoding endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NominatimConfig {
    /// Base URL without the `/reverse` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sent as `User-Agent`; the public instance rejects anonymous clients.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
