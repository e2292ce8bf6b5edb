//! # servicebay-adapter-nominatim
//!
//! [`ReverseGeocoder`] backed by the OpenStreetMap Nominatim API:
//!
//! ```text
//! GET {base_url}/reverse?format=json&lat={lat}&lon={lon}
//! ```
//!
//! The `display_name` of the answer becomes the location label.
//!
//! ## Dependency rule
//!
//! Depends on `servicebay-app` (port traits) and `servicebay-domain` only.

mod config;
mod error;

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;

use servicebay_app::ports::ReverseGeocoder;
use servicebay_domain::error::ServiceBayError;
use servicebay_domain::location::Coordinates;

pub use config::{DEFAULT_BASE_URL, NominatimConfig};
pub use error::NominatimError;

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

/// Reverse geocoder calling a Nominatim instance.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    /// # Errors
    ///
    /// Returns [`NominatimError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &NominatimConfig) -> Result<Self, NominatimError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn lookup(&self, coordinates: Coordinates) -> Result<String, NominatimError> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}",
            self.base_url, coordinates.lat, coordinates.lon
        );
        tracing::debug!(%url, "reverse geocoding");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NominatimError::Status {
                status: status.as_u16(),
            });
        }

        let body: ReverseResponse = response.json().await?;
        body.display_name
            .filter(|name| !name.trim().is_empty())
            .ok_or(NominatimError::MissingDisplayName)
    }
}

impl ReverseGeocoder for NominatimGeocoder {
    fn reverse(
        &self,
        coordinates: Coordinates,
    ) -> impl Future<Output = Result<String, ServiceBayError>> + Send {
        async move { self.lookup(coordinates).await.map_err(ServiceBayError::from) }
    }
}
