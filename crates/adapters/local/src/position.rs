//! Position source backed by configuration.

use std::future::Future;

use servicebay_app::ports::PositionSource;
use servicebay_domain::error::ServiceBayError;
use servicebay_domain::location::Coordinates;

/// Reports a fixed position, or none when geolocation is not configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPositionSource {
    coordinates: Option<Coordinates>,
}

impl FixedPositionSource {
    #[must_use]
    pub fn new(coordinates: Option<Coordinates>) -> Self {
        Self { coordinates }
    }

    /// A source that never knows where the customer is.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl PositionSource for FixedPositionSource {
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Option<Coordinates>, ServiceBayError>> + Send {
        let coordinates = self.coordinates;
        async move { Ok(coordinates) }
    }
}
