//! Geolocation ports — where the customer is and what that place is called.

use std::future::Future;

use servicebay_domain::error::ServiceBayError;
use servicebay_domain::location::Coordinates;

/// Source of the customer's current position.
pub trait PositionSource {
    /// Current position, or `None` when geolocation is unavailable.
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Option<Coordinates>, ServiceBayError>> + Send;
}

/// Turns coordinates into a human-readable address.
pub trait ReverseGeocoder {
    /// Display name for `coordinates`.
    fn reverse(
        &self,
        coordinates: Coordinates,
    ) -> impl Future<Output = Result<String, ServiceBayError>> + Send;
}
