//! Nominatim adapter error types.

use servicebay_domain::error::ServiceBayError;

#[derive(Debug, thiserror::Error)]
pub enum NominatimError {
    /// Building the client, sending the request or reading the body failed.
    #[error("nominatim request failed")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("nominatim returned status {status}")]
    Status { status: u16 },

    /// The response carried no `display_name` (e.g. `{"error": "Unable to geocode"}`).
    #[error("nominatim response has no display name")]
    MissingDisplayName,
}

impl From<NominatimError> for ServiceBayError {
    fn from(err: NominatimError) -> Self {
        ServiceBayError::upstream(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status() {
        let err = NominatimError::Status { status: 503 };
        assert_eq!(err.to_string(), "nominatim returned status 503");
    }

    #[test]
    fn should_convert_to_upstream_error() {
        let err: ServiceBayError = NominatimError::MissingDisplayName.into();
        assert!(matches!(err, ServiceBayError::Upstream(_)));
    }
}
