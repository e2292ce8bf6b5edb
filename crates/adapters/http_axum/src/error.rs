//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use servicebay_domain::error::{ServiceBayError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ServiceBayError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(ServiceBayError);

impl From<ServiceBayError> for ApiError {
    fn from(err: ServiceBayError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ServiceBayError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ServiceBayError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ServiceBayError::Auth(err) => (StatusCode::UNAUTHORIZED, err.message.clone()),
            ServiceBayError::Upstream(err) => {
                tracing::error!(error = %err, "upstream error");
                (StatusCode::BAD_GATEWAY, "upstream service unavailable".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use servicebay_domain::error::{AuthError, NotFoundError};

    fn status_of(err: ServiceBayError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn should_map_validation_to_bad_request() {
        assert_eq!(
            status_of(ValidationError::EmptyTitle.into()),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn should_map_not_found_to_404() {
        let err = NotFoundError {
            entity: "Listing",
            id: "9".to_string(),
        };
        assert_eq!(status_of(err.into()), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_auth_to_unauthorized() {
        assert_eq!(
            status_of(AuthError::new("Invalid login credentials").into()),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn should_map_upstream_to_bad_gateway() {
        let err = ServiceBayError::upstream(std::io::Error::other("boom"));
        assert_eq!(status_of(err), StatusCode::BAD_GATEWAY);
    }
}
