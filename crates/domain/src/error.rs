//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ServiceBayError`] via `#[from]` / `From` impls. There are no stringly
//! typed variants except where an external provider hands us a message that
//! must reach the user verbatim ([`AuthError`]).

/// Top-level error shared by the domain, the application services and the
/// port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum ServiceBayError {
    /// A domain invariant was violated by the input.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A requested item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The external auth provider rejected the request.
    #[error("authentication error")]
    Auth(#[from] AuthError),

    /// An adapter talking to the outside world (HTTP, filesystem, …) failed.
    #[error("upstream error")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyId,

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("quantity must be at least 1")]
    ZeroQuantity,

    #[error("invalid booking date: {0:?}")]
    InvalidBookingDate(String),

    #[error("time slot {0:?} is not offered by this provider")]
    UnavailableTimeSlot(String),

    #[error("coordinates out of range: lat={lat}, lon={lon}")]
    InvalidCoordinates { lat: String, lon: String },

    #[error("address must not be empty")]
    EmptyAddress,

    #[error("email must not be empty")]
    EmptyEmail,

    #[error("password must not be empty")]
    EmptyPassword,

    #[error("card field {0} is required")]
    MissingCardField(&'static str),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Failure reported by the external auth provider.
///
/// `message` is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ServiceBayError {
    /// Wrap any adapter error as [`ServiceBayError::Upstream`].
    pub fn upstream(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Upstream(Box::new(err))
    }

    /// Message suitable for a user-facing notification.
    ///
    /// Auth errors surface the provider's own text; everything else uses the
    /// innermost description.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::NotFound(err) => err.to_string(),
            Self::Auth(err) => err.message.clone(),
            Self::Upstream(err) => err.to_string(),
        }
    }
}
