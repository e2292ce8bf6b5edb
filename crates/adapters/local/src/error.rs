//! Local adapter error types.

use std::path::PathBuf;

use servicebay_domain::error::ServiceBayError;

/// Errors raised by the in-process adapters.
#[derive(Debug, thiserror::Error)]
pub enum LocalAdapterError {
    /// Reading or writing the preference file failed.
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preference file does not hold a JSON object of strings.
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The simulated gateway was configured to decline every charge.
    #[error("payment declined by the simulated gateway")]
    Declined,

    /// A domain-level error (validation, not-found, etc.).
    #[error("domain error")]
    Domain(#[source] ServiceBayError),
}

impl LocalAdapterError {
    /// Convert into a [`ServiceBayError`] for propagation across port
    /// boundaries. Adapter failures become [`ServiceBayError::Upstream`].
    pub fn into_domain(self) -> ServiceBayError {
        match self {
            Self::Domain(err) => err,
            other => ServiceBayError::upstream(other),
        }
    }
}

impl From<LocalAdapterError> for ServiceBayError {
    fn from(err: LocalAdapterError) -> Self {
        err.into_domain()
    }
}
