//! Auth port — the external identity provider.
//!
//! Session storage, token refresh and the wire protocol all belong to the
//! provider. The storefront reads the current session, listens for changes,
//! and asks the provider to sign users in and out.

use std::future::Future;

use tokio::sync::watch;

use servicebay_domain::error::ServiceBayError;
use servicebay_domain::session::{Credentials, Session};

/// External authentication provider.
pub trait AuthProvider {
    /// The session as currently known to the provider, if any.
    fn current_session(
        &self,
    ) -> impl Future<Output = Result<Option<Session>, ServiceBayError>> + Send;

    /// Receive every session change (sign-in, sign-out, expiry).
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;

    /// Sign in with email and password.
    ///
    /// Rejections are reported as [`ServiceBayError::Auth`] carrying the
    /// provider's message.
    fn sign_in(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<Session, ServiceBayError>> + Send;

    /// End the current session. Succeeds when there is no session.
    fn sign_out(&self) -> impl Future<Output = Result<(), ServiceBayError>> + Send;
}

impl<T: AuthProvider + Send + Sync> AuthProvider for std::sync::Arc<T> {
    fn current_session(
        &self,
    ) -> impl Future<Output = Result<Option<Session>, ServiceBayError>> + Send {
        (**self).current_session()
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        (**self).subscribe()
    }

    fn sign_in(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<Session, ServiceBayError>> + Send {
        (**self).sign_in(credentials)
    }

    fn sign_out(&self) -> impl Future<Output = Result<(), ServiceBayError>> + Send {
        (**self).sign_out()
    }
}
