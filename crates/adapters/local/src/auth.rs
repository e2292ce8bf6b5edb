//! In-memory auth provider with a fixed set of demo accounts.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;

use servicebay_app::ports::AuthProvider;
use servicebay_domain::error::{AuthError, ServiceBayError};
use servicebay_domain::session::{Credentials, Session, User};
use servicebay_domain::time::now;

/// Message returned for an unknown email or a wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid login credentials";

struct Account {
    id: uuid::Uuid,
    password: String,
}

/// Auth provider holding accounts and the single current session in memory.
pub struct InMemoryAuthProvider {
    accounts: HashMap<String, Account>,
    session: watch::Sender<Option<Session>>,
    session_ttl: Option<Duration>,
}

impl InMemoryAuthProvider {
    /// Provider accepting the given `(email, password)` pairs.
    ///
    /// Emails are matched case-insensitively.
    pub fn new<I, E, P>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (E, P)>,
        E: Into<String>,
        P: Into<String>,
    {
        let accounts = accounts
            .into_iter()
            .map(|(email, password)| {
                (
                    email.into().trim().to_lowercase(),
                    Account {
                        id: uuid::Uuid::new_v4(),
                        password: password.into(),
                    },
                )
            })
            .collect();

        Self {
            accounts,
            session: watch::Sender::new(None),
            session_ttl: None,
        }
    }

    /// Let sessions expire `ttl` after sign-in.
    ///
    /// A `ttl` too large to represent means the session never expires.
    #[must_use]
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = Some(ttl);
        self
    }

    fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let email = credentials.email.trim().to_lowercase();
        let account = self
            .accounts
            .get(&email)
            .filter(|account| account.password == credentials.password)
            .ok_or_else(|| AuthError::new(INVALID_CREDENTIALS))?;

        let expires_at = self
            .session_ttl
            .and_then(|ttl| chrono::Duration::from_std(ttl).ok())
            .and_then(|ttl| now().checked_add_signed(ttl));

        Ok(Session {
            user: User {
                id: account.id,
                email: Some(email),
            },
            expires_at,
        })
    }
}

impl AuthProvider for InMemoryAuthProvider {
    fn current_session(
        &self,
    ) -> impl Future<Output = Result<Option<Session>, ServiceBayError>> + Send {
        let expired = self
            .session
            .borrow()
            .as_ref()
            .is_some_and(|session| session.is_expired(now()));
        if expired {
            tracing::debug!("session expired");
            self.session.send_replace(None);
        }
        let session = self.session.borrow().clone();
        async { Ok(session) }
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }

    fn sign_in(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<Session, ServiceBayError>> + Send {
        let result = self.authenticate(&credentials).map(|session| {
            tracing::info!(email = ?session.email(), "signed in");
            self.session.send_replace(Some(session.clone()));
            session
        });
        async { result.map_err(ServiceBayError::from) }
    }

    fn sign_out(&self) -> impl Future<Output = Result<(), ServiceBayError>> + Send {
        if self.session.send_replace(None).is_some() {
            tracing::info!("signed out");
        }
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> InMemoryAuthProvider {
        InMemoryAuthProvider::new([("asha@example.com", "secret")])
    }

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials::new(email, password).unwrap()
    }

    #[tokio::test]
    async fn should_not_expire_session_when_ttl_overflows() {
        let auth = provider().with_session_ttl(Duration::from_secs(10_000_000_000_000));

        let session = auth.sign_in(creds("asha@example.com", "secret")).await.unwrap();

        assert_eq!(session.expires_at, None);
    }

    #[tokio::test]
    async fn should_set_expiry_from_ttl() {
        let auth = provider().with_session_ttl(Duration::from_secs(3600));

        let session = auth.sign_in(creds("asha@example.com", "secret")).await.unwrap();

        assert!(session.expires_at.is_some_and(|at| at > now()));
    }

    #[tokio::test]
    async fn should_start_without_session() {
        assert_eq!(provider().current_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_sign_in_known_account() {
        let auth = provider();
        let session = auth.sign_in(creds("Asha@Example.com", "secret")).await.unwrap();

        assert_eq!(session.email(), Some("asha@example.com"));
        assert_eq!(auth.current_session().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn should_keep_user_id_across_sign_ins() {
        let auth = provider();
        let first = auth.sign_in(creds("asha@example.com", "secret")).await.unwrap();
        auth.sign_out().await.unwrap();
        let second = auth.sign_in(creds("asha@example.com", "secret")).await.unwrap();
        assert_eq!(first.user.id, second.user.id);
    }

    #[tokio::test]
    async fn should_reject_wrong_password_with_provider_message() {
        let err = provider()
            .sign_in(creds("asha@example.com", "nope"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn should_reject_unknown_email() {
        let result = provider().sign_in(creds("ravi@example.com", "secret")).await;
        assert!(matches!(result, Err(ServiceBayError::Auth(_))));
    }

    #[tokio::test]
    async fn should_notify_subscribers() {
        let auth = provider();
        let mut rx = auth.subscribe();

        auth.sign_in(creds("asha@example.com", "secret")).await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_some());

        auth.sign_out().await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
    }

    #[tokio::test]
    async fn should_sign_out_without_session() {
        let auth = provider();
        assert!(auth.sign_out().await.is_ok());
        assert_eq!(auth.current_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_drop_expired_session() {
        let auth = provider().with_session_ttl(Duration::ZERO);
        auth.sign_in(creds("asha@example.com", "secret")).await.unwrap();

        assert_eq!(auth.current_session().await.unwrap(), None);
    }
}
