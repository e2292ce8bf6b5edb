//! Navigation shell — state behind the storefront's top bar.
//!
//! Owns the location label, the current session, the mobile-menu flag and the
//! open/closed state of the location picker and auth dialog. The cart badge
//! is read from the shared [`CartStore`].
//!
//! Two background tasks run while the shell is mounted:
//! - a **session watcher** mirroring the auth provider's session changes;
//! - a **location lookup** (position source → reverse geocoder → preference
//!   store).
//!
//! Every lookup carries a generation number. [`NavigationShell::teardown`]
//! (also run on drop) aborts both tasks and bumps the generation, so a result
//! that still arrives is discarded instead of applied.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;

use servicebay_domain::location::{DEFAULT_LOCATION_LABEL, LOCATION_PREFERENCE_KEY, LocationChoice};
use servicebay_domain::route::{Route, SearchQuery};
use servicebay_domain::session::{Credentials, Session};
use servicebay_domain::time::now;

use super::cart_store::CartStore;
use super::notifications::NotificationCenter;
use crate::ports::{AuthProvider, PositionSource, PreferenceStore, ReverseGeocoder};

pub const LOCATION_UPDATED: &str = "Location updated successfully!";
pub const SIGNED_IN: &str = "Successfully logged in!";
pub const SIGNED_OUT: &str = "Successfully logged out!";

/// Render-ready snapshot of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    pub location_label: String,
    /// Email of the signed-in user; `None` when signed out or expired.
    pub user_email: Option<String>,
    pub cart_count: usize,
    pub mobile_menu_open: bool,
    pub location_picker_open: bool,
    pub auth_dialog_open: bool,
}

#[derive(Debug)]
struct NavState {
    location_label: String,
    session: Option<Session>,
    mobile_menu_open: bool,
    location_picker_open: bool,
    auth_dialog_open: bool,
    /// Bumped whenever outstanding lookups must be ignored.
    generation: u64,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            location_label: DEFAULT_LOCATION_LABEL.to_string(),
            session: None,
            mobile_menu_open: false,
            location_picker_open: false,
            auth_dialog_open: false,
            generation: 0,
        }
    }
}

struct Shared<A, P, G, S> {
    auth: A,
    position: P,
    geocoder: G,
    preferences: S,
    cart: Arc<CartStore>,
    notifications: Arc<NotificationCenter>,
    state: Mutex<NavState>,
}

impl<A, P, G, S> Shared<A, P, G, S> {
    fn lock(&self) -> MutexGuard<'_, NavState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump_generation(&self) -> u64 {
        let mut state = self.lock();
        state.generation = state.generation.wrapping_add(1);
        state.generation
    }
}

impl<A, P, G, S> Shared<A, P, G, S>
where
    P: PositionSource,
    G: ReverseGeocoder,
    S: PreferenceStore,
{
    async fn lookup(&self, generation: u64) {
        let coordinates = match self.position.current_position().await {
            Ok(Some(coordinates)) => coordinates,
            Ok(None) => {
                tracing::debug!("geolocation unavailable");
                return;
            }
            Err(err) => {
                tracing::warn!(error = ?err, "failed to read current position");
                return;
            }
        };

        let label = match self.geocoder.reverse(coordinates).await {
            Ok(label) => label,
            Err(err) => {
                tracing::warn!(error = ?err, lat = coordinates.lat, lon = coordinates.lon, "reverse geocoding failed");
                return;
            }
        };

        {
            let mut state = self.lock();
            if state.generation != generation {
                tracing::debug!(generation, current = state.generation, "discarding stale location lookup");
                return;
            }
            state.location_label.clone_from(&label);
        }
        tracing::info!(location = %label, "location detected");
        self.persist_location(&label).await;
    }

    async fn persist_location(&self, label: &str) {
        if let Err(err) = self.preferences.set(LOCATION_PREFERENCE_KEY, label).await {
            tracing::warn!(error = ?err, "failed to save location preference");
        }
    }
}

#[derive(Debug, Default)]
struct Tasks {
    lookup: Option<JoinHandle<()>>,
    session: Option<JoinHandle<()>>,
}

/// State container for the navigation bar.
pub struct NavigationShell<A, P, G, S> {
    shared: Arc<Shared<A, P, G, S>>,
    tasks: Mutex<Tasks>,
}

impl<A, P, G, S> NavigationShell<A, P, G, S> {
    /// Create an unmounted shell showing the default location label.
    pub fn new(
        auth: A,
        position: P,
        geocoder: G,
        preferences: S,
        cart: Arc<CartStore>,
        notifications: Arc<NotificationCenter>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                auth,
                position,
                geocoder,
                preferences,
                cart,
                notifications,
                state: Mutex::new(NavState::default()),
            }),
            tasks: Mutex::new(Tasks::default()),
        }
    }

    fn lock_tasks(&self) -> MutexGuard<'_, Tasks> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Abort the background tasks and invalidate any lookup still in flight.
    pub fn teardown(&self) {
        self.shared.bump_generation();
        let mut tasks = self.lock_tasks();
        if let Some(handle) = tasks.lookup.take() {
            handle.abort();
        }
        if let Some(handle) = tasks.session.take() {
            handle.abort();
        }
    }

    fn cancel_lookup(&self) {
        self.shared.bump_generation();
        if let Some(handle) = self.lock_tasks().lookup.take() {
            handle.abort();
        }
    }

    /// Whether a location lookup task is still running.
    #[must_use]
    pub fn is_detecting(&self) -> bool {
        self.lock_tasks()
            .lookup
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// The signed-in session, unless it has expired.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.shared
            .lock()
            .session
            .clone()
            .filter(|session| !session.is_expired(now()))
    }

    #[must_use]
    pub fn view(&self) -> NavView {
        let cart_count = self.shared.cart.len();
        let user_email = self
            .session()
            .and_then(|session| session.user.email);
        let state = self.shared.lock();

        NavView {
            location_label: state.location_label.clone(),
            user_email,
            cart_count,
            mobile_menu_open: state.mobile_menu_open,
            location_picker_open: state.location_picker_open,
            auth_dialog_open: state.auth_dialog_open,
        }
    }

    pub fn open_location_picker(&self) {
        self.shared.lock().location_picker_open = true;
    }

    pub fn close_location_picker(&self) {
        self.shared.lock().location_picker_open = false;
    }

    pub fn open_auth_dialog(&self) {
        self.shared.lock().auth_dialog_open = true;
    }

    pub fn close_auth_dialog(&self) {
        self.shared.lock().auth_dialog_open = false;
    }

    pub fn toggle_mobile_menu(&self) {
        let mut state = self.shared.lock();
        state.mobile_menu_open = !state.mobile_menu_open;
    }

    /// Route for a submitted search box, `None` for a blank query.
    pub fn submit_search(&self, raw: &str) -> Option<Route> {
        let query = SearchQuery::parse(raw)?;
        self.shared.lock().mobile_menu_open = false;
        Some(Route::Search(query))
    }
}

impl<A, P, G, S> NavigationShell<A, P, G, S>
where
    A: AuthProvider + Send + Sync + 'static,
    P: PositionSource + Send + Sync + 'static,
    G: ReverseGeocoder + Send + Sync + 'static,
    S: PreferenceStore + Send + Sync + 'static,
{
    /// Load the saved location and current session, then start the session
    /// watcher and a location lookup.
    pub async fn mount(&self) {
        let saved = match self.shared.preferences.get(LOCATION_PREFERENCE_KEY).await {
            Ok(saved) => saved.filter(|label| !label.trim().is_empty()),
            Err(err) => {
                tracing::warn!(error = ?err, "failed to read location preference");
                None
            }
        };
        let session = match self.shared.auth.current_session().await {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = ?err, "failed to read current session");
                None
            }
        };

        {
            let mut state = self.shared.lock();
            if let Some(label) = saved {
                state.location_label = label;
            }
            state.session = session;
        }

        self.watch_session();
        self.detect_location();
    }

    fn watch_session(&self) {
        let shared = Arc::clone(&self.shared);
        let mut rx = shared.auth.subscribe();
        let handle = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let session = rx.borrow_and_update().clone();
                tracing::debug!(signed_in = session.is_some(), "session changed");
                shared.lock().session = session;
            }
        });
        if let Some(previous) = self.lock_tasks().session.replace(handle) {
            previous.abort();
        }
    }

    /// Start a fresh location lookup, cancelling the previous one.
    pub fn detect_location(&self) {
        let generation = self.shared.bump_generation();
        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            shared.lookup(generation).await;
        });
        if let Some(previous) = self.lock_tasks().lookup.replace(handle) {
            previous.abort();
        }
    }

    /// Apply a location picked in the dialog.
    ///
    /// A lookup still in flight is cancelled so it cannot overwrite the
    /// manual choice.
    pub async fn select_location(&self, choice: LocationChoice) {
        self.cancel_lookup();
        {
            let mut state = self.shared.lock();
            state.location_label.clone_from(&choice.address);
            state.location_picker_open = false;
        }
        self.shared.persist_location(&choice.address).await;
        self.shared.notifications.success(LOCATION_UPDATED);
    }

    /// Sign in through the auth provider. Returns whether it succeeded.
    ///
    /// On failure the provider's message is queued as an error toast and the
    /// dialog stays open.
    pub async fn sign_in(&self, credentials: Credentials) -> bool {
        match self.shared.auth.sign_in(credentials).await {
            Ok(session) => {
                {
                    let mut state = self.shared.lock();
                    state.session = Some(session);
                    state.auth_dialog_open = false;
                }
                self.shared.notifications.success(SIGNED_IN);
                true
            }
            Err(err) => {
                tracing::warn!(error = ?err, "sign in rejected");
                self.shared.notifications.error(err.user_message());
                false
            }
        }
    }

    /// Sign out. Never fails; provider errors become an error toast.
    pub async fn sign_out(&self) {
        match self.shared.auth.sign_out().await {
            Ok(()) => {
                self.shared.lock().session = None;
                self.shared.notifications.success(SIGNED_OUT);
            }
            Err(err) => {
                tracing::warn!(error = ?err, "sign out failed");
                self.shared.notifications.error(err.user_message());
            }
        }
    }
}

impl<A, P, G, S> Drop for NavigationShell<A, P, G, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
