//! Shared application state for axum handlers.

use std::sync::Arc;

use servicebay_app::ports::{
    AuthProvider, CatalogRepository, PaymentGateway, PositionSource, PreferenceStore,
    ReverseGeocoder,
};
use servicebay_app::services::cart_store::CartStore;
use servicebay_app::services::catalog_service::CatalogService;
use servicebay_app::services::checkout::CheckoutFlow;
use servicebay_app::services::navigation::NavigationShell;
use servicebay_app::services::notifications::NotificationCenter;

/// The concrete adapter behind every port.
///
/// Implemented by a marker type in the binary (and in tests) so handlers are
/// generic over one parameter instead of six.
pub trait Ports: Send + Sync + 'static {
    type Catalog: CatalogRepository + Send + Sync + 'static;
    type Auth: AuthProvider + Send + Sync + 'static;
    type Position: PositionSource + Send + Sync + 'static;
    type Geocoder: ReverseGeocoder + Send + Sync + 'static;
    type Preferences: PreferenceStore + Send + Sync + 'static;
    type Payment: PaymentGateway + Send + Sync + 'static;
}

/// Navigation shell wired to the adapters of `P`.
pub type Navigation<P> = NavigationShell<
    <P as Ports>::Auth,
    <P as Ports>::Position,
    <P as Ports>::Geocoder,
    <P as Ports>::Preferences,
>;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<P: Ports> {
    /// Listing browse/search/booking.
    pub catalog: Arc<CatalogService<P::Catalog>>,
    /// The one cart, shared with navigation and checkout.
    pub cart: Arc<CartStore>,
    /// Pending toasts.
    pub notifications: Arc<NotificationCenter>,
    /// Top-bar state: location, session, dialogs.
    pub navigation: Arc<Navigation<P>>,
    /// Order summary and payment.
    pub checkout: Arc<CheckoutFlow<P::Payment>>,
}

impl<P: Ports> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            cart: Arc::clone(&self.cart),
            notifications: Arc::clone(&self.notifications),
            navigation: Arc::clone(&self.navigation),
            checkout: Arc::clone(&self.checkout),
        }
    }
}

impl<P: Ports> AppState<P> {
    /// Wire the services around a shared cart and notification center.
    pub fn new(
        catalog: P::Catalog,
        auth: P::Auth,
        position: P::Position,
        geocoder: P::Geocoder,
        preferences: P::Preferences,
        payment: P::Payment,
    ) -> Self {
        let cart = Arc::new(CartStore::new());
        let notifications = Arc::new(NotificationCenter::new());
        let navigation = NavigationShell::new(
            auth,
            position,
            geocoder,
            preferences,
            Arc::clone(&cart),
            Arc::clone(&notifications),
        );
        let checkout = CheckoutFlow::new(payment, Arc::clone(&cart), Arc::clone(&notifications));

        Self {
            catalog: Arc::new(CatalogService::new(catalog)),
            cart,
            notifications,
            navigation: Arc::new(navigation),
            checkout: Arc::new(checkout),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// The navigation shell and checkout flow must have been built around the
    /// same `cart` and `notifications`.
    pub fn from_arcs(
        catalog: Arc<CatalogService<P::Catalog>>,
        cart: Arc<CartStore>,
        notifications: Arc<NotificationCenter>,
        navigation: Arc<Navigation<P>>,
        checkout: Arc<CheckoutFlow<P::Payment>>,
    ) -> Self {
        Self {
            catalog,
            cart,
            notifications,
            navigation,
            checkout,
        }
    }
}
