//! View models shared by the storefront templates.

use servicebay_app::services::notifications::Toast;
use servicebay_domain::cart::CartItem;
use servicebay_domain::catalog::ServiceListing;
use servicebay_domain::route::Route;

use crate::state::{AppState, Ports};

/// Navigation bar, dialogs and toasts rendered around every page.
pub struct ChromeView {
    pub location_label: String,
    pub signed_in: bool,
    pub user_email: String,
    pub cart_count: usize,
    pub mobile_menu_open: bool,
    pub location_picker_open: bool,
    pub auth_dialog_open: bool,
    pub toasts: Vec<ToastView>,
    /// Path the chrome forms send the customer back to.
    pub return_to: String,
    /// Current value of the search box.
    pub search: String,
}

pub struct ToastView {
    pub id: u32,
    pub kind: &'static str,
    pub message: String,
}

impl From<Toast> for ToastView {
    fn from(toast: Toast) -> Self {
        Self {
            id: toast.id,
            kind: toast.notification.kind.as_str(),
            message: toast.notification.message,
        }
    }
}

/// Build the chrome for a page at `return_to`, draining pending toasts.
pub fn chrome<P: Ports>(state: &AppState<P>, return_to: &str, search: &str) -> ChromeView {
    let nav = state.navigation.view();
    let toasts = state
        .notifications
        .take_all()
        .into_iter()
        .map(ToastView::from)
        .collect();

    ChromeView {
        location_label: nav.location_label,
        signed_in: nav.user_email.is_some(),
        user_email: nav.user_email.unwrap_or_default(),
        cart_count: nav.cart_count,
        mobile_menu_open: nav.mobile_menu_open,
        location_picker_open: nav.location_picker_open,
        auth_dialog_open: nav.auth_dialog_open,
        toasts,
        return_to: return_to.to_string(),
        search: search.to_string(),
    }
}

/// A listing as shown in the catalog grid.
pub struct ListingCard {
    pub href: String,
    pub title: String,
    pub image: String,
    pub rating: String,
    pub price: String,
    pub description: String,
    pub location: String,
}

impl From<&ServiceListing> for ListingCard {
    fn from(listing: &ServiceListing) -> Self {
        Self {
            href: Route::Service(listing.id.clone()).path(),
            title: listing.title.clone(),
            image: listing.image.clone(),
            rating: format!("{:.1}", listing.rating),
            price: listing.price.to_string(),
            description: listing.description.clone(),
            location: listing.provider.location.clone(),
        }
    }
}

/// A cart line as shown on the cart and checkout pages.
pub struct CartLineView {
    /// Item id, percent-encoded for use as a path segment.
    pub path_id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        Self {
            path_id: urlencoding::encode(item.id.as_str()).into_owned(),
            title: item.title.clone(),
            date: item.date.clone(),
            time: item.time.clone(),
            price: item.price.to_string(),
            quantity: item.quantity,
            line_total: item.line_total().to_string(),
        }
    }
}

/// Only same-site absolute paths are accepted as redirect targets.
pub fn safe_return_to(raw: Option<&str>) -> String {
    match raw {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_string()
        }
        _ => Route::Home.path(),
    }
}
