//! Server-side rendered storefront (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod cart;
#[allow(clippy::missing_errors_doc)]
pub mod catalog;
pub mod checkout;
pub mod navigation;
pub mod views;

use axum::Router;
use axum::routing::{get, post};

use crate::state::{AppState, Ports};

/// Build the storefront sub-router for SSR HTML pages and their forms.
pub fn routes<P: Ports>() -> Router<AppState<P>> {
    Router::new()
        .route("/", get(catalog::index::<P>))
        .route("/search", get(catalog::search::<P>).post(navigation::search::<P>))
        .route("/services/{id}", get(catalog::detail::<P>))
        .route("/services/{id}/book", post(catalog::book::<P>))
        .route("/cart", get(cart::show::<P>))
        .route("/cart/items/{id}/remove", post(cart::remove::<P>))
        .route("/cart/items/{id}/quantity", post(cart::update_quantity::<P>))
        .route("/cart/clear", post(cart::clear::<P>))
        .route("/checkout", get(checkout::show::<P>))
        .route("/checkout/pay", post(checkout::pay::<P>))
        .route("/location", post(navigation::select_location::<P>))
        .route("/location/open", post(navigation::open_location::<P>))
        .route("/location/close", post(navigation::close_location::<P>))
        .route("/location/detect", post(navigation::detect_location::<P>))
        .route("/auth/open", post(navigation::open_auth::<P>))
        .route("/auth/close", post(navigation::close_auth::<P>))
        .route("/auth/sign-in", post(navigation::sign_in::<P>))
        .route("/auth/sign-out", post(navigation::sign_out::<P>))
        .route("/menu/toggle", post(navigation::toggle_menu::<P>))
}
