//! JSON API handlers.
//!
//! - `GET    /api/cart`                      — cart snapshot
//! - `POST   /api/cart/items`                — add a booking
//! - `PUT    /api/cart/items/{id}/quantity`  — change a quantity
//! - `DELETE /api/cart/items/{id}`           — remove a booking
//! - `DELETE /api/cart`                      — empty the cart
//! - `GET    /api/cart/stream`               — SSE stream of cart snapshots
//! - `GET    /api/services?q=`               — list or search listings
//! - `GET    /api/services/{id}`             — single listing
//! - `GET    /api/session`                   — who is signed in
//! - `GET    /api/notifications`             — pending toasts
//! - `DELETE /api/notifications/{id}`        — dismiss a toast

#[allow(clippy::missing_errors_doc)]
pub mod cart;
#[allow(clippy::missing_errors_doc)]
pub mod catalog;
pub mod notifications;
pub mod session;
pub mod sse;

use axum::Router;
use axum::routing::{delete, get, post, put};

use crate::state::{AppState, Ports};

/// Build the `/api` sub-router.
pub fn routes<P: Ports>() -> Router<AppState<P>> {
    Router::new()
        .route("/cart", get(cart::show::<P>).delete(cart::clear::<P>))
        .route("/cart/items", post(cart::add::<P>))
        .route("/cart/items/{id}", delete(cart::remove::<P>))
        .route("/cart/items/{id}/quantity", put(cart::update_quantity::<P>))
        .route("/cart/stream", get(sse::cart_stream::<P>))
        .route("/services", get(catalog::list::<P>))
        .route("/services/{id}", get(catalog::get::<P>))
        .route("/session", get(session::show::<P>))
        .route("/notifications", get(notifications::list::<P>))
        .route("/notifications/{id}", delete(notifications::dismiss::<P>))
}
