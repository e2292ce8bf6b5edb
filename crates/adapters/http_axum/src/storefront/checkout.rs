//! Checkout page and payment form.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect, Response};

use servicebay_app::services::checkout::CheckoutEntry;
use servicebay_domain::payment::CardDetails;
use servicebay_domain::route::Route;

use super::views::{CartLineView, ChromeView, chrome};
use crate::state::{AppState, Ports};

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub chrome: ChromeView,
    pub lines: Vec<CartLineView>,
    pub total: String,
    /// A payment is in flight; the pay button is disabled.
    pub processing: bool,
}

/// Response from the checkout page handler.
pub enum CheckoutResponse {
    /// Empty cart: redirect, render nothing.
    Redirect(Redirect),
    Page(CheckoutTemplate),
}

impl IntoResponse for CheckoutResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
            Self::Page(page) => page.into_response(),
        }
    }
}

/// `GET /checkout` — order summary and card form.
pub async fn show<P: Ports>(State(state): State<AppState<P>>) -> CheckoutResponse {
    match state.checkout.enter() {
        CheckoutEntry::Redirect(route) => CheckoutResponse::Redirect(Redirect::to(&route.path())),
        CheckoutEntry::Ready(summary) => CheckoutResponse::Page(CheckoutTemplate {
            chrome: chrome(&state, &Route::Checkout.path(), ""),
            lines: summary.items.iter().map(CartLineView::from).collect(),
            total: summary.total.to_string(),
            processing: summary.processing,
        }),
    }
}

/// `POST /checkout/pay` — charge the card and go to the next route (PRG).
pub async fn pay<P: Ports>(
    State(state): State<AppState<P>>,
    Form(card): Form<CardDetails>,
) -> Redirect {
    let outcome = state.checkout.pay(card).await;
    Redirect::to(&outcome.next_route().path())
}
