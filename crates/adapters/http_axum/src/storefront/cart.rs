//! Cart page and its forms.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Form, Path, State};
use axum::response::Redirect;
use serde::Deserialize;

use servicebay_domain::id::ItemId;
use servicebay_domain::route::Route;

use super::views::{CartLineView, ChromeView, chrome};
use crate::error::ApiError;
use crate::state::{AppState, Ports};

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub chrome: ChromeView,
    pub lines: Vec<CartLineView>,
    pub total: String,
}

/// `GET /cart` — cart contents and total.
pub async fn show<P: Ports>(State(state): State<AppState<P>>) -> CartTemplate {
    let cart = state.cart.snapshot();

    CartTemplate {
        chrome: chrome(&state, &Route::Cart.path(), ""),
        lines: cart.items().iter().map(CartLineView::from).collect(),
        total: cart.total().to_string(),
    }
}

/// `POST /cart/items/{id}/remove` — remove one booking (PRG).
pub async fn remove<P: Ports>(
    State(state): State<AppState<P>>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    state.cart.remove(ItemId::new(id)?);
    Ok(Redirect::to(&Route::Cart.path()))
}

#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub quantity: u32,
}

/// `POST /cart/items/{id}/quantity` — change how many of a booking (PRG).
/// A quantity of zero removes the booking.
pub async fn update_quantity<P: Ports>(
    State(state): State<AppState<P>>,
    Path(id): Path<String>,
    Form(form): Form<QuantityForm>,
) -> Result<Redirect, ApiError> {
    state.cart.update_quantity(ItemId::new(id)?, form.quantity);
    Ok(Redirect::to(&Route::Cart.path()))
}

/// `POST /cart/clear` — empty the cart (PRG).
pub async fn clear<P: Ports>(State(state): State<AppState<P>>) -> Redirect {
    state.cart.clear();
    Redirect::to(&Route::Cart.path())
}
