//! JSON handlers for the cart.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use servicebay_domain::cart::{CartItem, CartState};
use servicebay_domain::id::ItemId;
use servicebay_domain::price::Price;

use crate::error::ApiError;
use crate::state::{AppState, Ports};

/// Cart snapshot as sent to clients (also the SSE payload).
#[derive(Debug, Serialize, Deserialize)]
pub struct CartBody {
    pub items: Vec<CartItem>,
    pub total: Price,
    pub item_count: usize,
}

impl From<&CartState> for CartBody {
    fn from(cart: &CartState) -> Self {
        Self {
            items: cart.items().to_vec(),
            total: cart.total(),
            item_count: cart.len(),
        }
    }
}

/// Request body for changing a quantity.
#[derive(Deserialize)]
pub struct QuantityRequest {
    pub quantity: u32,
}

/// Possible responses from the add endpoint.
pub enum AddResponse {
    Created(Json<CartBody>),
}

impl IntoResponse for AddResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/cart`
pub async fn show<P: Ports>(State(state): State<AppState<P>>) -> Json<CartBody> {
    Json(CartBody::from(&state.cart.snapshot()))
}

/// `POST /api/cart/items` — add (or replace) a booking.
pub async fn add<P: Ports>(
    State(state): State<AppState<P>>,
    Json(item): Json<CartItem>,
) -> Result<AddResponse, ApiError> {
    item.validate()?;
    let cart = state.cart.add(item);
    Ok(AddResponse::Created(Json(CartBody::from(&cart))))
}

/// `PUT /api/cart/items/{id}/quantity` — `0` removes the booking.
pub async fn update_quantity<P: Ports>(
    State(state): State<AppState<P>>,
    Path(id): Path<String>,
    Json(body): Json<QuantityRequest>,
) -> Result<Json<CartBody>, ApiError> {
    let cart = state.cart.update_quantity(ItemId::new(id)?, body.quantity);
    Ok(Json(CartBody::from(&cart)))
}

/// `DELETE /api/cart/items/{id}` — removing an unknown id is a no-op.
pub async fn remove<P: Ports>(
    State(state): State<AppState<P>>,
    Path(id): Path<String>,
) -> Result<Json<CartBody>, ApiError> {
    let cart = state.cart.remove(ItemId::new(id)?);
    Ok(Json(CartBody::from(&cart)))
}

/// `DELETE /api/cart`
pub async fn clear<P: Ports>(State(state): State<AppState<P>>) -> Json<CartBody> {
    Json(CartBody::from(&state.cart.clear()))
}
