//! JSON handlers for service listings.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use servicebay_domain::catalog::ServiceListing;
use servicebay_domain::id::ListingId;
use servicebay_domain::route::SearchQuery;

use crate::error::ApiError;
use crate::state::{AppState, Ports};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
}

/// `GET /api/services?q=` — all listings, or those matching `q`.
pub async fn list<P: Ports>(
    State(state): State<AppState<P>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ServiceListing>>, ApiError> {
    let listings = match params.q.as_deref().and_then(SearchQuery::parse) {
        Some(query) => state.catalog.search(&query).await?,
        None => state.catalog.list().await?,
    };
    Ok(Json(listings))
}

/// `GET /api/services/{id}`
pub async fn get<P: Ports>(
    State(state): State<AppState<P>>,
    Path(id): Path<String>,
) -> Result<Json<ServiceListing>, ApiError> {
    let listing = state.catalog.get(&ListingId::new(id)?).await?;
    Ok(Json(listing))
}
