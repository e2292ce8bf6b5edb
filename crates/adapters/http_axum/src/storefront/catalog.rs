//! Catalog pages: home, search results, listing detail and booking.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Form, Path, Query, State};
use axum::response::Redirect;
use serde::Deserialize;

use servicebay_domain::catalog::BOOKING_DATE_FORMAT;
use servicebay_domain::error::ServiceBayError;
use servicebay_domain::id::ListingId;
use servicebay_domain::route::{Route, SearchQuery};
use servicebay_domain::time::today;

use super::views::{ChromeView, ListingCard, chrome};
use crate::error::ApiError;
use crate::state::{AppState, Ports};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: ChromeView,
    pub listings: Vec<ListingCard>,
}

/// Search results template.
#[derive(Template, WebTemplate)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub chrome: ChromeView,
    /// Empty when no query was given.
    pub query: String,
    pub listings: Vec<ListingCard>,
}

/// Listing detail template with the booking form.
#[derive(Template, WebTemplate)]
#[template(path = "service.html")]
pub struct ServiceTemplate {
    pub chrome: ChromeView,
    pub book_action: String,
    pub title: String,
    pub image: String,
    pub rating: String,
    pub price: String,
    pub description: String,
    pub provider_name: String,
    pub provider_phone: String,
    pub provider_location: String,
    pub slots: Vec<String>,
    /// Earliest selectable date (`YYYY-MM-DD`).
    pub min_date: String,
}

/// `GET /` — all listings.
pub async fn index<P: Ports>(
    State(state): State<AppState<P>>,
) -> Result<HomeTemplate, ApiError> {
    let listings = state.catalog.list().await?;

    Ok(HomeTemplate {
        chrome: chrome(&state, &Route::Home.path(), ""),
        listings: listings.iter().map(ListingCard::from).collect(),
    })
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// `GET /search?q=` — listings matching `q`, or all of them without a query.
pub async fn search<P: Ports>(
    State(state): State<AppState<P>>,
    Query(params): Query<SearchParams>,
) -> Result<SearchTemplate, ApiError> {
    let query = params.q.as_deref().and_then(SearchQuery::parse);
    let (listings, return_to) = match &query {
        Some(query) => (
            state.catalog.search(query).await?,
            Route::Search(query.clone()).path(),
        ),
        None => (state.catalog.list().await?, "/search".to_string()),
    };
    let query = query.map(|q| q.as_str().to_string()).unwrap_or_default();

    Ok(SearchTemplate {
        chrome: chrome(&state, &return_to, &query),
        listings: listings.iter().map(ListingCard::from).collect(),
        query,
    })
}

/// `GET /services/{id}` — listing detail and booking form.
pub async fn detail<P: Ports>(
    State(state): State<AppState<P>>,
    Path(id): Path<String>,
) -> Result<ServiceTemplate, ApiError> {
    let id = ListingId::new(id)?;
    let listing = state.catalog.get(&id).await?;
    let route = Route::Service(id);

    Ok(ServiceTemplate {
        chrome: chrome(&state, &route.path(), ""),
        book_action: format!("{}/book", route.path()),
        title: listing.title,
        image: listing.image,
        rating: format!("{:.1}", listing.rating),
        price: listing.price.to_string(),
        description: listing.description,
        provider_name: listing.provider.name,
        provider_phone: listing.provider.phone,
        provider_location: listing.provider.location,
        slots: listing.provider.availability,
        min_date: today().format(BOOKING_DATE_FORMAT).to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub struct BookForm {
    pub date: String,
    pub time: String,
}

/// `POST /services/{id}/book` — add the chosen slot to the cart (PRG).
///
/// Goes to the cart on success. An invalid date or slot is toasted and the
/// customer stays on the listing.
pub async fn book<P: Ports>(
    State(state): State<AppState<P>>,
    Path(id): Path<String>,
    Form(form): Form<BookForm>,
) -> Result<Redirect, ApiError> {
    let id = ListingId::new(id)?;

    match state.catalog.book(&id, &form.date, &form.time).await {
        Ok(item) => {
            let title = item.title.clone();
            state.cart.add(item);
            state.notifications.success(format!("{title} added to cart!"));
            Ok(Redirect::to(&Route::Cart.path()))
        }
        Err(ServiceBayError::Validation(err)) => {
            state.notifications.error(err.to_string());
            Ok(Redirect::to(&Route::Service(id).path()))
        }
        Err(err) => Err(err.into()),
    }
}
