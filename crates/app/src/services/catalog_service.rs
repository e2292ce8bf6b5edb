//! Catalog service — browsing, searching and booking service listings.

use servicebay_domain::cart::CartItem;
use servicebay_domain::catalog::{ServiceListing, parse_booking_date};
use servicebay_domain::error::{NotFoundError, ServiceBayError};
use servicebay_domain::id::ListingId;
use servicebay_domain::route::SearchQuery;
use servicebay_domain::time::today;

use crate::ports::CatalogRepository;

/// Application service over the listing catalog.
pub struct CatalogService<R> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All listings in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    pub async fn list(&self) -> Result<Vec<ServiceListing>, ServiceBayError> {
        self.repo.get_all().await
    }

    /// Look up a listing by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceBayError::NotFound`] when no listing with `id` exists,
    /// or an error from the repository.
    pub async fn get(&self, id: &ListingId) -> Result<ServiceListing, ServiceBayError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Listing",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Listings matching `query`, in catalog order (no ranking).
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<ServiceListing>, ServiceBayError> {
        let listings = self.repo.get_all().await?;
        let hits: Vec<ServiceListing> = listings
            .into_iter()
            .filter(|listing| listing.matches(query))
            .collect();
        tracing::debug!(query = %query, hits = hits.len(), "catalog search");
        Ok(hits)
    }

    /// Build the cart item for booking listing `id` at `date` / `time`.
    ///
    /// `date` is the raw `YYYY-MM-DD` form value.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceBayError::NotFound`] for an unknown listing and
    /// [`ServiceBayError::Validation`] for a malformed or past date or a slot
    /// the provider does not offer.
    pub async fn book(
        &self,
        id: &ListingId,
        date: &str,
        time: &str,
    ) -> Result<CartItem, ServiceBayError> {
        let listing = self.get(id).await?;
        let date = parse_booking_date(date)?;
        listing.book(date, time, today())
    }
}
