//! Catalog port — read-only access to service listings.

use std::future::Future;

use servicebay_domain::catalog::ServiceListing;
use servicebay_domain::error::ServiceBayError;
use servicebay_domain::id::ListingId;

/// Read-only listing repository.
pub trait CatalogRepository {
    /// All listings in catalog order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<ServiceListing>, ServiceBayError>> + Send;

    fn get_by_id(
        &self,
        id: &ListingId,
    ) -> impl Future<Output = Result<Option<ServiceListing>, ServiceBayError>> + Send;
}
