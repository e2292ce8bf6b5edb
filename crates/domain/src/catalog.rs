//! Catalog — service listings offered on the marketplace.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::error::{ServiceBayError, ValidationError};
use crate::id::{ItemId, ListingId};
use crate::price::Price;
use crate::route::SearchQuery;

/// Date format used for booking dates (`2026-10-20`).
pub const BOOKING_DATE_FORMAT: &str = "%Y-%m-%d";

/// The business behind a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub phone: String,
    /// Bookable time slots, e.g. `"10:00 AM - 1:00 PM"`.
    pub availability: Vec<String>,
    pub location: String,
}

/// A bookable service shown in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceListing {
    pub id: ListingId,
    pub title: String,
    pub image: String,
    pub rating: f32,
    pub price: Price,
    pub description: String,
    pub provider: Provider,
}

impl ServiceListing {
    /// Case-insensitive substring match over title, description and
    /// provider name.
    #[must_use]
    pub fn matches(&self, query: &SearchQuery) -> bool {
        let needle = query.as_str().to_lowercase();
        [
            self.title.as_str(),
            self.description.as_str(),
            self.provider.name.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Turn a chosen slot into a cart item.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnavailableTimeSlot`] when `time` is not one
    /// of the provider's slots and [`ValidationError::InvalidBookingDate`]
    /// when `date` lies before `today`.
    pub fn book(
        &self,
        date: NaiveDate,
        time: &str,
        today: NaiveDate,
    ) -> Result<CartItem, ServiceBayError> {
        let date_text = date.format(BOOKING_DATE_FORMAT).to_string();
        if date < today {
            return Err(ValidationError::InvalidBookingDate(date_text).into());
        }
        if !self.provider.availability.iter().any(|slot| slot == time) {
            return Err(ValidationError::UnavailableTimeSlot(time.to_string()).into());
        }

        Ok(CartItem {
            id: ItemId::for_slot(&self.id, &date_text, time),
            title: self.title.clone(),
            date: date_text,
            time: time.to_string(),
            price: self.price,
            quantity: 1,
        })
    }
}

/// Parse a booking date typed into the booking form.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidBookingDate`] if `raw` is not `YYYY-MM-DD`.
pub fn parse_booking_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), BOOKING_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidBookingDate(raw.to_string()))
}
