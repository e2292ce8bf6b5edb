//! Typed identifier newtypes backed by non-empty strings.
//!
//! Catalog listings and cart items are keyed by opaque strings (the catalog
//! uses short numeric ids like `"1"`), so unlike a database-backed model these
//! are not UUIDs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wrap a string, rejecting empty or whitespace-only values.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::EmptyId`] for blank input.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::EmptyId);
                }
                Ok(Self(value))
            }

            /// Borrow the inner string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`CartItem`](crate::cart::CartItem).
    ItemId
);

define_id!(
    /// Unique identifier for a [`ServiceListing`](crate::catalog::ServiceListing).
    ListingId
);

impl ItemId {
    /// Identifier of the booking of `listing` at `date` / `time`.
    ///
    /// Booking the same slot twice yields the same id.
    #[must_use]
    pub fn for_slot(listing: &ListingId, date: &str, time: &str) -> Self {
        Self(format!("{listing}-{date}-{time}"))
    }
}
