//! Storefront routes and search queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::ListingId;

/// A trimmed, non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim `raw`; `None` when nothing is left.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A client-side page the user can be sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search(SearchQuery),
    Cart,
    Checkout,
    Service(ListingId),
}

impl Route {
    /// Path (and query string) of the route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Search(query) => format!("/search?q={}", urlencoding::encode(query.as_str())),
            Self::Cart => "/cart".to_string(),
            Self::Checkout => "/checkout".to_string(),
            Self::Service(id) => format!("/services/{}", urlencoding::encode(id.as_str())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
