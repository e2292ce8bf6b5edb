//! Customer location as shown in the navigation bar.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Label shown before any location is known.
pub const DEFAULT_LOCATION_LABEL: &str = "Select Location";

/// Preference key under which the chosen address is persisted.
pub const LOCATION_PREFERENCE_KEY: &str = "selectedLocation";

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCoordinates`] when latitude is
    /// outside ±90 or longitude outside ±180 (or either is NaN).
    pub fn new(lat: f64, lon: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(ValidationError::InvalidCoordinates {
                lat: lat.to_string(),
                lon: lon.to_string(),
            });
        }
        Ok(Self { lat, lon })
    }
}

/// A location picked in the location dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationChoice {
    pub address: String,
    pub coordinates: Option<Coordinates>,
}

impl LocationChoice {
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyAddress`] for a blank address.
    pub fn new(
        address: impl Into<String>,
        coordinates: Option<Coordinates>,
    ) -> Result<Self, ValidationError> {
        let address = address.into().trim().to_string();
        if address.is_empty() {
            return Err(ValidationError::EmptyAddress);
        }
        Ok(Self {
            address,
            coordinates,
        })
    }
}
