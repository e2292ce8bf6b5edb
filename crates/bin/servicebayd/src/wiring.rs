//! Adapter selection driven by [`Config`].
//!
//! Some ports have more than one backend depending on configuration; the
//! enums here pick one at startup so [`LocalPorts`] can name a single type
//! per port.

use servicebay_adapter_http_axum::state::{AppState, Ports};
use servicebay_adapter_local::{
    FixedPositionSource, InMemoryAuthProvider, InMemoryPreferenceStore, JsonFilePreferenceStore,
    SimulatedPaymentGateway, StaticCatalog,
};
use servicebay_adapter_nominatim::NominatimGeocoder;
use servicebay_app::ports::{PreferenceStore, ReverseGeocoder};
use servicebay_domain::error::ServiceBayError;
use servicebay_domain::location::Coordinates;

use crate::config::Config;

/// Port wiring used by the daemon.
pub struct LocalPorts;

impl Ports for LocalPorts {
    type Catalog = StaticCatalog;
    type Auth = InMemoryAuthProvider;
    type Position = FixedPositionSource;
    type Geocoder = Geocoder;
    type Preferences = Preferences;
    type Payment = SimulatedPaymentGateway;
}

/// Preference backend: a JSON file when a path is configured, memory otherwise.
pub enum Preferences {
    File(JsonFilePreferenceStore),
    Memory(InMemoryPreferenceStore),
}

impl PreferenceStore for Preferences {
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceBayError> {
        match self {
            Self::File(store) => store.get(key).await,
            Self::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ServiceBayError> {
        match self {
            Self::File(store) => store.set(key, value).await,
            Self::Memory(store) => store.set(key, value).await,
        }
    }
}

/// Reverse geocoder: Nominatim, or plain coordinates when geocoding is off.
pub enum Geocoder {
    Nominatim(NominatimGeocoder),
    Coordinates,
}

impl ReverseGeocoder for Geocoder {
    async fn reverse(&self, coordinates: Coordinates) -> Result<String, ServiceBayError> {
        match self {
            Self::Nominatim(geocoder) => geocoder.reverse(coordinates).await,
            Self::Coordinates => Ok(format!("{:.4}, {:.4}", coordinates.lat, coordinates.lon)),
        }
    }
}

/// Build the application state from configuration.
///
/// # Errors
///
/// Returns an error if the catalog cannot be seeded, the configured position
/// is invalid, or the HTTP client for Nominatim cannot be built.
pub fn build_state(config: &Config) -> Result<AppState<LocalPorts>, Box<dyn std::error::Error>> {
    let catalog = StaticCatalog::demo()?;

    let accounts = config
        .auth
        .accounts
        .iter()
        .map(|account| (account.email.clone(), account.password.clone()));
    let mut auth = InMemoryAuthProvider::new(accounts);
    if let Some(ttl) = config.session_ttl() {
        auth = auth.with_session_ttl(ttl);
    }

    let position = FixedPositionSource::new(config.position()?);

    let geocoder = if config.geocoding.enabled {
        Geocoder::Nominatim(NominatimGeocoder::new(&config.geocoding.nominatim)?)
    } else {
        Geocoder::Coordinates
    };

    let preferences = match &config.preferences.path {
        Some(path) => Preferences::File(JsonFilePreferenceStore::new(path.clone())),
        None => Preferences::Memory(InMemoryPreferenceStore::new()),
    };

    let payment = SimulatedPaymentGateway::new(config.payment_delay());

    tracing::info!(
        listings = catalog.len(),
        geocoding = config.geocoding.enabled,
        persistent_preferences = config.preferences.path.is_some(),
        "adapters ready"
    );

    Ok(AppState::new(
        catalog,
        auth,
        position,
        geocoder,
        preferences,
        payment,
    ))
}
