//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod auth;
pub mod catalog;
pub mod geolocation;
pub mod payment;
pub mod preferences;

pub use auth::AuthProvider;
pub use catalog::CatalogRepository;
pub use geolocation::{PositionSource, ReverseGeocoder};
pub use payment::PaymentGateway;
pub use preferences::PreferenceStore;
