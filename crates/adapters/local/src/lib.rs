//! # servicebay-adapter-local
//!
//! In-process implementations of the application ports, used by the demo
//! binary and by tests.
//!
//! ## Provided adapters
//!
//! | Adapter | Port | Behaviour |
//! |---------|------|-----------|
//! | [`StaticCatalog`] | `CatalogRepository` | Fixed list of home-service listings |
//! | [`InMemoryAuthProvider`] | `AuthProvider` | Demo email/password accounts, one session |
//! | [`InMemoryPreferenceStore`] | `PreferenceStore` | Lost on restart |
//! | [`JsonFilePreferenceStore`] | `PreferenceStore` | Flat JSON object on disk |
//! | [`FixedPositionSource`] | `PositionSource` | Configured coordinates, or none |
//! | [`SimulatedPaymentGateway`] | `PaymentGateway` | Sleeps, then issues a receipt |
//!
//! ## Dependency rule
//!
//! Depends on `servicebay-app` (port traits) and `servicebay-domain` only.

mod auth;
mod catalog;
mod error;
mod payment;
mod position;
mod preferences;

pub use auth::{INVALID_CREDENTIALS, InMemoryAuthProvider};
pub use catalog::StaticCatalog;
pub use error::LocalAdapterError;
pub use payment::{DEFAULT_PAYMENT_DELAY, SimulatedPaymentGateway};
pub use position::FixedPositionSource;
pub use preferences::{InMemoryPreferenceStore, JsonFilePreferenceStore};
