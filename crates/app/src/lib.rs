//! # servicebay-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CatalogRepository` — read-only service listings
//!   - `AuthProvider` — sessions, sign-in, sign-out
//!   - `PositionSource` / `ReverseGeocoder` — where the customer is
//!   - `PreferenceStore` — persisted settings (the selected location)
//!   - `PaymentGateway` — charges the cart total
//! - Provide the **state containers** behind the storefront:
//!   - `CartStore` — the cart reducer behind a watch channel
//!   - `NotificationCenter` — pending toasts
//!   - `NavigationShell` — location, session and dialog state of the top bar
//!   - `CheckoutFlow` — order summary and payment
//!   - `CatalogService` — browse, search and book listings
//!
//! ## Dependency rule
//! Depends on `servicebay-domain` only (plus `tokio` for channels and tasks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
