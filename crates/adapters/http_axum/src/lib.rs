//! # servicebay-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered storefront** (`/`, `/search`,
//!   `/services/{id}`, `/cart`, `/checkout`) with the navigation bar, its
//!   dialogs and pending toasts on every page
//! - Serve a **JSON API** for the cart, the catalog and the session
//!   (`/api/cart`, `/api/services`, `/api/session`, …) plus an SSE stream of
//!   cart snapshots
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## No-JS storefront approach
//! - Every page is rendered server-side as complete HTML.
//! - Buttons are `<form>` elements that POST back to the server and redirect
//!   (PRG pattern) to the next route.
//! - Dialogs and the mobile menu are server-side flags toggled by those
//!   forms; toasts fade out with CSS.
//!
//! ## Dependency rule
//! Depends on `servicebay-app` (for port traits and services) and
//! `servicebay-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
pub mod storefront;
