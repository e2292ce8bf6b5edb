//! # servicebay-domain
//!
//! Pure domain model for the servicebay local-services storefront.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps, prices
//! - Define the **Cart** (bookings + running total) and its reducer
//! - Define **Service listings** (the catalog) and how a slot becomes a booking
//! - Define **Locations**, **Sessions**, **Routes** and **Notifications**
//! - Define the card / receipt shapes exchanged with a payment gateway
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod price;
pub mod time;

pub mod cart;
pub mod catalog;
pub mod location;
pub mod notification;
pub mod payment;
pub mod route;
pub mod session;
