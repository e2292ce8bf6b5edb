//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//! Shared state containers ([`cart_store::CartStore`],
//! [`notifications::NotificationCenter`]) are passed around as `Arc`s.

pub mod cart_store;
pub mod catalog_service;
pub mod checkout;
pub mod navigation;
pub mod notifications;
