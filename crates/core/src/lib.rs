//! Shopfront Core - Shared types library.
//!
//! This crate provides the domain model used across all Shopfront components:
//! - `store` - Client-side state core (reducer, persistence, product loader)
//! - `integration-tests` - End-to-end scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product catalog, cart, vote, and price types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
