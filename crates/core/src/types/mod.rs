//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;
pub mod votes;

pub use cart::CartItem;
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::{NewProduct, NewProductError, Product};
pub use votes::{DownVotes, UpVotes, Votes};
