//! Shopfront Store - Client-side state core.
//!
//! This crate holds everything between the view layer and the outside world:
//! the state tree, the reducer that advances it, the pure list transforms
//! behind each user action, the persistent mirror that keeps both lists on
//! disk, and the one-shot startup product fetch.
//!
//! # Architecture
//!
//! - [`Store`] is the single entry point for the view layer: it owns the
//!   state, applies actions through the reducer, and mirrors every list
//!   change to disk. There is no global state; callers construct a store and
//!   pass it down by reference.
//! - [`catalog`] and [`cart`] are pure functions over immutable lists.
//!   Untouched elements are shared into the result, so the view layer can
//!   detect change with a pointer comparison.
//! - [`source::ProductSource`] is the seam to the remote catalog. The store
//!   never talks to a network itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_store::{Config, Store};
//! use shopfront_store::source::StaticSource;
//!
//! let config = Config::from_env()?;
//! let mut store = Store::open(&config)?;
//!
//! // One-shot startup fetch, only if nothing was restored from disk.
//! store.load_products(&StaticSource::sample()).await;
//!
//! // User actions.
//! if let Some(first) = store.products().first() {
//!     let id = first.id;
//!     store.up_vote(id);
//!     store.add_to_cart(id);
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod persist;
pub mod reducer;
pub mod source;
pub mod store;

pub use config::{Config, ConfigError};
pub use persist::{Mirror, PersistError};
pub use reducer::{Action, AppState, CartList, ProductList};
pub use store::Store;
