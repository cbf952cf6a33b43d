//! Integration tests for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `startup_fetch` - Startup product-fetch lifecycle against the mirror
//! - `cart_flow` - Cart mutations observed through the on-disk mirror
//! - `mirror_recovery` - Restarting from present, absent, and corrupt slots
//!
//! Each test gets a [`TestContext`]: a scratch mirror directory, a config
//! rooted there, and helpers for opening stores and inspecting slot files
//! the way a second session would.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use std::sync::Once;

use rust_decimal::Decimal;
use shopfront_core::{CurrencyCode, NewProduct, Price};
use shopfront_store::{Config, Store};
use tempfile::TempDir;

static INIT_TRACING: Once = Once::new();

/// A scratch environment for one test: mirror directory plus config.
pub struct TestContext {
    _dir: TempDir,
    /// Config rooted at the scratch directory, default slot keys.
    pub config: Config,
}

impl TestContext {
    /// Create a fresh scratch environment.
    ///
    /// # Panics
    ///
    /// Panics if the scratch directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        INIT_TRACING.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "shopfront_store=debug".into()),
                )
                .with_test_writer()
                .try_init();
        });

        let dir = TempDir::new().expect("create scratch dir");
        let config = Config::new(dir.path());
        Self { _dir: dir, config }
    }

    /// Open a store over the scratch mirror, as a session would at startup.
    ///
    /// # Panics
    ///
    /// Panics if the mirror directory cannot be opened.
    #[must_use]
    pub fn open_store(&self) -> Store {
        Store::open(&self.config).expect("open store")
    }

    /// Read a mirror slot straight from disk, bypassing the store.
    ///
    /// Returns `None` when the slot file does not exist.
    #[must_use]
    pub fn slot_json(&self, key: &str) -> Option<serde_json::Value> {
        let path = self.config.data_dir.join(format!("{key}.json"));
        let raw = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// The products slot as raw JSON.
    #[must_use]
    pub fn products_slot(&self) -> Option<serde_json::Value> {
        self.slot_json(&self.config.products_key)
    }

    /// The cart slot as raw JSON.
    #[must_use]
    pub fn cart_slot(&self) -> Option<serde_json::Value> {
        self.slot_json(&self.config.cart_items_key)
    }

    /// Overwrite a slot file with arbitrary bytes (e.g. to corrupt it).
    ///
    /// # Panics
    ///
    /// Panics if the slot file cannot be written.
    pub fn write_slot_raw(&self, key: &str, raw: &str) {
        let path = self.config.data_dir.join(format!("{key}.json"));
        std::fs::write(path, raw).expect("write slot file");
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A valid new-product draft with the given title and stock.
#[must_use]
pub fn draft(title: &str, stock: u32) -> NewProduct {
    NewProduct {
        title: title.to_owned(),
        img: format!("https://images.shopfront.dev/{}.png", title.to_lowercase()),
        price: Price::new(Decimal::new(4999, 2), CurrencyCode::EUR),
        units_in_stock: stock,
        short_description: format!("{title} from the test catalog."),
    }
}
