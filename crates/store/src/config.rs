//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `SHOPFRONT_DATA_DIR` - Directory holding the mirror slots (default: ./data)
//! - `SHOPFRONT_PRODUCTS_KEY` - Slot name for the product list (default: shopfront-products)
//! - `SHOPFRONT_CART_KEY` - Slot name for the cart list (default: shopfront-cart-items)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_PRODUCTS_KEY: &str = "shopfront-products";
const DEFAULT_CART_KEY: &str = "shopfront-cart-items";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store configuration: where the mirror lives and what its slots are called.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persistent mirror slots
    pub data_dir: PathBuf,
    /// Slot name for the product list
    pub products_key: String,
    /// Slot name for the cart list
    pub cart_items_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a slot key is set to an empty string or
    /// contains a path separator.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("SHOPFRONT_DATA_DIR", DEFAULT_DATA_DIR));
        let products_key = get_env_or_default("SHOPFRONT_PRODUCTS_KEY", DEFAULT_PRODUCTS_KEY);
        validate_slot_key(&products_key, "SHOPFRONT_PRODUCTS_KEY")?;
        let cart_items_key = get_env_or_default("SHOPFRONT_CART_KEY", DEFAULT_CART_KEY);
        validate_slot_key(&cart_items_key, "SHOPFRONT_CART_KEY")?;

        Ok(Self {
            data_dir,
            products_key,
            cart_items_key,
        })
    }

    /// Configuration rooted at the given directory, with default slot keys.
    ///
    /// Useful for embedding and tests, where the environment should not leak
    /// into the store.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            products_key: DEFAULT_PRODUCTS_KEY.to_owned(),
            cart_items_key: DEFAULT_CART_KEY.to_owned(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a slot key can name a file inside the data directory.
fn validate_slot_key(key: &str, var_name: &str) -> Result<(), ConfigError> {
    if key.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "slot key cannot be empty".to_string(),
        ));
    }
    if key.contains(['/', '\\']) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "slot key cannot contain path separators".to_string(),
        ));
    }
    Ok(())
}
