//! The seam to the remote product catalog.
//!
//! The store never talks to a network itself: callers hand it a
//! [`ProductSource`] and the store drives the fetch lifecycle around it.
//! [`StaticSource`] is the in-repo implementation, serving a canned catalog
//! with optional simulated latency - enough for demos and for exercising
//! both fetch outcomes in tests.

use std::time::Duration;

use rust_decimal::Decimal;
use shopfront_core::{CurrencyCode, NewProduct, Price, Product};
use thiserror::Error;

/// A product fetch failure, carrying a human-readable message.
///
/// The message is stored in state verbatim and rendered to the user as-is.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    /// A failure with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An asynchronous source of the product catalog.
///
/// One fetch returns the full list; there is no pagination and no request
/// parameters.
pub trait ProductSource {
    /// Fetch the product list.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] with a displayable message when the catalog
    /// cannot be produced.
    fn fetch_products(
        &self,
    ) -> impl Future<Output = Result<Vec<Product>, SourceError>> + Send;
}

/// Outcome a [`StaticSource`] is configured to produce.
#[derive(Debug, Clone)]
enum Outcome {
    Products(Vec<Product>),
    Failure(String),
}

/// A canned product source.
#[derive(Debug, Clone)]
pub struct StaticSource {
    outcome: Outcome,
    latency: Option<Duration>,
}

impl StaticSource {
    /// A source that returns the given products.
    #[must_use]
    pub const fn with_products(products: Vec<Product>) -> Self {
        Self {
            outcome: Outcome::Products(products),
            latency: None,
        }
    }

    /// A source that fails every fetch with the given message.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Failure(message.into()),
            latency: None,
        }
    }

    /// A source serving the built-in sample catalog.
    #[must_use]
    pub fn sample() -> Self {
        Self::with_products(sample_catalog())
    }

    /// Add simulated latency before each response.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

impl ProductSource for StaticSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match &self.outcome {
            Outcome::Products(products) => Ok(products.clone()),
            Outcome::Failure(message) => Err(SourceError::new(message.clone())),
        }
    }
}

/// The small built-in shoe catalog served by [`StaticSource::sample`].
#[must_use]
pub fn sample_catalog() -> Vec<Product> {
    let drafts = [
        (
            "Oxford dress shoe",
            "https://images.shopfront.dev/oxford.png",
            Decimal::new(12900, 2),
            7,
            "A classic cap-toe oxford in dark brown leather.",
        ),
        (
            "Trail runner",
            "https://images.shopfront.dev/trail-runner.png",
            Decimal::new(8450, 2),
            12,
            "Lightweight runner with an aggressive lug sole.",
        ),
        (
            "Canvas high-top",
            "https://images.shopfront.dev/high-top.png",
            Decimal::new(5999, 2),
            3,
            "An everyday high-top in washed canvas.",
        ),
    ];

    drafts
        .into_iter()
        .filter_map(|(title, img, amount, stock, description)| {
            NewProduct {
                title: title.to_owned(),
                img: img.to_owned(),
                price: Price::new(amount, CurrencyCode::EUR),
                units_in_stock: stock,
                short_description: description.to_owned(),
            }
            .build()
            .ok()
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_serves_its_products() {
        let source = StaticSource::sample();
        let products = source.fetch_products().await.unwrap();
        assert_eq!(products.len(), 3);
    }

    #[tokio::test]
    async fn test_failing_source_reports_message() {
        let source = StaticSource::failing("Network error");
        let err = source.fetch_products().await.unwrap_err();
        assert_eq!(err.to_string(), "Network error");
    }

    #[tokio::test]
    async fn test_latency_is_simulated() {
        let source = StaticSource::sample().with_latency(Duration::from_millis(20));
        let before = std::time::Instant::now();
        source.fetch_products().await.unwrap();
        assert!(before.elapsed() >= Duration::from_millis(20));
    }
}
