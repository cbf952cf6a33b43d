//! Catalog product type and the new-product draft.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::id::ProductId;
use super::price::Price;
use super::votes::Votes;

/// A catalog entry with stock, price, and vote counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Product image URL.
    pub img: String,
    /// Unit price.
    pub price: Price,
    /// Units currently in stock. Bounds how far a cart quantity may go.
    pub units_in_stock: u32,
    /// One-line description shown on the product card.
    pub short_description: String,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
    /// Whether the user has favorited this product.
    pub is_favorite: bool,
    /// Up/down vote counters.
    pub votes: Votes,
}

/// Errors that can occur when building a [`Product`] from a [`NewProduct`].
#[derive(thiserror::Error, Debug)]
pub enum NewProductError {
    /// The title is empty or whitespace.
    #[error("title cannot be empty")]
    EmptyTitle,
    /// The image field is not a valid URL.
    #[error("invalid image URL: {0}")]
    InvalidImageUrl(#[from] url::ParseError),
    /// The price is below zero.
    #[error("price cannot be negative")]
    NegativePrice,
}

/// A draft product as entered in the new-product form.
///
/// Turn a draft into a catalog [`Product`] with [`NewProduct::build`], which
/// validates the fields, mints an ID, and stamps timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Display title.
    pub title: String,
    /// Product image URL.
    pub img: String,
    /// Unit price.
    pub price: Price,
    /// Units in stock.
    pub units_in_stock: u32,
    /// One-line description.
    pub short_description: String,
}

impl NewProduct {
    /// Build a catalog product from this draft.
    ///
    /// The product starts unfavorited with zeroed vote counters at the
    /// default limits.
    ///
    /// # Errors
    ///
    /// Returns [`NewProductError`] if the title is empty, the image is not a
    /// valid URL, or the price is negative.
    pub fn build(self) -> Result<Product, NewProductError> {
        if self.title.trim().is_empty() {
            return Err(NewProductError::EmptyTitle);
        }
        Url::parse(&self.img)?;
        if self.price.amount.is_sign_negative() && !self.price.amount.is_zero() {
            return Err(NewProductError::NegativePrice);
        }

        let now = Utc::now();
        Ok(Product {
            id: ProductId::generate(),
            title: self.title,
            img: self.img,
            price: self.price,
            units_in_stock: self.units_in_stock,
            short_description: self.short_description,
            created_at: now,
            updated_at: now,
            is_favorite: false,
            votes: Votes::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::types::price::CurrencyCode;

    use super::*;

    fn draft() -> NewProduct {
        NewProduct {
            title: "Suede boot".to_owned(),
            img: "https://example.com/boot.png".to_owned(),
            price: Price::new(Decimal::new(7400, 2), CurrencyCode::EUR),
            units_in_stock: 5,
            short_description: "A sturdy suede boot.".to_owned(),
        }
    }

    #[test]
    fn test_build_stamps_defaults() {
        let product = draft().build().expect("valid draft");
        assert!(!product.is_favorite);
        assert_eq!(product.votes, Votes::default());
        assert_eq!(product.created_at, product.updated_at);
        assert_eq!(product.units_in_stock, 5);
    }

    #[test]
    fn test_build_mints_unique_ids() {
        let a = draft().build().expect("valid draft");
        let b = draft().build().expect("valid draft");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_build_rejects_empty_title() {
        let mut bad = draft();
        bad.title = "   ".to_owned();
        assert!(matches!(bad.build(), Err(NewProductError::EmptyTitle)));
    }

    #[test]
    fn test_build_rejects_bad_image_url() {
        let mut bad = draft();
        bad.img = "not a url".to_owned();
        assert!(matches!(
            bad.build(),
            Err(NewProductError::InvalidImageUrl(_))
        ));
    }

    #[test]
    fn test_build_rejects_negative_price() {
        let mut bad = draft();
        bad.price = Price::new(Decimal::new(-1, 0), CurrencyCode::EUR);
        assert!(matches!(bad.build(), Err(NewProductError::NegativePrice)));
    }

    #[test]
    fn test_product_serde_round_trip() {
        let product = draft().build().expect("valid draft");
        let json = serde_json::to_string(&product).expect("serialize");
        let back: Product = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, product);
    }
}
