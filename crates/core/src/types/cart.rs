//! Shopping cart line item type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::product::Product;

/// A product in the cart, augmented with a chosen purchase quantity.
///
/// Carting projects a subset of the catalog product: favorite state, votes,
/// and the long-form description stay behind on the listing.
///
/// Invariant: `quantity <= units_in_stock`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// ID of the carted product.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Product image URL.
    pub img: String,
    /// Unit price.
    pub price: Price,
    /// Units in stock, bounding `quantity`.
    pub units_in_stock: u32,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
    /// Chosen purchase quantity.
    pub quantity: u32,
}

impl CartItem {
    /// Project a catalog product into a cart line with quantity zero.
    ///
    /// Callers bump the quantity afterwards; a zero-stock product stays at
    /// quantity zero.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            img: product.img.clone(),
            price: product.price,
            units_in_stock: product.units_in_stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
            quantity: 0,
        }
    }

    /// The item with one more unit, or an unchanged copy once stock is
    /// exhausted.
    #[must_use]
    pub fn bumped(&self) -> Self {
        if self.quantity >= self.units_in_stock {
            return self.clone();
        }

        Self {
            quantity: self.quantity + 1,
            ..self.clone()
        }
    }

    /// The item with the given quantity.
    #[must_use]
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Total price of this line (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}
