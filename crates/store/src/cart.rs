//! Pure update functions for the cart list.
//!
//! Same contract as [`crate::catalog`]: total functions, unknown ids are
//! identity, untouched elements are `Arc`-shared into the result.

use std::sync::Arc;

use shopfront_core::{CartItem, Product, ProductId};

use crate::reducer::CartList;

/// Add one unit of the product with `product_id` to the cart.
///
/// An item already in the cart is bumped by one, up to its stock; at stock
/// the element passes through unchanged. A product not yet in the cart is
/// projected into a fresh line and appended, quantity bumped from zero the
/// same way (so a zero-stock product appends at quantity zero). A
/// `product_id` matching neither list leaves the cart as it was.
#[must_use]
pub fn add_to_cart(
    cart_items: &[Arc<CartItem>],
    products: &[Arc<Product>],
    product_id: ProductId,
) -> CartList {
    if cart_items.iter().any(|item| item.id == product_id) {
        return cart_items
            .iter()
            .map(|item| {
                if item.id != product_id || item.quantity >= item.units_in_stock {
                    Arc::clone(item)
                } else {
                    Arc::new(item.bumped())
                }
            })
            .collect();
    }

    let Some(product) = products.iter().find(|product| product.id == product_id) else {
        return cart_items.iter().map(Arc::clone).collect();
    };

    let line = CartItem::from_product(product).bumped();
    cart_items
        .iter()
        .map(Arc::clone)
        .chain(std::iter::once(Arc::new(line)))
        .collect()
}

/// Set the quantity of the cart line with `product_id`.
///
/// A quantity above the line's stock leaves the item unchanged.
#[must_use]
pub fn set_quantity(
    cart_items: &[Arc<CartItem>],
    product_id: ProductId,
    new_quantity: u32,
) -> CartList {
    cart_items
        .iter()
        .map(|item| {
            if item.id == product_id && new_quantity <= item.units_in_stock {
                Arc::new(item.with_quantity(new_quantity))
            } else {
                Arc::clone(item)
            }
        })
        .collect()
}

/// Drop the cart line with `product_id` entirely.
#[must_use]
pub fn remove_from_cart(cart_items: &[Arc<CartItem>], product_id: ProductId) -> CartList {
    cart_items
        .iter()
        .filter(|item| item.id != product_id)
        .map(Arc::clone)
        .collect()
}
