//! Pure update functions for the product list.
//!
//! Every function is total: an unknown id leaves the list semantically
//! unchanged, and an update blocked by a vote limit passes the element
//! through untouched. Elements the update does not affect are `Arc`-shared
//! into the result, so downstream change detection can compare pointers
//! instead of values.

use std::sync::Arc;

use shopfront_core::{Product, ProductId};

use crate::reducer::ProductList;

/// One more up vote for the product with `id`.
///
/// Frozen once the counter reaches its ceiling.
#[must_use]
pub fn up_vote(products: &[Arc<Product>], id: ProductId) -> ProductList {
    products
        .iter()
        .map(|product| {
            if product.id != id {
                return Arc::clone(product);
            }
            match product.votes.up_votes.bump() {
                Some(up_votes) => {
                    let mut next = (**product).clone();
                    next.votes.up_votes = up_votes;
                    Arc::new(next)
                }
                None => Arc::clone(product),
            }
        })
        .collect()
}

/// One more down vote for the product with `id`.
///
/// The counter moves while it is below `lower_limit` and freezes at the
/// limit (see [`shopfront_core::DownVotes::bump`]).
#[must_use]
pub fn down_vote(products: &[Arc<Product>], id: ProductId) -> ProductList {
    products
        .iter()
        .map(|product| {
            if product.id != id {
                return Arc::clone(product);
            }
            match product.votes.down_votes.bump() {
                Some(down_votes) => {
                    let mut next = (**product).clone();
                    next.votes.down_votes = down_votes;
                    Arc::new(next)
                }
                None => Arc::clone(product),
            }
        })
        .collect()
}

/// Flip the favorite flag on the product with `id`.
#[must_use]
pub fn toggle_favorite(products: &[Arc<Product>], id: ProductId) -> ProductList {
    products
        .iter()
        .map(|product| {
            if product.id != id {
                return Arc::clone(product);
            }
            let mut next = (**product).clone();
            next.is_favorite = !next.is_favorite;
            Arc::new(next)
        })
        .collect()
}

/// Prepend a newly created product to the list.
#[must_use]
pub fn add_product(products: &[Arc<Product>], new_product: Product) -> ProductList {
    std::iter::once(Arc::new(new_product))
        .chain(products.iter().map(Arc::clone))
        .collect()
}
