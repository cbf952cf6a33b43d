//! The state tree and the reducer that advances it.
//!
//! The reducer performs no per-item logic: list-shaped actions carry a whole
//! replacement list computed by [`crate::catalog`] / [`crate::cart`], and the
//! fetch-lifecycle actions only touch the bookkeeping flags. The action set
//! is closed, so there is no unknown-action case to absorb.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopfront_core::{CartItem, Product};

/// The product list as held in state: elements are shared, not copied.
pub type ProductList = Vec<Arc<Product>>;

/// The cart list as held in state.
pub type CartList = Vec<Arc<CartItem>>;

/// The single state tree behind the storefront UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Catalog products, ordered, unique by id.
    pub products: ProductList,
    /// Cart lines, ordered, unique by id.
    pub cart_items: CartList,
    /// Whether the startup product fetch is in flight.
    pub is_loading: bool,
    /// Whether the startup product fetch failed.
    pub has_error: bool,
    /// Failure message from the startup fetch, rendered verbatim.
    pub loading_error: Option<String>,
}

impl AppState {
    /// State as restored from the persistent mirror at startup.
    #[must_use]
    pub const fn restored(products: ProductList, cart_items: CartList) -> Self {
        Self {
            products,
            cart_items,
            is_loading: false,
            has_error: false,
            loading_error: None,
        }
    }
}

/// The closed set of state transitions.
#[derive(Debug, Clone)]
pub enum Action {
    /// The startup product fetch began.
    FetchInit,
    /// The startup product fetch returned a catalog.
    FetchSuccess(ProductList),
    /// The startup product fetch failed with a message.
    FetchError(String),
    /// Replace the cart list wholesale.
    CartItems(CartList),
    /// Replace the product list wholesale.
    ProductItems(ProductList),
}

/// Apply one action to the state, producing the next state.
#[must_use]
pub fn reduce(state: &AppState, action: Action) -> AppState {
    match action {
        Action::FetchInit => AppState {
            is_loading: true,
            ..state.clone()
        },
        Action::FetchSuccess(products) => AppState {
            products,
            // TODO: confirm whether the loading flag should clear here;
            // shipped behavior keeps it set and the UI relies on a reload.
            is_loading: true,
            ..state.clone()
        },
        Action::FetchError(message) => AppState {
            is_loading: false,
            has_error: true,
            loading_error: Some(message),
            ..state.clone()
        },
        Action::CartItems(cart_items) => AppState {
            cart_items,
            ..state.clone()
        },
        Action::ProductItems(products) => AppState {
            products,
            ..state.clone()
        },
    }
}
