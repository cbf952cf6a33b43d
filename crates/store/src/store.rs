//! The store handle exposed to the view layer.
//!
//! [`Store`] owns the state tree and is the only way to change it. Each
//! mutation entry point computes a replacement list with a pure function
//! from [`crate::catalog`] / [`crate::cart`], wraps it in an [`Action`], and
//! dispatches. After every dispatch that touched a list, the corresponding
//! mirror slot is rewritten in full; a failed write is logged and otherwise
//! ignored, since the in-memory state stays authoritative for the session.
//!
//! All mutation goes through `&mut self`, so state transitions are applied
//! one at a time even around the fetch await point.

use std::sync::Arc;

use shopfront_core::{
    CartItem, CurrencyCode, NewProduct, NewProductError, Price, Product, ProductId,
};
use tracing::{debug, info, warn};

use crate::cart;
use crate::catalog;
use crate::config::Config;
use crate::persist::{Mirror, PersistError};
use crate::reducer::{Action, AppState, reduce};
use crate::source::ProductSource;

/// Which mirror slot an action touches.
enum Slot {
    Products,
    CartItems,
}

/// The state holder behind the storefront UI.
///
/// Construct one per session with [`Store::open`] and pass it down by
/// reference; there is no ambient global instance.
#[derive(Debug)]
pub struct Store {
    state: AppState,
    mirror: Mirror,
    products_key: String,
    cart_items_key: String,
    fetch_attempted: bool,
    closed: bool,
}

impl Store {
    /// Open a store, seeding state from the persistent mirror.
    ///
    /// Absent or unreadable slots seed as empty lists.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the mirror directory cannot be created.
    pub fn open(config: &Config) -> Result<Self, PersistError> {
        let mirror = Mirror::open(config.data_dir.clone())?;
        let products = mirror.load(&config.products_key, Vec::new());
        let cart_items = mirror.load(&config.cart_items_key, Vec::new());
        info!(
            products = products.len(),
            cart_items = cart_items.len(),
            "store opened from mirror"
        );

        Ok(Self {
            state: AppState::restored(products, cart_items),
            mirror,
            products_key: config.products_key.clone(),
            cart_items_key: config.cart_items_key.clone(),
            fetch_attempted: false,
            closed: false,
        })
    }

    // -------------------------------------------------------------------------
    // State slices
    // -------------------------------------------------------------------------

    /// Catalog products.
    #[must_use]
    pub fn products(&self) -> &[Arc<Product>] {
        &self.state.products
    }

    /// Cart lines.
    #[must_use]
    pub fn cart_items(&self) -> &[Arc<CartItem>] {
        &self.state.cart_items
    }

    /// Whether the startup fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    /// Whether the startup fetch failed.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.state.has_error
    }

    /// Failure message from the startup fetch, if any.
    #[must_use]
    pub fn loading_error(&self) -> Option<&str> {
        self.state.loading_error.as_deref()
    }

    /// A snapshot of the full state tree.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Total price of the cart (sum of line totals).
    ///
    /// An empty cart totals zero in the default currency.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        let currency = self
            .state
            .cart_items
            .first()
            .map_or_else(CurrencyCode::default, |item| item.price.currency_code);
        self.state
            .cart_items
            .iter()
            .fold(Price::zero(currency), |total, item| Price {
                amount: total.amount + item.line_total().amount,
                currency_code: total.currency_code,
            })
    }

    // -------------------------------------------------------------------------
    // Mutation entry points
    // -------------------------------------------------------------------------

    /// Up-vote the product with `id`.
    pub fn up_vote(&mut self, id: ProductId) {
        let next = catalog::up_vote(&self.state.products, id);
        self.dispatch(Action::ProductItems(next));
    }

    /// Down-vote the product with `id`.
    pub fn down_vote(&mut self, id: ProductId) {
        let next = catalog::down_vote(&self.state.products, id);
        self.dispatch(Action::ProductItems(next));
    }

    /// Toggle the favorite flag on the product with `id`.
    pub fn toggle_favorite(&mut self, id: ProductId) {
        let next = catalog::toggle_favorite(&self.state.products, id);
        self.dispatch(Action::ProductItems(next));
    }

    /// Add one unit of the product with `id` to the cart.
    pub fn add_to_cart(&mut self, id: ProductId) {
        let next = cart::add_to_cart(&self.state.cart_items, &self.state.products, id);
        self.dispatch(Action::CartItems(next));
    }

    /// Set the quantity of the cart line with `id`.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        let next = cart::set_quantity(&self.state.cart_items, id, quantity);
        self.dispatch(Action::CartItems(next));
    }

    /// Remove the cart line with `id`.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        let next = cart::remove_from_cart(&self.state.cart_items, id);
        self.dispatch(Action::CartItems(next));
    }

    /// Validate a new-product draft and prepend it to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`NewProductError`] if the draft fails validation; the state
    /// is untouched in that case.
    pub fn save_new_product(&mut self, draft: NewProduct) -> Result<ProductId, NewProductError> {
        let product = draft.build()?;
        let id = product.id;
        let next = catalog::add_product(&self.state.products, product);
        self.dispatch(Action::ProductItems(next));
        Ok(id)
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Run the one-shot startup fetch against `source`.
    ///
    /// Fires only when nothing was restored from the mirror, and at most
    /// once per store. There is no retry and no timeout; a failure leaves
    /// the error in state until the session is restarted.
    pub async fn load_products<S: ProductSource>(&mut self, source: &S) {
        if self.fetch_attempted || !self.state.products.is_empty() {
            debug!("startup fetch skipped, products already present");
            return;
        }
        self.fetch_attempted = true;

        self.dispatch(Action::FetchInit);
        match source.fetch_products().await {
            Ok(products) => {
                info!(count = products.len(), "startup fetch succeeded");
                let products = products.into_iter().map(Arc::new).collect();
                self.dispatch(Action::FetchSuccess(products));
            }
            Err(err) => {
                warn!(error = %err, "startup fetch failed");
                self.dispatch(Action::FetchError(err.to_string()));
            }
        }
    }

    /// Tear the store down.
    ///
    /// Every later dispatch - including the continuation of a fetch still in
    /// flight - is a silent no-op, and the mirror is no longer written.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Whether [`Store::close`] has been called.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Apply one action and mirror the slot it touched.
    fn dispatch(&mut self, action: Action) {
        if self.closed {
            debug!("dispatch ignored, store is closed");
            return;
        }

        let slot = match &action {
            Action::CartItems(_) => Some(Slot::CartItems),
            Action::ProductItems(_) | Action::FetchSuccess(_) => Some(Slot::Products),
            Action::FetchInit | Action::FetchError(_) => None,
        };

        self.state = reduce(&self.state, action);

        match slot {
            Some(Slot::Products) => self.sync_slot(&self.products_key, &self.state.products),
            Some(Slot::CartItems) => self.sync_slot(&self.cart_items_key, &self.state.cart_items),
            None => {}
        }
    }

    /// Rewrite one mirror slot, logging and swallowing failures.
    fn sync_slot<T: serde::Serialize>(&self, key: &str, rows: &[T]) {
        if let Err(err) = self.mirror.save(key, rows) {
            warn!(key, error = %err, "mirror write failed, continuing with in-memory state");
        }
    }
}
