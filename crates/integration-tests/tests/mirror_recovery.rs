//! Restarting from present, absent, and corrupt mirror slots.

#![allow(clippy::unwrap_used)]

use shopfront_integration_tests::{TestContext, draft};
use shopfront_store::source::StaticSource;

#[test]
fn absent_slots_seed_empty_lists() {
    let ctx = TestContext::new();
    let store = ctx.open_store();
    assert!(store.products().is_empty());
    assert!(store.cart_items().is_empty());
}

#[test]
fn corrupt_products_slot_falls_back_to_empty() {
    let ctx = TestContext::new();
    {
        let mut store = ctx.open_store();
        store.save_new_product(draft("Runner", 3)).unwrap();
    }

    ctx.write_slot_raw(&ctx.config.products_key, "{definitely not json");

    let store = ctx.open_store();
    assert!(store.products().is_empty());
}

#[tokio::test]
async fn corrupt_slot_counts_as_absent_for_the_startup_fetch() {
    let ctx = TestContext::new();
    {
        let mut store = ctx.open_store();
        store.save_new_product(draft("Runner", 3)).unwrap();
    }

    ctx.write_slot_raw(&ctx.config.products_key, "[{\"id\": 12}]");

    // The restored list is empty, so the fetch fires and repopulates both
    // the state and the slot.
    let mut store = ctx.open_store();
    store.load_products(&StaticSource::sample()).await;

    assert_eq!(store.products().len(), 3);
    let slot = ctx.products_slot().expect("products slot rewritten");
    assert_eq!(slot.as_array().map(Vec::len), Some(3));
}

#[test]
fn corrupt_cart_slot_does_not_disturb_products() {
    let ctx = TestContext::new();
    {
        let mut store = ctx.open_store();
        let id = store.save_new_product(draft("Runner", 3)).unwrap();
        store.add_to_cart(id);
    }

    ctx.write_slot_raw(&ctx.config.cart_items_key, "null");

    let store = ctx.open_store();
    assert_eq!(store.products().len(), 1);
    assert!(store.cart_items().is_empty());
}

#[test]
fn mirror_round_trips_full_product_shape() {
    let ctx = TestContext::new();
    let (id, favorite_before) = {
        let mut store = ctx.open_store();
        let id = store.save_new_product(draft("Runner", 3)).unwrap();
        store.up_vote(id);
        store.down_vote(id);
        store.toggle_favorite(id);
        (id, store.products()[0].is_favorite)
    };

    let store = ctx.open_store();
    let product = &store.products()[0];
    assert_eq!(product.id, id);
    assert_eq!(product.votes.up_votes.current_value, 1);
    assert_eq!(product.votes.down_votes.current_value, 1);
    assert_eq!(product.is_favorite, favorite_before);
}
