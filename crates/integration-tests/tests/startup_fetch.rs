//! Startup product-fetch lifecycle, end to end against a real mirror.

#![allow(clippy::unwrap_used)]

use shopfront_integration_tests::{TestContext, draft};
use shopfront_store::source::StaticSource;

#[tokio::test]
async fn fetch_success_populates_products_and_keeps_loading_flag() {
    let ctx = TestContext::new();
    let mut store = ctx.open_store();

    let shoe = draft("Shoe", 2).build().unwrap();
    store
        .load_products(&StaticSource::with_products(vec![shoe]))
        .await;

    assert_eq!(store.products().len(), 1);
    assert_eq!(store.products()[0].title, "Shoe");
    assert!(!store.has_error());
    // The loading flag stays set after a successful fetch; the listing is
    // gated on the error flag alone.
    assert!(store.is_loading());
}

#[tokio::test]
async fn fetch_success_is_mirrored_to_disk() {
    let ctx = TestContext::new();
    let mut store = ctx.open_store();

    store.load_products(&StaticSource::sample()).await;

    let slot = ctx.products_slot().expect("products slot written");
    assert_eq!(slot.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn fetch_failure_surfaces_message_verbatim() {
    let ctx = TestContext::new();
    let mut store = ctx.open_store();

    store
        .load_products(&StaticSource::failing("Network error"))
        .await;

    assert!(store.has_error());
    assert!(!store.is_loading());
    assert_eq!(store.loading_error(), Some("Network error"));
    assert!(store.products().is_empty());
    // Failures touch no list, so nothing is mirrored.
    assert!(ctx.products_slot().is_none());
}

#[tokio::test]
async fn fetch_does_not_fire_when_mirror_has_products() {
    let ctx = TestContext::new();
    {
        let mut store = ctx.open_store();
        store.save_new_product(draft("Runner", 3)).unwrap();
    }

    // Second session restores one product, so the fetch must not fire; a
    // failing source proves it was never called.
    let mut store = ctx.open_store();
    store
        .load_products(&StaticSource::failing("unreachable"))
        .await;

    assert!(!store.has_error());
    assert!(!store.is_loading());
    assert_eq!(store.products().len(), 1);
}

#[tokio::test]
async fn close_during_flight_drops_the_continuation() {
    let ctx = TestContext::new();
    let mut store = ctx.open_store();

    // Closing before the fetch resolves: the dispatches from the
    // continuation must all be no-ops.
    store.close();
    store.load_products(&StaticSource::sample()).await;

    assert!(store.products().is_empty());
    assert!(!store.is_loading());
    assert!(ctx.products_slot().is_none());
}
