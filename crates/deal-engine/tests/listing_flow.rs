//! End-to-end listing flows driven the way a presentation layer would.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use deal_engine::deal_catalog::catalog::{self, Catalog};
use deal_engine::deal_catalog::search::CategoryFilter;
use deal_engine::deal_catalog::DealId;
use deal_engine::{CatalogSource, DealListing, EngineError, ListingConfig, SeedSource};

/// Fails the first `failures` loads, then serves the seed catalog.
struct FlakySource {
    failures: usize,
    calls: AtomicUsize,
}

impl FlakySource {
    fn new(failures: usize) -> Self {
        Self {
            failures,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for FlakySource {
    async fn load(&self) -> Result<Catalog, EngineError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(EngineError::FetchFailure("upstream unavailable".to_string()));
        }
        Ok(catalog::initialize())
    }

    fn describe(&self) -> String {
        "flaky".to_string()
    }
}

async fn started() -> DealListing {
    let mut listing = DealListing::new(Arc::new(SeedSource), ListingConfig::default());
    listing.start();
    listing.settle().await;
    listing
}

#[tokio::test(start_paused = true)]
async fn search_for_tv_shows_only_the_tv_deal() {
    let mut listing = started().await;

    listing.set_search_term("tv");
    listing.settle().await;

    assert_eq!(listing.state().visible_ids(), vec!["1"]);
}

#[tokio::test(start_paused = true)]
async fn category_selection_filters_exactly() {
    let mut listing = started().await;

    listing.set_selected_category("Food & Drink");
    listing.settle().await;
    assert_eq!(listing.state().visible_ids(), vec!["3", "6"]);

    listing.set_selected_category(CategoryFilter::All);
    listing.settle().await;
    assert_eq!(listing.state().visible_deals.len(), 8);
}

#[tokio::test(start_paused = true)]
async fn search_and_category_combine() {
    let mut listing = started().await;

    listing.set_search_term("pizza");
    listing.set_selected_category("Electronics");
    listing.settle().await;

    let state = listing.state();
    assert!(state.visible_deals.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert!(state.is_empty_result());
}

#[tokio::test(start_paused = true)]
async fn upvote_increments_and_keeps_filter() {
    let mut listing = started().await;

    listing.set_selected_category("Food & Drink");
    listing.settle().await;

    listing.upvote(&DealId::new("3")).unwrap();
    let state = listing.state();
    assert_eq!(state.visible_ids(), vec!["3", "6"]);
    assert_eq!(state.visible_deals[0].upvotes, 211);
    assert_eq!(state.visible_deals[1].upvotes, 180);
}

#[tokio::test(start_paused = true)]
async fn repeated_upvotes_accumulate() {
    let mut listing = started().await;
    let id = DealId::new("5");

    for _ in 0..3 {
        listing.upvote(&id).unwrap();
    }

    assert_eq!(listing.catalog().get(&id).unwrap().upvotes, 145);
    // Upvotes survive later queries.
    listing.set_search_term("dress");
    listing.settle().await;
    assert_eq!(listing.state().visible_deals[0].upvotes, 145);
}

#[tokio::test(start_paused = true)]
async fn unknown_upvote_is_reported_and_changes_nothing() {
    let mut listing = started().await;
    let before = listing.state();

    let result = listing.upvote(&DealId::new("does-not-exist"));

    assert!(matches!(result, Err(EngineError::Catalog(_))));
    assert_eq!(listing.state(), before);
}

#[tokio::test(start_paused = true)]
async fn upvote_during_pending_query_is_reflected_in_result() {
    let mut listing = started().await;

    listing.set_search_term("coffee");
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(200)).await;

    listing.upvote(&DealId::new("3")).unwrap();
    // Still showing the previous result, with the new count.
    let pending = listing.state();
    assert!(pending.loading);
    assert_eq!(pending.visible_deals.len(), 8);
    assert_eq!(pending.visible_deals[2].upvotes, 211);

    listing.settle().await;
    let state = listing.state();
    assert_eq!(state.visible_ids(), vec!["3"]);
    assert_eq!(state.visible_deals[0].upvotes, 211);
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_loading_then_result() {
    let mut listing = started().await;
    let mut rx = listing.subscribe();
    rx.borrow_and_update();

    listing.set_search_term("nike");
    assert!(rx.has_changed().unwrap());
    assert!(rx.borrow_and_update().loading);

    listing.settle().await;
    assert!(rx.has_changed().unwrap());
    let state = rx.borrow_and_update().clone();
    assert!(!state.loading);
    assert_eq!(state.visible_ids(), vec!["8"]);
}

#[tokio::test(start_paused = true)]
async fn fetch_failure_populates_error_without_retrying() {
    let source = Arc::new(FlakySource::new(1));
    let mut listing = DealListing::new(source.clone(), ListingConfig::default());

    listing.start();
    listing.settle().await;

    let state = listing.state();
    assert!(!state.loading);
    assert!(state.visible_deals.is_empty());
    assert_eq!(state.categories, vec!["All"]);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to fetch deals: upstream unavailable")
    );

    // Ordinary input does not retry the fetch.
    listing.set_search_term("tv");
    listing.settle().await;
    assert_eq!(source.calls(), 1);
    assert!(listing.state().error.is_some());

    // An explicit search does.
    listing.trigger_search();
    listing.settle().await;
    let state = listing.state();
    assert_eq!(source.calls(), 2);
    assert_eq!(state.error, None);
    assert_eq!(state.visible_ids(), vec!["1"]);
    assert_eq!(state.categories.len(), 7);
}

#[tokio::test(start_paused = true)]
async fn trigger_search_after_success_does_not_reload() {
    let source = Arc::new(FlakySource::new(0));
    let mut listing = DealListing::new(source.clone(), ListingConfig::immediate());

    listing.start();
    listing.settle().await;
    listing.trigger_search();
    listing.settle().await;

    assert_eq!(source.calls(), 1);
    assert_eq!(listing.state().visible_deals.len(), 8);
}

#[tokio::test(start_paused = true)]
async fn superseded_retry_still_reloads() {
    let source = Arc::new(FlakySource::new(1));
    let mut listing = DealListing::new(source.clone(), ListingConfig::default());
    listing.start();
    listing.settle().await;

    listing.trigger_search();
    listing.trigger_search();
    listing.settle().await;

    assert!(listing.state().catalog_loaded());
    assert_eq!(listing.state().error, None);
}

#[tokio::test(start_paused = true)]
async fn search_before_first_load_publishes_keeps_the_catalog() {
    let source = Arc::new(FlakySource::new(0));
    let mut listing = DealListing::new(source.clone(), ListingConfig::default());

    listing.start();
    listing.set_search_term("tv");
    listing.settle().await;

    let state = listing.state();
    assert!(state.catalog_loaded());
    assert_eq!(state.visible_ids(), vec!["1"]);
    assert_eq!(state.categories.len(), 7);
    assert_eq!(listing.catalog().len(), 8);
    assert_eq!(source.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn category_before_first_load_publishes_keeps_the_catalog() {
    let mut listing = DealListing::new(Arc::new(SeedSource), ListingConfig::default());

    listing.start();
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(100)).await;
    listing.set_selected_category("Food & Drink");
    listing.settle().await;

    let state = listing.state();
    assert!(state.catalog_loaded());
    assert_eq!(state.visible_ids(), vec!["3", "6"]);
}

#[tokio::test(start_paused = true)]
async fn retry_followed_by_search_still_reloads() {
    let source = Arc::new(FlakySource::new(1));
    let mut listing = DealListing::new(source.clone(), ListingConfig::default());
    listing.start();
    listing.settle().await;
    assert!(listing.state().error.is_some());

    listing.trigger_search();
    listing.set_search_term("tv");
    listing.settle().await;

    let state = listing.state();
    assert_eq!(source.calls(), 2);
    assert_eq!(state.error, None);
    assert_eq!(state.visible_ids(), vec!["1"]);
}
