//! The listing engine.

use std::sync::Arc;

use deal_catalog::catalog::{self, derive_categories, Catalog};
use deal_catalog::search::{filter_deals, CategoryFilter, DealQuery};
use deal_catalog::DealId;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::ListingConfig;
use crate::error::EngineError;
use crate::source::CatalogSource;
use crate::state::ListingState;

/// Holds the catalog snapshot and derives the visible listing from user
/// input.
///
/// Input events (`set_search_term`, `set_selected_category`,
/// `trigger_search`) schedule a recomputation that publishes after the
/// configured latency. Scheduling again before it publishes cancels the
/// pending one and restarts the delay. Upvotes apply immediately.
///
/// Must be used from within a tokio runtime.
pub struct DealListing {
    source: Arc<dyn CatalogSource>,
    config: ListingConfig,
    catalog: Arc<watch::Sender<Arc<Catalog>>>,
    state: Arc<watch::Sender<ListingState>>,
    query: DealQuery,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    /// The pending task still has a catalog load to do.
    pending_reload: bool,
}

/// Everything a scheduled recomputation needs, owned by its task.
struct QueryJob {
    generation: u64,
    query: DealQuery,
    reload: Option<Arc<dyn CatalogSource>>,
    config: ListingConfig,
    catalog: Arc<watch::Sender<Arc<Catalog>>>,
    state: Arc<watch::Sender<ListingState>>,
}

impl DealListing {
    /// Create an engine. Nothing is loaded until [`start`](Self::start).
    pub fn new(source: Arc<dyn CatalogSource>, config: ListingConfig) -> Self {
        let (catalog, _) = watch::channel(Arc::new(Catalog::empty()));
        let (state, _) = watch::channel(ListingState::default());
        Self {
            source,
            config,
            catalog: Arc::new(catalog),
            state: Arc::new(state),
            query: DealQuery::default(),
            generation: 0,
            pending: None,
            pending_reload: false,
        }
    }

    /// Load the catalog and publish the initial listing.
    pub fn start(&mut self) {
        info!(source = %self.source.describe(), "starting deal listing");
        self.schedule(true);
    }

    /// Set the free-text search term and recompute.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.schedule(false);
    }

    /// Set the selected category and recompute.
    pub fn set_selected_category(&mut self, category: impl Into<CategoryFilter>) {
        self.query.category = category.into();
        self.schedule(false);
    }

    /// Recompute with the current inputs.
    ///
    /// If the catalog has never loaded successfully, the load is retried
    /// first. This is the only retry path.
    pub fn trigger_search(&mut self) {
        let reload = !self.state.borrow().catalog_loaded;
        self.schedule(reload);
    }

    /// Upvote one deal and refresh the visible listing in the same
    /// publication.
    ///
    /// An unknown id leaves the catalog snapshot untouched and returns
    /// [`EngineError::Catalog`] wrapping `NotFound`.
    pub fn upvote(&mut self, id: &DealId) -> Result<(), EngineError> {
        let current = self.catalog.borrow().clone();
        let next = match catalog::upvote(&current, id) {
            Ok(next) => Arc::new(next),
            Err(e) => {
                warn!(deal_id = %id, "upvote for unknown deal");
                return Err(e.into());
            }
        };

        self.catalog.send_replace(next.clone());
        self.state.send_modify(|state| {
            state.visible_deals = filter_deals(&next, &state.query);
        });

        debug!(deal_id = %id, "upvote applied");
        Ok(())
    }

    /// Current published state.
    pub fn state(&self) -> ListingState {
        self.state.borrow().clone()
    }

    /// Subscribe to published states.
    pub fn subscribe(&self) -> watch::Receiver<ListingState> {
        self.state.subscribe()
    }

    /// Current catalog snapshot.
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.borrow().clone()
    }

    /// The inputs the next recomputation will use.
    pub fn query(&self) -> &DealQuery {
        &self.query
    }

    /// Check if a recomputation is pending.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Wait for the pending recomputation, if any, to publish.
    ///
    /// A panic inside the query task is resumed on the caller.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(e) = handle.await {
                if e.is_panic() {
                    std::panic::resume_unwind(e.into_panic());
                }
            }
        }
    }

    fn schedule(&mut self, reload: bool) {
        let mut reload = reload;
        if let Some(handle) = self.pending.take() {
            // A superseded load is inherited, not dropped.
            if !handle.is_finished() && self.pending_reload {
                reload = true;
            }
            handle.abort();
            debug!(superseded = self.generation, reload, "cancelled pending query");
        }
        self.pending_reload = reload;

        self.generation += 1;
        let generation = self.generation;

        self.state.send_modify(|state| {
            state.loading = true;
            state.generation = generation;
            if reload {
                state.error = None;
            }
        });

        debug!(
            generation,
            reload,
            search_term = %self.query.search_term,
            category = %self.query.category,
            "scheduled query"
        );

        let job = QueryJob {
            generation,
            query: self.query.clone(),
            reload: reload.then(|| self.source.clone()),
            config: self.config.clone(),
            catalog: self.catalog.clone(),
            state: self.state.clone(),
        };
        self.pending = Some(tokio::spawn(job.run()));
    }
}

impl Drop for DealListing {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl QueryJob {
    async fn run(self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }

        let loaded = match &self.reload {
            Some(source) => Some(source.load().await),
            None => None,
        };

        let QueryJob {
            generation,
            query,
            catalog,
            state,
            ..
        } = self;

        state.send_if_modified(|current| {
            // A newer request owns the state now.
            if current.generation != generation {
                return false;
            }

            match loaded {
                Some(Ok(fresh)) => {
                    info!(deals = fresh.len(), "catalog loaded");
                    current.categories = derive_categories(&fresh);
                    current.catalog_loaded = true;
                    current.error = None;
                    catalog.send_replace(Arc::new(fresh));
                }
                Some(Err(e)) => {
                    warn!(error = %e, "catalog load failed");
                    current.categories = derive_categories(&Catalog::empty());
                    current.error = Some(e.to_string());
                    catalog.send_replace(Arc::new(Catalog::empty()));
                }
                None => {}
            }

            let snapshot = catalog.borrow().clone();
            current.visible_deals = filter_deals(&snapshot, &query);
            current.query = query;
            current.loading = false;

            debug!(generation, visible = current.visible_deals.len(), "published query");
            true
        });
    }
}
