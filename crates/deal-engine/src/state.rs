//! The published listing state.

use deal_catalog::catalog::{Deal, ALL_CATEGORIES};
use deal_catalog::search::DealQuery;
use serde::Serialize;

/// Everything a presentation layer needs to render the listing.
///
/// A new value is published atomically for every transition, so readers
/// never see a half-applied update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingState {
    /// Deals to show, in catalog order.
    pub visible_deals: Vec<Deal>,
    /// Category vocabulary, starting with "All".
    pub categories: Vec<String>,
    /// A recomputation is pending.
    pub loading: bool,
    /// Message from a failed catalog fetch.
    pub error: Option<String>,
    /// The query that produced `visible_deals`.
    pub query: DealQuery,
    #[serde(skip)]
    pub(crate) generation: u64,
    #[serde(skip)]
    pub(crate) catalog_loaded: bool,
}

impl ListingState {
    /// Request counter of the query that last published or is pending.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a catalog has been loaded successfully.
    pub fn catalog_loaded(&self) -> bool {
        self.catalog_loaded
    }

    /// Ids of the visible deals, mostly useful for assertions and logs.
    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible_deals.iter().map(|d| d.id.as_str()).collect()
    }

    /// Nothing to show and nothing pending.
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.error.is_none() && self.visible_deals.is_empty()
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            visible_deals: Vec::new(),
            categories: vec![ALL_CATEGORIES.to_string()],
            loading: false,
            error: None,
            query: DealQuery::default(),
            generation: 0,
            catalog_loaded: false,
        }
    }
}
