//! Deal query and the pure filtering pass.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Deal, ALL_CATEGORIES};
use crate::search::Filter;

/// The selected category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only deals whose category equals this label exactly.
    Named(String),
}

impl CategoryFilter {
    /// Map a selected label to a filter. `None` and the "All" sentinel both
    /// mean no restriction.
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection {
            None => CategoryFilter::All,
            Some(label) if label == ALL_CATEGORIES => CategoryFilter::All,
            Some(label) => CategoryFilter::Named(label.to_string()),
        }
    }

    /// The label shown for this selection.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        Self::from_selection(Some(label))
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(selection: Option<String>) -> Self {
        Self::from_selection(selection.as_deref())
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A search over the catalog: free-text term plus selected category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DealQuery {
    /// Free-text term. Empty means no text restriction.
    pub search_term: String,
    /// Selected category.
    pub category: CategoryFilter,
}

impl DealQuery {
    /// A query that matches every deal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the category from a selected label.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// The predicates this query applies, all of which must hold.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::with_capacity(2);
        if !self.search_term.is_empty() {
            filters.push(Filter::text(&self.search_term));
        }
        if let CategoryFilter::Named(name) = &self.category {
            filters.push(Filter::category(name.clone()));
        }
        filters
    }

    /// Check whether the query restricts anything at all.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.category.is_all()
    }
}

/// Derive the visible deals for `query`, preserving catalog order.
pub fn filter_deals(catalog: &Catalog, query: &DealQuery) -> Vec<Deal> {
    let filters = query.filters();
    catalog
        .iter()
        .filter(|deal| filters.iter().all(|f| f.matches(deal)))
        .cloned()
        .collect()
}
