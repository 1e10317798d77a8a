//! Deal filter predicates.

use serde::{Deserialize, Serialize};

use crate::catalog::Deal;

/// A single predicate over deals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive substring match on title, description, store or
    /// category. Holds the already lowercased term.
    Text(String),
    /// Exact, case-sensitive category match.
    Category(String),
}

impl Filter {
    /// Create a text filter. The term is case-folded once here.
    pub fn text(term: impl AsRef<str>) -> Self {
        Filter::Text(term.as_ref().to_lowercase())
    }

    /// Create a category filter.
    pub fn category(name: impl Into<String>) -> Self {
        Filter::Category(name.into())
    }

    /// Check whether a deal passes this filter.
    pub fn matches(&self, deal: &Deal) -> bool {
        match self {
            Filter::Text(term) => [
                &deal.title,
                &deal.description,
                &deal.store,
                &deal.category,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(term.as_str())),
            Filter::Category(name) => deal.category == *name,
        }
    }
}
