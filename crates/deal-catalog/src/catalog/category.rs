//! Category vocabulary derived from a catalog.

use std::collections::HashSet;

use crate::catalog::Catalog;

/// Sentinel label meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// The category labels offered to the user.
///
/// Starts with [`ALL_CATEGORIES`], followed by every distinct `category`
/// value in the order it is first seen in the catalog.
pub fn derive_categories(catalog: &Catalog) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = vec![ALL_CATEGORIES.to_string()];

    for deal in catalog {
        if seen.insert(deal.category.as_str()) {
            categories.push(deal.category.clone());
        }
    }

    categories
}
