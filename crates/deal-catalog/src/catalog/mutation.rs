//! Catalog mutations.
//!
//! The upvote is the only mutation. It never edits the input catalog: the
//! caller receives a new snapshot and decides whether to publish it.

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::ids::DealId;

/// Return a new catalog with the deal `id` upvoted once.
///
/// An unknown id yields [`CatalogError::NotFound`]; the input catalog is
/// untouched either way.
pub fn upvote(catalog: &Catalog, id: &DealId) -> Result<Catalog, CatalogError> {
    let index = catalog
        .position(id)
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

    let deal = catalog.deals()[index].upvoted();
    Ok(catalog.replace_at(index, deal))
}
