//! Deal catalog domain types and logic for Dealboard.
//!
//! This crate holds everything about deals that does not need a runtime:
//!
//! - **Catalog**: deals, the seeded sample catalog, the category vocabulary
//! - **Search**: the pure query engine deriving the visible deal sequence
//! - **Mutation**: copy-with-update upvotes producing a new catalog
//!
//! # Example
//!
//! ```
//! use deal_catalog::prelude::*;
//!
//! let catalog = initialize();
//! let query = DealQuery::new().with_category("Food & Drink");
//! let visible = filter_deals(&catalog, &query);
//! assert_eq!(visible.len(), 2);
//!
//! let catalog = upvote(&catalog, &DealId::new("3")).unwrap();
//! assert_eq!(catalog.get(&DealId::new("3")).unwrap().upvotes, 211);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::DealId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::DealId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        derive_categories, initialize, upvote, Catalog, Deal, EndDate, ALL_CATEGORIES,
    };

    // Search
    pub use crate::search::{filter_deals, CategoryFilter, DealQuery, Filter};
}
