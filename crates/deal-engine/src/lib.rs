//! Deal listing state engine.
//!
//! This crate provides:
//! - `DealListing` - Owns the catalog snapshot, schedules queries, applies upvotes
//! - `ListingState` - The published view consumed by a presentation layer
//! - `CatalogSource` - Where the catalog comes from (`SeedSource`, `JsonFileSource`)
//! - `ListingConfig` - Simulated latency settings
//!
//! Queries are recomputed after a configurable delay. A newer request cancels
//! the pending one, so only the last request ever publishes.

mod config;
mod error;
mod listing;
mod source;
mod state;

pub use config::*;
pub use error::*;
pub use listing::*;
pub use source::*;
pub use state::*;

// Re-export the domain crate for convenience
pub use deal_catalog;
