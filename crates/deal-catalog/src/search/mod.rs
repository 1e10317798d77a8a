//! Search module.
//!
//! Derives the visible deal sequence from a catalog, a search term and a
//! selected category. Everything here is pure.

mod filter;
mod query;

pub use filter::Filter;
pub use query::{filter_deals, CategoryFilter, DealQuery};
