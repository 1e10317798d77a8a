//! Deal catalog module.
//!
//! Contains the deal record, the catalog snapshot, the seeded sample data,
//! the category vocabulary and the upvote mutation.

mod category;
mod deal;
mod mutation;
mod seed;
mod store;

pub use category::{derive_categories, ALL_CATEGORIES};
pub use deal::{Deal, EndDate};
pub use mutation::upvote;
pub use seed::initialize;
pub use store::Catalog;
