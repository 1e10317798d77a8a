//! Show the category vocabulary.

use anyhow::{bail, Result};
use deal_catalog::search::{filter_deals, DealQuery};

use crate::context::Context;

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let listing = ctx.start_listing().await;
    let state = listing.state();

    if let Some(error) = state.error {
        bail!(error);
    }

    if ctx.output.is_json() {
        ctx.output.json(&state.categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    let catalog = listing.catalog();
    for category in &state.categories {
        let query = DealQuery::new().with_category(category.as_str());
        let count = filter_deals(&catalog, &query).len();
        ctx.output.list_item(&format!("{} ({})", category, count));
    }

    Ok(())
}
