//! List deals for a search term and category.

use anyhow::Result;
use deal_catalog::search::{CategoryFilter, DealQuery};
use deal_engine::{DealListing, ListingState};

use super::ListArgs;
use crate::context::Context;
use crate::render::print_deal;

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let mut listing = ctx.start_listing().await;
    apply_filters(&mut listing, &args);
    ctx.settle(&mut listing, "Searching...").await;

    print_listing(ctx, &listing.state());
    Ok(())
}

/// Forward the search term and category to the engine.
pub fn apply_filters(listing: &mut DealListing, args: &ListArgs) {
    if let Some(term) = &args.search {
        listing.set_search_term(term.clone());
    }
    if let Some(category) = &args.category {
        listing.set_selected_category(CategoryFilter::from(category.as_str()));
    }
}

/// Print the published listing, or its JSON form.
pub fn print_listing(ctx: &Context, state: &ListingState) {
    if ctx.output.is_json() {
        ctx.output.json(state);
        return;
    }

    if let Some(error) = &state.error {
        ctx.output.error(error);
        return;
    }

    ctx.output.header(&listing_heading(&state.query));
    ctx.output.line("");

    if state.visible_deals.is_empty() {
        ctx.output.info("No deals found matching your criteria.");
        return;
    }

    for deal in &state.visible_deals {
        print_deal(&ctx.output, deal, &ctx.config.display);
    }
    ctx.output.info(&format!("{} deal(s)", state.visible_deals.len()));
}

/// Heading naming the applied search term and category.
fn listing_heading(query: &DealQuery) -> String {
    if query.is_unfiltered() {
        return String::from("Latest Deals");
    }

    let mut heading = String::from("Deals");
    if !query.search_term.is_empty() {
        heading.push_str(&format!(" matching \"{}\"", query.search_term));
    }
    if !query.category.is_all() {
        heading.push_str(&format!(" in {}", query.category));
    }
    heading
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_heading() {
        assert_eq!(listing_heading(&DealQuery::new()), "Latest Deals");
        assert_eq!(
            listing_heading(&DealQuery::new().with_search("tv")),
            "Deals matching \"tv\""
        );
        assert_eq!(
            listing_heading(&DealQuery::new().with_search("pizza").with_category("Food & Drink")),
            "Deals matching \"pizza\" in Food & Drink"
        );
        assert_eq!(
            listing_heading(&DealQuery::new().with_category("All")),
            "Latest Deals"
        );
    }
}
