//! Interactive browsing session.

use anyhow::Result;
use deal_catalog::search::CategoryFilter;
use deal_engine::{DealListing, ListingState};
use dialoguer::{Input, Select};

use super::list::print_listing;
use super::BrowseArgs;
use crate::context::Context;
use crate::output::category_badge;

const ACTIONS: [&str; 5] = [
    "Search",
    "Choose category",
    "Upvote a deal",
    "Search again",
    "Quit",
];

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut listing = ctx.start_listing().await;
    if let Some(term) = args.search {
        listing.set_search_term(term);
        ctx.settle(&mut listing, "Searching...").await;
    }

    loop {
        let state = listing.state();
        show(ctx, &state);

        let action = Select::new()
            .with_prompt("What next?")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => {
                let term: String = Input::new()
                    .with_prompt("Search deals")
                    .with_initial_text(listing.query().search_term.clone())
                    .allow_empty(true)
                    .interact_text()?;
                listing.set_search_term(term);
            }
            1 => choose_category(&mut listing, &state)?,
            2 => upvote_visible(ctx, &mut listing, &state)?,
            3 => listing.trigger_search(),
            _ => return Ok(()),
        }

        ctx.settle(&mut listing, "Searching...").await;
    }
}

fn show(ctx: &Context, state: &ListingState) {
    if !ctx.output.is_json() {
        let badges: Vec<String> = state
            .categories
            .iter()
            .map(|c| category_badge(c, c == state.query.category.label()))
            .collect();
        ctx.output.line(&badges.join(" "));
    }
    print_listing(ctx, state);
}

fn choose_category(listing: &mut DealListing, state: &ListingState) -> Result<()> {
    let current = state
        .categories
        .iter()
        .position(|c| c == listing.query().category.label())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Category")
        .items(&state.categories)
        .default(current)
        .interact()?;

    let label = state.categories[selection].as_str();
    listing.set_selected_category(CategoryFilter::from(label));
    Ok(())
}

fn upvote_visible(ctx: &Context, listing: &mut DealListing, state: &ListingState) -> Result<()> {
    if state.visible_deals.is_empty() {
        ctx.output.info("Nothing to upvote.");
        return Ok(());
    }

    let titles: Vec<String> = state
        .visible_deals
        .iter()
        .map(|d| format!("#{} {} ({} upvotes)", d.id, d.title, d.upvotes))
        .collect();

    let selection = Select::new()
        .with_prompt("Upvote which deal?")
        .items(&titles)
        .default(0)
        .interact()?;

    let deal = &state.visible_deals[selection];
    match listing.upvote(&deal.id) {
        Ok(()) => ctx.output.success(&format!("Upvoted \"{}\"", deal.title)),
        Err(e) => ctx.output.warn(&e.to_string()),
    }
    Ok(())
}
