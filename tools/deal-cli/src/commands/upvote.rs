//! Upvote deals and show the refreshed listing.

use anyhow::{bail, Result};
use deal_catalog::DealId;

use super::list::{apply_filters, print_listing};
use super::UpvoteArgs;
use crate::context::Context;

/// Run the upvote command.
pub async fn run(args: UpvoteArgs, ctx: &Context) -> Result<()> {
    let mut listing = ctx.start_listing().await;
    if let Some(error) = listing.state().error {
        bail!(error);
    }

    apply_filters(&mut listing, &args.filter);
    ctx.settle(&mut listing, "Searching...").await;

    let mut applied = 0;
    for id in &args.ids {
        match listing.upvote(&DealId::new(id.as_str())) {
            Ok(()) => applied += 1,
            Err(e) => ctx.output.warn(&e.to_string()),
        }
    }

    if applied > 0 {
        ctx.output.success(&format!("Applied {} upvote(s)", applied));
    }

    print_listing(ctx, &listing.state());
    Ok(())
}
