//! Turning deals into terminal text.

use std::fmt::Write as _;

use console::style;
use deal_catalog::catalog::{Deal, EndDate};

use crate::config::DisplayConfig;
use crate::output::{popular_badge, Output};

/// Cut a description to `limit` characters, marking the cut with "...".
pub fn truncate_description(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// "Ongoing", a formatted date, or "Invalid Date".
pub fn format_end_date(deal: &Deal, date_format: &str) -> String {
    match deal.end_date() {
        EndDate::Ongoing => "Ongoing".to_string(),
        EndDate::On(date) => {
            let mut out = String::new();
            // chrono reports unsupported format specifiers through fmt::Error.
            match write!(out, "{}", date.format(date_format)) {
                Ok(()) => out,
                Err(_) => date.to_string(),
            }
        }
        EndDate::Invalid(_) => "Invalid Date".to_string(),
    }
}

/// Price with the original price and saving when there is one.
pub fn price_line(deal: &Deal) -> String {
    let mut line = deal.price.display();
    if let Some(original) = &deal.original_price {
        line.push_str(&format!(" (was {}", original.display()));
        if let Some(percent) = deal.discount_percent() {
            line.push_str(&format!(", {}% off", percent));
        }
        line.push(')');
    }
    line
}

/// Print one deal as a card.
pub fn print_deal(output: &Output, deal: &Deal, display: &DisplayConfig) {
    let mut title = format!(
        "{} {}",
        style(format!("#{}", deal.id)).dim(),
        style(&deal.title).bold()
    );
    if deal.is_popular {
        title.push_str(&format!(" {}", popular_badge()));
    }
    output.line(&title);

    output.kv("By", &deal.store);
    if !deal.description.is_empty() {
        output.kv(
            "About",
            &truncate_description(&deal.description, display.description_limit),
        );
    }
    output.kv("Price", &style(price_line(deal)).green().to_string());
    output.kv("Category", &deal.category);
    output.kv("Ends", &format_end_date(deal, &display.date_format));
    output.kv(
        "Votes",
        &format!("{} upvotes, {} comments", deal.upvotes, deal.comments),
    );
    if !deal.link.is_empty() {
        output.kv("Get deal", &deal.link);
    }
    output.line("");
}
