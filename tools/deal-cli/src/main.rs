//! Deals CLI - Browse, search and upvote deals from the terminal.
//!
//! Commands:
//! - `deals list` - Show deals matching a search term and category
//! - `deals categories` - Show the category vocabulary
//! - `deals upvote` - Upvote deals, then show the listing
//! - `deals browse` - Interactive browsing session
//! - `deals config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, ConfigArgs, ListArgs, UpvoteArgs};

/// Deals CLI - Browse the latest deals
#[derive(Parser)]
#[command(name = "deals")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Load deals from a JSON file instead of the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List deals matching a search term and category
    List(ListArgs),

    /// Show the category vocabulary
    Categories,

    /// Upvote one or more deals
    Upvote(UpvoteArgs),

    /// Browse deals interactively
    Browse(BrowseArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = context::Context::load(cli.config.as_deref(), cli.catalog, output)?;
    match &ctx.config_path {
        Some(path) => ctx.output.debug(&format!("Using config {}", path.display())),
        None => ctx.output.debug("Using default configuration"),
    }

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Categories => commands::categories::run(&ctx).await,
        Commands::Upvote(args) => commands::upvote::run(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
