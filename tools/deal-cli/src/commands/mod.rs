//! CLI command implementations.

pub mod browse;
pub mod categories;
pub mod config;
pub mod list;
pub mod upvote;

use clap::{Args, Subcommand};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Search term matched against title, description, store and category.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category to show ("All" for every category).
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

/// Arguments for the upvote command.
#[derive(Args)]
pub struct UpvoteArgs {
    /// Deal ids to upvote, in order. Repeat an id to upvote it again.
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub filter: ListArgs,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Initial search term.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
