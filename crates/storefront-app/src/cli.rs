//! Command-line arguments for the `storefront` binary.

use clap::{ArgAction, Parser, Subcommand};

/// Storefront - browse products and manage a shopping cart
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Terminal storefront over a product catalog", long_about = None)]
#[command(version)]
pub struct Args {
    /// Configuration file path (falls back to `$STOREFRONT_CONFIG`)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use the built-in sample catalog instead of the HTTP backend
    #[arg(long)]
    pub offline: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run; `shop` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// The subcommand to run; `shop` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Shop)
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Browse products and manage the cart interactively
    Shop,
    /// Fetch and print the product list once
    Products,
    /// Configuration file operations
    Config {
        /// Config operation to run
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `storefront config` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Print one value by dotted key (e.g. `catalog.base_url`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Target file (defaults to the platform config path)
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
