//! CLI command implementations.

pub mod config;
pub mod search;

use clap::{Args, Subcommand};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Free-text description of the recipient and occasion.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Gift service origin (overrides the config file).
    #[arg(long, env = "GIFT_BASE_URL")]
    pub base_url: Option<String>,

    /// Write an HTML page with the results to this path.
    #[arg(long, value_name = "PATH")]
    pub html: Option<String>,

    /// Transport timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Create a gift.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the path of the config file in use.
    Path,
}
