//! uptimectl configuration
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

/// Better Stack API configuration options
#[derive(Debug, Clone, Parser)]
pub struct ApiOpts {
    /// API token sent in the Authorization header
    #[clap(long, env = "BETTERSTACK_TOKEN", hide_env_values = true)]
    pub api_token: String,
    /// Base URL of the uptime API
    #[clap(
        long,
        env = "BETTERSTACK_BASE_URL",
        default_value = "https://uptime.betterstack.com"
    )]
    pub base_url: Url,
}

/// CLI options for uptimectl
#[derive(Debug, Clone, Parser)]
pub struct Opts {
    /// Better Stack API configuration
    #[clap(flatten)]
    pub api: ApiOpts,

    /// Operation to run
    #[clap(subcommand)]
    pub command: Command,
}

/// Operations exposed by the CLI
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List monitors across all pages, or the first page matching a filter
    List {
        /// Only monitors whose URL contains this value
        #[clap(long, conflicts_with = "name")]
        url: Option<String>,
        /// Only monitors with this pronounceable name
        #[clap(long)]
        name: Option<String>,
    },
    /// Fetch a single monitor by id
    Get {
        /// Monitor id
        id: String,
    },
    /// Create a monitor from a JSON attribute file
    Create {
        /// Path to the JSON attribute file
        #[clap(long)]
        file: PathBuf,
    },
    /// Update a monitor from a JSON attribute file
    Update {
        /// Monitor id
        id: String,
        /// Path to the JSON attribute file
        #[clap(long)]
        file: PathBuf,
    },
    /// Delete a monitor by id
    Delete {
        /// Monitor id
        id: String,
    },
    /// List monitor groups across all pages
    Groups,
}
