//! CLI definitions for Switchboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Switchboard CLI.
#[derive(Parser)]
#[command(name = "switchboard")]
#[command(about = "LLM provider routing and fallback proxy")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the proxy in foreground (default)
    Run {
        /// Server host, overrides [server] host
        #[arg(long)]
        host: Option<String>,

        /// Server port, overrides [server] port
        #[arg(long)]
        port: Option<u16>,
    },

    /// List registered providers
    Providers,

    /// Check provider reachability
    Probe {
        /// Provider id (all providers when omitted)
        provider: Option<String>,
    },
}
