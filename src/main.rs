//! Switchboard - LLM provider routing and fallback proxy
//!
//! Main entry point for the Switchboard CLI and proxy.

mod cli;
mod cmd_providers;
mod register;
mod server;

use clap::Parser;
use tracing::info;

use switchboard_config::ConfigLoader;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing_or_warn();

    let cli = Cli::parse();

    let config_path = ConfigLoader::expand_path(&cli.config.to_string_lossy());
    let config = ConfigLoader::load_or_default(std::path::Path::new(&config_path))?;
    info!("Loaded configuration from {}", config_path);

    match cli.command {
        None => server::run_server(config, None, None).await,
        Some(Commands::Run { host, port }) => server::run_server(config, host, port).await,
        Some(Commands::Providers) => cmd_providers::providers_list(&config).await,
        Some(Commands::Probe { provider }) => {
            cmd_providers::probe(&config, provider.as_deref()).await
        }
    }
}

/// File logging is optional; fall back to console only.
fn init_tracing_or_warn() {
    if let Err(e) = server::init_tracing() {
        tracing_subscriber::fmt().init();
        tracing::warn!("File logging disabled: {}", e);
    }
}
