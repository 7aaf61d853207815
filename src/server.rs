//! Logging setup and proxy startup.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use switchboard_api::{AppState, ProxyServer, ProxyServerConfig};
use switchboard_config::{Config, ConfigValidator};
use switchboard_core::{FallbackOrchestrator, OrchestratorPolicy, ProviderRegistry, SlidingWindowLimiter};

use crate::register::register_providers;

/// Get the ~/.switchboard directory path.
pub(crate) fn switchboard_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".switchboard"))
        .unwrap_or_else(|| PathBuf::from(".switchboard"))
}

/// Initialize tracing with console and file output.
///
/// Log files are written to ~/.switchboard/logs/ with daily rotation.
pub(crate) fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = switchboard_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("switchboard")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Dropping the guard stops the background writer.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(true)
        )
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
        )
        .init();

    Ok(())
}

/// Check the configuration, logging warnings and failing on errors.
pub(crate) fn validate_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config);
    for err in &result.errors {
        error!("Config error: {}", err);
    }
    for warning in result.into_result()? {
        warn!("Config warning: {}", warning);
    }
    Ok(())
}

/// Registry and orchestrator for the given configuration.
pub(crate) fn build_orchestrator(config: &Config) -> Arc<FallbackOrchestrator> {
    let registry = Arc::new(ProviderRegistry::new());
    register_providers(&registry, config);

    let policy = OrchestratorPolicy::new(
        config.orchestrator.cloud_priority.clone(),
        config.orchestrator.local_priority.clone(),
    );
    Arc::new(FallbackOrchestrator::new(registry, policy))
}

/// Run the proxy in foreground.
pub(crate) async fn run_server(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    validate_config(&config)?;

    let orchestrator = build_orchestrator(&config);
    info!(
        candidates = ?orchestrator.candidate_ids(),
        "Fallback order resolved"
    );

    let limiter = Arc::new(SlidingWindowLimiter::new(Duration::from_secs(
        config.proxy.window_seconds,
    )));
    let state = Arc::new(AppState::new(orchestrator, limiter));

    let server_config = ProxyServerConfig::new(config.server.host.clone(), config.server.port)
        .with_sweep_interval(Duration::from_secs(config.proxy.sweep_interval_seconds));

    ProxyServer::new(server_config, state).run().await
}
