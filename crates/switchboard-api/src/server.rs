//! Proxy server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use switchboard_core::RateLimitStore;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::http::routes::create_router;
use crate::state::AppState;

/// How often idle limiter windows are dropped.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

/// Proxy server configuration.
#[derive(Debug, Clone)]
pub struct ProxyServerConfig {
    pub host: String,
    pub port: u16,
    pub sweep_interval: Duration,
}

impl ProxyServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }

    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }
}

impl Default for ProxyServerConfig {
    fn default() -> Self {
        Self::new("127.0.0.1", 8080)
    }
}

/// Periodically drop empty rate-limit windows.
pub fn spawn_sweeper(limiter: Arc<dyn RateLimitStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        // The first tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            limiter.sweep().await;
        }
    })
}

/// The proxy server.
pub struct ProxyServer {
    config: ProxyServerConfig,
    state: Arc<AppState>,
}

impl ProxyServer {
    pub fn new(config: ProxyServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Serve until Ctrl-C.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(self.state.clone());

        let addr: SocketAddr = self.addr().parse()?;
        let listener = TcpListener::bind(addr).await?;

        let sweeper = spawn_sweeper(self.state.limiter.clone(), self.config.sweep_interval);

        info!(
            providers = self.state.registry.len(),
            "Switchboard proxy listening on {}", addr
        );
        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        sweeper.abort();
        info!(
            requests = self.state.request_count(),
            uptime_secs = self.state.uptime().as_secs(),
            "Proxy stopped"
        );
        served?;
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchboard_core::{FallbackOrchestrator, OrchestratorPolicy, ProviderRegistry, SlidingWindowLimiter};

    fn create_test_state() -> Arc<AppState> {
        let orchestrator = Arc::new(FallbackOrchestrator::new(
            Arc::new(ProviderRegistry::new()),
            OrchestratorPolicy::default(),
        ));
        Arc::new(AppState::new(orchestrator, Arc::new(SlidingWindowLimiter::default())))
    }

    #[test]
    fn test_proxy_server_config_default() {
        let config = ProxyServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.sweep_interval, DEFAULT_SWEEP_INTERVAL);
    }

    #[test]
    fn test_proxy_server_addr_format() {
        let config = ProxyServerConfig::new("0.0.0.0", 3000).with_sweep_interval(Duration::from_secs(5));
        assert_eq!(config.sweep_interval, Duration::from_secs(5));
        let server = ProxyServer::new(config, create_test_state());
        assert_eq!(server.addr(), "0.0.0.0:3000");
    }

    #[tokio::test]
    async fn test_run_rejects_bad_address() {
        let server = ProxyServer::new(ProxyServerConfig::new("not an address", 1), create_test_state());
        assert!(server.run().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_drops_idle_windows() {
        let limiter = Arc::new(SlidingWindowLimiter::default());
        assert!(limiter.check_rate_limit("groq", "client", 5).await);
        assert_eq!(limiter.tracked_keys(), 1);

        let sweeper = spawn_sweeper(limiter.clone(), Duration::from_secs(30));

        tokio::time::sleep(Duration::from_secs(45)).await;
        assert_eq!(limiter.tracked_keys(), 1);

        tokio::time::sleep(Duration::from_secs(50)).await;
        assert_eq!(limiter.tracked_keys(), 0);

        sweeper.abort();
    }
}
