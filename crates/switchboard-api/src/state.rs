//! Application state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use switchboard_core::{FallbackOrchestrator, ProviderRegistry, RateLimitStore};

/// Application state shared across handlers.
pub struct AppState {
    pub registry: Arc<ProviderRegistry>,
    pub orchestrator: Arc<FallbackOrchestrator>,
    pub limiter: Arc<dyn RateLimitStore>,
    start_time: Instant,
    request_count: AtomicU64,
}

impl AppState {
    pub fn new(
        orchestrator: Arc<FallbackOrchestrator>,
        limiter: Arc<dyn RateLimitStore>,
    ) -> Self {
        Self {
            registry: orchestrator.registry().clone(),
            orchestrator,
            limiter,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }

    /// Get uptime.
    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Get request count.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Count one proxied request.
    pub fn record_request(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }
}
