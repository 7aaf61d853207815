//! Rate limit storage contract.

use async_trait::async_trait;

/// Admission control keyed by `(provider, client)`.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Admit and record a request, or reject it without recording.
    ///
    /// A `limit` of zero disables limiting for the provider.
    async fn check_rate_limit(&self, provider_id: &str, client_id: &str, limit: u32) -> bool;

    /// Drop keys with no events left in their window. Returns how many went.
    async fn sweep(&self) -> usize;
}

/// Storage key for a `(provider, client)` pair.
pub fn limiter_key(provider_id: &str, client_id: &str) -> String {
    format!("{provider_id}-{client_id}")
}
