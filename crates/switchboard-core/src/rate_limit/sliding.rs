//! In-memory sliding window limiter.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::store::{limiter_key, RateLimitStore};

/// Length of the trailing window.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Sliding window of admission timestamps per key.
///
/// Windows live in this process only. Two instances never share counts.
pub struct SlidingWindowLimiter {
    window: Duration,
    entries: DashMap<String, VecDeque<Instant>>,
}

impl SlidingWindowLimiter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: DashMap::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Number of keys currently tracked.
    pub fn tracked_keys(&self) -> usize {
        self.entries.len()
    }

    /// Admissions recorded in the current window for a pair.
    pub fn recorded(&self, provider_id: &str, client_id: &str) -> usize {
        let now = Instant::now();
        self.entries
            .get(&limiter_key(provider_id, client_id))
            .map(|e| e.iter().filter(|t| now.duration_since(**t) < self.window).count())
            .unwrap_or(0)
    }

    fn prune(window: Duration, now: Instant, timestamps: &mut VecDeque<Instant>) {
        while let Some(oldest) = timestamps.front() {
            if now.duration_since(*oldest) >= window {
                timestamps.pop_front();
            } else {
                break;
            }
        }
    }

    fn admit(&self, key: String, limit: u32) -> bool {
        let now = Instant::now();
        // The entry guard holds the shard lock across read-check-append.
        let mut timestamps = self.entries.entry(key).or_default();
        Self::prune(self.window, now, &mut timestamps);

        if timestamps.len() < limit as usize {
            timestamps.push_back(now);
            true
        } else {
            false
        }
    }
}

impl Default for SlidingWindowLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

#[async_trait]
impl RateLimitStore for SlidingWindowLimiter {
    async fn check_rate_limit(&self, provider_id: &str, client_id: &str, limit: u32) -> bool {
        if limit == 0 {
            return true;
        }

        let admitted = self.admit(limiter_key(provider_id, client_id), limit);
        if !admitted {
            warn!(
                provider = %provider_id,
                client = %client_id,
                limit,
                "Rate limit exceeded"
            );
        }
        admitted
    }

    async fn sweep(&self) -> usize {
        let now = Instant::now();
        let window = self.window;
        let before = self.entries.len();
        self.entries.retain(|_, timestamps| {
            Self::prune(window, now, timestamps);
            !timestamps.is_empty()
        });
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            debug!(removed, remaining = self.entries.len(), "Swept idle rate limit windows");
        }
        removed
    }
}

#[cfg(test)]
#[path = "sliding_tests.rs"]
mod tests;
