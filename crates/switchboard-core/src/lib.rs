//! # Switchboard Core
//!
//! Routing machinery shared by the proxy and the CLI.
//!
//! ## Components
//!
//! - [`ProviderRegistry`] - Explicit map of registered adapters
//! - [`SlidingWindowLimiter`] - Per (provider, client) admission control
//! - [`FallbackOrchestrator`] - Priority-ordered dispatch with canned fallback

pub mod error;
pub mod orchestrator;
pub mod rate_limit;
pub mod registry;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use error::RegistryError;
pub use orchestrator::{canned_response, FallbackOrchestrator, OrchestratorPolicy};
pub use rate_limit::{RateLimitStore, SlidingWindowLimiter, DEFAULT_WINDOW};
pub use registry::ProviderRegistry;
