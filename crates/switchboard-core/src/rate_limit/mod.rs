//! Per (provider, client) admission control.
//!
//! The proxy only talks to [`RateLimitStore`], so a shared store can replace
//! the in-memory [`SlidingWindowLimiter`] without touching call sites.

mod sliding;
mod store;

pub use sliding::{SlidingWindowLimiter, DEFAULT_WINDOW};
pub use store::{limiter_key, RateLimitStore};
