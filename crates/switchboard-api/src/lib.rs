//! # Switchboard API
//!
//! Network boundary for the provider router.
//!
//! ```text
//! caller ─▶ /agent-proxy ─▶ [rate limit] ─▶ orchestrator | adapter ─▶ vendor
//!                                   │
//!                                   └─▶ normalized JSON envelope
//! ```
//!
//! The proxy answers 200 with a usable body unless the request itself is
//! malformed (400), throttled (429) or dispatch panics (500).

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::routes::create_router;
pub use server::{spawn_sweeper, ProxyServer, ProxyServerConfig};
pub use state::AppState;
