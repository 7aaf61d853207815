//! Priority-ordered dispatch across registered providers.

mod dispatch;
mod fallback;
mod policy;

pub use dispatch::FallbackOrchestrator;
pub use fallback::{canned_response, FALLBACK_MODEL, FALLBACK_PROCESSING_TIME_MS};
pub use policy::OrchestratorPolicy;
