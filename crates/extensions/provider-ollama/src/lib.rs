//! Ollama adapter for Switchboard.
//!
//! Talks to a trusted local runtime over `/api/chat`. No credentials.

mod api;
mod parser;
mod provider;

pub use provider::OllamaProvider;
