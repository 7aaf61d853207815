//! HuggingFace Inference API adapter for Switchboard.

mod api;
mod converter;
mod provider;

pub use provider::HuggingFaceProvider;
