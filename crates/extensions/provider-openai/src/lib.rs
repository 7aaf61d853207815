//! OpenAI-compatible chat completion adapter for Switchboard.
//!
//! One adapter serves every vendor that speaks the `/chat/completions`
//! dialect. Vendors differ only by [`Preset`].

mod api;
mod converter;
mod parser;
mod presets;
mod provider;

pub use presets::Preset;
pub use provider::OpenAICompatProvider;
