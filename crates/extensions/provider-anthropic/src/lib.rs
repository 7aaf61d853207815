//! Anthropic Messages API adapter for Switchboard.

mod api;
mod converter;
mod parser;
mod provider;

pub use provider::AnthropicProvider;
