//! # Switchboard Protocols
//!
//! Core protocol definitions (types and traits) for the Switchboard router.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Items
//!
//! - [`LLMProvider`] - Trait every vendor adapter implements
//! - [`ChatRequest`] / [`ChatResponse`] - The uniform chat contract
//! - [`ProviderDescriptor`] - Static description of an adapter
//! - [`ProviderSettings`] - Construction-time overrides for an adapter
//! - [`ProviderError`] - Typed adapter failures

pub mod error;
pub mod provider;
pub mod types;

pub use error::ProviderError;
pub use provider::{
    ChatRequest, ChatResponse, LLMProvider, ProviderDescriptor, ProviderKind, ProviderSettings,
    DEFAULT_CLOUD_TIMEOUT, DEFAULT_LOCAL_TIMEOUT, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
    PROBE_TIMEOUT,
};
pub use types::*;
