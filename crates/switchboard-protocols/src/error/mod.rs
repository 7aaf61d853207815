//! Error types for the Switchboard protocol layer.

mod provider;

pub use provider::*;
