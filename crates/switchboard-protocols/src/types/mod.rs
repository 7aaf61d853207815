//! Common types shared by every adapter.

mod message;
mod common;

pub use message::*;
pub use common::*;
