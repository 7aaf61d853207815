//! LLM provider protocol definitions.
//!
//! Providers wrap one remote inference API (local runtime or cloud vendor)
//! behind the uniform [`LLMProvider`] contract.

mod descriptor;
mod request;
mod response;
mod settings;
mod traits;

pub use descriptor::*;
pub use request::*;
pub use response::*;
pub use settings::*;
pub use traits::*;
