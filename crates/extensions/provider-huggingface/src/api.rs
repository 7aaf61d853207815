//! Inference API types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct InferenceRequest {
    pub inputs: String,
    pub parameters: Parameters,
}

#[derive(Debug, Serialize)]
pub struct Parameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    pub return_full_text: bool,
}

#[derive(Debug, Deserialize)]
pub struct Generation {
    #[serde(default)]
    pub generated_text: Option<String>,
}

/// Text-generation models answer with a list; some endpoints with one object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InferenceResponse {
    Batch(Vec<Generation>),
    Single(Generation),
}

impl InferenceResponse {
    pub fn into_text(self) -> Option<String> {
        match self {
            InferenceResponse::Batch(items) => items.into_iter().next()?.generated_text,
            InferenceResponse::Single(item) => item.generated_text,
        }
    }
}
