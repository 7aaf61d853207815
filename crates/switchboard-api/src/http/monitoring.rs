//! Liveness and provider listing.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use switchboard_protocols::{ProviderDescriptor, ProviderKind};

use crate::state::AppState;

/// Liveness probe: the process is up and serving.
pub async fn liveness_probe() -> &'static str {
    "OK"
}

/// One row of `GET /providers`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSummary {
    #[serde(flatten)]
    pub descriptor: ProviderDescriptor,
    pub kind: ProviderKind,
    pub configured: bool,
}

pub async fn list_providers(State(state): State<Arc<AppState>>) -> Json<Vec<ProviderSummary>> {
    let summaries = state
        .registry
        .list_ids()
        .into_iter()
        .filter_map(|id| state.registry.get(&id))
        .map(|provider| ProviderSummary {
            descriptor: provider.descriptor().clone(),
            kind: provider.kind(),
            configured: provider.is_configured(),
        })
        .collect();
    Json(summaries)
}
