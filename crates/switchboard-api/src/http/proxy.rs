//! `/agent-proxy` handlers.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures::FutureExt;
use serde::Deserialize;
use switchboard_core::canned_response;
use switchboard_protocols::ChatResponse;
use tracing::{debug, error, warn};

use super::envelope::{Capabilities, HealthEnvelope, ProxyRequest, ResponseEnvelope};
use crate::error::ApiError;
use crate::state::AppState;

/// Client id used when no identifying header is present.
pub const ANONYMOUS_CLIENT: &str = "anonymous";

const HEALTH_ACTION: &str = "health";

/// Identify the caller for rate limiting.
///
/// First `x-forwarded-for` entry, then `x-real-ip`, then `x-client-id`.
pub fn client_id(headers: &HeaderMap) -> String {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    if let Some(forwarded) = header_value("x-forwarded-for") {
        if let Some(first) = forwarded.split(',').map(str::trim).find(|s| !s.is_empty()) {
            return first.to_string();
        }
    }

    header_value("x-real-ip")
        .or_else(|| header_value("x-client-id"))
        .unwrap_or(ANONYMOUS_CLIENT)
        .to_string()
}

/// POST: generate a completion.
pub async fn handle_post(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    state.record_request();

    let proxy_request = ProxyRequest::from_slice(&body)?;
    let client = client_id(&headers);

    match AssertUnwindSafe(dispatch(&state, &client, proxy_request))
        .catch_unwind()
        .await
    {
        Ok(result) => result.map(|response| Json(ResponseEnvelope::from(response))),
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            error!(client = %client, error = %message, "Dispatch panicked");
            Err(ApiError::Internal(message))
        }
    }
}

async fn dispatch(
    state: &AppState,
    client: &str,
    proxy_request: ProxyRequest,
) -> Result<ChatResponse, ApiError> {
    let ProxyRequest { provider, request } = proxy_request;

    let Some(provider_id) = provider else {
        debug!(client = %client, "Auto dispatch");
        return Ok(state.orchestrator.generate(request).await);
    };

    let provider = state
        .registry
        .get(&provider_id)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown provider: {}", provider_id)))?;

    let limit = provider.descriptor().rate_limit_per_minute;
    if limit > 0 && !state.limiter.check_rate_limit(&provider_id, client, limit).await {
        return Err(ApiError::RateLimited(provider_id));
    }

    match state.orchestrator.generate_with(&provider_id, request.clone()).await {
        Ok(response) => Ok(response),
        Err(e) => {
            warn!(
                provider = %provider_id,
                error_kind = e.kind_name(),
                error = %e,
                "Explicit provider failed, using canned response"
            );
            Ok(canned_response(&request))
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

#[derive(Debug, Deserialize)]
pub struct HealthQuery {
    pub provider: Option<String>,
    pub action: Option<String>,
}

/// GET: provider health probe. Never counts against rate limits.
pub async fn handle_get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HealthQuery>,
) -> Result<Json<HealthEnvelope>, ApiError> {
    if query.action.as_deref() != Some(HEALTH_ACTION) {
        return Err(ApiError::BadRequest(
            "Unsupported action. Use action=health".to_string(),
        ));
    }

    let provider_id = query
        .provider
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Provider parameter is required".to_string()))?;

    let provider = state
        .registry
        .get(&provider_id)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown provider: {}", provider_id)))?;

    let available = provider.is_available().await;
    debug!(provider = %provider_id, available, "Health probe");

    let capabilities = Capabilities::new(provider.descriptor(), provider.is_configured());
    Ok(Json(HealthEnvelope::new(provider_id, available, capabilities)))
}

/// OPTIONS: CORS preflight. The origin header comes from [`allow_any_origin`].
pub async fn handle_options() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

/// Every proxy response is readable cross-origin.
pub async fn allow_any_origin(mut response: Response) -> Response {
    response
        .headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
#[path = "proxy_tests.rs"]
mod tests;
