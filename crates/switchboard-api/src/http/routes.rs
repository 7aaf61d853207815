//! Router construction.

use std::sync::Arc;

use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{monitoring, proxy};
use crate::state::AppState;

/// Path of the proxy endpoint.
pub const PROXY_PATH: &str = "/agent-proxy";

/// Create the router.
///
/// `CorsLayer` answers every OPTIONS itself, so the proxy path sets its
/// own CORS headers.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let proxy_routes = Router::new()
        .route(
            PROXY_PATH,
            post(proxy::handle_post)
                .get(proxy::handle_get)
                .options(proxy::handle_options)
                .fallback(proxy::method_not_allowed),
        )
        .layer(middleware::map_response(proxy::allow_any_origin))
        .with_state(state.clone());

    let info_routes = Router::new()
        .route("/providers", get(monitoring::list_providers))
        .route("/livez", get(monitoring::liveness_probe))
        .layer(cors)
        .with_state(state);

    Router::new()
        .merge(proxy_routes)
        .merge(info_routes)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
