//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::resources::ResourceStore;
use crate::server::routes::{health_handler, search_handler, topics_handler};
use crate::server::static_files::{serve_asset, serve_index};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub store: Arc<ResourceStore>,
}

/// CORS for the read-only API. No configured origins (or "*") means any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_any = allowed_origins.iter().any(|origin| origin == "*");
    let allow_origin = if allow_any || origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE])
}

/// Build the Axum application router
///
/// The store is loaded before this is called and never changes afterwards,
/// so handlers share it through a plain `Arc`.
pub fn build_app(store: Arc<ResourceStore>, allowed_origins: &[String]) -> Router {
    let app_state = AxumAppState { store };

    Router::new()
        .route("/", get(serve_index))
        .route("/topics", get(topics_handler))
        .route("/search", get(search_handler))
        .route("/health", get(health_handler))
        // Any other path: embedded asset or 404
        .fallback(serve_asset)
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
