use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    topics: usize,
    resources: usize,
}

/// Health check endpoint
///
/// The catalog is fully loaded before the listener is bound, so a running
/// server is always healthy. Reports the size of the loaded catalog.
pub async fn health_handler(Extension(state): Extension<AxumAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        topics: state.store.len(),
        resources: state.store.resource_count(),
    })
}
