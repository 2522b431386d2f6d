//! Catalog endpoints.
//!
//! GET /topics               -> ["Databases", "Python", ...]
//! GET /search               -> [{ "topic": ..., "resources": [...] }, ...]
//! GET /search?topic=python  -> [{ "title": ..., "url": ... }, ...]

use axum::{
    extract::{Extension, Query},
    Json,
};

use crate::domains::resources::{find_resources, list_topics, SearchResults};
use crate::server::app::AxumAppState;

/// List distinct topic names
pub async fn topics_handler(Extension(state): Extension<AxumAppState>) -> Json<Vec<String>> {
    Json(list_topics(&state.store))
}

/// Search resources by topic (case-insensitive)
///
/// Query pairs are taken raw so a repeated `topic` uses its first value
/// instead of rejecting the request.
pub async fn search_handler(
    Extension(state): Extension<AxumAppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<SearchResults> {
    Json(find_resources(&state.store, first_param(&params, "topic")))
}

fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}
