use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Embed the browser page at compile time
#[derive(RustEmbed)]
#[folder = "static"]
pub struct PageAssets;

/// Serve the catalog page
pub async fn serve_index() -> Response {
    serve_embedded::<PageAssets>("index.html")
}

/// Serve any other embedded asset by path, 404 if there is none
pub async fn serve_asset(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // If path is empty, serve index.html
    let path = if path.is_empty() { "index.html" } else { path };

    serve_embedded::<PageAssets>(path)
}

fn serve_embedded<E: RustEmbed>(path: &str) -> Response {
    match E::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
