//! HTTP client for integration testing.
//!
//! Drives the axum router in-process, without binding a socket.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use resource_hub::domains::resources::ResourceStore;
use resource_hub::server::build_app;
use serde_json::Value;
use tower::ServiceExt;

/// Response captured from a single request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Test client around a freshly built router.
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(store: ResourceStore) -> Self {
        Self::with_origins(store, &[])
    }

    pub fn with_origins(store: ResourceStore, allowed_origins: &[String]) -> Self {
        Self {
            router: build_app(Arc::new(store), allowed_origins),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_origin(&self, uri: &str, origin: &str) -> TestResponse {
        self.send(
            Request::builder()
                .uri(uri)
                .header("origin", origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn preflight(&self, uri: &str, origin: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::OPTIONS)
                .uri(uri)
                .header("origin", origin)
                .header("access-control-request-method", "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
