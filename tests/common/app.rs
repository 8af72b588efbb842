//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use luma_threshold::Threshold;
use tower::ServiceExt;

use lumaseg::server::{build_router, create_app_state};

use super::fixtures;

/// Test application with its own temporary uploads directory.
pub struct TestApp {
    router: axum::Router,
    // Held so the uploads directory outlives the test.
    _uploads: tempfile::TempDir,
}

impl TestApp {
    /// Create a test application with the default threshold.
    pub fn new() -> Self {
        Self::with_threshold(Threshold::default())
    }

    /// Create a test application with a specific threshold.
    pub fn with_threshold(threshold: Threshold) -> Self {
        let uploads = tempfile::tempdir().expect("Failed to create temp uploads dir");
        let state = create_app_state(uploads.path().join("uploads"), threshold)
            .expect("Failed to create app state");

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self {
            router,
            _uploads: uploads,
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a request with custom method and headers, empty body
    pub async fn request_with_headers(
        &self,
        method: &str,
        path: &str,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// Make a POST request with a prebuilt multipart body
    pub async fn post_multipart(&self, path: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={}", fixtures::BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// Upload `data` under the `image` field with the given file name
    pub async fn upload(&self, filename: &str, data: &[u8]) -> TestResponse {
        let body = fixtures::multipart_body("image", filename, data);
        self.post_multipart("/api/upload", body).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }

    /// Check if response is a JPEG image
    pub fn is_jpeg(&self) -> bool {
        self.body.len() >= 2 && self.body[0] == 0xFF && self.body[1] == 0xD8
    }
}
