//! Router harness shared by the route tests

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use crate::blob::{BlobStore, MemoryBlobStore};
use crate::db::repos::memory::MemoryItemStore;
use crate::http::server::{build_router, AppState, ServerConfig};

pub(crate) struct TestApp {
    pub items: Arc<MemoryItemStore>,
    pub blobs: Option<Arc<MemoryBlobStore>>,
    router: Router,
}

impl TestApp {
    /// Extended variant with a configured bucket.
    pub fn new() -> Self {
        Self::build(true, Some(Arc::new(MemoryBlobStore::new("test-bucket"))))
    }

    /// Base variant: no duplicate pre-check.
    pub fn without_duplicate_check() -> Self {
        Self::build(false, Some(Arc::new(MemoryBlobStore::new("test-bucket"))))
    }

    pub fn without_bucket() -> Self {
        Self::build(true, None)
    }

    fn build(duplicate_check: bool, blobs: Option<Arc<MemoryBlobStore>>) -> Self {
        let items = Arc::new(MemoryItemStore::new());
        let state = AppState::new(
            items.clone(),
            blobs.clone().map(|b| b as Arc<dyn BlobStore>),
        )
        .with_duplicate_check(duplicate_check);
        let router = build_router(state, &ServerConfig::default());
        Self {
            items,
            blobs,
            router,
        }
    }

    pub fn blobs(&self) -> &MemoryBlobStore {
        self.blobs.as_deref().expect("test app has no blob store")
    }

    /// Send a request and decode the JSON response body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }
}

pub(crate) fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub(crate) fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub(crate) fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub(crate) const BOUNDARY: &str = "itemctl-test-boundary";

/// One multipart part: (field name, optional filename, content type, data).
pub(crate) type Part<'a> = (&'a str, Option<&'a str>, &'a str, &'a [u8]);

pub(crate) fn post_multipart(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for (name, filename, content_type, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}
