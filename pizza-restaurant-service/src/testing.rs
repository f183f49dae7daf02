use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::handlers::{app, AppState};
use crate::store::Store;

/// Fresh, migrated database in its own temporary directory. The directory is
/// removed when the returned guard is dropped.
pub fn setup_database() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let store = Store::new(path.to_str().unwrap());
    store.run_pending_migrations().unwrap();
    (dir, store)
}

pub fn setup_app() -> (TempDir, Store, Router) {
    let (dir, store) = setup_database();
    let router = app(AppState {
        store: store.clone(),
    });
    (dir, store, router)
}

/// Sends one request through the router and decodes the body as JSON.
/// Empty bodies decode to `Value::Null`.
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    (status, serde_json::from_slice(&bytes).unwrap())
}
