#![allow(dead_code)]

//! Test infrastructure for ct-server API tests

use ct_core::ContactSubmission;
use ct_server::AppState;
use ct_store::{ContactStore, MemoryStore, StoreError, StoreResult};

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response, header::CONTENT_TYPE},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

pub const TEST_MAX_BODY_BYTES: usize = 64 * 1024;

/// Detail only the server log should ever see
pub const STORE_FAILURE_DETAIL: &str = "new row violates row-level security policy";

/// Store that rejects every insert, counting attempts
#[derive(Default)]
pub struct FailingStore {
    pub attempts: AtomicUsize,
}

impl FailingStore {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactStore for FailingStore {
    async fn insert(&self, _submission: &ContactSubmission) -> StoreResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Rejected {
            status: 401,
            message: STORE_FAILURE_DETAIL.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    async fn check(&self) -> StoreResult<()> {
        Err(StoreError::config("store unreachable"))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// AppState backed by an in-memory store the test can inspect
pub fn create_memory_app_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (AppState::new(store.clone(), TEST_MAX_BODY_BYTES), store)
}

/// AppState whose store fails every insert
pub fn create_failing_app_state() -> (AppState, Arc<FailingStore>) {
    let store = Arc::new(FailingStore::default());
    (AppState::new(store.clone(), TEST_MAX_BODY_BYTES), store)
}

pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
