#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use job_feed::{
    pkg::{
        internal::adaptors::jobs::{
            spec::{JobEntry, JobPosting},
            store::JobStore,
        },
        server::{router::routes, state::AppState},
    },
    prelude::{AppError, Result},
};
use serde_json::Value;
use tower::ServiceExt;

pub const BASE_URL: &str = "https://jobs.example";

/// Store double keeping entries in insertion order.
#[derive(Default)]
pub struct MemoryJobStore {
    entries: Mutex<Vec<JobEntry>>,
    unreachable: AtomicBool,
}

impl MemoryJobStore {
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn create(&self, posting: JobPosting) -> Result<JobEntry> {
        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.posting.job_id == posting.job_id) {
            return Err(AppError::DuplicateKey(posting.job_id));
        }
        let base = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
        let entry = JobEntry {
            posting,
            created_at: base + Duration::minutes(entries.len() as i64),
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<JobEntry>> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn get_by_id(&self, job_id: &str) -> Result<JobEntry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.posting.job_id == job_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(job_id.to_string()))
    }

    async fn ping(&self) -> Result<()> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

pub fn app() -> Router {
    app_with(Arc::new(MemoryJobStore::default()))
}

pub fn app_with(store: Arc<MemoryJobStore>) -> Router {
    routes(AppState::with_store(store, BASE_URL))
}

pub fn acme_json() -> Value {
    serde_json::json!({
        "job_id": "J1",
        "title": "Engineer",
        "company": "Acme",
        "location": "Remote",
        "description": "Build things",
        "employment_type": "Full-time",
        "experience": "2 yrs",
        "salary": "10 LPA",
        "apply_url": "https://acme.example/apply"
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body is json")
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> TestResponse {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let content_type = res
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> TestResponse {
    send(
        app,
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
