use axum::{routing::get, Router};

use super::handlers::{feeds, jobs, pages};
use super::handlers::probes::{healthz, livez};
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    Ok(routes(state))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/jobs", get(jobs::list).post(jobs::create))
        .route("/jobs/:job_id", get(jobs::get))
        .route("/feeds/indeed", get(feeds::indeed))
        .route("/sitemap.xml", get(feeds::sitemap))
        .route("/robots.txt", get(feeds::robots))
        .route("/job/:job_id", get(pages::job_detail))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}
