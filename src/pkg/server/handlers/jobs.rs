use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::{
    pkg::{
        internal::adaptors::jobs::spec::{JobEntry, JobPosting},
        server::state::AppState,
    },
    prelude::{AppError, Result},
};

#[derive(Serialize)]
pub struct CreatedJob {
    pub message: &'static str,
    pub job: JobEntry,
}

#[derive(Serialize)]
pub struct JobList {
    pub total_jobs: usize,
    pub jobs: Vec<JobEntry>,
}

pub async fn create(
    State(state): State<AppState>,
    payload: core::result::Result<Json<JobPosting>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedJob>)> {
    let Json(posting) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    posting.check()?;
    let job = state.jobs.create(posting).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedJob {
            message: "Job stored successfully",
            job,
        }),
    ))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<JobList>> {
    let jobs = state.jobs.list_all().await?;
    Ok(Json(JobList {
        total_jobs: jobs.len(),
        jobs,
    }))
}

pub async fn get(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobEntry>> {
    Ok(Json(state.jobs.get_by_id(&job_id).await?))
}
