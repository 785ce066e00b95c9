use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::{
    pkg::{
        internal::structured_data,
        server::{
            state::AppState,
            uispec::{job_page_url, meta_description, JobDetail},
        },
    },
    prelude::Result,
};

pub async fn job_detail(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Html<String>> {
    let entry = state.jobs.get_by_id(&job_id).await?;
    let page_url = job_page_url(&state.base_url, &entry.posting.job_id);
    let json_ld =
        structured_data::to_script_json(&structured_data::job_posting(&entry, &page_url));

    let template = JobDetail {
        job: &entry.posting,
        meta_description: meta_description(&entry.posting.description),
        posted: entry.created_at.format("%B %-d, %Y").to_string(),
        page_url,
        json_ld,
    };

    Ok(Html(template.render()?))
}
