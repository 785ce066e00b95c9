use askama::Template;
use axum::{extract::State, http::header, response::IntoResponse};

use crate::{
    pkg::server::{
        state::AppState,
        uispec::{job_page_url, robots_txt, FeedItem, IndeedFeed, Sitemap, SitemapUrl},
    },
    prelude::Result,
};

const XML: [(header::HeaderName, &str); 1] = [(header::CONTENT_TYPE, "application/xml")];

pub async fn indeed(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let entries = state.jobs.list_all().await?;
    let feed = IndeedFeed {
        publisher: &state.service_name,
        publisher_url: &state.base_url,
        jobs: entries
            .iter()
            .map(|e| FeedItem::new(e, &state.base_url))
            .collect(),
    };
    Ok((XML, feed.render()?))
}

pub async fn sitemap(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let urls: Vec<SitemapUrl> = state
        .jobs
        .list_all()
        .await?
        .iter()
        .map(|e| SitemapUrl {
            loc: job_page_url(&state.base_url, &e.posting.job_id),
            lastmod: e.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();
    Ok((XML, Sitemap { urls }.render()?))
}

pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&state.base_url),
    )
}
