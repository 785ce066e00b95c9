use askama::Template;

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobPosting};

const META_DESCRIPTION_LEN: usize = 155;

/// Public URL of a job-detail page.
pub fn job_page_url(base_url: &str, job_id: &str) -> String {
    format!(
        "{}/job/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(job_id)
    )
}

/// Whitespace-collapsed description, cut to fit a search snippet.
pub fn meta_description(description: &str) -> String {
    let flat = description.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= META_DESCRIPTION_LEN {
        return flat;
    }
    let cut: String = flat.chars().take(META_DESCRIPTION_LEN - 3).collect();
    format!("{}...", cut.trim_end())
}

pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /job/\nDisallow: /jobs\nDisallow: /feeds/\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

pub struct FeedItem<'a> {
    pub job: &'a JobPosting,
    pub url: String,
    pub date: String,
}

impl<'a> FeedItem<'a> {
    pub fn new(entry: &'a JobEntry, base_url: &str) -> Self {
        FeedItem {
            job: &entry.posting,
            url: job_page_url(base_url, &entry.posting.job_id),
            date: entry.created_at.to_rfc2822(),
        }
    }
}

#[derive(Template)]
#[template(path = "feeds/indeed.xml", escape = "html")]
pub struct IndeedFeed<'a> {
    pub publisher: &'a str,
    pub publisher_url: &'a str,
    pub jobs: Vec<FeedItem<'a>>,
}

pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: String,
}

#[derive(Template)]
#[template(path = "sitemap.xml", escape = "html")]
pub struct Sitemap {
    pub urls: Vec<SitemapUrl>,
}

#[derive(Template)]
#[template(path = "job_detail.html")]
pub struct JobDetail<'a> {
    pub job: &'a JobPosting,
    pub page_url: String,
    pub meta_description: String,
    pub posted: String,
    pub json_ld: String,
}
