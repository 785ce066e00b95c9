//! schema.org `JobPosting` documents for job-detail pages.

use serde_json::{json, Value};

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;

/// Maps a free-form employment type to the schema.org vocabulary.
pub fn employment_type(raw: &str) -> &'static str {
    let key: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    match key.as_str() {
        "fulltime" | "permanent" => "FULL_TIME",
        "parttime" => "PART_TIME",
        "contract" | "contractor" | "freelance" => "CONTRACTOR",
        "temporary" | "temp" => "TEMPORARY",
        "intern" | "internship" => "INTERN",
        "volunteer" => "VOLUNTEER",
        "perdiem" => "PER_DIEM",
        _ => "OTHER",
    }
}

fn is_remote(location: &str) -> bool {
    location.to_lowercase().contains("remote")
}

pub fn job_posting(entry: &JobEntry, page_url: &str) -> Value {
    let job = &entry.posting;
    let mut doc = json!({
        "@context": "https://schema.org/",
        "@type": "JobPosting",
        "title": job.title,
        "description": job.description,
        "identifier": {
            "@type": "PropertyValue",
            "name": job.company,
            "value": job.job_id,
        },
        "datePosted": entry.created_at.format("%Y-%m-%d").to_string(),
        "employmentType": employment_type(&job.employment_type),
        "hiringOrganization": {
            "@type": "Organization",
            "name": job.company,
        },
        "jobLocation": {
            "@type": "Place",
            "address": {
                "@type": "PostalAddress",
                "addressLocality": job.location,
            },
        },
        "experienceRequirements": job.experience,
        "url": page_url,
        "directApply": false,
    });
    if is_remote(&job.location) {
        doc["jobLocationType"] = json!("TELECOMMUTE");
    }
    doc
}

/// Serializes a document for embedding in a `<script>` element.
///
/// `<`, `>` and `&` are written as unicode escapes so that no field value can
/// close the element early.
pub fn to_script_json(doc: &Value) -> String {
    doc.to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
