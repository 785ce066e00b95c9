use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::prelude::{AppError, Result};

/// A job posting as submitted by an HR client. Every field is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate)]
pub struct JobPosting {
    #[validate(custom(function = "non_blank", message = "job_id must not be blank"))]
    pub job_id: String,
    #[validate(custom(function = "non_blank", message = "title must not be blank"))]
    pub title: String,
    #[validate(custom(function = "non_blank", message = "company must not be blank"))]
    pub company: String,
    #[validate(custom(function = "non_blank", message = "location must not be blank"))]
    pub location: String,
    #[validate(custom(function = "non_blank", message = "description must not be blank"))]
    pub description: String,
    #[validate(custom(function = "non_blank", message = "employment_type must not be blank"))]
    pub employment_type: String,
    #[validate(custom(function = "non_blank", message = "experience must not be blank"))]
    pub experience: String,
    #[validate(custom(function = "non_blank", message = "salary must not be blank"))]
    pub salary: String,
    #[validate(url(message = "apply_url must be a valid URL"))]
    pub apply_url: String,
}

fn non_blank(value: &str) -> core::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl JobPosting {
    /// Checks every field is present and non-blank and that `apply_url` is a
    /// URL. Values are stored exactly as submitted, so nothing is rewritten.
    ///
    /// The error names the offending fields in alphabetical order.
    pub fn check(&self) -> Result<()> {
        let Err(errs) = self.validate() else {
            return Ok(());
        };
        let mut fields: Vec<String> = errs
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort();
        Err(AppError::Validation(format!(
            "missing or malformed fields: {}",
            fields.join(", ")
        )))
    }
}

/// A stored posting together with the time the database accepted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct JobEntry {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub posting: JobPosting,
    pub created_at: DateTime<Utc>,
}
