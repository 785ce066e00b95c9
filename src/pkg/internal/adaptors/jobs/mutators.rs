use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobPosting};
use crate::prelude::Result;

pub struct JobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobMutator { pool }
    }

    /// Inserts the posting unless its `job_id` is taken.
    ///
    /// `None` means a row with that key already exists and nothing was written.
    pub async fn create(&mut self, job: &JobPosting) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (job_id, title, company, location, description,
                              employment_type, experience, salary, apply_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (job_id) DO NOTHING
            RETURNING job_id, title, company, location, description,
                      employment_type, experience, salary, apply_url, created_at
            "#,
        )
        .bind(&job.job_id)
        .bind(&job.title)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.description)
        .bind(&job.employment_type)
        .bind(&job.experience)
        .bind(&job.salary)
        .bind(&job.apply_url)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
