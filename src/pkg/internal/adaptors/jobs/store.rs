use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    pkg::{
        internal::adaptors::jobs::{
            mutators::JobMutator,
            selectors::JobSelector,
            spec::{JobEntry, JobPosting},
        },
        server::state::GetTxn,
    },
    prelude::{AppError, Result},
};

/// Append-only collection of job postings keyed by `job_id`.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Stores a new posting. Fails with [`AppError::DuplicateKey`] when the
    /// `job_id` is already taken, leaving the existing posting untouched.
    async fn create(&self, posting: JobPosting) -> Result<JobEntry>;

    /// Every stored posting, oldest first.
    async fn list_all(&self) -> Result<Vec<JobEntry>>;

    /// Exact, case-sensitive lookup. Fails with [`AppError::NotFound`].
    async fn get_by_id(&self, job_id: &str) -> Result<JobEntry>;

    /// Fails when the backing storage cannot be reached.
    async fn ping(&self) -> Result<()>;
}

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        PgJobStore { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn create(&self, posting: JobPosting) -> Result<JobEntry> {
        let mut tx = self.pool.begin_txn().await?;
        let created = match JobMutator::new(&mut *tx).create(&posting).await {
            Ok(row) => row,
            Err(AppError::Database(e)) if is_unique_violation(&e) => None,
            Err(e) => return Err(e),
        };
        let Some(entry) = created else {
            // dropping the transaction rolls it back
            return Err(AppError::DuplicateKey(posting.job_id));
        };
        tx.commit().await?;
        tracing::info!(job_id = %entry.posting.job_id, "job stored");
        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<JobEntry>> {
        let mut conn = self.pool.acquire().await?;
        JobSelector::new(&mut *conn).get_all().await
    }

    async fn get_by_id(&self, job_id: &str) -> Result<JobEntry> {
        let mut conn = self.pool.acquire().await?;
        JobSelector::new(&mut *conn)
            .get_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::NotFound(job_id.to_string()))
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("select 1").execute(&self.pool).await?;
        Ok(())
    }
}
