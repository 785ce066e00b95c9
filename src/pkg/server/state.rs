use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool, Postgres, Transaction};

use crate::{
    conf::{settings, DEFAULT_SERVICE_NAME},
    pkg::internal::adaptors::jobs::store::{JobStore, PgJobStore},
    prelude::Result,
};

pub fn db_pool() -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

#[async_trait]
pub trait GetTxn {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>>;
}

#[async_trait]
impl GetTxn for PgPool {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>> {
        Ok(self.begin().await?)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobStore>,
    pub base_url: Arc<str>,
    pub service_name: Arc<str>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        let pool = db_pool()?;
        Ok(AppState {
            jobs: Arc::new(PgJobStore::new(pool)),
            base_url: settings.base_url.as_str().into(),
            service_name: settings.service_name.as_str().into(),
        })
    }

    /// State backed by an arbitrary store.
    pub fn with_store(jobs: Arc<dyn JobStore>, base_url: &str) -> AppState {
        AppState {
            jobs,
            base_url: base_url.trim_end_matches('/').into(),
            service_name: DEFAULT_SERVICE_NAME.into(),
        }
    }
}
