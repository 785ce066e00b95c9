//! Postgres-backed store tests. They run against `DATABASE_URL` and are
//! skipped when it is unset.

use std::sync::Arc;

use job_feed::{
    pkg::internal::adaptors::jobs::{
        spec::JobPosting,
        store::{JobStore, PgJobStore},
    },
    prelude::{AppError, Result},
};
use sqlx::postgres::PgPoolOptions;
use tracing_test::traced_test;

async fn store() -> Result<Option<PgJobStore>> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        tracing::warn!("DATABASE_URL not set, skipping");
        return Ok(None);
    };
    let pool = PgPoolOptions::new().max_connections(8).connect(&url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(Some(PgJobStore::new(pool)))
}

fn posting(job_id: &str, title: &str) -> JobPosting {
    JobPosting {
        job_id: job_id.into(),
        title: title.into(),
        company: "Acme".into(),
        location: "Remote".into(),
        description: "Build things".into(),
        employment_type: "Full-time".into(),
        experience: "2 yrs".into(),
        salary: "10 LPA".into(),
        apply_url: "https://acme.example/apply".into(),
    }
}

fn unique_id(prefix: &str) -> String {
    format!(
        "{prefix}-{}",
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    )
}

#[tokio::test]
#[traced_test]
async fn test_create_get_and_conflict() -> Result<()> {
    let Some(store) = store().await? else {
        return Ok(());
    };
    let id = unique_id("J1");

    let created = store.create(posting(&id, "Engineer")).await?;
    assert_eq!(created.posting, posting(&id, "Engineer"));

    let err = store.create(posting(&id, "Manager")).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateKey(ref k) if *k == id));

    let fetched = store.get_by_id(&id).await?;
    assert_eq!(fetched.posting.title, "Engineer");
    assert_eq!(fetched.created_at, created.created_at);

    assert!(matches!(
        store.get_by_id(&id.to_lowercase()).await,
        Err(AppError::NotFound(_))
    ));
    store.ping().await?;
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_padded_id_is_stored_verbatim() -> Result<()> {
    let Some(store) = store().await? else {
        return Ok(());
    };
    let id = unique_id("PAD");
    let padded = format!(" {id} ");

    store.create(posting(&padded, "Engineer")).await?;
    assert_eq!(store.get_by_id(&padded).await?.posting.job_id, padded);
    assert!(matches!(
        store.get_by_id(&id).await,
        Err(AppError::NotFound(_))
    ));
    store.create(posting(&id, "Engineer")).await?;
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_listing_includes_new_jobs_once_in_order() -> Result<()> {
    let Some(store) = store().await? else {
        return Ok(());
    };
    let before = store.list_all().await?.len();
    let a = unique_id("LA");
    store.create(posting(&a, "A")).await?;
    let b = unique_id("LB");
    store.create(posting(&b, "B")).await?;

    let all = store.list_all().await?;
    assert!(all.len() >= before + 2);
    assert_eq!(all.iter().filter(|e| e.posting.job_id == a).count(), 1);
    assert_eq!(all.iter().filter(|e| e.posting.job_id == b).count(), 1);
    let pos = |id: &str| all.iter().position(|e| e.posting.job_id == id);
    assert!(pos(&a) < pos(&b));
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_concurrent_creates_have_one_winner() -> Result<()> {
    let Some(store) = store().await? else {
        return Ok(());
    };
    let store = Arc::new(store);
    let id = unique_id("RACE");

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let store = store.clone();
            let p = posting(&id, &format!("title {n}"));
            tokio::spawn(async move { store.create(p).await })
        })
        .collect();

    let mut ok = 0;
    for h in handles {
        match h.await.expect("task panicked") {
            Ok(_) => ok += 1,
            Err(AppError::DuplicateKey(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(ok, 1);
    Ok(())
}
