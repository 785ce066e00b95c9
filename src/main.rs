use job_feed::{cmd, prelude::Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,job_feed=debug,sqlx=warn".into()),
        )
        .init();

    cmd::run().await?;
    Ok(())
}
