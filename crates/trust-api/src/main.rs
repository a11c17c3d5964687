//! Binary entrypoint for the Trust Registry API server.
use tracing_subscriber::EnvFilter;
use trust_api::{config::HostConfig, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = HostConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    run(config).await
}
