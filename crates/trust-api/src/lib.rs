//! Trust Registry API /v1: REST host for the registry contract
//!
//! Owns an in-memory ledger and exposes every contract operation over HTTP.
//! One request is one ledger transaction.
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use config::HostConfig;
use metrics::Metrics;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use trust_core::{MemoryLedger, TxContext};
use trust_registry::{seed, SeedFile, TrustRegistryContract};

#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<MemoryLedger>,
    pub contract: TrustRegistryContract,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(ledger: Arc<MemoryLedger>) -> anyhow::Result<Self> {
        Ok(Self {
            ledger,
            contract: TrustRegistryContract::new(),
            metrics: Metrics::new().context("failed to register metrics")?,
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/governance",
            get(handlers::list_governance_records).post(handlers::create_governance_record),
        )
        .route("/v1/init", post(handlers::init_governance))
        .route("/v1/governance/{identifier}", get(handlers::read_governance_record))
        .route(
            "/v1/governance/{identifier}/exists",
            get(handlers::governance_record_exists),
        )
        .route(
            "/v1/trust",
            get(handlers::list_trust_records).post(handlers::create_trust_record),
        )
        .route("/v1/trust/{id}", get(handlers::read_trust_record))
        .route("/v1/trust/{id}/exists", get(handlers::trust_record_exists))
        .route("/v1/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Apply the configured seed file, all records in one transaction.
pub fn seed_ledger(ledger: &MemoryLedger, config: &HostConfig) -> anyhow::Result<()> {
    let Some(path) = &config.seed_file else {
        return Ok(());
    };
    let seed_file = SeedFile::load(path)
        .with_context(|| format!("failed to load seed file {}", path.display()))?;
    let report = ledger
        .transact(&TxContext::new("seed"), |tx| seed::apply(tx, &seed_file))
        .with_context(|| format!("failed to apply seed file {}", path.display()))?;

    tracing::info!(
        governance = report.governance,
        trust = report.trust,
        "ledger seeded from {}",
        path.display()
    );
    Ok(())
}

pub async fn run(config: HostConfig) -> anyhow::Result<()> {
    let ledger = Arc::new(MemoryLedger::new());
    seed_ledger(&ledger, &config)?;

    let app = create_app(AppState::new(ledger)?);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!("Trust Registry API listening on {}", config.listen_addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
