//! API Handlers
//!
//! Each handler runs exactly one ledger transaction and records its outcome.
use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use trust_core::{RegistryError, Transaction, TxContext, REGISTRY_VERSION};

fn execute<T>(
    state: &AppState,
    operation: &'static str,
    f: impl FnOnce(&mut Transaction<'_>) -> Result<T, RegistryError>,
) -> Result<T, ApiError> {
    let ctx = TxContext::new(operation);
    let span = tracing::info_span!("tx", id = %ctx.tx_id, operation);
    let _entered = span.enter();

    let result = state.ledger.transact(&ctx, f);
    state.metrics.observe(operation, &result);
    if let Err(err) = &result {
        tracing::info!(kind = %err.kind(), error = %err, "operation rejected");
    }
    result.map_err(ApiError::from)
}

fn json_text(body: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

fn created(id: String) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(json!({ "id": id })))
}

pub async fn init_governance(
    State(state): State<AppState>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let contract = state.contract;
    let id = execute(&state, "init_governance", |tx| contract.init_governance(tx, &body))?;
    Ok(created(id))
}

pub async fn create_governance_record(
    State(state): State<AppState>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let contract = state.contract;
    let id = execute(&state, "create_governance_record", |tx| {
        contract.create_governance_record(tx, &body)
    })?;
    Ok(created(id))
}

pub async fn governance_record_exists(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contract = state.contract;
    let exists = execute(&state, "governance_record_exists", |tx| {
        contract.governance_record_exists(tx, &identifier)
    })?;
    Ok(Json(json!({ "exists": exists })))
}

pub async fn read_governance_record(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contract = state.contract;
    let raw = execute(&state, "read_governance_record", |tx| {
        contract.read_governance_record(tx, &identifier)
    })?;
    Ok(json_text(raw))
}

pub async fn list_governance_records(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let contract = state.contract;
    let list = execute(&state, "list_governance_records", |tx| {
        contract.list_governance_records(tx)
    })?;
    Ok(json_text(list))
}

pub async fn create_trust_record(
    State(state): State<AppState>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let contract = state.contract;
    let id = execute(&state, "create_trust_record", |tx| contract.create_trust_record(tx, &body))?;
    Ok(created(id))
}

pub async fn trust_record_exists(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contract = state.contract;
    let exists = execute(&state, "trust_record_exists", |tx| {
        contract.trust_record_exists(tx, &id)
    })?;
    Ok(Json(json!({ "exists": exists })))
}

pub async fn read_trust_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let contract = state.contract;
    let raw = execute(&state, "read_trust_record", |tx| contract.read_trust_record(tx, &id))?;
    Ok(json_text(raw))
}

#[derive(Debug, Deserialize)]
pub struct TrustFilter {
    pub credential_type: Option<String>,
}

pub async fn list_trust_records(
    State(state): State<AppState>,
    Query(filter): Query<TrustFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let contract = state.contract;
    let list = match filter.credential_type {
        Some(credential_type) => execute(&state, "list_trust_records_by_credential_type", |tx| {
            contract.list_trust_records_by_credential_type(tx, &credential_type)
        })?,
        None => execute(&state, "list_trust_records", |tx| contract.list_trust_records(tx))?,
    };
    Ok(json_text(list))
}

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": REGISTRY_VERSION,
            "entries": state.ledger.len(),
        })),
    )
}

pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let text = state
        .metrics
        .encode()
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], text))
}
