//! Trust Registry
//!
//! Trust records are stored under their own `id`. A record is accepted only
//! if the governance identifier it references exists at write time; later
//! changes to the governance side are not tracked.

use crate::decode::{decode, encode, filter_entries, has_credential_type, raw_text};
use crate::governance;
use crate::keyspace::Keyspace;
use crate::require;
use trust_core::{RegistryError, TrustRecord, WorldState};

const RECORD: &str = "trust";

/// Store a new trust record and return its `id`.
///
/// Fails with [`RegistryError::Conflict`] if a trust record is already
/// stored under `id`; stored records are never replaced.
pub fn create(state: &mut impl WorldState, record: &TrustRecord) -> Result<String, RegistryError> {
    require(RECORD, "id", &record.id)?;
    require(RECORD, "identifier", &record.identifier)?;
    require(RECORD, "created_at", &record.created_at)?;
    require(RECORD, "updated_at", &record.updated_at)?;

    if !governance::exists(state, &record.identifier)? {
        tracing::warn!(
            id = %record.id,
            identifier = %record.identifier,
            "trust record references unknown governance identifier"
        );
        return Err(RegistryError::ReferentialIntegrity {
            identifier: record.identifier.clone(),
        });
    }

    if exists(state, &record.id)? {
        tracing::warn!(id = %record.id, "trust record id already taken");
        return Err(RegistryError::Conflict(format!(
            "trust record with ID '{}' already exists",
            record.id
        )));
    }

    let bytes = encode(RECORD, record)?;
    state.put_state(&Keyspace::Trust.key(&record.id), bytes)?;

    tracing::info!(
        id = %record.id,
        identifier = %record.identifier,
        credential_type = %record.credential_type,
        "trust record created"
    );
    Ok(record.id.clone())
}

pub fn exists(state: &impl WorldState, id: &str) -> Result<bool, RegistryError> {
    Ok(state.get_state(&Keyspace::Trust.key(id))?.is_some())
}

/// Stored JSON under `id`, exactly as written.
pub fn read_raw(state: &impl WorldState, id: &str) -> Result<String, RegistryError> {
    let key = Keyspace::Trust.key(id);
    match state.get_state(&key)? {
        Some(bytes) => raw_text(&key, bytes),
        None => Err(RegistryError::NotFound(format!(
            "trust record with ID {} does not exist",
            id
        ))),
    }
}

pub fn read(state: &impl WorldState, id: &str) -> Result<TrustRecord, RegistryError> {
    let raw = read_raw(state, id)?;
    decode(&Keyspace::Trust.key(id), raw.as_bytes())
}

/// Every trust record in key order. One malformed entry fails the listing.
pub fn list_all(state: &impl WorldState) -> Result<Vec<TrustRecord>, RegistryError> {
    let (start, end) = Keyspace::Trust.range();
    state
        .get_state_by_range(&start, &end)?
        .into_iter()
        .map(|(key, bytes)| decode(&key, &bytes))
        .collect()
}

/// Trust records whose `credential_type` equals `credential_type` exactly.
/// Malformed entries are skipped.
pub fn list_by_credential_type(
    state: &impl WorldState,
    credential_type: &str,
) -> Result<Vec<TrustRecord>, RegistryError> {
    let (start, end) = Keyspace::Trust.range();
    let entries = state.get_state_by_range(&start, &end)?;
    Ok(filter_entries(entries, |record: &TrustRecord| {
        has_credential_type(record, credential_type)
    }))
}
