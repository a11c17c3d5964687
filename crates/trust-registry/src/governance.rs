//! Governance Registry
//!
//! Owns creation and lookup of governance records, stored under their
//! business `identifier`. Never consults trust records.

use crate::decode::{decode, encode, filter_entries, is_governance, raw_text};
use crate::keyspace::Keyspace;
use crate::require;
use trust_core::{GovernanceRecord, RegistryError, WorldState};

const RECORD: &str = "governance";

/// Whether a governance record is stored under `identifier`.
pub fn exists(state: &impl WorldState, identifier: &str) -> Result<bool, RegistryError> {
    Ok(state.get_state(&Keyspace::Governance.key(identifier))?.is_some())
}

/// Store a new governance record and return its `id`.
///
/// Fails with a missing-field error before touching the store, and with
/// [`RegistryError::Conflict`] if the identifier is already taken.
pub fn create(
    state: &mut impl WorldState,
    record: &GovernanceRecord,
) -> Result<String, RegistryError> {
    validate(record)?;

    if exists(state, &record.identifier)? {
        tracing::warn!(identifier = %record.identifier, "governance identifier already taken");
        return Err(RegistryError::Conflict(format!(
            "governance record with identifier '{}' already exists",
            record.identifier
        )));
    }

    let bytes = encode(RECORD, record)?;
    state.put_state(&Keyspace::Governance.key(&record.identifier), bytes)?;

    tracing::info!(id = %record.id, identifier = %record.identifier, "governance record created");
    Ok(record.id.clone())
}

/// Bootstrap the root governance record. Same rules as [`create`].
pub fn initialize(
    state: &mut impl WorldState,
    record: &GovernanceRecord,
) -> Result<String, RegistryError> {
    tracing::info!(identifier = %record.identifier, "initializing governance root");
    create(state, record)
}

/// Stored JSON under `identifier`, exactly as written.
pub fn read_raw(state: &impl WorldState, identifier: &str) -> Result<String, RegistryError> {
    let key = Keyspace::Governance.key(identifier);
    match state.get_state(&key)? {
        Some(bytes) => raw_text(&key, bytes),
        None => Err(RegistryError::NotFound(format!(
            "governance record with identifier {} does not exist",
            identifier
        ))),
    }
}

pub fn read(state: &impl WorldState, identifier: &str) -> Result<GovernanceRecord, RegistryError> {
    let raw = read_raw(state, identifier)?;
    decode(&Keyspace::Governance.key(identifier), raw.as_bytes())
}

/// Every entry in the governance keyspace that decodes as a governance
/// record with a non-empty `identifier` and `name`. Anything else is skipped.
pub fn list_all(state: &impl WorldState) -> Result<Vec<GovernanceRecord>, RegistryError> {
    let (start, end) = Keyspace::Governance.range();
    let entries = state.get_state_by_range(&start, &end)?;
    Ok(filter_entries(entries, is_governance))
}

fn validate(record: &GovernanceRecord) -> Result<(), RegistryError> {
    require(RECORD, "id", &record.id)?;
    require(RECORD, "identifier", &record.identifier)?;
    require(RECORD, "created_at", &record.created_at)?;
    require(RECORD, "updated_at", &record.updated_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trust_core::{ErrorKind, MemoryLedger, TxContext};

    fn acme() -> GovernanceRecord {
        GovernanceRecord::new("g1", "gov-1", "Acme")
            .with_status("active")
            .at("t0")
    }

    fn run<T>(
        ledger: &MemoryLedger,
        f: impl FnOnce(&mut trust_core::Transaction<'_>) -> Result<T, RegistryError>,
    ) -> Result<T, RegistryError> {
        ledger.transact(&TxContext::new("test"), f)
    }

    #[test]
    fn test_create_then_read() {
        let ledger = MemoryLedger::new();
        let id = run(&ledger, |tx| create(tx, &acme())).unwrap();
        assert_eq!(id, "g1");

        let stored = run(&ledger, |tx| read(tx, "gov-1")).unwrap();
        assert_eq!(stored, acme());
        assert!(run(&ledger, |tx| exists(tx, "gov-1")).unwrap());
    }

    #[test]
    fn test_duplicate_identifier_conflicts() {
        let ledger = MemoryLedger::new();
        run(&ledger, |tx| create(tx, &acme())).unwrap();

        let mut other = acme();
        other.id = "g2".to_string();
        let err = run(&ledger, |tx| create(tx, &other)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(run(&ledger, |tx| read(tx, "gov-1")).unwrap().id, "g1");
    }

    #[test]
    fn test_initialize_obeys_conflict_rule() {
        let ledger = MemoryLedger::new();
        assert_eq!(run(&ledger, |tx| initialize(tx, &acme())).unwrap(), "g1");
        let err = run(&ledger, |tx| initialize(tx, &acme())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_missing_fields_named_in_order() {
        let ledger = MemoryLedger::new();
        let cases = [
            (GovernanceRecord { id: String::new(), ..acme() }, "id"),
            (GovernanceRecord { identifier: String::new(), ..acme() }, "identifier"),
            (GovernanceRecord { created_at: String::new(), ..acme() }, "created_at"),
            (GovernanceRecord { updated_at: String::new(), ..acme() }, "updated_at"),
        ];

        for (record, expected) in cases {
            let err = run(&ledger, |tx| create(tx, &record)).unwrap_err();
            match err {
                RegistryError::MissingField { field, .. } => assert_eq!(field, expected),
                other => panic!("unexpected error: {}", other),
            }
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_name_is_optional_on_create() {
        let ledger = MemoryLedger::new();
        let nameless = GovernanceRecord::new("g9", "gov-9", "").at("t0");
        run(&ledger, |tx| create(tx, &nameless)).unwrap();

        // Stored, but not listed: listing requires a name.
        assert!(run(&ledger, |tx| exists(tx, "gov-9")).unwrap());
        assert!(run(&ledger, |tx| list_all(tx)).unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let ledger = MemoryLedger::new();
        let err = run(&ledger, |tx| read_raw(tx, "nope")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_list_skips_foreign_shapes() {
        let ledger = MemoryLedger::new();
        run(&ledger, |tx| {
            create(tx, &acme())?;
            tx.put_state("governance/junk", b"not json".to_vec())?;
            tx.put_state(
                "governance/trustlike",
                br#"{"id":"tr1","credential_type":"KYC"}"#.to_vec(),
            )?;
            Ok(())
        })
        .unwrap();

        let listed = run(&ledger, |tx| list_all(tx)).unwrap();
        assert_eq!(listed, vec![acme()]);
    }
}
