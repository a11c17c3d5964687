//! Trust Registry: governance and trust records over a key-value world state
//!
//! Two registries share one store. Governance records establish business
//! identifiers; trust records are credentials that may only be written
//! while the governance identifier they reference exists.
//!
//! # Flow
//!
//! ```text
//! create trust record → validate fields → governance::exists(identifier)
//!                                                ↓ yes          ↓ no
//!                                        put trust/<id>   ReferentialIntegrity
//! ```
//!
//! Every operation takes the store handle explicitly. Atomicity of the
//! check-then-write sequence comes from the caller running the whole
//! operation inside one transaction, e.g. [`trust_core::MemoryLedger::transact`].
//!
//! # Example
//!
//! ```
//! use trust_core::{GovernanceRecord, MemoryLedger, TrustRecord, TxContext};
//! use trust_registry::{governance, trust, RegistryError};
//!
//! let ledger = MemoryLedger::new();
//! ledger.transact(&TxContext::new("example"), |tx| {
//!     let gov = GovernanceRecord::new("g1", "gov-1", "Acme").at("t0");
//!     governance::create(tx, &gov)?;
//!
//!     let credential = TrustRecord::new("tr1", "gov-1")
//!         .with_credential_type("KYC")
//!         .at("t1");
//!     trust::create(tx, &credential)?;
//!
//!     assert_eq!(trust::list_by_credential_type(tx, "KYC")?.len(), 1);
//!     Ok::<_, RegistryError>(())
//! }).unwrap();
//! ```

pub mod contract;
pub mod decode;
pub mod governance;
pub mod keyspace;
pub mod seed;
pub mod trust;

pub use contract::TrustRegistryContract;
pub use keyspace::Keyspace;
pub use seed::{SeedError, SeedFile, SeedReport};
pub use trust_core::{ErrorKind, RegistryError};

/// Reject an empty required field.
pub(crate) fn require(
    record: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), RegistryError> {
    if value.is_empty() {
        return Err(RegistryError::MissingField { record, field });
    }
    Ok(())
}
