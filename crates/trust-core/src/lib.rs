//! Trust Core: record model, world-state boundary and host ledger
//!
//! Shared vocabulary for the governance and trust registries. Nothing in
//! this crate knows about validation rules; it only describes the records,
//! the key-value contract they are stored through, and an in-memory ledger
//! that plays the host role when no external ledger is present.

pub mod context;
pub mod data_model;
pub mod error;
pub mod ledger;
pub mod state;

pub use context::TxContext;
pub use data_model::{
    GovernanceRecord, GovernanceRecordsWrapper, TrustRecord, TrustRecordsWrapper,
};
pub use error::{ErrorKind, RegistryError, StoreError};
pub use ledger::{MemoryLedger, Transaction};
pub use state::{KeyValue, WorldState};

/// Registry engine version
pub const REGISTRY_VERSION: &str = "1.0.0";
