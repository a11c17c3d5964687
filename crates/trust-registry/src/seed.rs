//! Bulk seeding from record lists
//!
//! A seed file carries `governance_record_models` and/or
//! `trust_record_models`. Governance records are applied first so that the
//! trust records in the same file can reference them. Every record goes
//! through the regular create path.

use crate::{governance, trust};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use trust_core::{GovernanceRecordsWrapper, RegistryError, TrustRecordsWrapper, WorldState};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedFile {
    #[serde(flatten)]
    pub governance: GovernanceRecordsWrapper,
    #[serde(flatten)]
    pub trust: TrustRecordsWrapper,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub governance: usize,
    pub trust: usize,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Seed file read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Seed file parse failed: {0}")]
    Parse(String),
    #[error("Seed apply failed: {0}")]
    Apply(#[from] RegistryError),
}

impl SeedFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML content. JSON documents are accepted as well.
    pub fn from_yaml(yaml: &str) -> Result<Self, SeedError> {
        serde_yaml::from_str(yaml).map_err(|e| SeedError::Parse(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.governance.models.is_empty() && self.trust.models.is_empty()
    }
}

/// Create every record in `seed`. Stops at the first failure; run it inside
/// one transaction to make the whole file all-or-nothing.
pub fn apply(state: &mut impl WorldState, seed: &SeedFile) -> Result<SeedReport, RegistryError> {
    let mut report = SeedReport::default();

    for record in &seed.governance.models {
        governance::create(state, record)?;
        report.governance += 1;
    }
    for record in &seed.trust.models {
        trust::create(state, record)?;
        report.trust += 1;
    }

    tracing::info!(governance = report.governance, trust = report.trust, "seed applied");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trust_core::{ErrorKind, MemoryLedger, TxContext};

    const SEED: &str = r#"
governance_record_models:
  - id: g1
    identifier: gov-1
    name: Acme
    status: active
    created_at: t0
    updated_at: t0
trust_record_models:
  - id: tr1
    identifier: gov-1
    credential_type: KYC
    created_at: t1
    updated_at: t1
"#;

    #[test]
    fn test_parse_yaml_and_json() {
        let seed = SeedFile::from_yaml(SEED).unwrap();
        assert_eq!(seed.governance.models.len(), 1);
        assert_eq!(seed.trust.models[0].credential_type, "KYC");

        let json = SeedFile::from_yaml(r#"{"trust_record_models": []}"#).unwrap();
        assert!(json.is_empty());
    }

    #[test]
    fn test_apply_creates_all() {
        let ledger = MemoryLedger::new();
        let seed = SeedFile::from_yaml(SEED).unwrap();
        let report = ledger
            .transact(&TxContext::new("seed"), |tx| apply(tx, &seed))
            .unwrap();

        assert_eq!(report, SeedReport { governance: 1, trust: 1 });
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_apply_is_all_or_nothing_in_one_transaction() {
        let ledger = MemoryLedger::new();
        let mut seed = SeedFile::from_yaml(SEED).unwrap();
        seed.trust.models[0].identifier = "missing-gov".to_string();

        let err = ledger
            .transact(&TxContext::new("seed"), |tx| apply(tx, &seed))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(ledger.is_empty());
    }
}
