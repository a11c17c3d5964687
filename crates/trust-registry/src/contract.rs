//! Contract surface: JSON in, JSON out
//!
//! The operations other systems call. Each method maps one entry point onto
//! the registries; the caller supplies the transaction-scoped state.

use crate::decode::{parse_payload, to_json_array};
use crate::{governance, trust};
use trust_core::{GovernanceRecord, RegistryError, TrustRecord, WorldState};

#[derive(Debug, Clone, Copy, Default)]
pub struct TrustRegistryContract;

impl TrustRegistryContract {
    pub fn new() -> Self {
        Self
    }

    pub fn init_governance(
        &self,
        state: &mut impl WorldState,
        json: &str,
    ) -> Result<String, RegistryError> {
        let record: GovernanceRecord = parse_payload("governance", json)?;
        governance::initialize(state, &record)
    }

    pub fn create_governance_record(
        &self,
        state: &mut impl WorldState,
        json: &str,
    ) -> Result<String, RegistryError> {
        let record: GovernanceRecord = parse_payload("governance", json)?;
        governance::create(state, &record)
    }

    pub fn governance_record_exists(
        &self,
        state: &impl WorldState,
        identifier: &str,
    ) -> Result<bool, RegistryError> {
        governance::exists(state, identifier)
    }

    pub fn read_governance_record(
        &self,
        state: &impl WorldState,
        identifier: &str,
    ) -> Result<String, RegistryError> {
        governance::read_raw(state, identifier)
    }

    pub fn list_governance_records(
        &self,
        state: &impl WorldState,
    ) -> Result<String, RegistryError> {
        to_json_array(&governance::list_all(state)?)
    }

    pub fn create_trust_record(
        &self,
        state: &mut impl WorldState,
        json: &str,
    ) -> Result<String, RegistryError> {
        let record: TrustRecord = parse_payload("trust", json)?;
        trust::create(state, &record)
    }

    pub fn trust_record_exists(
        &self,
        state: &impl WorldState,
        id: &str,
    ) -> Result<bool, RegistryError> {
        trust::exists(state, id)
    }

    pub fn read_trust_record(
        &self,
        state: &impl WorldState,
        id: &str,
    ) -> Result<String, RegistryError> {
        trust::read_raw(state, id)
    }

    pub fn list_trust_records(&self, state: &impl WorldState) -> Result<String, RegistryError> {
        to_json_array(&trust::list_all(state)?)
    }

    pub fn list_trust_records_by_credential_type(
        &self,
        state: &impl WorldState,
        credential_type: &str,
    ) -> Result<String, RegistryError> {
        to_json_array(&trust::list_by_credential_type(state, credential_type)?)
    }
}
