//! Data Model: GovernanceRecord, TrustRecord and bulk wrappers
//!
//! Field names follow the external wire spelling. Missing fields decode to
//! empty strings so that partially filled payloads reach validation instead
//! of failing at the JSON layer.
use serde::{Deserialize, Serialize};

/// Authoritative record establishing a business `identifier`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceRecord {
    /// Caller-assigned opaque id
    pub id: String,
    /// Caller-supplied timestamp, never interpreted
    pub created_at: String,
    pub updated_at: String,
    /// Soft-delete marker, carried verbatim
    pub deleted_at: Option<String>,
    /// Business key, unique across governance records
    pub identifier: String,
    pub name: String,
    pub status: String,
}

/// Credential record that must reference a live governance `identifier`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustRecord {
    /// Storage key, unique across trust records
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
    /// Reference to `GovernanceRecord::identifier`
    pub identifier: String,
    pub entity_type: String,
    pub credential_type: String,
    pub governance_framework_uri: String,
    pub did_document: String,
    pub valid_from_dt: String,
    pub valid_until_dt: String,
    pub status: String,
    pub status_detail: String,
}

/// Batch of governance records as submitted in one payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GovernanceRecordsWrapper {
    #[serde(rename = "governance_record_models", default)]
    pub models: Vec<GovernanceRecord>,
}

/// Batch of trust records as submitted in one payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrustRecordsWrapper {
    #[serde(rename = "trust_record_models", default)]
    pub models: Vec<TrustRecord>,
}

impl GovernanceRecord {
    pub fn new(
        id: impl Into<String>,
        identifier: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            identifier: identifier.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set both `created_at` and `updated_at`
    pub fn at(mut self, ts: impl Into<String>) -> Self {
        let ts = ts.into();
        self.created_at = ts.clone();
        self.updated_at = ts;
        self
    }
}

impl TrustRecord {
    pub fn new(id: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn with_credential_type(mut self, credential_type: impl Into<String>) -> Self {
        self.credential_type = credential_type.into();
        self
    }

    pub fn with_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = entity_type.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set both `created_at` and `updated_at`
    pub fn at(mut self, ts: impl Into<String>) -> Self {
        let ts = ts.into();
        self.created_at = ts.clone();
        self.updated_at = ts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_governance_wire_names() {
        let record = GovernanceRecord::new("g1", "gov-1", "Acme")
            .with_status("active")
            .at("t0");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["identifier"], "gov-1");
        assert_eq!(value["created_at"], "t0");
        assert_eq!(value["deleted_at"], json!(null));
    }

    #[test]
    fn test_trust_partial_payload_defaults() {
        let record: TrustRecord = serde_json::from_str(
            r#"{"id":"tr1","identifier":"gov-1","credential_type":"KYC","extra":1}"#,
        )
        .unwrap();

        assert_eq!(record.credential_type, "KYC");
        assert!(record.did_document.is_empty());
        assert!(record.deleted_at.is_none());
    }

    #[test]
    fn test_wrapper_field_names() {
        let wrapper: TrustRecordsWrapper = serde_json::from_value(json!({
            "trust_record_models": [{ "id": "a" }, { "id": "b" }]
        }))
        .unwrap();
        assert_eq!(wrapper.models.len(), 2);

        let empty: GovernanceRecordsWrapper = serde_json::from_str("{}").unwrap();
        assert!(empty.models.is_empty());
    }
}
