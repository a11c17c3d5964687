//! Decoding and filter helpers shared by the listings
//!
//! Strict decoding turns a malformed entry into a [`RegistryError::Decode`];
//! lenient decoding treats it as "not this shape" and skips it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use trust_core::{GovernanceRecord, KeyValue, RegistryError, TrustRecord};

pub fn encode<T: Serialize>(record: &'static str, value: &T) -> Result<Vec<u8>, RegistryError> {
    serde_json::to_vec(value)
        .map_err(|e| RegistryError::Decode(format!("failed to encode {} record: {}", record, e)))
}

pub fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, RegistryError> {
    serde_json::from_slice(bytes)
        .map_err(|e| RegistryError::Decode(format!("failed to decode record at {:?}: {}", key, e)))
}

pub fn decode_lenient<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Option<T> {
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(key, error = %e, "skipping undecodable entry");
            None
        }
    }
}

/// Parse a caller payload, reporting failures as validation errors.
pub fn parse_payload<T: DeserializeOwned>(
    record: &'static str,
    json: &str,
) -> Result<T, RegistryError> {
    serde_json::from_str(json).map_err(|e| RegistryError::InvalidPayload {
        record,
        reason: e.to_string(),
    })
}

/// Raw stored bytes as JSON text
pub fn raw_text(key: &str, bytes: Vec<u8>) -> Result<String, RegistryError> {
    String::from_utf8(bytes)
        .map_err(|e| RegistryError::Decode(format!("record at {:?} is not UTF-8: {}", key, e)))
}

pub fn to_json_array<T: Serialize>(records: &[T]) -> Result<String, RegistryError> {
    serde_json::to_string(records)
        .map_err(|e| RegistryError::Decode(format!("failed to encode record list: {}", e)))
}

/// A decoded value only counts as a governance record when it carries both
/// its business key and a name.
pub fn is_governance(record: &GovernanceRecord) -> bool {
    !record.identifier.is_empty() && !record.name.is_empty()
}

pub fn has_credential_type(record: &TrustRecord, credential_type: &str) -> bool {
    record.credential_type == credential_type
}

/// Lenient decode of every entry followed by `keep`.
pub fn filter_entries<T, F>(entries: Vec<KeyValue>, keep: F) -> Vec<T>
where
    T: DeserializeOwned,
    F: Fn(&T) -> bool,
{
    entries
        .into_iter()
        .filter_map(|(key, bytes)| decode_lenient::<T>(&key, &bytes))
        .filter(|record| keep(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, json: &str) -> KeyValue {
        (key.to_string(), json.as_bytes().to_vec())
    }

    #[test]
    fn test_filter_skips_malformed() {
        let entries = vec![
            entry("a", r#"{"identifier":"gov-1","name":"Acme"}"#),
            entry("b", "not json"),
            entry("c", r#"{"identifier":"gov-2"}"#),
        ];

        let records: Vec<GovernanceRecord> = filter_entries(entries, is_governance);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier, "gov-1");
    }

    #[test]
    fn test_strict_decode_reports_key() {
        let err = decode::<TrustRecord>("trust/x", b"[1,2").unwrap_err();
        assert!(matches!(err, RegistryError::Decode(_)));
        assert!(err.to_string().contains("trust/x"));
    }

    #[test]
    fn test_credential_type_is_case_sensitive() {
        let record = TrustRecord::new("tr1", "gov-1").with_credential_type("KYC");
        assert!(has_credential_type(&record, "KYC"));
        assert!(!has_credential_type(&record, "kyc"));
    }

    #[test]
    fn test_payload_error_is_validation() {
        let err = parse_payload::<GovernanceRecord>("governance", "{").unwrap_err();
        assert_eq!(err.kind(), trust_core::ErrorKind::Validation);
    }
}
