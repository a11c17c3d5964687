//! Unified Error Model
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Failure reported by the underlying key-value store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{op} {key:?}: {reason}")]
pub struct StoreError {
    pub op: &'static str,
    pub key: String,
    pub reason: String,
}

impl StoreError {
    pub fn new(op: &'static str, key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            op,
            key: key.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("VALIDATION/{record} record {field} cannot be empty")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("VALIDATION/trust record validation failed: identifier '{identifier}' not found in any governance record")]
    ReferentialIntegrity { identifier: String },

    #[error("VALIDATION/malformed {record} record payload: {reason}")]
    InvalidPayload { record: &'static str, reason: String },

    #[error("CONFLICT/{0}")]
    Conflict(String),

    #[error("NOT_FOUND/{0}")]
    NotFound(String),

    #[error("STORAGE/failed to access world state: {0}")]
    Storage(#[from] StoreError),

    #[error("DECODE/{0}")]
    Decode(String),
}

/// Coarse classification of a [`RegistryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Storage,
    Decode,
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. }
            | Self::ReferentialIntegrity { .. }
            | Self::InvalidPayload { .. } => ErrorKind::Validation,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Storage,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Conflict => "conflict",
            Self::NotFound => "not_found",
            Self::Storage => "storage",
            Self::Decode => "decode",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_variants_share_kind() {
        let missing = RegistryError::MissingField {
            record: "governance",
            field: "identifier",
        };
        let dangling = RegistryError::ReferentialIntegrity {
            identifier: "missing-gov".to_string(),
        };

        assert_eq!(missing.kind(), ErrorKind::Validation);
        assert_eq!(dangling.kind(), ErrorKind::Validation);
        assert!(!matches!(missing, RegistryError::ReferentialIntegrity { .. }));
    }

    #[test]
    fn test_messages_name_offender() {
        let missing = RegistryError::MissingField {
            record: "trust",
            field: "created_at",
        };
        assert_eq!(
            missing.to_string(),
            "VALIDATION/trust record created_at cannot be empty"
        );

        let dangling = RegistryError::ReferentialIntegrity {
            identifier: "missing-gov".to_string(),
        };
        assert!(dangling.to_string().contains("'missing-gov'"));
    }

    #[test]
    fn test_store_error_converts() {
        let err: RegistryError = StoreError::new("get", "governance/x", "disk gone").into();
        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(err.to_string().contains("disk gone"));
    }
}
