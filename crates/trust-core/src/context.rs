//! Transaction Context: identity of one entry-point call
use std::fmt;

#[derive(Debug, Clone)]
pub struct TxContext {
    pub tx_id: String,
    pub operation: String,
}

impl TxContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            tx_id: uuid::Uuid::new_v4().to_string(),
            operation: operation.into(),
        }
    }
}

impl fmt::Display for TxContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}#{}", self.operation, self.tx_id)
    }
}
