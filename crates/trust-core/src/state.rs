//! World State: the key-value contract consumed from the host ledger
use crate::error::StoreError;

/// One `(key, value)` pair returned by a range scan.
pub type KeyValue = (String, Vec<u8>);

/// Key-value access scoped to one transaction.
///
/// Range scans are half-open `[start, end)` and return entries in ascending
/// key order. An empty `end` means the range is unbounded above, so
/// `get_state_by_range("", "")` visits the full keyspace.
pub trait WorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    fn get_state_by_range(&self, start: &str, end: &str) -> Result<Vec<KeyValue>, StoreError>;
}

/// Whether `key` falls inside the half-open range `[start, end)`.
pub fn in_range(key: &str, start: &str, end: &str) -> bool {
    key >= start && (end.is_empty() || key < end)
}
