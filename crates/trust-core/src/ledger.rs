//! Memory Ledger: in-process host for the world state
//!
//! Stands in for the external ledger platform. One mutex guards the whole
//! keyspace, so every call to [`MemoryLedger::transact`] is a serialized
//! critical section: an existence check and the write that depends on it
//! can never interleave with another writer. Writes are buffered in the
//! [`Transaction`] and applied together only when the closure succeeds.

use crate::context::TxContext;
use crate::error::StoreError;
use crate::state::{in_range, KeyValue, WorldState};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct MemoryLedger {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` as one atomic transaction.
    ///
    /// The write set is committed if `f` returns `Ok` and discarded
    /// otherwise.
    pub fn transact<T, E, F>(&self, ctx: &TxContext, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Transaction<'_>) -> Result<T, E>,
    {
        let mut guard = self.lock();
        let mut tx = Transaction::new(&guard);
        let result = f(&mut tx);
        let writes = tx.into_writes();

        match &result {
            Ok(_) => {
                tracing::debug!(tx = %ctx, writes = writes.len(), "commit");
                guard.extend(writes);
            }
            Err(_) => {
                tracing::debug!(tx = %ctx, discarded = writes.len(), "rollback");
            }
        }

        result
    }

    /// All committed entries in key order
    pub fn snapshot(&self) -> Vec<KeyValue> {
        self.lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Vec<u8>>> {
        // A panic inside a transaction never reaches the commit step, so the
        // map behind a poisoned lock is still consistent.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Read-your-writes view over committed state plus a pending write set.
pub struct Transaction<'a> {
    committed: &'a BTreeMap<String, Vec<u8>>,
    writes: BTreeMap<String, Vec<u8>>,
}

impl<'a> Transaction<'a> {
    fn new(committed: &'a BTreeMap<String, Vec<u8>>) -> Self {
        Self {
            committed,
            writes: BTreeMap::new(),
        }
    }

    fn into_writes(self) -> BTreeMap<String, Vec<u8>> {
        self.writes
    }
}

impl WorldState for Transaction<'_> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .writes
            .get(key)
            .or_else(|| self.committed.get(key))
            .cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::new("put", key, "key must not be empty"));
        }
        self.writes.insert(key.to_string(), value);
        Ok(())
    }

    fn get_state_by_range(&self, start: &str, end: &str) -> Result<Vec<KeyValue>, StoreError> {
        let mut merged: BTreeMap<&str, &Vec<u8>> = self
            .committed
            .range(start.to_string()..)
            .take_while(|(k, _)| in_range(k, start, end))
            .map(|(k, v)| (k.as_str(), v))
            .collect();

        for (k, v) in self.writes.iter().filter(|(k, _)| in_range(k, start, end)) {
            merged.insert(k.as_str(), v);
        }

        Ok(merged
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect())
    }
}
