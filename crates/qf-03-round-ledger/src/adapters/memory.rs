//! # In-Memory Round Store
//!
//! Reference implementation of the `RoundStore` port over a `BTreeMap`.
//! The write lock is held for the whole batch, so a batch is never
//! partially visible to readers.

use crate::domain::entities::RoundRecord;
use crate::domain::errors::LedgerError;
use crate::ports::store::RoundStore;
use shared_types::RoundId;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory implementation of `RoundStore`.
pub struct InMemoryRoundStore {
    records: RwLock<BTreeMap<RoundId, RoundRecord>>,
}

impl InMemoryRoundStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryRoundStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundStore for InMemoryRoundStore {
    fn put_batch(&self, batch: Vec<RoundRecord>) -> Result<(), LedgerError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| LedgerError::LockPoisoned)?;
        for record in batch {
            records.insert(record.round_id, record);
        }
        Ok(())
    }

    fn get(&self, round_id: RoundId) -> Result<Option<RoundRecord>, LedgerError> {
        let records = self
            .records
            .read()
            .map_err(|_| LedgerError::LockPoisoned)?;
        Ok(records.get(&round_id).copied())
    }

    fn len(&self) -> Result<usize, LedgerError> {
        let records = self
            .records
            .read()
            .map_err(|_| LedgerError::LockPoisoned)?;
        Ok(records.len())
    }
}
