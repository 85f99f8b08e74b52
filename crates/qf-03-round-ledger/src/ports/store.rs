//! # Round Store Port
//!
//! Outbound storage interface for round records. The pipeline writes one
//! batch per accepted transmission; reads are keyed lookups.

use crate::domain::entities::RoundRecord;
use crate::domain::errors::LedgerError;
use shared_types::RoundId;

/// Storage for round records.
///
/// Implementations must be thread-safe (`Send + Sync`) and must land a
/// batch completely or not at all; the pipeline relies on batch atomicity
/// for its all-or-nothing transmission contract.
pub trait RoundStore: Send + Sync {
    /// Write a transmission's records as one batch.
    fn put_batch(&self, records: Vec<RoundRecord>) -> Result<(), LedgerError>;

    /// Look up the record for `round_id`.
    fn get(&self, round_id: RoundId) -> Result<Option<RoundRecord>, LedgerError>;

    /// Number of records stored.
    fn len(&self) -> Result<usize, LedgerError>;

    /// True when no record has been stored.
    fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}

impl<S: RoundStore> RoundStore for std::sync::Arc<S> {
    fn put_batch(&self, records: Vec<RoundRecord>) -> Result<(), LedgerError> {
        (**self).put_batch(records)
    }

    fn get(&self, round_id: RoundId) -> Result<Option<RoundRecord>, LedgerError> {
        (**self).get(round_id)
    }

    fn len(&self) -> Result<usize, LedgerError> {
        (**self).len()
    }
}
