//! # Non-Reverting Reads
//!
//! The backward-compatible read surface over a round store. Ids above the
//! 32-bit range, and ids never written, resolve to the defined zero result
//! rather than an error; only infrastructure failures surface.

use crate::domain::entities::{RoundData, RoundRecord};
use crate::domain::errors::LedgerError;
use crate::ports::store::RoundStore;
use shared_types::{Answer, RoundId, Timestamp, MAX_ROUND_ID};

/// Look a round up, treating ids above the 32-bit range as absent.
fn lookup<S: RoundStore + ?Sized>(
    store: &S,
    round_id: RoundId,
) -> Result<Option<RoundRecord>, LedgerError> {
    if round_id > MAX_ROUND_ID {
        return Ok(None);
    }
    store.get(round_id)
}

/// The answer recorded for `round_id`, zero if absent.
pub fn answer_for<S: RoundStore + ?Sized>(
    store: &S,
    round_id: RoundId,
) -> Result<Answer, LedgerError> {
    Ok(lookup(store, round_id)?.map(|r| r.answer).unwrap_or(0))
}

/// The timestamp recorded for `round_id`, zero if absent.
pub fn timestamp_for<S: RoundStore + ?Sized>(
    store: &S,
    round_id: RoundId,
) -> Result<Timestamp, LedgerError> {
    Ok(lookup(store, round_id)?.map(|r| r.observed_at).unwrap_or(0))
}

/// The full five-field projection for `round_id`, all-zero if absent.
pub fn round_data<S: RoundStore + ?Sized>(
    store: &S,
    round_id: RoundId,
) -> Result<RoundData, LedgerError> {
    Ok(lookup(store, round_id)?
        .map(|r| RoundData::from_record(&r))
        .unwrap_or_else(RoundData::empty))
}

/// The projection of the most recently written round.
pub fn latest_round_data<S: RoundStore + ?Sized>(
    store: &S,
    latest_round_id: RoundId,
) -> Result<RoundData, LedgerError> {
    round_data(store, latest_round_id)
}
