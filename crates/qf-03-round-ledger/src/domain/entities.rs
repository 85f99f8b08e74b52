//! # Domain Entities
//!
//! The stored record and the read-surface projection of one round.

use serde::{Deserialize, Serialize};
use shared_types::{Answer, RoundId, Timestamp};

/// One accepted observation, keyed by its sequential round id.
///
/// Immutable once written: ids are never reused or deleted, and a record is
/// never updated after the transmission that produced it commits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Sequential round id.
    pub round_id: RoundId,
    /// The observation recorded for this round.
    pub answer: Answer,
    /// Unix timestamp of the accepting transmission. Every record of one
    /// batch shares it.
    pub observed_at: Timestamp,
}

/// The five-field projection the read surface returns for one round.
///
/// The batch model records a single timestamp per round, so `started_at`
/// and `updated_at` coincide and `answered_in_round` is the round itself.
/// Field order is part of the compatibility surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundData {
    /// The queried round id (zero for the empty result).
    pub round_id: RoundId,
    /// Recorded answer, zero if absent.
    pub answer: Answer,
    /// When the round started.
    pub started_at: Timestamp,
    /// When the round was answered.
    pub updated_at: Timestamp,
    /// The round the answer was computed in.
    pub answered_in_round: RoundId,
}

impl RoundData {
    /// The defined empty result: all fields zero.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Project a stored record onto the read surface.
    pub fn from_record(record: &RoundRecord) -> Self {
        Self {
            round_id: record.round_id,
            answer: record.answer,
            started_at: record.observed_at,
            updated_at: record.observed_at,
            answered_in_round: record.round_id,
        }
    }
}
