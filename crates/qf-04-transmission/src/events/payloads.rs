//! # Event Payloads
//!
//! Field order and types are part of the compatibility surface for
//! downstream indexers; reorder nothing here.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Answer, RoundId};

/// Published after every accepted transmission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransmissionPayload {
    /// Final round id of the batch.
    pub round_id: RoundId,
    /// The last observation, the canonical answer of that id.
    pub answer: Answer,
    /// The transmitter that submitted the report.
    pub transmitter: Address,
    /// The full ordered observation list.
    pub observations: Vec<Answer>,
}
