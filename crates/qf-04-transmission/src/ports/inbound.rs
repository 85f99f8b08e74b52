//! # Inbound Ports (Read API)
//!
//! The unrestricted read surface over the round ledger. The access gate
//! (QF-05) decorates exactly this trait; the restricted
//! `latest_transmission_details` read lives on the service itself because
//! it needs the caller's origin.

use qf_03_round_ledger::{LedgerError, RoundData};
use shared_types::{Answer, RoundId, Timestamp};

/// Read operations over the recorded rounds.
///
/// Every lookup is non-reverting: absent or out-of-range ids resolve to the
/// defined zero result. Only infrastructure failures surface as errors.
pub trait FeedReader: Send + Sync {
    /// The answer of the most recent round, zero before any transmission.
    fn latest_answer(&self) -> Result<Answer, LedgerError>;

    /// The timestamp of the most recent round, zero before any transmission.
    fn latest_timestamp(&self) -> Result<Timestamp, LedgerError>;

    /// Id of the most recent round, zero before any transmission.
    fn latest_round(&self) -> RoundId;

    /// The answer recorded for `round_id`, zero if absent.
    fn get_answer(&self, round_id: RoundId) -> Result<Answer, LedgerError>;

    /// The timestamp recorded for `round_id`, zero if absent.
    fn get_timestamp(&self, round_id: RoundId) -> Result<Timestamp, LedgerError>;

    /// The five-field projection for `round_id`, all-zero if absent.
    fn get_round_data(&self, round_id: RoundId) -> Result<RoundData, LedgerError>;

    /// The projection of the most recent round.
    fn latest_round_data(&self) -> Result<RoundData, LedgerError>;
}
