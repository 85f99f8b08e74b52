//! # Pipeline Errors
//!
//! The umbrella over everything a pipeline call can reject with. Each
//! variant preserves the originating subsystem's taxonomy; nothing is
//! flattened to strings.

use crate::ports::outbound::EventSinkError;
use qf_01_config_registry::ConfigError;
use qf_02_report_verifier::{ProtocolError, ReportFormatError, VerifyError};
use qf_03_round_ledger::LedgerError;
use thiserror::Error;

/// Errors surfaced by the aggregator's mutating and read operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AggregatorError {
    /// The call was rejected before verification began.
    #[error(transparent)]
    Format(#[from] ReportFormatError),

    /// The call was rejected by one of the ordered protocol checks.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A config rotation was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The round store failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The restricted read is only available to externally-originated calls
    #[error("only externally-originated callers may read transmission details")]
    OnlyExternalCallers,

    /// The durable event could not be published
    #[error(transparent)]
    Event(#[from] EventSinkError),
}

impl From<VerifyError> for AggregatorError {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::Format(e) => Self::Format(e),
            VerifyError::Protocol(e) => Self::Protocol(e),
        }
    }
}
