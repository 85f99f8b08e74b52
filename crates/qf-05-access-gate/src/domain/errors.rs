//! # Access Errors

use qf_03_round_ledger::LedgerError;
use shared_types::Address;
use thiserror::Error;

/// Errors from the gated read surface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The caller holds no read capability
    #[error("no read access for {0:02x?}")]
    NoAccess(Address),

    /// Allow-list and enforcement flag are admin-only
    #[error("caller {0:02x?} is not the access admin")]
    NotAdmin(Address),

    /// The underlying read failed
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
