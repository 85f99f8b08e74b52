//! # Ledger Errors

use thiserror::Error;

/// Errors from the round store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// A store lock was poisoned by a panicking writer
    #[error("round store lock poisoned")]
    LockPoisoned,
}
