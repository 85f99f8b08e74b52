//! # Config Errors
//!
//! Rejection reasons for config rotation. Every rejection leaves the
//! registry state untouched.

use shared_types::Address;
use thiserror::Error;

/// Errors that can reject a config rotation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Signer and transmitter lists must be the same length
    #[error("signer/transmitter length mismatch: {signers} signers, {transmitters} transmitters")]
    LengthMismatch {
        /// Length of the proposed signer list.
        signers: usize,
        /// Length of the proposed transmitter list.
        transmitters: usize,
    },

    /// The participant set exceeds the 200-slot index space
    #[error("too many participants: {0}")]
    TooManyParticipants(usize),

    /// The fault-tolerance threshold must be positive
    #[error("threshold must be positive")]
    ThresholdZero,

    /// Byzantine safety requires strictly more than 3f participants
    #[error("faulty-participant margin violated: {signers} signers with threshold {threshold}")]
    FaultyMarginViolated {
        /// Length of the proposed signer list.
        signers: usize,
        /// Proposed fault-tolerance threshold.
        threshold: u8,
    },

    /// An address would hold two roles at once
    #[error("address {0:02x?} already holds a role in this configuration")]
    DuplicateRole(Address),

    /// The caller is not the privileged rotation identity
    #[error("caller is not the configuration owner")]
    NotOwner,
}
