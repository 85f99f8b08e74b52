//! # Verification Errors
//!
//! Three taxonomies, matching where in the call a rejection happens:
//! format errors before verification begins, protocol errors during the
//! ordered checks, and signature errors from the cryptographic layer
//! (surfaced through `ProtocolError::InvalidSignature`).

use shared_types::{Address, ConfigDigest, EpochRound};
use thiserror::Error;

/// Errors in the shape of the call, rejected before verification begins.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportFormatError {
    /// The envelope is shorter than its own headers claim
    #[error("truncated transmit envelope")]
    TruncatedEnvelope,

    /// The envelope's total size must match its contents exactly
    #[error("calldata length mismatch: expected {expected}, got {actual}")]
    CalldataLengthMismatch {
        /// Size implied by the envelope's length fields.
        expected: usize,
        /// Actual byte count received.
        actual: usize,
    },

    /// The report body does not decode to context + observers + observations
    #[error("malformed report encoding")]
    MalformedReport,

    /// A report must carry at least one observation
    #[error("report carries no observations")]
    NoObservations,
}

/// Protocol-level rejections. No partial writes ever result from these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// Report was produced under a stale or foreign configuration
    #[error("config digest mismatch: expected {expected}, got {actual}")]
    ConfigDigestMismatch {
        /// Digest of the live configuration.
        expected: ConfigDigest,
        /// Digest the report was produced under.
        actual: ConfigDigest,
    },

    /// Epoch/round ordinal must strictly exceed the stored ordinal
    #[error("stale report: ordinal {reported} not greater than {current}")]
    StaleReport {
        /// Ordinal carried by the report.
        reported: EpochRound,
        /// Highest ordinal accepted so far.
        current: EpochRound,
    },

    /// R and S component arrays must be the same length
    #[error("signature component count mismatch: {rs} r values, {ss} s values")]
    SignatureCountMismatch {
        /// Number of R components supplied.
        rs: usize,
        /// Number of S components supplied.
        ss: usize,
    },

    /// Strictly more than `threshold` signatures are required
    #[error("insufficient signatures: {got} supplied, threshold {threshold}")]
    InsufficientSignatures {
        /// Number of signatures supplied.
        got: usize,
        /// Fault-tolerance threshold (f).
        threshold: u8,
    },

    /// At most 31 signatures fit one report
    #[error("too many signatures: {0}")]
    TooManySignatures(usize),

    /// At most 200 observations fit one report
    #[error("too many observations: {0}")]
    TooManyObservations(usize),

    /// Caller is not a registered transmitter for this configuration
    #[error("unauthorized transmitter {0:02x?}")]
    UnauthorizedTransmitter(Address),

    /// A signature resolved to an address that is not a registered signer
    #[error("unauthorized signer {0:02x?}")]
    UnauthorizedSigner(Address),

    /// Two signatures resolved to the same signer slot
    #[error("duplicate signer at slot {index}")]
    DuplicateSigner {
        /// The slot index that appeared twice.
        index: u8,
    },

    /// A signature failed cryptographic validation
    #[error("invalid signature: {0}")]
    InvalidSignature(#[from] SignatureError),
}

/// Errors from the ECDSA layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature format is invalid (scalar out of range, bad encoding)
    #[error("invalid signature format")]
    InvalidFormat,

    /// Signature has high S value (malleability protection)
    #[error("malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover public key from signature
    #[error("failed to recover public key")]
    RecoveryFailed,
}

/// Umbrella over the two rejection taxonomies a verification can produce.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// Rejected before verification began.
    #[error(transparent)]
    Format(#[from] ReportFormatError),

    /// Rejected by one of the ordered protocol checks.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
