//! # Report Verifier Subsystem (QF-02)
//!
//! Stateless validation of one submitted report package against the current
//! configuration: wire shape, replay/ordering, signature threshold and
//! authorization. The verifier mutates nothing; it either produces a
//! [`VerifiedTransmission`] for the pipeline to commit, or an error that
//! leaves no observable trace.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): codec, cryptographic recovery, and the
//!   ordered validation steps; no I/O
//!
//! The participant set is consumed through the `ParticipantDirectory` trait
//! from shared-types; the verifier never sees the registry's internals.
//!
//! ## Validation Order
//!
//! 1. Exact envelope length (padding defense)
//! 2. Report decode (context, observers, observations)
//! 3. Config digest match
//! 4. Strict epoch/round monotonicity
//! 5. Signature count bounds
//! 6. Observation count bounds
//! 7. Transmitter authorization
//! 8. Per-signature recovery, signer authorization, duplicate detection

pub mod domain;

// Re-export public API
pub use domain::codec::{
    decode_report, decode_transmit_call, encode_report, encode_transmit_call, expected_call_len,
};
pub use domain::ecdsa::{address_from_pubkey, keccak256};
pub use domain::entities::{
    EcdsaSignature, Report, ReportContext, TransmitCall, VerifiedTransmission,
};
pub use domain::errors::{ProtocolError, ReportFormatError, SignatureError, VerifyError};
pub use domain::verify::{verify_report, ReportVerifier};
