//! # Domain Entities
//!
//! Decoded forms of the transmit call and the report it carries. None of
//! these are persisted; they live for the duration of one verification.

use serde::{Deserialize, Serialize};
use shared_types::{Answer, ConfigDigest, EpochRound, Hash};

/// ECDSA signature on the secp256k1 curve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

/// The transmit call as decoded from its exact-length envelope.
///
/// `rs` and `ss` are kept as the parallel arrays they arrive as; whether
/// their lengths agree is a protocol question, not a format one, so the
/// codec does not reject a mismatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransmitCall {
    /// Raw report bytes. Signatures are over `keccak256` of exactly these.
    pub report: Vec<u8>,
    /// Signature R components, one per signer.
    pub rs: Vec<[u8; 32]>,
    /// Signature S components, one per signer.
    pub ss: Vec<[u8; 32]>,
    /// Recovery IDs, one byte per signature, packed left-aligned.
    pub raw_vs: [u8; 32],
}

impl TransmitCall {
    /// Assemble the `i`-th signature triple.
    pub fn signature(&self, i: usize) -> EcdsaSignature {
        EcdsaSignature {
            r: self.rs[i],
            s: self.ss[i],
            v: self.raw_vs[i],
        }
    }
}

/// The context words decoded from a report's 32-byte header: which config
/// generation it binds to, and which agreement attempt produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportContext {
    /// Digest of the configuration the report was produced under.
    pub config_digest: ConfigDigest,
    /// Packed epoch/round ordinal of the agreement attempt.
    pub epoch_and_round: EpochRound,
}

/// A decoded report: context header, observer indices, and the ordered
/// observation batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The undecoded 32-byte context word (pad ‖ digest ‖ epoch ‖ round).
    pub raw_context: [u8; 32],
    /// Slot index of the participant that contributed each observation.
    pub observers: Vec<u8>,
    /// Ordered signed observations.
    pub observations: Vec<Answer>,
}

impl Report {
    /// Decode the context word: discard the 88-bit pad, take the 128-bit
    /// digest and the 40-bit epoch-and-round.
    pub fn context(&self) -> ReportContext {
        let mut digest = [0u8; 16];
        digest.copy_from_slice(&self.raw_context[11..27]);

        let mut epoch = [0u8; 4];
        epoch.copy_from_slice(&self.raw_context[27..31]);
        let round = self.raw_context[31];

        ReportContext {
            config_digest: ConfigDigest(digest),
            epoch_and_round: EpochRound::new(u32::from_be_bytes(epoch), round),
        }
    }

    /// Build the 32-byte context word for a digest and ordinal.
    pub fn raw_context_for(digest: ConfigDigest, epoch_and_round: EpochRound) -> [u8; 32] {
        let mut raw = [0u8; 32];
        raw[11..27].copy_from_slice(digest.as_bytes());
        raw[27..31].copy_from_slice(&epoch_and_round.epoch().to_be_bytes());
        raw[31] = epoch_and_round.round();
        raw
    }
}

/// Output of a fully successful verification: everything the pipeline needs
/// to commit the transmission, nothing it has to re-derive.
#[derive(Clone, Debug)]
pub struct VerifiedTransmission {
    /// The decoded report.
    pub report: Report,
    /// `keccak256` of the raw report bytes (what the signers signed).
    pub report_hash: Hash,
    /// The report's packed ordinal; the base round id of the batch.
    pub epoch_and_round: EpochRound,
}
