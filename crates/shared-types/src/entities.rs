//! # Core Domain Entities
//!
//! Defines the primitives every Quorum-Feed subsystem speaks in: addresses,
//! hashes, the packed epoch/round ordinal, the config digest, and the hot
//! summary record that the transmission pipeline reads and writes once per
//! call.
//!
//! ## Clusters
//!
//! - **Primitives**: `Hash`, `Address`, `Answer`, `Timestamp`, `BlockHeight`
//! - **Protocol Ordinals**: `EpochRound`, `RoundId`
//! - **Config Identity**: `ConfigDigest`, `HotState`
//! - **Call Metadata**: `CallerContext`

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CLUSTER A: PRIMITIVES
// =============================================================================

/// A 32-byte hash (Keccak256 throughout this workspace).
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address (last 20 bytes of keccak256(pubkey)).
pub type Address = [u8; 20];

/// A reported numeric value.
///
/// ## Type Decision
///
/// `answer: i128` - The source protocol carries a 192-bit signed fixed-point
/// value, sized to fit an EVM word rather than any real feed range. i128
/// covers every practical observation while keeping arithmetic native;
/// a wider integer would require primitive-types and manual sign handling.
pub type Answer = i128;

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// Ledger block height, used to index config rotations.
pub type BlockHeight = u64;

/// Sequential round identifier. Reads treat anything above
/// [`MAX_ROUND_ID`] as absent rather than an error.
pub type RoundId = u64;

// =============================================================================
// PROTOCOL LIMITS
// =============================================================================

/// Maximum number of participants per role in one configuration.
/// Participant indices occupy [0, 200).
pub const MAX_PARTICIPANTS: usize = 200;

/// Maximum number of signatures accepted on one report.
pub const MAX_SIGNATURES: usize = 31;

/// Maximum number of observations accepted in one report.
pub const MAX_OBSERVATIONS: usize = 200;

/// Highest round id the read surface resolves. Ids above the 32-bit range
/// return the defined zero result, preserving non-reverting reads.
pub const MAX_ROUND_ID: RoundId = u32::MAX as RoundId;

// =============================================================================
// CLUSTER B: PROTOCOL ORDINALS
// =============================================================================

/// The packed 40-bit epoch/round ordinal: 32-bit epoch in the high bits,
/// 8-bit round in the low byte.
///
/// Comparison and advancement are **numeric over the packed value**, exactly
/// as the source protocol does it. Advancing by more than one slot can carry
/// the 8-bit round field into the epoch field at 256; that behavior is part
/// of the compatibility surface and is preserved here, not corrected.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EpochRound(u64);

/// Mask selecting the 40 significant bits of an epoch/round ordinal.
const EPOCH_AND_ROUND_MASK: u64 = (1 << 40) - 1;

impl EpochRound {
    /// The reset value installed by every config rotation.
    pub const ZERO: Self = Self(0);

    /// Pack an (epoch, round) pair into its ordinal.
    pub fn new(epoch: u32, round: u8) -> Self {
        Self((u64::from(epoch) << 8) | u64::from(round))
    }

    /// Reconstruct from a raw ordinal, discarding bits above the 40-bit
    /// ordinal space.
    pub fn from_ordinal(ordinal: u64) -> Self {
        Self(ordinal & EPOCH_AND_ROUND_MASK)
    }

    /// The packed numeric ordinal.
    pub fn ordinal(self) -> u64 {
        self.0
    }

    /// The 32-bit epoch field.
    pub fn epoch(self) -> u32 {
        (self.0 >> 8) as u32
    }

    /// The 8-bit round field.
    pub fn round(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Advance the ordinal by `slots` additional round slots.
    ///
    /// One transmission may populate multiple consecutive slots; the ordinal
    /// advances by the number of *additional* slots consumed. The addition
    /// carries through the round byte (wraparound hazard noted above).
    pub fn advanced_by(self, slots: u64) -> Self {
        Self::from_ordinal(self.0 + slots)
    }
}

impl fmt::Display for EpochRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.epoch(), self.round())
    }
}

// =============================================================================
// CLUSTER C: CONFIG IDENTITY
// =============================================================================

/// 128-bit domain-separation tag binding a report to one specific
/// participant-set generation. Reports carrying a digest from any other
/// generation are rejected before signature checks run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigDigest(pub [u8; 16]);

impl ConfigDigest {
    /// Truncate a 32-byte hash to its top 128 bits.
    pub fn truncate_from(hash: &Hash) -> Self {
        let mut tag = [0u8; 16];
        tag.copy_from_slice(&hash[..16]);
        Self(tag)
    }

    /// The raw tag bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for ConfigDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// The compact "hot" summary record: everything a transmission needs to
/// validate and everything it updates, read once and written once per call.
///
/// The pipeline treats this as an explicit value passed by reference, never
/// ambient global state; a failed validation writes nothing back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotState {
    /// Digest of the live configuration.
    pub config_digest: ConfigDigest,
    /// Highest epoch/round ordinal accepted so far.
    pub epoch_and_round: EpochRound,
    /// Maximum tolerated count of faulty participants (f).
    pub threshold: u8,
    /// Round id of the most recently written record.
    pub latest_round_id: RoundId,
}

// =============================================================================
// CLUSTER D: CALL METADATA
// =============================================================================

/// Identity and origin of the caller of a core operation.
///
/// `is_external` distinguishes an end-user-originated call from a
/// contract-to-contract call; the access gate and the restricted
/// transmission-details read both key off it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerContext {
    /// The calling address.
    pub caller: Address,
    /// True when the call originates directly from an end user.
    pub is_external: bool,
}

impl CallerContext {
    /// A call originating directly from an end user.
    pub fn external(caller: Address) -> Self {
        Self {
            caller,
            is_external: true,
        }
    }

    /// A contract-to-contract call.
    pub fn contract(caller: Address) -> Self {
        Self {
            caller,
            is_external: false,
        }
    }
}
