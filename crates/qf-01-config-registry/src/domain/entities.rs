//! # Domain Entities
//!
//! Inputs and read-surface values of the config registry.

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockHeight, ConfigDigest};

/// A proposed configuration, as supplied by governance.
///
/// `signers` and `transmitters` are parallel lists: position `i` in each
/// becomes slot index `i` for the respective role. `config_version` and
/// `payload` are opaque to the registry; they only feed the digest and the
/// rotation event, binding off-chain protocol parameters to the generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigProposal {
    /// Addresses authorized to sign reports, in slot order.
    pub signers: Vec<Address>,
    /// Addresses authorized to submit reports, in slot order.
    pub transmitters: Vec<Address>,
    /// Maximum tolerated count of faulty participants (f).
    pub threshold: u8,
    /// Version tag of the off-chain protocol configuration.
    pub config_version: u64,
    /// Opaque encoded off-chain configuration.
    pub payload: Vec<u8>,
}

/// Summary of the live configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDetails {
    /// Number of rotations applied since initialization.
    pub config_count: u32,
    /// Block height at which the live configuration was installed.
    pub block_height: BlockHeight,
    /// Digest of the live configuration.
    pub config_digest: ConfigDigest,
}
