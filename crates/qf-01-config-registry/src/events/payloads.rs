//! # Event Payloads
//!
//! Field order and types are part of the compatibility surface for
//! downstream indexers; reorder nothing here.

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockHeight};

/// Published after every successful config rotation.
///
/// Carries exactly the fields the config digest was computed over (plus the
/// chaining `previous_block_height`), so an indexer can reproduce the digest
/// and walk rotations backwards by block height.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRotatedPayload {
    /// Block height of the previous rotation (0 for the first).
    pub previous_block_height: BlockHeight,
    /// Config count after this rotation.
    pub config_count: u32,
    /// Full signer list, in slot order.
    pub signers: Vec<Address>,
    /// Full transmitter list, in slot order.
    pub transmitters: Vec<Address>,
    /// Fault-tolerance threshold (f).
    pub threshold: u8,
    /// Version tag of the off-chain protocol configuration.
    pub config_version: u64,
    /// Opaque encoded off-chain configuration.
    pub payload: Vec<u8>,
}
