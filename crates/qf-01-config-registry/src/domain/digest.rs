//! # Config Digest
//!
//! Computes the 128-bit domain-separation tag that binds every report to
//! one specific participant-set generation.
//!
//! The digest covers the registry identity, the post-rotation config count,
//! both participant lists, the threshold, and the opaque off-chain
//! configuration. Variable-length sections are length-prefixed so no two
//! distinct configurations can collide by concatenation.

use crate::domain::entities::ConfigProposal;
use sha3::{Digest, Keccak256};
use shared_types::{Address, ConfigDigest};

/// Compute the digest for a configuration generation.
///
/// `config_count` is the count *after* the rotation applies, so consecutive
/// rotations with identical lists still produce distinct digests.
pub fn config_digest(self_id: &Address, config_count: u32, proposal: &ConfigProposal) -> ConfigDigest {
    let mut hasher = Keccak256::new();

    hasher.update(self_id);
    hasher.update(config_count.to_be_bytes());

    hasher.update((proposal.signers.len() as u32).to_be_bytes());
    for signer in &proposal.signers {
        hasher.update(signer);
    }
    for transmitter in &proposal.transmitters {
        hasher.update(transmitter);
    }

    hasher.update([proposal.threshold]);
    hasher.update(proposal.config_version.to_be_bytes());

    hasher.update((proposal.payload.len() as u32).to_be_bytes());
    hasher.update(&proposal.payload);

    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    ConfigDigest::truncate_from(&hash)
}
