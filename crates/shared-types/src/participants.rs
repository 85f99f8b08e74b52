//! # Participant Roles
//!
//! The per-address role record and the cross-subsystem lookup trait the
//! report verifier uses to authorize transmitters and signers.
//!
//! An address holds at most one role at a time. A rotation clears every
//! prior assignment before installing the new lists, so the invariant is
//! maintained by full replacement rather than incremental bookkeeping.

use crate::entities::Address;
use serde::{Deserialize, Serialize};

/// The role an address holds in the live configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Not part of the current participant set.
    #[default]
    Unset,
    /// Authorized to sign reports.
    Signer,
    /// Authorized to submit signed reports.
    Transmitter,
}

/// Role and slot index for one participating address.
///
/// `index` is the position of the address in the signer or transmitter list
/// recorded at config time; it bounds the presence-set used for duplicate
/// signer detection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// Current role of the address.
    pub role: Role,
    /// Slot index within the role's list, in [0, 200).
    pub index: u8,
}

impl ParticipantRecord {
    /// Record for an address with the given role and slot.
    pub fn new(role: Role, index: u8) -> Self {
        Self { role, index }
    }
}

/// Read-only view of the live participant set.
///
/// Implemented by the config registry and consumed by the report verifier;
/// the verifier never mutates participant state.
pub trait ParticipantDirectory {
    /// The record for `address`, or the default (`Role::Unset`) record when
    /// the address is not part of the current configuration.
    fn participant(&self, address: &Address) -> ParticipantRecord;

    /// The transmitter registered at `index` in the current configuration,
    /// if that slot exists.
    fn transmitter_at(&self, index: u8) -> Option<Address>;
}
