//! # Participant Table
//!
//! The per-address role table, keyed by address. Rotation never edits the
//! live table: a replacement table is built from scratch and swapped in
//! wholesale, so the single-role invariant holds trivially and a failed
//! build leaves the prior generation fully intact.

use crate::domain::errors::ConfigError;
use shared_types::{Address, ParticipantRecord, Role};
use std::collections::HashMap;

/// Role assignments for one configuration generation.
#[derive(Clone, Debug, Default)]
pub struct ParticipantTable {
    records: HashMap<Address, ParticipantRecord>,
}

impl ParticipantTable {
    /// An empty table: every address reads as `Role::Unset`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh table from parallel signer/transmitter lists.
    ///
    /// Position `i` in each list becomes slot index `i` for that role. An
    /// address appearing twice (within one list or across both) fails the
    /// whole build; the caller discards the partial table, so no assignment
    /// is ever observable.
    pub fn build(signers: &[Address], transmitters: &[Address]) -> Result<Self, ConfigError> {
        let mut table = Self::new();
        for (index, signer) in signers.iter().enumerate() {
            table.assign(*signer, Role::Signer, index as u8)?;
        }
        for (index, transmitter) in transmitters.iter().enumerate() {
            table.assign(*transmitter, Role::Transmitter, index as u8)?;
        }
        Ok(table)
    }

    /// Assign a role to an address that must not already hold one.
    fn assign(&mut self, address: Address, role: Role, index: u8) -> Result<(), ConfigError> {
        let record = self.records.entry(address).or_default();
        if record.role != Role::Unset {
            return Err(ConfigError::DuplicateRole(address));
        }
        *record = ParticipantRecord::new(role, index);
        Ok(())
    }

    /// The record for `address`; absent addresses read as `Role::Unset`.
    pub fn record(&self, address: &Address) -> ParticipantRecord {
        self.records.get(address).copied().unwrap_or_default()
    }

    /// Number of addresses holding a role.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no address holds a role.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
