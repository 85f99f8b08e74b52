//! # Config Registry
//!
//! The state machine owning the live configuration: participant table, hot
//! summary, rotation bookkeeping. Exactly one live generation exists; every
//! successful rotation replaces it wholesale.

use crate::domain::digest::config_digest;
use crate::domain::entities::{ConfigDetails, ConfigProposal};
use crate::domain::errors::ConfigError;
use crate::domain::table::ParticipantTable;
use crate::events::payloads::ConfigRotatedPayload;
use shared_types::{
    Address, BlockHeight, EpochRound, HotState, ParticipantDirectory, ParticipantRecord,
    MAX_PARTICIPANTS,
};

/// Registry of the live participant set and protocol threshold.
///
/// Mutated by exactly two paths: `rotate` (privileged, full replacement) and
/// `store_hot` (the transmission pipeline's one atomic write per accepted
/// report). Everything else is read-only.
#[derive(Clone, Debug)]
pub struct ConfigRegistry {
    /// Identity of this verifier instance; domain-separates digests across
    /// deployments.
    self_id: Address,
    hot: HotState,
    config_count: u32,
    block_height: BlockHeight,
    signers: Vec<Address>,
    transmitters: Vec<Address>,
    table: ParticipantTable,
}

impl ConfigRegistry {
    /// A registry with no configuration installed. Until the first rotation
    /// every address reads as `Role::Unset` and no transmission can pass
    /// verification.
    pub fn new(self_id: Address) -> Self {
        Self {
            self_id,
            hot: HotState::default(),
            config_count: 0,
            block_height: 0,
            signers: Vec::new(),
            transmitters: Vec::new(),
            table: ParticipantTable::new(),
        }
    }

    /// Apply a configuration rotation.
    ///
    /// Validates the proposal, builds the replacement participant table from
    /// scratch, and only then commits: new table, new digest, incremented
    /// config count, epoch/round reset to zero. Any failure returns before
    /// the first field of `self` changes.
    ///
    /// Returns the durable rotation payload for publication; its field
    /// values are exactly what the digest was computed over, so downstream
    /// indexers can reproduce the digest from the event alone.
    pub fn rotate(
        &mut self,
        proposal: ConfigProposal,
        block_height: BlockHeight,
    ) -> Result<ConfigRotatedPayload, ConfigError> {
        let signers = proposal.signers.len();
        let transmitters = proposal.transmitters.len();

        if signers != transmitters {
            return Err(ConfigError::LengthMismatch {
                signers,
                transmitters,
            });
        }
        if signers > MAX_PARTICIPANTS {
            return Err(ConfigError::TooManyParticipants(signers));
        }
        if proposal.threshold == 0 {
            return Err(ConfigError::ThresholdZero);
        }
        if signers <= 3 * usize::from(proposal.threshold) {
            return Err(ConfigError::FaultyMarginViolated {
                signers,
                threshold: proposal.threshold,
            });
        }

        // Build the replacement table before touching live state; a dual-role
        // address aborts here with the prior generation fully intact.
        let table = ParticipantTable::build(&proposal.signers, &proposal.transmitters)?;

        let config_count = self.config_count + 1;
        let digest = config_digest(&self.self_id, config_count, &proposal);
        let previous_block_height = self.block_height;

        self.table = table;
        self.signers = proposal.signers.clone();
        self.transmitters = proposal.transmitters.clone();
        self.config_count = config_count;
        self.block_height = block_height;
        self.hot = HotState {
            config_digest: digest,
            epoch_and_round: EpochRound::ZERO,
            threshold: proposal.threshold,
            // Round ids survive rotations; only the ordinal resets.
            latest_round_id: self.hot.latest_round_id,
        };

        tracing::info!(
            config_count,
            digest = %digest,
            participants = signers,
            threshold = proposal.threshold,
            "configuration rotated"
        );

        Ok(ConfigRotatedPayload {
            previous_block_height,
            config_count,
            signers: proposal.signers,
            transmitters: proposal.transmitters,
            threshold: proposal.threshold,
            config_version: proposal.config_version,
            payload: proposal.payload,
        })
    }

    /// Summary of the live configuration.
    pub fn latest_config_details(&self) -> ConfigDetails {
        ConfigDetails {
            config_count: self.config_count,
            block_height: self.block_height,
            config_digest: self.hot.config_digest,
        }
    }

    /// The transmitter list recorded at config time, in slot order.
    pub fn transmitters(&self) -> &[Address] {
        &self.transmitters
    }

    /// The identity this registry domain-separates digests with.
    pub fn self_id(&self) -> Address {
        self.self_id
    }

    /// One atomic read of the hot summary.
    pub fn hot_state(&self) -> HotState {
        self.hot
    }

    /// One atomic write of the hot summary. The transmission pipeline calls
    /// this exactly once per accepted report, after all validation.
    pub fn store_hot(&mut self, hot: HotState) {
        self.hot = hot;
    }
}

impl ParticipantDirectory for ConfigRegistry {
    fn participant(&self, address: &Address) -> ParticipantRecord {
        self.table.record(address)
    }

    fn transmitter_at(&self, index: u8) -> Option<Address> {
        self.transmitters.get(usize::from(index)).copied()
    }
}
