//! # Aggregator Service
//!
//! The application service wiring the subsystems together: the config
//! registry (QF-01) owns state, the report verifier (QF-02) validates, the
//! round ledger (QF-03) persists, and the event sink receives the durable
//! payloads after each transition commits.
//!
//! Execution is single-writer: every mutating call takes the registry's
//! write lock for the whole transition, so no partial state is ever
//! visible. The lock is released before event publication; by then the
//! transition has committed.

use crate::errors::AggregatorError;
use crate::events::payloads::NewTransmissionPayload;
use crate::ports::inbound::FeedReader;
use crate::ports::outbound::EventSink;
use parking_lot::RwLock;
use qf_01_config_registry::{ConfigDetails, ConfigError, ConfigProposal, ConfigRegistry};
use qf_02_report_verifier::ReportVerifier;
use qf_03_round_ledger::{reads, LedgerError, RoundData, RoundRecord, RoundStore};
use shared_types::{
    Address, Answer, BlockHeight, CallerContext, ConfigDigest, HotState, RoundId, Timestamp,
};

/// Receipt returned to the transmitter for an accepted report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransmissionReceipt {
    /// Final round id of the batch.
    pub round_id: RoundId,
    /// The canonical answer of that id (the last observation).
    pub answer: Answer,
}

/// The restricted transmission summary, available to externally-originated
/// callers only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransmissionDetails {
    /// Digest of the live configuration.
    pub config_digest: ConfigDigest,
    /// Epoch of the highest accepted ordinal.
    pub epoch: u32,
    /// Round of the highest accepted ordinal.
    pub round: u8,
    /// Answer of the most recent round.
    pub latest_answer: Answer,
    /// Timestamp of the most recent round.
    pub latest_timestamp: Timestamp,
}

/// The transmission pipeline.
pub struct Aggregator<S: RoundStore, E: EventSink> {
    owner: Address,
    registry: RwLock<ConfigRegistry>,
    verifier: ReportVerifier,
    store: S,
    events: E,
}

impl<S: RoundStore, E: EventSink> Aggregator<S, E> {
    /// Create a pipeline with no configuration installed.
    ///
    /// `owner` is the only identity allowed to rotate configurations;
    /// `self_id` domain-separates config digests across deployments.
    pub fn new(owner: Address, self_id: Address, store: S, events: E) -> Self {
        Self {
            owner,
            registry: RwLock::new(ConfigRegistry::new(self_id)),
            verifier: ReportVerifier::new(),
            store,
            events,
        }
    }

    // =========================================================================
    // Mutating operations
    // =========================================================================

    /// Rotate the configuration. Owner only.
    pub async fn set_config(
        &self,
        ctx: CallerContext,
        proposal: ConfigProposal,
        block_height: BlockHeight,
    ) -> Result<(), AggregatorError> {
        if ctx.caller != self.owner {
            return Err(ConfigError::NotOwner.into());
        }

        let payload = self.registry.write().rotate(proposal, block_height)?;
        self.events.config_rotated(payload).await?;
        Ok(())
    }

    /// Submit a signed report batch.
    ///
    /// One atomic unit: verify everything, write the batch to the ledger,
    /// advance the hot summary. The hot summary is read once at entry and
    /// written once at commit; any rejection happens before the first write
    /// and leaves no observable state change.
    pub async fn transmit(
        &self,
        ctx: CallerContext,
        calldata: &[u8],
        now: Timestamp,
    ) -> Result<TransmissionReceipt, AggregatorError> {
        let (receipt, payload) = {
            let mut registry = self.registry.write();
            let hot = registry.hot_state();

            let verified = self
                .verifier
                .verify(&hot, &*registry, ctx.caller, calldata)?;

            let base = verified.epoch_and_round.ordinal();
            let observations = &verified.report.observations;
            let Some(&answer) = observations.last() else {
                // Unreachable past decoding, which rejects empty batches.
                return Err(qf_02_report_verifier::ReportFormatError::NoObservations.into());
            };
            let slots = observations.len() as u64;

            let records: Vec<RoundRecord> = observations
                .iter()
                .enumerate()
                .map(|(i, &answer)| RoundRecord {
                    round_id: base + i as u64,
                    answer,
                    observed_at: now,
                })
                .collect();
            self.store.put_batch(records)?;

            let epoch_and_round = verified.epoch_and_round.advanced_by(slots - 1);
            let latest_round_id = epoch_and_round.ordinal();
            registry.store_hot(HotState {
                config_digest: hot.config_digest,
                epoch_and_round,
                threshold: hot.threshold,
                latest_round_id,
            });

            tracing::info!(
                round_id = latest_round_id,
                answer,
                transmitter = ?ctx.caller,
                observations = observations.len(),
                "transmission accepted"
            );

            (
                TransmissionReceipt {
                    round_id: latest_round_id,
                    answer,
                },
                NewTransmissionPayload {
                    round_id: latest_round_id,
                    answer,
                    transmitter: ctx.caller,
                    observations: verified.report.observations,
                },
            )
        };

        self.events.new_transmission(payload).await?;
        Ok(receipt)
    }

    // =========================================================================
    // Read operations
    // =========================================================================

    /// Summary of the live configuration.
    pub fn latest_config_details(&self) -> ConfigDetails {
        self.registry.read().latest_config_details()
    }

    /// The transmitter list recorded at config time, in slot order.
    pub fn transmitters(&self) -> Vec<Address> {
        self.registry.read().transmitters().to_vec()
    }

    /// The restricted transmission summary. Externally-originated callers
    /// only; a contract-to-contract call is rejected.
    pub fn latest_transmission_details(
        &self,
        ctx: CallerContext,
    ) -> Result<TransmissionDetails, AggregatorError> {
        if !ctx.is_external {
            return Err(AggregatorError::OnlyExternalCallers);
        }

        let hot = self.registry.read().hot_state();
        Ok(TransmissionDetails {
            config_digest: hot.config_digest,
            epoch: hot.epoch_and_round.epoch(),
            round: hot.epoch_and_round.round(),
            latest_answer: reads::answer_for(&self.store, hot.latest_round_id)?,
            latest_timestamp: reads::timestamp_for(&self.store, hot.latest_round_id)?,
        })
    }
}

impl<S: RoundStore, E: EventSink> FeedReader for Aggregator<S, E> {
    fn latest_answer(&self) -> Result<Answer, LedgerError> {
        reads::answer_for(&self.store, self.latest_round())
    }

    fn latest_timestamp(&self) -> Result<Timestamp, LedgerError> {
        reads::timestamp_for(&self.store, self.latest_round())
    }

    fn latest_round(&self) -> RoundId {
        self.registry.read().hot_state().latest_round_id
    }

    fn get_answer(&self, round_id: RoundId) -> Result<Answer, LedgerError> {
        reads::answer_for(&self.store, round_id)
    }

    fn get_timestamp(&self, round_id: RoundId) -> Result<Timestamp, LedgerError> {
        reads::timestamp_for(&self.store, round_id)
    }

    fn get_round_data(&self, round_id: RoundId) -> Result<RoundData, LedgerError> {
        reads::round_data(&self.store, round_id)
    }

    fn latest_round_data(&self) -> Result<RoundData, LedgerError> {
        reads::latest_round_data(&self.store, self.latest_round())
    }
}
