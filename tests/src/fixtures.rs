//! # Test Fixtures
//!
//! Signing keys, calldata builders, and a fully wired pipeline shared by
//! the integration flows.

use k256::ecdsa::{RecoveryId, SigningKey};
use qf_02_report_verifier::{
    address_from_pubkey, encode_report, encode_transmit_call, keccak256, Report,
};
use qf_03_round_ledger::InMemoryRoundStore;
use qf_04_transmission::{Aggregator, InMemoryEventSink};
use shared_types::{Address, Answer, CallerContext, ConfigDigest, EpochRound, Hash, Timestamp};
use std::sync::Arc;
use std::sync::Once;

/// Default owner of the pipeline under test.
pub const OWNER: Address = [0x0A; 20];

/// Identity of the verifier instance under test.
pub const SELF_ID: Address = [0x51; 20];

static TRACING: Once = Once::new();

/// Initialize test logging once. Controlled by `RUST_LOG`; silent by
/// default.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Sign a report hash, normalized to low-S with the recovery id adjusted.
pub fn sign_report(report_hash: &Hash, key: &SigningKey) -> ([u8; 32], [u8; 32], u8) {
    let (sig, recid) = key
        .sign_prehash_recoverable(report_hash)
        .expect("signing failed");
    let (sig, recid) = match sig.normalize_s() {
        Some(normalized) => (
            normalized,
            RecoveryId::try_from(recid.to_byte() ^ 1).expect("valid recovery id"),
        ),
        None => (sig, recid),
    };

    let bytes = sig.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&bytes[..32]);
    s.copy_from_slice(&bytes[32..]);
    (r, s, recid.to_byte() + 27)
}

/// A wired pipeline with shared handles to its store and event sink.
pub struct FeedFixture {
    pub aggregator: Aggregator<Arc<InMemoryRoundStore>, Arc<InMemoryEventSink>>,
    pub store: Arc<InMemoryRoundStore>,
    pub events: Arc<InMemoryEventSink>,
    pub signer_keys: Vec<SigningKey>,
    pub signers: Vec<Address>,
    pub transmitters: Vec<Address>,
}

impl FeedFixture {
    /// A pipeline rotated to `participants` signers/transmitters with the
    /// given threshold.
    pub async fn with_config(participants: usize, threshold: u8) -> Self {
        init_tracing();

        let signer_keys: Vec<SigningKey> = (0..participants)
            .map(|_| SigningKey::random(&mut rand::thread_rng()))
            .collect();
        let signers: Vec<Address> = signer_keys
            .iter()
            .map(|k| address_from_pubkey(k.verifying_key()))
            .collect();
        let transmitters: Vec<Address> = (0..participants)
            .map(|i| {
                let mut a = [0xBB; 20];
                a[18] = (i >> 8) as u8;
                a[19] = i as u8;
                a
            })
            .collect();

        let store = Arc::new(InMemoryRoundStore::new());
        let events = Arc::new(InMemoryEventSink::new());
        let aggregator = Aggregator::new(OWNER, SELF_ID, Arc::clone(&store), Arc::clone(&events));

        aggregator
            .set_config(
                CallerContext::external(OWNER),
                qf_01_config_registry::ConfigProposal {
                    signers: signers.clone(),
                    transmitters: transmitters.clone(),
                    threshold,
                    config_version: 1,
                    payload: vec![0xC0, 0xFF],
                },
                10,
            )
            .await
            .expect("fixture rotation is valid");

        Self {
            aggregator,
            store,
            events,
            signer_keys,
            signers,
            transmitters,
        }
    }

    /// Digest of the live configuration.
    pub fn digest(&self) -> ConfigDigest {
        self.aggregator.latest_config_details().config_digest
    }

    /// Encode a transmit call for the live digest, signed by the given
    /// signer slots.
    pub fn calldata(
        &self,
        epoch: u32,
        round: u8,
        observations: &[Answer],
        signer_slots: &[usize],
    ) -> Vec<u8> {
        build_calldata(
            self.digest(),
            epoch,
            round,
            observations,
            &signer_slots
                .iter()
                .map(|&i| &self.signer_keys[i])
                .collect::<Vec<_>>(),
        )
    }

    /// Submit `calldata` as the transmitter at `slot`.
    pub async fn transmit_as(
        &self,
        slot: usize,
        calldata: &[u8],
        now: Timestamp,
    ) -> Result<qf_04_transmission::TransmissionReceipt, qf_04_transmission::AggregatorError>
    {
        self.aggregator
            .transmit(CallerContext::contract(self.transmitters[slot]), calldata, now)
            .await
    }
}

/// Encode a transmit call for an arbitrary digest and ordinal.
pub fn build_calldata(
    digest: ConfigDigest,
    epoch: u32,
    round: u8,
    observations: &[Answer],
    keys: &[&SigningKey],
) -> Vec<u8> {
    let report = Report {
        raw_context: Report::raw_context_for(digest, EpochRound::new(epoch, round)),
        observers: (0..observations.len() as u8).collect(),
        observations: observations.to_vec(),
    };
    let report_bytes = encode_report(&report);
    let report_hash = keccak256(&report_bytes);

    let mut rs = Vec::new();
    let mut ss = Vec::new();
    let mut raw_vs = [0u8; 32];
    for (i, key) in keys.iter().enumerate() {
        let (r, s, v) = sign_report(&report_hash, key);
        rs.push(r);
        ss.push(s);
        raw_vs[i] = v;
    }

    encode_transmit_call(&report_bytes, &rs, &ss, raw_vs)
}
