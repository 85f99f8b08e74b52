//! # Report Verification
//!
//! The ordered validation steps applied to one submitted report package.
//! Every check runs before any mutation anywhere in the system; the first
//! failure aborts the transmission with no observable state change.

use crate::domain::codec;
use crate::domain::ecdsa;
use crate::domain::entities::{Report, TransmitCall, VerifiedTransmission};
use crate::domain::errors::{ProtocolError, SignatureError, VerifyError};
use rayon::prelude::*;
use shared_types::{
    Address, Hash, HotState, ParticipantDirectory, Role, MAX_OBSERVATIONS, MAX_PARTICIPANTS,
    MAX_SIGNATURES,
};

/// Stateless report verifier.
///
/// Holds no configuration of its own; everything it validates against is
/// passed in per call (the hot summary and the participant directory).
#[derive(Debug, Clone, Default)]
pub struct ReportVerifier;

impl ReportVerifier {
    /// Create a new report verifier.
    pub fn new() -> Self {
        Self
    }

    /// Decode and verify a raw transmit call end to end.
    pub fn verify(
        &self,
        hot: &HotState,
        directory: &dyn ParticipantDirectory,
        caller: Address,
        calldata: &[u8],
    ) -> Result<VerifiedTransmission, VerifyError> {
        let call = codec::decode_transmit_call(calldata)?;
        let report = codec::decode_report(&call.report)?;
        let verified = verify_report(hot, directory, caller, &call, report)?;
        Ok(verified)
    }
}

/// Apply the protocol checks to a decoded call.
///
/// Order: digest match, strict ordinal monotonicity, signature count
/// bounds, observation count bound, transmitter authorization, then
/// per-signature recovery with duplicate detection.
pub fn verify_report(
    hot: &HotState,
    directory: &dyn ParticipantDirectory,
    caller: Address,
    call: &TransmitCall,
    report: Report,
) -> Result<VerifiedTransmission, ProtocolError> {
    let context = report.context();

    if context.config_digest != hot.config_digest {
        return Err(ProtocolError::ConfigDigestMismatch {
            expected: hot.config_digest,
            actual: context.config_digest,
        });
    }

    if context.epoch_and_round <= hot.epoch_and_round {
        return Err(ProtocolError::StaleReport {
            reported: context.epoch_and_round,
            current: hot.epoch_and_round,
        });
    }

    let signatures = call.rs.len();
    if signatures != call.ss.len() {
        return Err(ProtocolError::SignatureCountMismatch {
            rs: signatures,
            ss: call.ss.len(),
        });
    }
    if signatures <= usize::from(hot.threshold) {
        return Err(ProtocolError::InsufficientSignatures {
            got: signatures,
            threshold: hot.threshold,
        });
    }
    if signatures > MAX_SIGNATURES {
        return Err(ProtocolError::TooManySignatures(signatures));
    }

    if report.observations.len() > MAX_OBSERVATIONS {
        return Err(ProtocolError::TooManyObservations(report.observations.len()));
    }

    authorize_transmitter(directory, caller)?;

    let report_hash = ecdsa::keccak256(&call.report);
    authorize_signers(directory, &report_hash, call, signatures)?;

    tracing::debug!(
        ordinal = %context.epoch_and_round,
        signatures,
        observations = report.observations.len(),
        "report verified"
    );

    Ok(VerifiedTransmission {
        report_hash,
        epoch_and_round: context.epoch_and_round,
        report,
    })
}

/// The caller must hold the Transmitter role, and the transmitter list
/// entry at its stored index must be the caller itself.
fn authorize_transmitter(
    directory: &dyn ParticipantDirectory,
    caller: Address,
) -> Result<(), ProtocolError> {
    let record = directory.participant(&caller);
    if record.role != Role::Transmitter {
        return Err(ProtocolError::UnauthorizedTransmitter(caller));
    }
    if directory.transmitter_at(record.index) != Some(caller) {
        return Err(ProtocolError::UnauthorizedTransmitter(caller));
    }
    Ok(())
}

/// Recover every signature in parallel, then authorize sequentially so the
/// reported error is deterministic: the first bad signature in submission
/// order wins.
fn authorize_signers(
    directory: &dyn ParticipantDirectory,
    report_hash: &Hash,
    call: &TransmitCall,
    signatures: usize,
) -> Result<(), ProtocolError> {
    let recovered: Vec<Result<Address, SignatureError>> = (0..signatures)
        .into_par_iter()
        .map(|i| ecdsa::verify_and_recover(report_hash, &call.signature(i)))
        .collect();

    // Presence set over the bounded slot space; slots are < 200 by
    // construction of the participant table.
    let mut seen = [false; MAX_PARTICIPANTS];
    for result in recovered {
        let signer = result?;
        let record = directory.participant(&signer);
        if record.role != Role::Signer {
            return Err(ProtocolError::UnauthorizedSigner(signer));
        }
        let slot = usize::from(record.index);
        if seen[slot] {
            return Err(ProtocolError::DuplicateSigner {
                index: record.index,
            });
        }
        seen[slot] = true;
    }
    Ok(())
}
