//! # Wire Codec
//!
//! Hand-rolled big-endian encoding of the transmit envelope and the report
//! body. The envelope decode enforces the exact-length rule: the byte count
//! of the whole call must equal the size implied by its own length fields,
//! so padding can never distort downstream cost accounting.
//!
//! ```text
//! transmit envelope := u32 report_len ‖ report
//!                    ‖ u8 rs_count ‖ rs_count × [u8; 32]
//!                    ‖ u8 ss_count ‖ ss_count × [u8; 32]
//!                    ‖ [u8; 32] raw_vs
//! report            := [u8; 32] raw_context
//!                    ‖ u8 observation_count
//!                    ‖ observation_count × u8 observer_index
//!                    ‖ observation_count × [u8; 16] observation
//! ```

use crate::domain::entities::{Report, TransmitCall};
use crate::domain::errors::ReportFormatError;
use shared_types::Answer;

/// The envelope size implied by a report length and the two signature
/// component counts. The decoder accepts exactly this many bytes.
pub fn expected_call_len(report_len: usize, rs_count: usize, ss_count: usize) -> usize {
    4 + report_len + 1 + 32 * rs_count + 1 + 32 * ss_count + 32
}

/// Encode a transmit envelope.
pub fn encode_transmit_call(
    report: &[u8],
    rs: &[[u8; 32]],
    ss: &[[u8; 32]],
    raw_vs: [u8; 32],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(expected_call_len(report.len(), rs.len(), ss.len()));
    out.extend_from_slice(&(report.len() as u32).to_be_bytes());
    out.extend_from_slice(report);
    out.push(rs.len() as u8);
    for r in rs {
        out.extend_from_slice(r);
    }
    out.push(ss.len() as u8);
    for s in ss {
        out.extend_from_slice(s);
    }
    out.extend_from_slice(&raw_vs);
    out
}

/// Decode a transmit envelope, enforcing the exact-length rule.
///
/// A buffer too short for its own headers is `TruncatedEnvelope`; a buffer
/// whose total size differs from the implied size in either direction is
/// `CalldataLengthMismatch`. Whether `rs` and `ss` counts agree is checked
/// later, by the protocol layer, not here.
pub fn decode_transmit_call(data: &[u8]) -> Result<TransmitCall, ReportFormatError> {
    if data.len() < 4 {
        return Err(ReportFormatError::TruncatedEnvelope);
    }
    let report_len = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;

    let rs_count_at = 4 + report_len;
    if data.len() <= rs_count_at {
        return Err(ReportFormatError::TruncatedEnvelope);
    }
    let rs_count = usize::from(data[rs_count_at]);

    let ss_count_at = rs_count_at + 1 + 32 * rs_count;
    if data.len() <= ss_count_at {
        return Err(ReportFormatError::TruncatedEnvelope);
    }
    let ss_count = usize::from(data[ss_count_at]);

    let expected = expected_call_len(report_len, rs_count, ss_count);
    if data.len() != expected {
        return Err(ReportFormatError::CalldataLengthMismatch {
            expected,
            actual: data.len(),
        });
    }

    let report = data[4..rs_count_at].to_vec();

    let mut rs = Vec::with_capacity(rs_count);
    let mut at = rs_count_at + 1;
    for _ in 0..rs_count {
        let mut r = [0u8; 32];
        r.copy_from_slice(&data[at..at + 32]);
        rs.push(r);
        at += 32;
    }

    let mut ss = Vec::with_capacity(ss_count);
    at = ss_count_at + 1;
    for _ in 0..ss_count {
        let mut s = [0u8; 32];
        s.copy_from_slice(&data[at..at + 32]);
        ss.push(s);
        at += 32;
    }

    let mut raw_vs = [0u8; 32];
    raw_vs.copy_from_slice(&data[at..at + 32]);

    Ok(TransmitCall {
        report,
        rs,
        ss,
        raw_vs,
    })
}

/// Encode a report body.
///
/// # Panics
///
/// Panics if the observer and observation lists differ in length; the lists
/// are parallel by construction on the producing side.
pub fn encode_report(report: &Report) -> Vec<u8> {
    assert_eq!(
        report.observers.len(),
        report.observations.len(),
        "observer/observation lists are parallel"
    );

    let count = report.observations.len();
    let mut out = Vec::with_capacity(33 + count + 16 * count);
    out.extend_from_slice(&report.raw_context);
    out.push(count as u8);
    out.extend_from_slice(&report.observers);
    for observation in &report.observations {
        out.extend_from_slice(&observation.to_be_bytes());
    }
    out
}

/// Decode a report body.
pub fn decode_report(data: &[u8]) -> Result<Report, ReportFormatError> {
    if data.len() < 33 {
        return Err(ReportFormatError::MalformedReport);
    }

    let mut raw_context = [0u8; 32];
    raw_context.copy_from_slice(&data[..32]);

    let count = usize::from(data[32]);
    if count == 0 {
        return Err(ReportFormatError::NoObservations);
    }
    if data.len() != 33 + count + 16 * count {
        return Err(ReportFormatError::MalformedReport);
    }

    let observers = data[33..33 + count].to_vec();

    let mut observations = Vec::with_capacity(count);
    let mut at = 33 + count;
    for _ in 0..count {
        let mut word = [0u8; 16];
        word.copy_from_slice(&data[at..at + 16]);
        observations.push(Answer::from_be_bytes(word));
        at += 16;
    }

    Ok(Report {
        raw_context,
        observers,
        observations,
    })
}
