//! # Adversarial Flows
//!
//! Rejection paths driven through the full pipeline: forged and replayed
//! reports, threshold boundary cases, padded calldata. Every rejection must
//! leave the ledger and the hot summary untouched.

#[cfg(test)]
mod tests {
    use crate::fixtures::{build_calldata, sign_report, FeedFixture};
    use k256::ecdsa::SigningKey;
    use qf_02_report_verifier::{
        encode_report, encode_transmit_call, keccak256, ProtocolError, Report, ReportFormatError,
    };
    use qf_03_round_ledger::RoundStore;
    use qf_04_transmission::{AggregatorError, FeedReader};
    use shared_types::{CallerContext, ConfigDigest, EpochRound, MAX_ROUND_ID};

    #[tokio::test]
    async fn foreign_digest_gains_no_entries() {
        let fx = FeedFixture::with_config(4, 1).await;
        let forged = build_calldata(
            ConfigDigest([0xEE; 16]),
            1,
            0,
            &[100],
            &[&fx.signer_keys[0], &fx.signer_keys[1]],
        );

        let err = fx.transmit_as(0, &forged, 1_000).await.unwrap_err();
        assert!(matches!(
            err,
            AggregatorError::Protocol(ProtocolError::ConfigDigestMismatch { .. })
        ));
        assert!(fx.store.is_empty().unwrap());
        assert_eq!(fx.aggregator.latest_round(), 0);
    }

    #[tokio::test]
    async fn threshold_boundary_exact_fails_one_more_passes() {
        // 7 participants, threshold 2 (7 > 3·2 holds).
        let fx = FeedFixture::with_config(7, 2).await;

        // Exactly f signatures: insufficient.
        let at_threshold = fx.calldata(1, 0, &[100], &[0, 1]);
        let err = fx.transmit_as(0, &at_threshold, 1_000).await.unwrap_err();
        assert_eq!(
            err,
            AggregatorError::Protocol(ProtocolError::InsufficientSignatures {
                got: 2,
                threshold: 2
            })
        );
        assert!(fx.store.is_empty().unwrap());

        // f + 1 distinct signatures: accepted.
        let above = fx.calldata(1, 0, &[100], &[0, 1, 2]);
        fx.transmit_as(0, &above, 1_001).await.unwrap();
        assert_eq!(fx.store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn duplicate_signer_fails_regardless_of_total_count() {
        let fx = FeedFixture::with_config(7, 2).await;

        // Three signatures, but two resolve to signer slot 1.
        let duplicated = fx.calldata(1, 0, &[100], &[0, 1, 1]);
        let err = fx.transmit_as(0, &duplicated, 1_000).await.unwrap_err();
        assert_eq!(
            err,
            AggregatorError::Protocol(ProtocolError::DuplicateSigner { index: 1 })
        );
        assert!(fx.store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn stranger_signature_rejected() {
        let fx = FeedFixture::with_config(4, 1).await;
        let stranger = SigningKey::random(&mut rand::thread_rng());

        let forged = build_calldata(
            fx.digest(),
            1,
            0,
            &[100],
            &[&fx.signer_keys[0], &stranger],
        );
        let err = fx.transmit_as(0, &forged, 1_000).await.unwrap_err();
        assert!(matches!(
            err,
            AggregatorError::Protocol(ProtocolError::UnauthorizedSigner(_))
        ));
    }

    #[tokio::test]
    async fn unregistered_caller_cannot_transmit() {
        let fx = FeedFixture::with_config(4, 1).await;
        let calldata = fx.calldata(1, 0, &[100], &[0, 1]);

        let err = fx
            .aggregator
            .transmit(CallerContext::contract([0x99; 20]), &calldata, 1_000)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AggregatorError::Protocol(ProtocolError::UnauthorizedTransmitter([0x99; 20]))
        );

        // A registered signer is still not a transmitter.
        let err = fx
            .aggregator
            .transmit(CallerContext::contract(fx.signers[0]), &calldata, 1_000)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AggregatorError::Protocol(ProtocolError::UnauthorizedTransmitter(fx.signers[0]))
        );
    }

    #[tokio::test]
    async fn padded_or_truncated_calldata_rejected_before_checks() {
        let fx = FeedFixture::with_config(4, 1).await;
        let calldata = fx.calldata(1, 0, &[100], &[0, 1]);

        let mut padded = calldata.clone();
        padded.extend_from_slice(&[0u8; 7]);
        let err = fx.transmit_as(0, &padded, 1_000).await.unwrap_err();
        assert!(matches!(
            err,
            AggregatorError::Format(ReportFormatError::CalldataLengthMismatch { .. })
        ));

        let truncated = &calldata[..calldata.len() - 1];
        let err = fx.transmit_as(0, truncated, 1_000).await.unwrap_err();
        assert!(matches!(
            err,
            AggregatorError::Format(ReportFormatError::CalldataLengthMismatch { .. })
        ));

        assert!(fx.store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn mismatched_signature_arrays_rejected() {
        let fx = FeedFixture::with_config(4, 1).await;

        let report = Report {
            raw_context: Report::raw_context_for(fx.digest(), EpochRound::new(1, 0)),
            observers: vec![0],
            observations: vec![100],
        };
        let report_bytes = encode_report(&report);
        let report_hash = keccak256(&report_bytes);

        let (r0, s0, v0) = sign_report(&report_hash, &fx.signer_keys[0]);
        let (r1, s1, v1) = sign_report(&report_hash, &fx.signer_keys[1]);
        let mut raw_vs = [0u8; 32];
        raw_vs[0] = v0;
        raw_vs[1] = v1;

        // Two r components, one s component.
        let lopsided = encode_transmit_call(&report_bytes, &[r0, r1], &[s0], raw_vs);
        let err = fx.transmit_as(0, &lopsided, 1_000).await.unwrap_err();
        assert_eq!(
            err,
            AggregatorError::Protocol(ProtocolError::SignatureCountMismatch { rs: 2, ss: 1 })
        );
    }

    #[tokio::test]
    async fn strict_monotonicity_across_ordinal_shapes() {
        let fx = FeedFixture::with_config(4, 1).await;

        fx.transmit_as(0, &fx.calldata(1, 5, &[100], &[0, 1]), 1_000)
            .await
            .unwrap();

        // Equal, lower round, lower epoch with high round: all stale.
        for (epoch, round) in [(1u32, 5u8), (1, 4), (0, 255)] {
            let err = fx
                .transmit_as(0, &fx.calldata(epoch, round, &[1], &[0, 1]), 1_001)
                .await
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    AggregatorError::Protocol(ProtocolError::StaleReport { .. })
                ),
                "({epoch},{round}) should be stale"
            );
        }

        // The next round is live.
        fx.transmit_as(0, &fx.calldata(1, 6, &[200], &[2, 3]), 1_002)
            .await
            .unwrap();
        assert_eq!(fx.aggregator.latest_answer().unwrap(), 200);
    }

    #[tokio::test]
    async fn out_of_range_ids_read_zero_after_real_traffic() {
        let fx = FeedFixture::with_config(4, 1).await;
        fx.transmit_as(0, &fx.calldata(1, 0, &[100], &[0, 1]), 1_000)
            .await
            .unwrap();

        assert_eq!(fx.aggregator.get_answer(MAX_ROUND_ID + 1).unwrap(), 0);
        assert_eq!(fx.aggregator.get_timestamp(u64::MAX).unwrap(), 0);
        assert_eq!(
            fx.aggregator.get_round_data(MAX_ROUND_ID + 1).unwrap(),
            qf_03_round_ledger::RoundData::empty()
        );
    }
}
