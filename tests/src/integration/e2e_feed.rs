//! # End-to-End Feed Flows
//!
//! The complete lifecycle across subsystems:
//!
//! ```text
//! [Governance] ──set_config──→ [Registry (1)]
//!                                   │ digest, participant table
//!                                   ↓
//! [Transmitter] ──transmit──→ [Verifier (2)] ──→ [Ledger (3)]
//!                                   │                 │
//!                                   └── hot summary ──┘
//!                                          │
//!                                          ↓
//!                              [Event Sink] → downstream indexers
//! ```

#[cfg(test)]
mod tests {
    use crate::fixtures::{build_calldata, FeedFixture, OWNER};
    use qf_02_report_verifier::ProtocolError;
    use qf_03_round_ledger::RoundStore;
    use qf_04_transmission::{AggregatorError, FeedEvent, FeedReader};
    use qf_05_access_gate::{AccessError, GatedReader};
    use shared_types::{CallerContext, EpochRound};

    #[tokio::test]
    async fn full_feed_lifecycle() {
        let fx = FeedFixture::with_config(4, 1).await;
        let base = EpochRound::new(1, 0).ordinal();

        // Epoch 1, round 0, two observations, two distinct signatures.
        let calldata = fx.calldata(1, 0, &[100, 200], &[0, 1]);
        let receipt = fx.transmit_as(0, &calldata, 1_000).await.unwrap();
        assert_eq!(receipt.round_id, base + 1);
        assert_eq!(receipt.answer, 200);

        // Contiguous ids, verbatim observations, one shared timestamp.
        assert_eq!(fx.aggregator.get_answer(base).unwrap(), 100);
        assert_eq!(fx.aggregator.get_answer(base + 1).unwrap(), 200);
        assert_eq!(fx.aggregator.get_timestamp(base).unwrap(), 1_000);
        assert_eq!(fx.aggregator.get_timestamp(base + 1).unwrap(), 1_000);
        assert_eq!(fx.aggregator.latest_round(), base + 1);
        assert_eq!(fx.store.len().unwrap(), 2);

        // Restricted summary, external callers only.
        let details = fx
            .aggregator
            .latest_transmission_details(CallerContext::external([0x01; 20]))
            .unwrap();
        assert_eq!(details.epoch, 1);
        assert_eq!(details.round, 1);
        assert_eq!(details.latest_answer, 200);
        assert_eq!(details.latest_timestamp, 1_000);

        // Reusing epoch 1, round 0 is a replay.
        let replay = fx.calldata(1, 0, &[300], &[2, 3]);
        let err = fx.transmit_as(1, &replay, 1_001).await.unwrap_err();
        assert!(matches!(
            err,
            AggregatorError::Protocol(ProtocolError::StaleReport { .. })
        ));

        // The two-slot batch advanced the ordinal to (1, 1), so a report at
        // epoch 1 round 1 is already consumed; round 2 is the next live one.
        let consumed = fx.calldata(1, 1, &[300], &[2, 3]);
        let err = fx.transmit_as(1, &consumed, 1_002).await.unwrap_err();
        assert!(matches!(
            err,
            AggregatorError::Protocol(ProtocolError::StaleReport { .. })
        ));

        let next = fx.calldata(1, 2, &[300], &[2, 3]);
        let receipt = fx.transmit_as(1, &next, 1_003).await.unwrap();
        assert_eq!(receipt.round_id, base + 2);
        assert_eq!(fx.aggregator.latest_answer().unwrap(), 300);

        // One rotation event, two transmission events, journaled in order.
        let events = fx.events.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], FeedEvent::ConfigRotated(_)));
        match &events[1] {
            FeedEvent::NewTransmission(payload) => {
                assert_eq!(payload.round_id, base + 1);
                assert_eq!(payload.answer, 200);
                assert_eq!(payload.transmitter, fx.transmitters[0]);
                assert_eq!(payload.observations, vec![100, 200]);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(fx.events.journal().len(), 3);
    }

    #[tokio::test]
    async fn multi_slot_batch_consumes_consecutive_ids() {
        let fx = FeedFixture::with_config(4, 1).await;
        let base = EpochRound::new(2, 10).ordinal();

        let calldata = fx.calldata(2, 10, &[10, -20, 30], &[1, 3]);
        let receipt = fx.transmit_as(2, &calldata, 5_000).await.unwrap();

        assert_eq!(receipt.round_id, base + 2);
        for (i, expected) in [10i128, -20, 30].iter().enumerate() {
            let data = fx.aggregator.get_round_data(base + i as u64).unwrap();
            assert_eq!(data.answer, *expected);
            assert_eq!(data.started_at, 5_000);
            assert_eq!(data.updated_at, 5_000);
            assert_eq!(data.answered_in_round, base + i as u64);
        }
        assert_eq!(fx.aggregator.latest_round(), base + 2);
    }

    #[tokio::test]
    async fn rotation_supersedes_old_digest() {
        let fx = FeedFixture::with_config(4, 1).await;
        let old_digest = fx.digest();

        let calldata = fx.calldata(1, 0, &[100], &[0, 1]);
        fx.transmit_as(0, &calldata, 1_000).await.unwrap();

        // Rotate to the same participant lists; a new generation regardless.
        fx.aggregator
            .set_config(
                CallerContext::external(OWNER),
                qf_01_config_registry::ConfigProposal {
                    signers: fx.signers.clone(),
                    transmitters: fx.transmitters.clone(),
                    threshold: 1,
                    config_version: 2,
                    payload: Vec::new(),
                },
                20,
            )
            .await
            .unwrap();
        let new_digest = fx.digest();
        assert_ne!(old_digest, new_digest);
        assert_eq!(fx.aggregator.latest_config_details().config_count, 2);

        // A report bound to the superseded digest is rejected outright.
        let stale_gen = build_calldata(old_digest, 1, 1, &[300], &[&fx.signer_keys[0], &fx.signer_keys[1]]);
        let err = fx.transmit_as(0, &stale_gen, 2_000).await.unwrap_err();
        assert!(matches!(
            err,
            AggregatorError::Protocol(ProtocolError::ConfigDigestMismatch { .. })
        ));

        // The ordinal reset with the rotation: epoch 1 round 0 is live again
        // under the new digest, and its round slot is rewritten.
        let fresh = fx.calldata(1, 0, &[500], &[2, 3]);
        let receipt = fx.transmit_as(3, &fresh, 2_001).await.unwrap();
        assert_eq!(receipt.round_id, EpochRound::new(1, 0).ordinal());
        assert_eq!(
            fx.aggregator
                .get_answer(EpochRound::new(1, 0).ordinal())
                .unwrap(),
            500
        );
    }

    #[tokio::test]
    async fn config_surface_reflects_live_generation() {
        let fx = FeedFixture::with_config(5, 1).await;

        let details = fx.aggregator.latest_config_details();
        assert_eq!(details.config_count, 1);
        assert_eq!(details.block_height, 10);

        assert_eq!(fx.aggregator.transmitters(), fx.transmitters);
    }

    #[tokio::test]
    async fn gated_reads_over_live_pipeline() {
        let admin = [0xAD; 20];
        let consumer = [0xC0; 20];

        let fx = FeedFixture::with_config(4, 1).await;
        let calldata = fx.calldata(1, 0, &[100, 200], &[0, 1]);
        fx.transmit_as(0, &calldata, 1_000).await.unwrap();

        let gate = GatedReader::new(fx.aggregator, admin);

        // End-user-originated reads pass the gate untouched.
        let external = CallerContext::external(consumer);
        assert_eq!(gate.latest_answer(external).unwrap(), 200);
        assert_eq!(
            gate.latest_round_data(external).unwrap(),
            gate.inner().latest_round_data().unwrap()
        );

        // Contract callers need a grant.
        let contract = CallerContext::contract(consumer);
        assert_eq!(
            gate.latest_answer(contract).unwrap_err(),
            AccessError::NoAccess(consumer)
        );
        gate.add_access(admin, consumer).unwrap();
        assert_eq!(gate.latest_answer(contract).unwrap(), 200);
        assert_eq!(gate.get_answer(contract, 256).unwrap(), 100);

        // The gate never alters verifier semantics: transmissions still run
        // against the undecorated pipeline underneath.
        let next = build_calldata(
            gate.inner().latest_config_details().config_digest,
            1,
            5,
            &[700],
            &[&fx.signer_keys[0], &fx.signer_keys[2]],
        );
        gate.inner()
            .transmit(CallerContext::contract(fx.transmitters[1]), &next, 1_500)
            .await
            .unwrap();
        assert_eq!(gate.latest_answer(contract).unwrap(), 700);
    }
}
