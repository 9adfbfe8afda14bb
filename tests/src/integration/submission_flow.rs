//! # Submission Flow Integration Tests
//!
//! Exercises the full client submission pipeline across both subsystems:
//!
//! 1. **Assembly (lc-01)**: endorsed responses -> single-action transaction
//! 2. **Broadcast (lc-02)**: transaction -> signed envelope -> randomized
//!    failover across orderers -> acknowledgment or committed block
//!
//! The orderer set is shared read-only across submissions; every flow here
//! builds its envelopes fresh, exactly as production callers do.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use ed25519_dalek::Verifier;

    use lc_01_tx_assembly::{TransactionAssemblyApi, TransactionAssemblyService};
    use lc_02_ordering_broadcast::{
        BroadcastConfig, BroadcastError, DeliverStreams, Ed25519EnvelopeSigner, MockBehavior,
        MockOrderer, OrdererConnection, OrderingBroadcastApi, OrderingBroadcastService,
        TransportError,
    };
    use shared_types::{
        codec, Block, ChaincodeActionPayload, ChannelHeader, Endorsement, Header, Payload,
        PayloadVisibility, Proposal, ProposalPayload, ProposalResponse, SignatureHeader,
        SignedEnvelope, Transaction,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn test_proposal() -> Proposal {
        let header = Header {
            channel: ChannelHeader::new("mychannel", "asset_cc", 1_700_000_000)
                .with_visibility(PayloadVisibility::Full),
            signature: SignatureHeader {
                creator: vec![0xAA; 16],
                nonce: vec![0xBB; 24],
            },
        };
        let payload = ProposalPayload {
            input: b"invoke:transfer:alice:bob:10".to_vec(),
            transient: Default::default(),
        };
        Proposal::from_parts(&header, &payload).unwrap()
    }

    fn endorsed_responses(count: u8) -> Vec<ProposalResponse> {
        (0..count)
            .map(|i| ProposalResponse {
                status: 200,
                message: String::new(),
                payload: b"simulation-result".to_vec(),
                endorsement: Endorsement {
                    endorser: vec![i],
                    signature: vec![i, i],
                },
            })
            .collect()
    }

    fn broadcast_service(
        seed: u64,
    ) -> OrderingBroadcastService<Ed25519EnvelopeSigner> {
        let config = BroadcastConfig {
            rng_seed: Some(seed),
            ..BroadcastConfig::for_testing()
        };
        OrderingBroadcastService::new(config, Arc::new(Ed25519EnvelopeSigner::from_seed([3u8; 32])))
    }

    fn orderer_set(mocks: Vec<Arc<MockOrderer>>) -> Vec<Arc<dyn OrdererConnection>> {
        mocks
            .into_iter()
            .map(|m| m as Arc<dyn OrdererConnection>)
            .collect()
    }

    /// Orderer that accepts broadcasts and captures the envelopes it receives.
    struct CapturingOrderer {
        address: String,
        envelopes: Mutex<Vec<SignedEnvelope>>,
    }

    impl CapturingOrderer {
        fn new(address: &str) -> Self {
            Self {
                address: address.to_string(),
                envelopes: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl OrdererConnection for CapturingOrderer {
        fn address(&self) -> &str {
            &self.address
        }

        async fn broadcast(&self, envelope: &SignedEnvelope) -> Result<(), TransportError> {
            self.envelopes.lock().unwrap().push(envelope.clone());
            Ok(())
        }

        async fn deliver(
            &self,
            _envelope: &SignedEnvelope,
        ) -> Result<DeliverStreams, TransportError> {
            Err(TransportError::new("deliver not scripted"))
        }
    }

    // =============================================================================
    // END-TO-END SUBMISSION
    // =============================================================================

    /// Assemble -> sign -> broadcast, then unwrap the captured envelope all
    /// the way back down to the endorsements.
    #[tokio::test]
    async fn test_full_submission_round_trip() {
        let assembler = TransactionAssemblyService::new();
        let assembled = assembler
            .assemble_transaction(&test_proposal(), &endorsed_responses(3))
            .unwrap();

        let orderer = Arc::new(CapturingOrderer::new("orderer0:7050"));
        let orderers: Vec<Arc<dyn OrdererConnection>> = vec![orderer.clone()];

        let service = broadcast_service(7);
        let response = service
            .broadcast_transaction(&assembled, &orderers)
            .await
            .unwrap();
        assert_eq!(response.orderer, "orderer0:7050");

        // The orderer received exactly one envelope.
        let envelopes = orderer.envelopes.lock().unwrap();
        assert_eq!(envelopes.len(), 1);
        let envelope = &envelopes[0];

        // Envelope signature verifies under the signer's public key.
        let signer = Ed25519EnvelopeSigner::from_seed([3u8; 32]);
        let sig_bytes: [u8; 64] = envelope.signature.as_slice().try_into().unwrap();
        let signature = ed25519_dalek::Signature::from_bytes(&sig_bytes);
        signer
            .verifying_key()
            .verify(&envelope.payload, &signature)
            .unwrap();

        // Envelope payload unwraps to the assembled transaction.
        let payload: Payload = codec::decode("Payload", &envelope.payload).unwrap();
        assert_eq!(payload.header, assembled.header);
        let transaction: Transaction = codec::decode("Transaction", &payload.data).unwrap();
        assert_eq!(transaction, assembled.transaction);

        // And the action payload still carries all three endorsements.
        let action_payload: ChaincodeActionPayload = codec::decode(
            "ChaincodeActionPayload",
            &transaction.actions[0].payload,
        )
        .unwrap();
        assert_eq!(action_payload.action.endorsements.len(), 3);
        assert_eq!(action_payload.action.response_payload, b"simulation-result");
    }

    /// Assembly is deterministic no matter what order the broadcast layer
    /// visits the orderers in.
    #[tokio::test]
    async fn test_assembly_is_idempotent_across_broadcast_orders() {
        let assembler = TransactionAssemblyService::new();
        let proposal = test_proposal();
        let responses = endorsed_responses(2);

        let first = assembler.assemble_transaction(&proposal, &responses).unwrap();
        let second = assembler.assemble_transaction(&proposal, &responses).unwrap();
        assert_eq!(
            codec::encode("Transaction", &first.transaction).unwrap(),
            codec::encode("Transaction", &second.transaction).unwrap()
        );

        // Different permutation seeds deliver the same transaction.
        for seed in [1u64, 2, 3] {
            let mock = Arc::new(MockOrderer::new("orderer0:7050", MockBehavior::Accept));
            let orderers = orderer_set(vec![mock]);
            let response = broadcast_service(seed)
                .broadcast_transaction(&first, &orderers)
                .await
                .unwrap();
            assert_eq!(response.orderer, "orderer0:7050");
        }
    }

    /// A rejecting endorser stops the flow before any orderer is contacted.
    #[tokio::test]
    async fn test_endorser_rejection_blocks_submission() {
        let assembler = TransactionAssemblyService::new();
        let mut responses = endorsed_responses(2);
        responses[1].status = 500;
        responses[1].message = "bad".to_string();

        let err = assembler
            .assemble_transaction(&test_proposal(), &responses)
            .unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    // =============================================================================
    // FAILOVER
    // =============================================================================

    /// Two orderers hang until their attempt budgets expire; the third
    /// acknowledges and its address comes back.
    #[tokio::test(start_paused = true)]
    async fn test_two_timeouts_then_success() {
        let assembler = TransactionAssemblyService::new();
        let assembled = assembler
            .assemble_transaction(&test_proposal(), &endorsed_responses(1))
            .unwrap();

        let mocks = vec![
            Arc::new(MockOrderer::new("orderer0:7050", MockBehavior::Hang)),
            Arc::new(MockOrderer::new("orderer1:7050", MockBehavior::Hang)),
            Arc::new(MockOrderer::new("orderer2:7050", MockBehavior::Accept)),
        ];
        let orderers = orderer_set(mocks.clone());

        let response = broadcast_service(11)
            .broadcast_transaction(&assembled, &orderers)
            .await
            .unwrap();

        assert_eq!(response.orderer, "orderer2:7050");
        assert_eq!(mocks[2].attempts(), 1);
    }

    /// When every orderer fails, the reported error wraps the most recent
    /// attempt, and the same seed reports the same orderer every time.
    #[tokio::test]
    async fn test_exhaustion_reports_deterministic_last_orderer() {
        let last_addresses: Vec<String> = {
            let mut collected = Vec::new();
            for _ in 0..2 {
                let mocks: Vec<Arc<MockOrderer>> = (0..3)
                    .map(|i| {
                        Arc::new(MockOrderer::new(
                            format!("orderer{i}:7050"),
                            MockBehavior::Reject("connection refused".to_string()),
                        ))
                    })
                    .collect();
                let orderers = orderer_set(mocks);

                let err = broadcast_service(5)
                    .broadcast_payload(
                        &Payload {
                            header: test_proposal().decode_header().unwrap(),
                            data: vec![1],
                        },
                        &orderers,
                    )
                    .await
                    .unwrap_err();

                match err {
                    BroadcastError::AllOrderersExhausted { attempts, last } => {
                        assert_eq!(attempts, 3);
                        match *last {
                            BroadcastError::OrdererUnavailable { orderer, .. } => {
                                collected.push(orderer)
                            }
                            other => panic!("unexpected last error: {other}"),
                        }
                    }
                    other => panic!("unexpected error: {other}"),
                }
            }
            collected
        };

        assert_eq!(last_addresses[0], last_addresses[1]);
    }

    // =============================================================================
    // BLOCK-RETURNING SUBMISSION
    // =============================================================================

    fn block(number: u64) -> Block {
        Block {
            number,
            previous_hash: [number as u8; 32],
            data: vec![],
        }
    }

    /// The deliver stream yields two blocks then closes: the most recently
    /// observed block is relayed upward.
    #[tokio::test]
    async fn test_block_returning_submission_returns_last_block() {
        let assembler = TransactionAssemblyService::new();
        let assembled = assembler
            .assemble_transaction(&test_proposal(), &endorsed_responses(1))
            .unwrap();

        let service = broadcast_service(13);
        let payload = Payload {
            header: assembled.header.clone(),
            data: codec::encode("Transaction", &assembled.transaction).unwrap(),
        };

        let mock = Arc::new(MockOrderer::new(
            "orderer0:7050",
            MockBehavior::Deliver {
                blocks: vec![block(41), block(42)],
                terminal_error: None,
            },
        ));
        let orderers = orderer_set(vec![mock]);

        let committed = service
            .send_payload_for_block(&payload, &orderers)
            .await
            .unwrap();
        assert_eq!(committed.number, 42);
    }

    /// A terminal stream error wins over a previously observed block.
    #[tokio::test]
    async fn test_block_returning_submission_surfaces_stream_error() {
        let service = broadcast_service(17);
        let payload = Payload {
            header: test_proposal().decode_header().unwrap(),
            data: vec![9],
        };

        let mock = Arc::new(MockOrderer::new(
            "orderer0:7050",
            MockBehavior::Deliver {
                blocks: vec![block(1)],
                terminal_error: Some("service unavailable".to_string()),
            },
        ));
        let orderers = orderer_set(vec![mock]);

        let err = service
            .send_payload_for_block(&payload, &orderers)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("service unavailable"));
    }
}
