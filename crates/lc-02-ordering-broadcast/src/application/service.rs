//! # Ordering Broadcast Service
//!
//! Main service implementing [`OrderingBroadcastApi`].
//!
//! Orchestrates the submission pipeline:
//! 1. Encode and sign the payload via the injected [`EnvelopeSigner`]
//! 2. Compute a fresh uniformly random permutation of the orderer set
//! 3. Attempt the permutation sequentially, each attempt bounded by the
//!    [`TimeoutPolicy`]; first success short-circuits
//! 4. When every node fails, report the most recent failure

use crate::config::{BroadcastConfig, ConfigTimeoutPolicy};
use crate::domain::BroadcastError;
use crate::ports::inbound::OrderingBroadcastApi;
use crate::ports::outbound::{
    DeliverStreams, EnvelopeSigner, OperationKind, OrdererConnection, TimeoutPolicy,
};
use async_trait::async_trait;
use lc_01_tx_assembly::{check_single_action, AssembledTransaction};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use shared_types::{codec, Block, Payload, SignedEnvelope, TransactionResponse};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Ordering Broadcast Service.
///
/// Stateless across submissions: each call derives its own permutation and
/// its own chain of envelopes, so concurrent submissions are independent and
/// the shared orderer set needs no locking.
pub struct OrderingBroadcastService<S, P = ConfigTimeoutPolicy>
where
    S: EnvelopeSigner,
    P: TimeoutPolicy,
{
    config: BroadcastConfig,
    signer: Arc<S>,
    timeouts: P,
}

impl<S: EnvelopeSigner> OrderingBroadcastService<S> {
    /// Create a service whose timeouts come from the config itself.
    pub fn new(config: BroadcastConfig, signer: Arc<S>) -> Self {
        let timeouts = ConfigTimeoutPolicy::new(config.clone());
        Self {
            config,
            signer,
            timeouts,
        }
    }
}

impl<S, P> OrderingBroadcastService<S, P>
where
    S: EnvelopeSigner,
    P: TimeoutPolicy,
{
    /// Create a service with an externally supplied timeout policy.
    pub fn with_timeout_policy(config: BroadcastConfig, signer: Arc<S>, timeouts: P) -> Self {
        Self {
            config,
            signer,
            timeouts,
        }
    }

    /// Encode and sign a payload. Signing failures propagate verbatim.
    fn sign_payload(&self, payload: &Payload) -> Result<SignedEnvelope, BroadcastError> {
        let payload_bytes = codec::encode("Payload", payload)?;
        self.signer
            .sign(&payload_bytes)
            .map_err(|e| BroadcastError::SigningFailed { reason: e.reason })
    }

    /// Fresh uniformly random visit order over `len` orderers.
    ///
    /// No routing state survives between calls; a seeded config pins the
    /// permutation for deterministic tests.
    fn permuted_indices(&self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        let mut rng = match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        order.shuffle(&mut rng);
        order
    }

    /// One bounded broadcast attempt against one orderer.
    async fn attempt_broadcast(
        &self,
        envelope: &SignedEnvelope,
        orderer: &dyn OrdererConnection,
    ) -> Result<TransactionResponse, BroadcastError> {
        let budget = self.timeouts.timeout_for(OperationKind::Broadcast);
        debug!(orderer = orderer.address(), "Broadcasting envelope to orderer");

        match tokio::time::timeout(budget, orderer.broadcast(envelope)).await {
            Ok(Ok(())) => Ok(TransactionResponse {
                orderer: orderer.address().to_string(),
            }),
            Ok(Err(e)) => Err(BroadcastError::OrdererUnavailable {
                orderer: orderer.address().to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Err(BroadcastError::AttemptTimeout {
                orderer: orderer.address().to_string(),
                elapsed_ms: budget.as_millis() as u64,
            }),
        }
    }

    /// Send the envelope to some orderer, picking random endpoints until one
    /// accepts or all are exhausted.
    async fn broadcast_envelope(
        &self,
        envelope: &SignedEnvelope,
        orderers: &[Arc<dyn OrdererConnection>],
    ) -> Result<TransactionResponse, BroadcastError> {
        let mut last_error = None;
        for index in self.permuted_indices(orderers.len()) {
            let orderer = orderers[index].as_ref();
            match self.attempt_broadcast(envelope, orderer).await {
                Ok(response) => {
                    info!(orderer = %response.orderer, "Orderer accepted broadcast");
                    return Ok(response);
                }
                Err(e) => {
                    warn!(orderer = orderer.address(), error = %e, "Broadcast attempt failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(last) => Err(BroadcastError::AllOrderersExhausted {
                attempts: orderers.len(),
                last: Box::new(last),
            }),
            None => Err(BroadcastError::NoOrderersConfigured),
        }
    }

    /// One bounded deliver exchange with one orderer.
    ///
    /// Races the block and error channels; the block arm is serviced first
    /// when both are ready, so an in-flight block is stored before a terminal
    /// error is observed. On block-channel closure the last stored block is
    /// returned; a terminal error discards any stored block.
    async fn deliver_block(
        &self,
        envelope: &SignedEnvelope,
        orderer: &dyn OrdererConnection,
    ) -> Result<Block, BroadcastError> {
        let budget = self.timeouts.timeout_for(OperationKind::Deliver);
        let address = orderer.address().to_string();
        debug!(orderer = %address, "Opening deliver stream");

        let exchange = async {
            let mut streams: DeliverStreams =
                orderer
                    .deliver(envelope)
                    .await
                    .map_err(|e| BroadcastError::OrdererUnavailable {
                        orderer: address.clone(),
                        reason: e.to_string(),
                    })?;

            let mut latest: Option<Block> = None;
            let mut errors_open = true;
            loop {
                tokio::select! {
                    biased;

                    block = streams.blocks.recv() => match block {
                        Some(block) => {
                            debug!(orderer = %address, number = block.number, "Received block");
                            latest = Some(block);
                        }
                        // Channel closed: the connection was released; the
                        // most recently observed block is the result.
                        None => {
                            return latest.ok_or(BroadcastError::DeliverClosedWithoutBlock {
                                orderer: address.clone(),
                            });
                        }
                    },

                    error = streams.errors.recv(), if errors_open => match error {
                        Some(e) => {
                            return Err(BroadcastError::DeliverStreamError {
                                orderer: address.clone(),
                                message: e.to_string(),
                            });
                        }
                        None => errors_open = false,
                    },
                }
            }
        };

        match tokio::time::timeout(budget, exchange).await {
            Ok(result) => result,
            Err(_) => Err(BroadcastError::AttemptTimeout {
                orderer: address,
                elapsed_ms: budget.as_millis() as u64,
            }),
        }
    }
}

#[async_trait]
impl<S, P> OrderingBroadcastApi for OrderingBroadcastService<S, P>
where
    S: EnvelopeSigner + 'static,
    P: TimeoutPolicy + 'static,
{
    async fn broadcast_transaction(
        &self,
        transaction: &AssembledTransaction,
        orderers: &[Arc<dyn OrdererConnection>],
    ) -> Result<TransactionResponse, BroadcastError> {
        check_single_action(&transaction.transaction)
            .map_err(|_| BroadcastError::EmptyTransaction)?;

        let data = codec::encode("Transaction", &transaction.transaction)?;
        let payload = Payload {
            header: transaction.header.clone(),
            data,
        };

        self.broadcast_payload(&payload, orderers).await
    }

    async fn broadcast_payload(
        &self,
        payload: &Payload,
        orderers: &[Arc<dyn OrdererConnection>],
    ) -> Result<TransactionResponse, BroadcastError> {
        if orderers.is_empty() {
            return Err(BroadcastError::NoOrderersConfigured);
        }

        let envelope = self.sign_payload(payload)?;
        self.broadcast_envelope(&envelope, orderers).await
    }

    async fn send_payload_for_block(
        &self,
        payload: &Payload,
        orderers: &[Arc<dyn OrdererConnection>],
    ) -> Result<Block, BroadcastError> {
        if orderers.is_empty() {
            return Err(BroadcastError::NoOrderersConfigured);
        }

        let envelope = self.sign_payload(payload)?;

        let mut last_error = None;
        for index in self.permuted_indices(orderers.len()) {
            let orderer = orderers[index].as_ref();
            match self.deliver_block(&envelope, orderer).await {
                Ok(block) => {
                    info!(
                        orderer = orderer.address(),
                        number = block.number,
                        "Received committed block"
                    );
                    return Ok(block);
                }
                Err(e) => {
                    warn!(orderer = orderer.address(), error = %e, "Deliver attempt failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(last) => Err(BroadcastError::AllOrderersExhausted {
                attempts: orderers.len(),
                last: Box::new(last),
            }),
            None => Err(BroadcastError::NoOrderersConfigured),
        }
    }
}
