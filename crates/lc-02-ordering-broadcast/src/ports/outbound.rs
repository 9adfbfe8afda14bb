//! # Outbound Ports
//!
//! Traits for the external capabilities this subsystem consumes: ordering
//! nodes, the envelope signer, and the per-operation timeout policy. None of
//! these are reimplemented here; concrete transports and identity providers
//! live outside the workspace and are injected at construction.

use crate::domain::{SignerError, TransportError};
use async_trait::async_trait;
use shared_types::{Block, SignedEnvelope};
use std::time::Duration;
use tokio::sync::mpsc;

/// The two remote operations an orderer exposes, for timeout lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Submit-and-forget envelope submission.
    Broadcast,
    /// Submit-and-stream-result block delivery.
    Deliver,
}

/// Per-operation timeout lookup, consulted before each per-node attempt.
pub trait TimeoutPolicy: Send + Sync {
    /// Timeout budget for one attempt of the given operation.
    fn timeout_for(&self, operation: OperationKind) -> Duration;
}

/// Envelope signing capability - outbound port.
///
/// One narrow operation, injected at construction. Key material never lives
/// in the broadcast layer.
pub trait EnvelopeSigner: Send + Sync {
    /// Sign encoded payload bytes, producing the envelope to transmit.
    fn sign(&self, payload_bytes: &[u8]) -> Result<SignedEnvelope, SignerError>;
}

/// The two receiver halves of one deliver exchange.
///
/// The orderer asynchronously produces block events on `blocks` or a terminal
/// error on `errors`; closure of `blocks` means no further values will arrive.
#[derive(Debug)]
pub struct DeliverStreams {
    /// Committed blocks, in commit order.
    pub blocks: mpsc::Receiver<Block>,
    /// Terminal stream errors.
    pub errors: mpsc::Receiver<TransportError>,
}

/// One addressable ordering node - outbound port.
#[async_trait]
pub trait OrdererConnection: Send + Sync {
    /// Address of this node, used in acknowledgments and diagnostics.
    fn address(&self) -> &str;

    /// Submit an envelope and wait for the node's acknowledgment.
    async fn broadcast(&self, envelope: &SignedEnvelope) -> Result<(), TransportError>;

    /// Open a bidirectional deliver exchange for the envelope.
    async fn deliver(&self, envelope: &SignedEnvelope) -> Result<DeliverStreams, TransportError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted outcome for a [`MockOrderer`].
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Accept every broadcast.
    Accept,
    /// Reject every attempt with the given reason.
    Reject(String),
    /// Never complete (exercises attempt timeouts).
    Hang,
    /// Serve a scripted deliver exchange: yield the blocks, then either
    /// close the block channel or emit a terminal error while the block
    /// channel stays open.
    Deliver {
        /// Blocks to yield, in order.
        blocks: Vec<Block>,
        /// Terminal error to emit after the blocks, if any.
        terminal_error: Option<String>,
    },
}

/// Mock orderer for testing.
#[derive(Debug)]
pub struct MockOrderer {
    /// Node address reported to the broadcaster.
    pub address: String,
    /// Scripted outcome.
    pub behavior: MockBehavior,
    attempts: AtomicUsize,
}

impl MockOrderer {
    /// Create a mock with the given address and behavior.
    pub fn new(address: impl Into<String>, behavior: MockBehavior) -> Self {
        Self {
            address: address.into(),
            behavior,
            attempts: AtomicUsize::new(0),
        }
    }

    /// Number of broadcast/deliver attempts this mock has received.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrdererConnection for MockOrderer {
    fn address(&self) -> &str {
        &self.address
    }

    async fn broadcast(&self, _envelope: &SignedEnvelope) -> Result<(), TransportError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Accept => Ok(()),
            MockBehavior::Reject(reason) => Err(TransportError::new(reason.clone())),
            MockBehavior::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            MockBehavior::Deliver { .. } => Err(TransportError::new(
                "mock scripted for deliver, not broadcast",
            )),
        }
    }

    async fn deliver(&self, _envelope: &SignedEnvelope) -> Result<DeliverStreams, TransportError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Reject(reason) => Err(TransportError::new(reason.clone())),
            MockBehavior::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            MockBehavior::Accept => Err(TransportError::new(
                "mock scripted for broadcast, not deliver",
            )),
            MockBehavior::Deliver {
                blocks,
                terminal_error,
            } => {
                let (blocks_tx, blocks_rx) = mpsc::channel(blocks.len() + 1);
                let (errors_tx, errors_rx) = mpsc::channel(1);

                for block in blocks {
                    let _ = blocks_tx.send(block.clone()).await;
                }
                match terminal_error {
                    Some(message) => {
                        let _ = errors_tx.send(TransportError::new(message.clone())).await;
                        // An erroring stream does not gracefully close its
                        // block channel; park the sender until the receiver
                        // side is dropped.
                        tokio::spawn(async move { blocks_tx.closed().await });
                    }
                    None => drop(blocks_tx),
                }
                drop(errors_tx);

                Ok(DeliverStreams {
                    blocks: blocks_rx,
                    errors: errors_rx,
                })
            }
        }
    }
}

/// Mock envelope signer for testing.
#[derive(Debug, Default)]
pub struct MockSigner {
    /// Should signing fail?
    pub should_fail: bool,
}

impl EnvelopeSigner for MockSigner {
    fn sign(&self, payload_bytes: &[u8]) -> Result<SignedEnvelope, SignerError> {
        if self.should_fail {
            return Err(SignerError::new("mock signing failure"));
        }
        Ok(SignedEnvelope {
            payload: payload_bytes.to_vec(),
            signature: vec![0xEE; 64],
        })
    }
}
