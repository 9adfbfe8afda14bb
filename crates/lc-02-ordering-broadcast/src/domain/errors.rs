//! Error types for ordering-service broadcast.
//!
//! All failures are values returned up the call chain. Per-node failures are
//! swallowed by the failover loop and only the last one is reported once the
//! node set is exhausted; callers needing full per-attempt diagnostics read
//! the `warn!` records the loop emits instead.

use shared_types::CodecError;
use thiserror::Error;

/// Failure reported by a single orderer transport attempt.
///
/// Transport adapters reduce their connection, protocol, and status failures
/// to this one type; the broadcast layer does not interpret the message.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    /// Transport-level failure description.
    pub message: String,
}

impl TransportError {
    /// Create a transport error from any displayable reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure reported by the envelope signing capability.
#[derive(Debug, Clone, Error)]
#[error("{reason}")]
pub struct SignerError {
    /// Signer-level failure description.
    pub reason: String,
}

impl SignerError {
    /// Create a signer error from any displayable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// All errors that can occur while broadcasting to the ordering service.
#[derive(Debug, Error)]
pub enum BroadcastError {
    /// The ordering-node set was empty. Caller error, no network call made.
    #[error("Orderers not set")]
    NoOrderersConfigured,

    /// The transaction to submit carries no actions. Caller error.
    #[error("Transaction contains no actions")]
    EmptyTransaction,

    /// The envelope signer failed; propagated verbatim, never retried here.
    #[error("Signing payload failed: {reason}")]
    SigningFailed { reason: String },

    /// One orderer's attempt failed. The failover loop retries the next
    /// node in the randomized order.
    #[error("Calling orderer '{orderer}' failed: {reason}")]
    OrdererUnavailable { orderer: String, reason: String },

    /// One orderer's attempt exceeded its timeout budget. Treated exactly
    /// like any other per-node failure.
    #[error("Orderer '{orderer}' timed out after {elapsed_ms}ms")]
    AttemptTimeout { orderer: String, elapsed_ms: u64 },

    /// Every orderer in the randomized permutation failed. Carries the most
    /// recent failure; intermediate detail is dropped by design.
    #[error("All {attempts} orderers failed; last error: {last}")]
    AllOrderersExhausted {
        attempts: usize,
        #[source]
        last: Box<BroadcastError>,
    },

    /// Terminal error received on the deliver stream's error channel.
    #[error("Error from orderer '{orderer}' deliver stream: {message}")]
    DeliverStreamError { orderer: String, message: String },

    /// The deliver block channel closed before any block was observed.
    #[error("Deliver stream from orderer '{orderer}' closed without a block")]
    DeliverClosedWithoutBlock { orderer: String },

    /// Malformed payload or transaction bytes.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
