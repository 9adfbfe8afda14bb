//! # LC-02 Ordering-Service Broadcast
//!
//! Delivers assembled transactions to a fault-tolerant cluster of ordering
//! nodes, optionally waiting for the committed block.
//!
//! **Subsystem ID:** 2
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Wrap a submission payload in a signed envelope via the injected
//!   [`EnvelopeSigner`] capability.
//! - Try the ordering nodes sequentially in a fresh uniformly random order,
//!   each attempt bounded by the [`TimeoutPolicy`]; the first success
//!   short-circuits, and when every node fails the most recent failure wins.
//! - For block-returning submissions, race the orderer's block and error
//!   streams and relay the committed block upward.
//!
//! ## Fault Tolerance
//!
//! Randomized sequential failover distributes load across a cluster of
//! equivalent orderers and tolerates the unavailability of any strict subset,
//! at the cost of latency proportional to the number of failed attempts.
//! Fan-out within one submission is intentionally sequential: a payload must
//! never be handed to two orderers at once.
//!
//! ## Module Structure
//!
//! ```text
//! lc-02-ordering-broadcast/
//! ├── domain/          # BroadcastError, transport error types
//! ├── ports/           # OrderingBroadcastApi (inbound); OrdererConnection,
//! │                    # EnvelopeSigner, TimeoutPolicy + mocks (outbound)
//! ├── application/     # OrderingBroadcastService
//! ├── adapters/        # Ed25519 envelope signer
//! └── config.rs        # BroadcastConfig + config-backed TimeoutPolicy
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::Ed25519EnvelopeSigner;
pub use application::OrderingBroadcastService;
pub use config::{BroadcastConfig, ConfigTimeoutPolicy};
pub use domain::{BroadcastError, SignerError, TransportError};
pub use ports::{
    DeliverStreams, EnvelopeSigner, MockBehavior, MockOrderer, MockSigner, OperationKind,
    OrdererConnection, OrderingBroadcastApi, TimeoutPolicy,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
