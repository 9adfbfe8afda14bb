//! Configuration for the ordering-broadcast subsystem.

use crate::ports::outbound::{OperationKind, TimeoutPolicy};
use std::time::Duration;

/// Broadcast configuration.
#[derive(Clone, Debug)]
pub struct BroadcastConfig {
    /// Timeout budget for one broadcast attempt against one orderer.
    pub broadcast_timeout_ms: u64,
    /// Timeout budget for one whole deliver exchange with one orderer.
    pub deliver_timeout_ms: u64,
    /// Seed for the failover permutation. `None` draws from OS entropy;
    /// tests inject a seed for a deterministic attempt order.
    pub rng_seed: Option<u64>,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            broadcast_timeout_ms: 5_000,
            deliver_timeout_ms: 60_000,
            rng_seed: None,
        }
    }
}

impl BroadcastConfig {
    /// Short timeouts and a fixed permutation seed for tests.
    pub fn for_testing() -> Self {
        Self {
            broadcast_timeout_ms: 250,
            deliver_timeout_ms: 500,
            rng_seed: Some(42),
        }
    }
}

/// Timeout policy backed by [`BroadcastConfig`].
#[derive(Clone, Debug)]
pub struct ConfigTimeoutPolicy {
    config: BroadcastConfig,
}

impl ConfigTimeoutPolicy {
    /// Create a policy reading from the given config.
    pub fn new(config: BroadcastConfig) -> Self {
        Self { config }
    }
}

impl TimeoutPolicy for ConfigTimeoutPolicy {
    fn timeout_for(&self, operation: OperationKind) -> Duration {
        match operation {
            OperationKind::Broadcast => Duration::from_millis(self.config.broadcast_timeout_ms),
            OperationKind::Deliver => Duration::from_millis(self.config.deliver_timeout_ms),
        }
    }
}
