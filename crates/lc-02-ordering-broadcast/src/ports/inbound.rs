//! Inbound Ports (Driving Ports / API)

use crate::domain::BroadcastError;
use crate::ports::outbound::OrdererConnection;
use async_trait::async_trait;
use lc_01_tx_assembly::AssembledTransaction;
use shared_types::{Block, Payload, TransactionResponse};
use std::sync::Arc;

/// Primary Ordering Broadcast API.
///
/// The orderer set is long-lived, owned by the caller, and shared read-only
/// across submissions; every method takes it by slice and never mutates it.
#[async_trait]
pub trait OrderingBroadcastApi: Send + Sync {
    /// Submit an assembled transaction for ordering and return the
    /// acknowledging orderer's address.
    ///
    /// The submission payload is rebuilt from the header embedded at
    /// assembly time; the proposal itself is not consulted again.
    async fn broadcast_transaction(
        &self,
        transaction: &AssembledTransaction,
        orderers: &[Arc<dyn OrdererConnection>],
    ) -> Result<TransactionResponse, BroadcastError>;

    /// Sign the payload and broadcast it to some orderer, picking random
    /// endpoints until one accepts or all are exhausted.
    async fn broadcast_payload(
        &self,
        payload: &Payload,
        orderers: &[Arc<dyn OrdererConnection>],
    ) -> Result<TransactionResponse, BroadcastError>;

    /// Sign the payload, submit it over a deliver stream, and return the
    /// resulting committed block.
    async fn send_payload_for_block(
        &self,
        payload: &Payload,
        orderers: &[Arc<dyn OrdererConnection>],
    ) -> Result<Block, BroadcastError>;
}
