//! # Transaction Assembly Service
//!
//! Orchestrates the assembly pipeline:
//! 1. Validate the endorsement set
//! 2. Decode the proposal header and payload
//! 3. Restrict the proposal payload to the declared visibility policy
//! 4. Build and encode the chaincode action payload
//! 5. Bind one transaction action to the proposal's signature header

use crate::domain::{
    check_response_consistency, restrict_proposal_payload, AssembledTransaction, AssemblyError,
};
use crate::ports::inbound::TransactionAssemblyApi;
use shared_types::{
    codec, ChaincodeActionPayload, EndorsedAction, Endorsement, Header, Payload, Proposal,
    ProposalResponse, Transaction, TransactionAction,
};
use tracing::debug;

/// Transaction Assembly Service.
///
/// Stateless; a single instance can serve any number of concurrent
/// submissions. Each call reads its inputs and produces a fresh chain of
/// derived objects, so nothing is cached or pooled across calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransactionAssemblyService;

impl TransactionAssemblyService {
    /// Create a new service.
    pub fn new() -> Self {
        Self
    }
}

impl TransactionAssemblyApi for TransactionAssemblyService {
    fn assemble_transaction(
        &self,
        proposal: &Proposal,
        responses: &[ProposalResponse],
    ) -> Result<AssembledTransaction, AssemblyError> {
        // 1. Validate responses: non-empty, all successful, byte-identical.
        let response_payload = check_response_consistency(responses)?;

        // 2. Decode the original header and payload.
        let header = proposal.decode_header()?;
        let proposal_payload = proposal.decode_payload()?;

        // 3. Collect endorsements preserving input order.
        let endorsements: Vec<Endorsement> = responses
            .iter()
            .map(|r| r.endorsement.clone())
            .collect();

        // 4. Re-encode the proposal payload under the declared visibility.
        let restricted =
            restrict_proposal_payload(&proposal_payload, header.channel.extension.visibility);
        let restricted_bytes = codec::encode("ProposalPayload", &restricted)?;

        // 5. Build and encode the chaincode action payload.
        let action_payload = ChaincodeActionPayload {
            proposal_payload: restricted_bytes,
            action: EndorsedAction {
                response_payload: response_payload.to_vec(),
                endorsements,
            },
        };
        let action_payload_bytes = codec::encode("ChaincodeActionPayload", &action_payload)?;

        // 6. One action, bound to the proposal's original signature header.
        let action = TransactionAction {
            header: codec::encode("SignatureHeader", &header.signature)?,
            payload: action_payload_bytes,
        };

        debug!(
            tx_id = %header.channel.tx_id,
            channel_id = %header.channel.channel_id,
            endorsements = responses.len(),
            "Assembled transaction"
        );

        Ok(AssembledTransaction {
            transaction: Transaction {
                actions: vec![action],
            },
            header,
        })
    }

    fn build_payload(&self, header: Header, data: Vec<u8>) -> Payload {
        Payload { header, data }
    }
}
