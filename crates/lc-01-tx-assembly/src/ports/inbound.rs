//! Inbound Ports (Driving Ports / API)

use crate::domain::{AssembledTransaction, AssemblyError};
use shared_types::{Header, Payload, Proposal, ProposalResponse};

/// Primary Transaction Assembly API.
///
/// Assembly is a pure, synchronous transform; no port here performs I/O.
pub trait TransactionAssemblyApi: Send + Sync {
    /// Merge an endorsed response set into a single-action transaction.
    ///
    /// Fails if the set is empty, any endorser reported non-success, the
    /// response payloads diverge, or the proposal bytes are malformed.
    /// Deterministic: the same inputs always produce byte-identical
    /// transaction payloads.
    fn assemble_transaction(
        &self,
        proposal: &Proposal,
        responses: &[ProposalResponse],
    ) -> Result<AssembledTransaction, AssemblyError>;

    /// Wrap a header and arbitrary data bytes into a submission payload.
    fn build_payload(&self, header: Header, data: Vec<u8>) -> Payload;
}
