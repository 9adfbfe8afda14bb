//! Core entities produced by the assembler.

use shared_types::{Header, Transaction};

/// A transaction together with the decoded header of the proposal that
/// produced it.
///
/// The embedded header is a non-owning copy of only the fields the broadcast
/// layer needs later (rebuilding the submission [`shared_types::Payload`]
/// without re-parsing the proposal). It is never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledTransaction {
    /// The single-action transaction.
    pub transaction: Transaction,
    /// Decoded header of the originating proposal.
    pub header: Header,
}

impl AssembledTransaction {
    /// Transaction id assigned when the proposal was created.
    pub fn tx_id(&self) -> &str {
        &self.header.channel.tx_id
    }

    /// Channel the transaction targets.
    pub fn channel_id(&self) -> &str {
        &self.header.channel.channel_id
    }
}
