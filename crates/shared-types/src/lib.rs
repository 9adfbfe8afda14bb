//! # Shared Types
//!
//! Wire entities and the deterministic codec for the ledger-client workspace.
//!
//! ## Clusters
//!
//! - **Proposal side**: `Proposal`, `ProposalPayload`, `Header`, `SignatureHeader`
//! - **Endorsement side**: `ProposalResponse`, `Endorsement`, `EndorsedAction`
//! - **Transaction side**: `ChaincodeActionPayload`, `TransactionAction`, `Transaction`
//! - **Envelope side**: `Payload`, `SignedEnvelope`, `TransactionResponse`, `Block`
//!
//! All wire bytes in this workspace are produced by the [`codec`] module, so
//! that re-encoding the same value always yields identical bytes. Transaction
//! assembly depends on that determinism.

pub mod codec;
pub mod entities;
pub mod errors;

pub use codec::{decode, encode};
pub use entities::{
    Block, ChaincodeActionPayload, ChannelHeader, EndorsedAction, Endorsement, Hash, Header,
    HeaderExtension, Payload, PayloadVisibility, Proposal, ProposalPayload, ProposalResponse,
    SignatureHeader, SignedEnvelope, Transaction, TransactionAction, TransactionResponse,
    RESPONSE_STATUS_SUCCESS,
};
pub use errors::CodecError;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
