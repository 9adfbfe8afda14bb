//! # Core Wire Entities
//!
//! Defines the proposal, endorsement, transaction and envelope structures
//! exchanged between the client, endorsing peers, and the ordering service.
//!
//! Proposal-side inputs are caller-owned and read-only in this workspace.
//! Transaction-side structures are created fresh for each submission and
//! never reused.

use crate::codec;
use crate::errors::CodecError;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A 32-byte hash.
pub type Hash = [u8; 32];

/// Status code an endorsing peer returns for a successful simulation.
pub const RESPONSE_STATUS_SUCCESS: i32 = 200;

// =============================================================================
// PROPOSAL SIDE
// =============================================================================

/// Identity of the proposal creator plus a per-proposal nonce.
///
/// Carried verbatim into every [`TransactionAction`] so committers can tie
/// the action back to the submitting identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureHeader {
    /// Serialized creator identity (certificate bytes).
    pub creator: Vec<u8>,
    /// Random nonce binding this header to one proposal.
    pub nonce: Vec<u8>,
}

/// Visibility policy declared in the proposal's header extension.
///
/// Governs which portions of the proposal payload are disclosed in the final
/// transaction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PayloadVisibility {
    /// The full chaincode input is disclosed.
    #[default]
    Full,
    /// Only the SHA-256 digest of the chaincode input is disclosed.
    Hashed,
}

/// Chaincode-specific extension carried inside the channel header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderExtension {
    /// Name of the chaincode this proposal targets.
    pub chaincode_id: String,
    /// Disclosure policy for the proposal payload.
    pub visibility: PayloadVisibility,
}

/// Channel-scoped routing metadata for a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelHeader {
    /// Unique transaction identifier.
    pub tx_id: String,
    /// Channel the transaction targets.
    pub channel_id: String,
    /// Unix timestamp (seconds) when the proposal was created.
    pub timestamp: u64,
    /// Chaincode extension, including the visibility policy.
    pub extension: HeaderExtension,
}

impl ChannelHeader {
    /// Create a channel header with a freshly generated transaction id.
    pub fn new(channel_id: impl Into<String>, chaincode_id: impl Into<String>, timestamp: u64) -> Self {
        Self {
            tx_id: Uuid::new_v4().to_string(),
            channel_id: channel_id.into(),
            timestamp,
            extension: HeaderExtension {
                chaincode_id: chaincode_id.into(),
                visibility: PayloadVisibility::Full,
            },
        }
    }

    /// Override the payload visibility policy.
    pub fn with_visibility(mut self, visibility: PayloadVisibility) -> Self {
        self.extension.visibility = visibility;
        self
    }
}

/// Full proposal header: channel routing plus creator identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Channel-scoped metadata.
    pub channel: ChannelHeader,
    /// Creator identity and nonce.
    pub signature: SignatureHeader,
}

/// Payload of a chaincode proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalPayload {
    /// Serialized chaincode invocation input.
    pub input: Vec<u8>,
    /// Transient data passed to endorsers but never disclosed on-chain.
    pub transient: BTreeMap<String, Vec<u8>>,
}

/// A client's request to execute a transaction, as sent to endorsing peers.
///
/// Header and payload are kept as encoded bytes: the proposal is hashed and
/// signed over these exact bytes, so they must survive round trips untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Encoded [`Header`].
    pub header: Vec<u8>,
    /// Encoded [`ProposalPayload`].
    pub payload: Vec<u8>,
}

impl Proposal {
    /// Build a proposal from its structured parts.
    pub fn from_parts(header: &Header, payload: &ProposalPayload) -> Result<Self, CodecError> {
        Ok(Self {
            header: codec::encode("Header", header)?,
            payload: codec::encode("ProposalPayload", payload)?,
        })
    }

    /// Decode the proposal header.
    pub fn decode_header(&self) -> Result<Header, CodecError> {
        codec::decode("Header", &self.header)
    }

    /// Decode the proposal payload.
    pub fn decode_payload(&self) -> Result<ProposalPayload, CodecError> {
        codec::decode("ProposalPayload", &self.payload)
    }
}

// =============================================================================
// ENDORSEMENT SIDE
// =============================================================================

/// A peer's attestation that it executed the proposal and observed a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endorsement {
    /// Serialized identity of the endorsing peer.
    pub endorser: Vec<u8>,
    /// Signature over the response payload concatenated with the identity.
    pub signature: Vec<u8>,
}

/// The response an endorsing peer returns for a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalResponse {
    /// Peer status code; [`RESPONSE_STATUS_SUCCESS`] on success.
    pub status: i32,
    /// Human-readable status message.
    pub message: String,
    /// Serialized simulation result. Must be byte-identical across all
    /// endorsers of one proposal.
    pub payload: Vec<u8>,
    /// The peer's endorsement of that payload.
    pub endorsement: Endorsement,
}

/// The endorsed action embedded in a transaction: the agreed response payload
/// plus every collected endorsement, in collection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndorsedAction {
    /// The canonical response payload all endorsers agreed on.
    pub response_payload: Vec<u8>,
    /// Endorsements in the order their responses were supplied.
    pub endorsements: Vec<Endorsement>,
}

// =============================================================================
// TRANSACTION SIDE
// =============================================================================

/// The payload of one transaction action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeActionPayload {
    /// Proposal payload re-encoded under the declared visibility policy.
    pub proposal_payload: Vec<u8>,
    /// The endorsed action.
    pub action: EndorsedAction,
}

/// One action inside a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionAction {
    /// Encoded [`SignatureHeader`] copied from the originating proposal.
    pub header: Vec<u8>,
    /// Encoded [`ChaincodeActionPayload`].
    pub payload: Vec<u8>,
}

/// An assembled transaction ready for ordering.
///
/// This layer always produces exactly one action per transaction;
/// multi-action transactions are a generalization the wire format permits
/// but the client never emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The transaction's actions.
    pub actions: Vec<TransactionAction>,
}

// =============================================================================
// ENVELOPE SIDE
// =============================================================================

/// Generic envelope content: a header plus arbitrary data bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// The header under which the data is submitted.
    pub header: Header,
    /// Encoded content, typically a [`Transaction`].
    pub data: Vec<u8>,
}

/// A signed wrapper around an encoded payload, the unit actually transmitted
/// to the ordering service. Opaque after signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedEnvelope {
    /// Encoded [`Payload`].
    pub payload: Vec<u8>,
    /// Signature over those payload bytes.
    pub signature: Vec<u8>,
}

/// Acknowledgment that an orderer accepted a broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// Address of the orderer that acknowledged the submission.
    pub orderer: String,
}

/// One committed unit of the ledger, relayed upward opaquely.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position of the block in the chain.
    pub number: u64,
    /// Hash of the previous block.
    #[serde_as(as = "Bytes")]
    pub previous_hash: Hash,
    /// Serialized envelopes committed in this block.
    pub data: Vec<Vec<u8>>,
}
