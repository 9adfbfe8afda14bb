//! Error types for transaction assembly.

use shared_types::CodecError;
use thiserror::Error;

/// All errors that can occur while assembling a transaction.
///
/// Every variant is a data-validation failure: none of them is transient,
/// so the assembler never retries.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// The endorsement set was empty.
    #[error("At least one proposal response is required")]
    EmptyResponseSet,

    /// An endorser reported a non-success status. Status and message are
    /// surfaced verbatim; retrying requires re-endorsement, which is outside
    /// this layer.
    #[error("Proposal response was not successful, status {status}: {message}")]
    EndorsementRejected { status: i32, message: String },

    /// Endorsers disagree on the response payload. Usually indicates
    /// non-deterministic chaincode or a stale ledger view on one peer.
    #[error("Proposal response payloads are not the same (response {index} diverges)")]
    EndorsementMismatch { index: usize },

    /// The assembled transaction carries no actions.
    #[error("Transaction contains no actions")]
    EmptyTransaction,

    /// Malformed header or payload bytes.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
