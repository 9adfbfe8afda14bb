//! Payload visibility filtering.
//!
//! The proposal payload that goes into a transaction is NOT the original
//! proposal bytes: it is re-encoded under the visibility policy declared in
//! the proposal's header extension. The transient map is dropped in every
//! mode; it exists only for endorsers and must never reach the ledger.

use sha2::{Digest, Sha256};
use shared_types::{PayloadVisibility, ProposalPayload};

/// Re-derive the proposal payload to be disclosed in the transaction record.
pub fn restrict_proposal_payload(
    payload: &ProposalPayload,
    visibility: PayloadVisibility,
) -> ProposalPayload {
    let input = match visibility {
        PayloadVisibility::Full => payload.input.clone(),
        PayloadVisibility::Hashed => Sha256::digest(&payload.input).to_vec(),
    };
    ProposalPayload {
        input,
        transient: Default::default(),
    }
}
