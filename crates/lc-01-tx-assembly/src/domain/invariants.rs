//! Consistency invariants over endorsement responses.
//!
//! INVARIANT-1: the response set is non-empty.
//! INVARIANT-2: every response carries the success status code.
//! INVARIANT-3: every response payload is byte-identical to the first.
//! INVARIANT-4: an assembled transaction carries exactly one action.

use crate::domain::errors::AssemblyError;
use shared_types::{ProposalResponse, Transaction, RESPONSE_STATUS_SUCCESS};

/// Validate a set of endorsement responses and return the canonical response
/// payload (the first response's payload, which all others must match).
pub fn check_response_consistency(
    responses: &[ProposalResponse],
) -> Result<&[u8], AssemblyError> {
    let canonical = responses
        .first()
        .map(|r| r.payload.as_slice())
        .ok_or(AssemblyError::EmptyResponseSet)?;

    for (index, response) in responses.iter().enumerate() {
        if response.status != RESPONSE_STATUS_SUCCESS {
            return Err(AssemblyError::EndorsementRejected {
                status: response.status,
                message: response.message.clone(),
            });
        }
        if response.payload != canonical {
            return Err(AssemblyError::EndorsementMismatch { index });
        }
    }

    Ok(canonical)
}

/// Validate that a transaction carries exactly one action.
pub fn check_single_action(transaction: &Transaction) -> Result<(), AssemblyError> {
    if transaction.actions.is_empty() {
        return Err(AssemblyError::EmptyTransaction);
    }
    Ok(())
}
