//! Domain layer: entities, errors, and the consistency invariants the
//! assembler enforces over endorsement responses.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod visibility;

pub use entities::AssembledTransaction;
pub use errors::AssemblyError;
pub use invariants::{check_response_consistency, check_single_action};
pub use visibility::restrict_proposal_payload;
