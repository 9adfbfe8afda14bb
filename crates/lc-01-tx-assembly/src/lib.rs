//! # LC-01 Transaction Assembly
//!
//! Merges a set of endorsement responses into a single binding transaction.
//!
//! **Subsystem ID:** 1
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! After a proposal has been endorsed by peers, the client must produce the
//! canonical transaction to hand to the ordering service:
//! - Validate that every endorser reported success and observed the same
//!   simulation result (byte equality).
//! - Re-encode the proposal payload under the visibility policy declared in
//!   the proposal's header extension (transient data is never disclosed).
//! - Bind the endorsed action to the proposal's signature header in exactly
//!   one transaction action.
//!
//! Assembly is a pure transform: the same proposal and response set always
//! produce byte-identical transaction payloads, independent of anything the
//! broadcast layer does afterwards.
//!
//! ## Module Structure
//!
//! ```text
//! lc-01-tx-assembly/
//! ├── domain/          # AssembledTransaction, errors, consistency invariants
//! ├── ports/           # TransactionAssemblyApi (inbound)
//! └── application/     # TransactionAssemblyService
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod application;
pub mod domain;
pub mod ports;

// Re-exports
pub use application::TransactionAssemblyService;
pub use domain::{
    check_response_consistency, check_single_action, restrict_proposal_payload,
    AssembledTransaction, AssemblyError,
};
pub use ports::TransactionAssemblyApi;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
