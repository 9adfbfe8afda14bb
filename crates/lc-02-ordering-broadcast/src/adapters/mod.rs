//! Adapters implementing the outbound ports.

pub mod signer;

pub use signer::Ed25519EnvelopeSigner;
