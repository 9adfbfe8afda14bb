//! Domain layer: error taxonomy for broadcast and block delivery.

pub mod errors;

pub use errors::{BroadcastError, SignerError, TransportError};
