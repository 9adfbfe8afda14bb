//! # Error Types
//!
//! Codec-level errors shared across subsystems.

use thiserror::Error;

/// Errors from encoding or decoding wire bytes.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Value could not be encoded.
    #[error("Encoding failed for {kind}: {reason}")]
    EncodeFailed { kind: &'static str, reason: String },

    /// Bytes could not be decoded into the expected value.
    #[error("Decoding failed for {kind}: {reason}")]
    DecodeFailed { kind: &'static str, reason: String },
}
