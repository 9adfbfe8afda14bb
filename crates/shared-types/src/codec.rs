//! # Deterministic Codec
//!
//! Thin wrapper around `bincode` used for every wire structure in the
//! workspace. Bincode is deterministic for a fixed type, which is what makes
//! repeated transaction assembly byte-identical.

use crate::errors::CodecError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode a value to wire bytes.
pub fn encode<T: Serialize>(kind: &'static str, value: &T) -> Result<Vec<u8>, CodecError> {
    bincode::serialize(value).map_err(|e| CodecError::EncodeFailed {
        kind,
        reason: e.to_string(),
    })
}

/// Decode a value from wire bytes.
pub fn decode<T: DeserializeOwned>(kind: &'static str, bytes: &[u8]) -> Result<T, CodecError> {
    bincode::deserialize(bytes).map_err(|e| CodecError::DecodeFailed {
        kind,
        reason: e.to_string(),
    })
}
