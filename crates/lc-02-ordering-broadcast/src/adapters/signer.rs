//! Ed25519 envelope signer adapter.
//!
//! A thin implementation of the [`EnvelopeSigner`] port over `ed25519-dalek`.
//! The signing key is injected at construction; identity management and key
//! storage belong to the surrounding SDK, not to this layer.

use crate::domain::SignerError;
use crate::ports::outbound::EnvelopeSigner;
use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use shared_types::SignedEnvelope;

/// Envelope signer backed by an injected Ed25519 signing key.
pub struct Ed25519EnvelopeSigner {
    signing_key: SigningKey,
}

impl Ed25519EnvelopeSigner {
    /// Create a signer from an existing signing key.
    pub fn new(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    /// Create a signer from a 32-byte secret seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// Public key matching the injected signing key.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }
}

impl EnvelopeSigner for Ed25519EnvelopeSigner {
    fn sign(&self, payload_bytes: &[u8]) -> Result<SignedEnvelope, SignerError> {
        let signature = self.signing_key.sign(payload_bytes);
        Ok(SignedEnvelope {
            payload: payload_bytes.to_vec(),
            signature: signature.to_bytes().to_vec(),
        })
    }
}
