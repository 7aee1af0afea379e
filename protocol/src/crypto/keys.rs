//! # Key Management
//!
//! Ed25519 key pairs derived from 32-byte seeds.
//!
//! In Nyzo the seed *is* the private identity: a `key_` string carries the
//! 32 seed bytes and nothing else, and the public identifier is re-derived
//! from it every time. This module wraps `ed25519-dalek` so the rest of the
//! crate only ever sees seeds, 32-byte identifiers and 64-byte signatures.
//!
//! Key bytes are never logged.

use ed25519_dalek::{Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

use crate::config::{IDENTIFIER_LENGTH, SEED_LENGTH, SIGNATURE_LENGTH};

/// Errors that can occur during key operations.
///
/// These are intentionally vague about *why* something failed. Leaking
/// details about key material through error messages is a classic footgun.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid seed: expected 32 bytes, got {0}")]
    InvalidSeedLength(usize),

    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,

    #[error("invalid signature: expected 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    #[error("signature verification failed")]
    VerificationFailed,
}

/// An Ed25519 key pair derived deterministically from a 32-byte seed.
///
/// `NyzoKeypair` intentionally does NOT implement `Serialize`. Exporting a
/// seed should be a deliberate act: call [`seed`](Self::seed) and encode it
/// as a `key_` string yourself.
///
/// # Examples
///
/// ```
/// use nyzo_protocol::crypto::keys::NyzoKeypair;
///
/// let kp = NyzoKeypair::from_seed(&[7u8; 32]);
/// let msg = b"send 1 nyzo";
/// let sig = kp.sign(msg);
/// assert!(kp.verify(msg, &sig));
/// ```
pub struct NyzoKeypair {
    signing_key: SigningKey,
}

impl NyzoKeypair {
    /// Generate a fresh key pair from the OS cryptographic RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Derive a key pair from a 32-byte seed (RFC 8032 secret key).
    pub fn from_seed(seed: &[u8; SEED_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Derive a key pair from a seed slice.
    ///
    /// Only the first 32 bytes are used; fewer than 32 is an error.
    pub fn from_seed_slice(seed: &[u8]) -> Result<Self, KeyError> {
        let seed: [u8; SEED_LENGTH] = seed
            .get(..SEED_LENGTH)
            .and_then(|s| s.try_into().ok())
            .ok_or(KeyError::InvalidSeedLength(seed.len()))?;
        Ok(Self::from_seed(&seed))
    }

    /// The 32-byte seed this key pair was derived from.
    ///
    /// **Handle with care.** This is the whole private identity.
    pub fn seed(&self) -> [u8; SEED_LENGTH] {
        self.signing_key.to_bytes()
    }

    /// The 32-byte public identifier (Ed25519 verifying key).
    pub fn public_key(&self) -> [u8; IDENTIFIER_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Produce a 64-byte detached signature. Ed25519 is deterministic, so the
    /// same (seed, message) pair always yields the same signature.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Verify a detached signature against this key pair's public key.
    pub fn verify(&self, message: &[u8], signature: &[u8; SIGNATURE_LENGTH]) -> bool {
        let signature = DalekSignature::from_bytes(signature);
        self.signing_key
            .verifying_key()
            .verify(message, &signature)
            .is_ok()
    }

    /// Public key as lowercase hex. Useful for display and logging.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key())
    }
}

impl Clone for NyzoKeypair {
    fn clone(&self) -> Self {
        Self::from_seed(&self.seed())
    }
}

impl fmt::Debug for NyzoKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print seed material, not even partially.
        write!(f, "NyzoKeypair(pub={})", self.public_key_hex())
    }
}

impl PartialEq for NyzoKeypair {
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for NyzoKeypair {}

/// Parse 32 bytes as an Ed25519 verifying key.
///
/// Not every 32-byte string is a point on the curve; those are rejected here
/// rather than failing later inside verification.
pub fn verifying_key(public_key: &[u8; IDENTIFIER_LENGTH]) -> Result<VerifyingKey, KeyError> {
    VerifyingKey::from_bytes(public_key).map_err(|_| KeyError::InvalidPublicKey)
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032, section 7.1, TEST 1.
    const RFC_SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const RFC_PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const RFC_SIGNATURE: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
                                 5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

    fn rfc_keypair() -> NyzoKeypair {
        NyzoKeypair::from_seed_slice(&hex::decode(RFC_SEED).unwrap()).unwrap()
    }

    #[test]
    fn rfc8032_public_key_derivation() {
        assert_eq!(rfc_keypair().public_key_hex(), RFC_PUBLIC);
    }

    #[test]
    fn rfc8032_empty_message_signature() {
        let sig = rfc_keypair().sign(b"");
        assert_eq!(hex::encode(sig), RFC_SIGNATURE);
    }

    #[test]
    fn seed_roundtrip() {
        let kp = NyzoKeypair::generate();
        let restored = NyzoKeypair::from_seed(&kp.seed());
        assert_eq!(kp, restored);
    }

    #[test]
    fn short_seed_rejected() {
        let err = NyzoKeypair::from_seed_slice(&[1u8; 31]).unwrap_err();
        assert_eq!(err, KeyError::InvalidSeedLength(31));
    }

    #[test]
    fn long_seed_uses_first_32_bytes() {
        let mut long = vec![9u8; 32];
        long.extend_from_slice(&[1, 2, 3]);
        let kp = NyzoKeypair::from_seed_slice(&long).unwrap();
        assert_eq!(kp, NyzoKeypair::from_seed(&[9u8; 32]));
    }

    #[test]
    fn tampered_message_fails_verification() {
        let kp = rfc_keypair();
        let sig = kp.sign(b"pay alice");
        assert!(kp.verify(b"pay alice", &sig));
        assert!(!kp.verify(b"pay mallory", &sig));
    }

    #[test]
    fn debug_does_not_leak_seed() {
        let kp = rfc_keypair();
        let debug = format!("{:?}", kp);
        assert!(!debug.contains(RFC_SEED));
        assert!(debug.contains(RFC_PUBLIC));
    }

    #[test]
    fn verifying_key_parses_rfc_identifier() {
        let bytes: [u8; 32] = hex::decode(RFC_PUBLIC).unwrap().try_into().unwrap();
        assert!(verifying_key(&bytes).is_ok());
    }
}
