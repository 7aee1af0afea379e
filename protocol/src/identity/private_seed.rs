//! Private seeds: the `key_` payload.
//!
//! The seed is the whole private identity. The key pair and the public
//! identifier are derived from it when the seed is constructed.

use std::fmt;

use super::public_identifier::PublicIdentifier;
use crate::config::{SEED_LENGTH, SIGNATURE_LENGTH};
use crate::crypto::keys::NyzoKeypair;
use crate::encoding::{NyzoStringError, NyzoStringPayload, NyzoStringPrefix};

/// A 32-byte Ed25519 seed together with the key pair it derives.
///
/// Does not implement `Serialize`, and `Debug` shows only the public side.
///
/// # Examples
///
/// ```
/// use nyzo_protocol::identity::PrivateSeed;
///
/// let seed = PrivateSeed::new([5u8; 32]);
/// let signature = seed.sign(b"hello");
/// assert!(seed.public_identifier().verify(b"hello", &signature));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateSeed {
    keypair: NyzoKeypair,
}

impl PrivateSeed {
    /// Derive a key pair from 32 seed bytes.
    pub fn new(seed: [u8; SEED_LENGTH]) -> Self {
        Self {
            keypair: NyzoKeypair::from_seed(&seed),
        }
    }

    /// A fresh random seed from the OS RNG.
    pub fn generate() -> Self {
        Self {
            keypair: NyzoKeypair::generate(),
        }
    }

    /// Copy a seed out of a slice. Only the first 32 bytes are used.
    pub fn from_slice(seed: &[u8]) -> Result<Self, NyzoStringError> {
        let keypair =
            NyzoKeypair::from_seed_slice(seed).map_err(|_| NyzoStringError::TruncatedInput {
                needed: SEED_LENGTH,
                available: seed.len(),
            })?;
        Ok(Self { keypair })
    }

    /// The raw seed bytes.
    pub fn seed(&self) -> [u8; SEED_LENGTH] {
        self.keypair.seed()
    }

    /// The derived key pair.
    pub fn keypair(&self) -> &NyzoKeypair {
        &self.keypair
    }

    /// The identifier that signatures made with this seed verify against.
    pub fn public_identifier(&self) -> PublicIdentifier {
        PublicIdentifier::new(self.keypair.public_key())
    }

    /// Detached Ed25519 signature over `message`.
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.keypair.sign(message)
    }
}

impl NyzoStringPayload for PrivateSeed {
    const PREFIX: NyzoStringPrefix = NyzoStringPrefix::PrivateKey;

    fn to_content_bytes(&self) -> Vec<u8> {
        self.seed().to_vec()
    }

    fn from_content_bytes(content: &[u8]) -> Result<Self, NyzoStringError> {
        Self::from_slice(content)
    }
}

impl fmt::Debug for PrivateSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateSeed(pub={})", self.keypair.public_key_hex())
    }
}
