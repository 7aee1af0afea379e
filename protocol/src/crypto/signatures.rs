//! # Digital Signatures
//!
//! Ed25519 signing and verification in the two shapes Nyzo uses:
//!
//! - **Detached**: a 64-byte signature travels next to the message. This is
//!   how transactions are signed.
//! - **Attached**: `signature (64) || message`, the NaCl `sign`/`sign.open`
//!   format. Signed messages handed around as strings use this form.
//!
//! Verification is strict (`verify_strict`) so small-order keys and
//! malleable signatures never pass.

use ed25519_dalek::Signature as DalekSignature;

use super::keys::{verifying_key, KeyError, NyzoKeypair};
use crate::config::{IDENTIFIER_LENGTH, SIGNATURE_LENGTH};

/// Sign a message with a seed-derived key pair, returning the detached
/// 64-byte signature.
///
/// # Example
///
/// ```
/// use nyzo_protocol::crypto::{sign, verify, NyzoKeypair};
///
/// let keypair = NyzoKeypair::from_seed(&[1u8; 32]);
/// let signature = sign(&keypair, b"hello");
/// assert!(verify(&keypair.public_key(), b"hello", &signature));
/// ```
pub fn sign(keypair: &NyzoKeypair, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
    keypair.sign(message)
}

/// Verify a detached signature. Returns `false` for any failure, including
/// a public key that is not a valid curve point.
pub fn verify(
    public_key: &[u8; IDENTIFIER_LENGTH],
    message: &[u8],
    signature: &[u8; SIGNATURE_LENGTH],
) -> bool {
    verify_raw(public_key, message, signature).is_ok()
}

/// Verify a detached signature and report why it failed.
///
/// Useful when deserializing transactions where everything arrives as
/// byte slices rather than typed structs.
pub fn verify_raw(
    public_key: &[u8; IDENTIFIER_LENGTH],
    message: &[u8],
    signature: &[u8],
) -> Result<(), KeyError> {
    let signature: &[u8; SIGNATURE_LENGTH] = signature
        .try_into()
        .map_err(|_| KeyError::InvalidSignatureLength(signature.len()))?;
    let key = verifying_key(public_key)?;
    let signature = DalekSignature::from_bytes(signature);
    key.verify_strict(message, &signature)
        .map_err(|_| KeyError::VerificationFailed)
}

/// Produce an attached signed message: `signature || message`.
pub fn sign_attached(keypair: &NyzoKeypair, message: &[u8]) -> Vec<u8> {
    let mut signed = Vec::with_capacity(SIGNATURE_LENGTH + message.len());
    signed.extend_from_slice(&keypair.sign(message));
    signed.extend_from_slice(message);
    signed
}

/// Open an attached signed message.
///
/// Returns the embedded message when the leading 64-byte signature verifies
/// against `public_key`, and `None` otherwise (including input shorter than
/// a signature).
pub fn open_signed_message(signed: &[u8], public_key: &[u8; IDENTIFIER_LENGTH]) -> Option<Vec<u8>> {
    if signed.len() < SIGNATURE_LENGTH {
        return None;
    }
    let (signature, message) = signed.split_at(SIGNATURE_LENGTH);
    match verify_raw(public_key, message, signature) {
        Ok(()) => Some(message.to_vec()),
        Err(err) => {
            tracing::debug!(%err, "signed message rejected");
            None
        }
    }
}
