//! # Hashing Utilities
//!
//! SHA-256 and its doubled form. Double SHA-256 is the only digest the
//! codec and the transaction serializer ever need:
//!
//! - Nyzo string checksums are a prefix of `double_sha256(header || content)`.
//! - The signing form of a transaction commits to `double_sha256(sender_data)`
//!   instead of the sender data itself, so the data can later be replaced by
//!   its hash without breaking the signature.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
///
/// Returns a 32-byte digest as a `Vec<u8>`.
///
/// # Example
///
/// ```
/// use nyzo_protocol::crypto::sha256;
///
/// let hash = sha256(b"nyzo");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Vec<u8> {
    sha256_array(data).to_vec()
}

/// Compute the SHA-256 hash and return a fixed-size array.
///
/// Same as `sha256()` but without the heap allocation. Use this in hot
/// paths where the array type propagates naturally.
pub fn sha256_array(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute the double-SHA-256 hash: `SHA-256(SHA-256(data))`.
///
/// # Example
///
/// ```
/// use nyzo_protocol::crypto::double_sha256;
///
/// let digest = double_sha256(b"raw transaction bytes");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256_array(&sha256_array(data))
}
