//! # Cryptographic Primitives
//!
//! Thin, type-safe wrappers around audited implementations:
//!
//! - **Ed25519** (`ed25519-dalek`) for key derivation, signing and
//!   verification. Keys are always derived from a 32-byte seed.
//! - **SHA-256** (`sha2`), applied twice for checksums and for the
//!   sender-data commitment in transaction signatures.
//!
//! Nothing here is hand-rolled.

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{double_sha256, sha256, sha256_array};
pub use keys::{KeyError, NyzoKeypair};
pub use signatures::{open_signed_message, sign, sign_attached, verify, verify_raw};
