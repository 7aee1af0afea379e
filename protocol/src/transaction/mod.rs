//! # Transaction Module
//!
//! The Nyzo transaction record, its byte serializations, and the signing
//! contract around them.
//!
//! ## Architecture
//!
//! ```text
//! types.rs        — TransactionType (the leading type byte)
//! record.rs       — Transaction: fields, setters, signing and storage forms
//! signing.rs      — Signing with a seed-derived Ed25519 key pair
//! verification.rs — Signature verification against the sender identifier
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Fill** — Start from [`Transaction::new`] and set the fields.
//! 2. **Sign** — Call [`Transaction::sign`] with the sender's seed.
//! 3. **Encode** — Emit the storage form, or a `tx__` string via
//!    [`NyzoStringPayload`](crate::encoding::NyzoStringPayload).
//! 4. **Verify** — Receivers parse the bytes, restore the anchor hash and run
//!    [`verify_transaction`].
//!
//! Amounts are `i64` micronyzos and timestamps `i64` milliseconds since the
//! Unix epoch, both big-endian on the wire.

pub mod record;
pub mod signing;
pub mod types;
pub mod verification;

pub use record::Transaction;
pub use signing::sign_transaction;
pub use types::TransactionType;
pub use verification::{verify_transaction, TransactionError};
