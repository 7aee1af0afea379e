// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Nyzo Protocol — Client Library
//!
//! The client-side core of Nyzo: the checksummed string format every key,
//! identifier, payment request and transaction is shared in, and the
//! canonical byte layout of a transaction together with its Ed25519
//! signing contract.
//!
//! ## Architecture
//!
//! - **crypto** — SHA-256, double SHA-256, and Ed25519 over `ed25519-dalek`.
//! - **encoding** — The 64-character alphabet, the byte cursor, and the
//!   prefix/length/checksum framing of Nyzo strings.
//! - **identity** — `key_`, `id__` and `pre_` payloads plus wallet validators.
//! - **transaction** — The transaction record, its signing and storage
//!   forms, signing and verification.
//! - **amount** — Exact nyzo/micronyzo conversion and amount rules.
//! - **sender_data** — Plain-text and normalized `X(...)` sender data.
//! - **config** — Protocol constants.
//!
//! ## Quick start
//!
//! ```
//! use nyzo_protocol::encoding::NyzoStringPayload;
//! use nyzo_protocol::identity::{PrivateSeed, PublicIdentifier};
//! use nyzo_protocol::transaction::Transaction;
//!
//! let seed = PrivateSeed::generate();
//! let receiver = PublicIdentifier::new([9u8; 32]);
//!
//! let mut tx = Transaction::new();
//! tx.set_amount(1_000_000);
//! tx.set_recipient_identifier(receiver.as_bytes()).unwrap();
//! tx.sign(&seed.seed()).unwrap();
//!
//! let text = tx.to_nyzo_string().unwrap();
//! let decoded = Transaction::from_nyzo_string(&text).unwrap().unwrap();
//! assert_eq!(decoded.sender(), seed.public_identifier());
//! ```
//!
//! Nothing here performs I/O. Submitting a transaction to a client or
//! verifier is left to the caller.

pub mod amount;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod identity;
pub mod sender_data;
pub mod transaction;
