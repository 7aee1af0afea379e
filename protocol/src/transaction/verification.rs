//! Transaction verification.
//!
//! Decoding a transaction never checks its signature. Wallets and tools
//! call [`verify_transaction`] when they need to know whether the sender
//! actually signed what they are looking at.
//!
//! The check needs the previous block hash, which the storage form does not
//! carry. A transaction parsed from bytes must have its anchor hash set
//! again before it can verify.

use thiserror::Error;

use super::record::Transaction;
use crate::crypto::keys::KeyError;
use crate::crypto::signatures::verify_raw;
use crate::encoding::NyzoStringError;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised while signing or verifying a transaction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    /// A field could not be read or copied.
    #[error(transparent)]
    Encoding(#[from] NyzoStringError),

    /// The signature field is all zeros.
    #[error("transaction is unsigned")]
    MissingSignature,

    /// The sender identifier is not a usable Ed25519 public key.
    #[error("invalid sender identifier {sender}")]
    InvalidSender { sender: String },

    /// The signature does not verify against the sender identifier.
    #[error("invalid signature: does not verify against sender {sender}")]
    InvalidSignature { sender: String },
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Verify that the transaction's signature was made by its sender over its
/// signing form.
///
/// # Errors
///
/// [`TransactionError::MissingSignature`] for an unsigned transaction,
/// [`TransactionError::InvalidSender`] when the sender bytes are not a
/// curve point, and [`TransactionError::InvalidSignature`] otherwise.
pub fn verify_transaction(tx: &Transaction) -> Result<(), TransactionError> {
    if !tx.is_signed() {
        return Err(TransactionError::MissingSignature);
    }

    let sender = tx.sender_identifier();
    verify_raw(sender, &tx.get_bytes(true), tx.signature()).map_err(|err| {
        let sender = hex::encode(sender);
        tracing::debug!(%sender, %err, "transaction signature rejected");
        match err {
            KeyError::InvalidPublicKey => TransactionError::InvalidSender { sender },
            _ => TransactionError::InvalidSignature { sender },
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
