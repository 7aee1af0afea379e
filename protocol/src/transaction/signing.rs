//! Transaction signing with seed-derived Ed25519 key pairs.
//!
//! The signed payload is the signing form from
//! [`Transaction::get_bytes(true)`](super::Transaction::get_bytes): the
//! previous block hash instead of its height, and the double SHA-256 of the
//! sender data instead of the data.

use super::record::Transaction;
use crate::identity::PrivateSeed;

/// Signs a transaction in place.
///
/// 1. Set `sender_identifier` to the seed's public identifier.
/// 2. Serialize the signing form.
/// 3. Store the detached Ed25519 signature over it.
///
/// Returns the transaction for chaining.
///
/// # Example
///
/// ```
/// use nyzo_protocol::identity::PrivateSeed;
/// use nyzo_protocol::transaction::{sign_transaction, Transaction};
///
/// let seed = PrivateSeed::new([3u8; 32]);
/// let mut tx = Transaction::new();
/// tx.set_amount(10);
///
/// sign_transaction(&mut tx, &seed);
/// assert!(tx.is_signed());
/// assert_eq!(tx.sender(), seed.public_identifier());
/// ```
pub fn sign_transaction<'a>(tx: &'a mut Transaction, seed: &PrivateSeed) -> &'a Transaction {
    let sender = seed.public_identifier();
    tx.apply_signature(&sender, |message| seed.sign(message));
    tracing::debug!(
        sender = %sender.to_hex(),
        amount = tx.amount(),
        "transaction signed"
    );
    tx
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
