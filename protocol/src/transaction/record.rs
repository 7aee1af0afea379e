//! The transaction record and its two byte forms.
//!
//! A [`Transaction`] starts out zeroed (type 2), is filled in through
//! setters, and is finalized by [`Transaction::sign`]. It has two canonical
//! serializations:
//!
//! ```text
//! storage form                      signing form
//! ------------                      ------------
//! type                 1            type                    1
//! timestamp            8            timestamp               8
//! amount               8            amount                  8
//! recipient           32            recipient              32
//! previous height      8            previous block hash    32
//! sender              32            sender                 32
//! data length          1            double_sha256(data)    32
//! sender data       0-32
//! signature           64
//! ```
//!
//! All integers are big-endian. The signature covers the signing form, so
//! it commits to a hash of the sender data rather than the data itself.

use chrono::{DateTime, TimeZone, Utc};

use super::signing::sign_transaction;
use super::types::TransactionType;
use super::verification::{verify_transaction, TransactionError};
use crate::config::{
    GENESIS_BLOCK_HASH, HASH_LENGTH, IDENTIFIER_LENGTH, MAX_SENDER_DATA_LENGTH,
    SIGNATURE_LENGTH, SUPPLEMENTAL_TRANSACTION_AMOUNT,
};
use crate::crypto::hash::double_sha256;
use crate::encoding::{ByteCursor, NyzoStringError, NyzoStringPayload, NyzoStringPrefix};
use crate::identity::{PrivateSeed, PublicIdentifier};

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A Nyzo transaction.
///
/// Every byte field is an owned copy; setters never alias caller buffers.
///
/// `previous_block_hash` and `previous_hash_height` are two views of the
/// same anchor block. The hash goes into the signing form and the height
/// into the storage form, so a transaction parsed from storage bytes has a
/// zero block hash.
///
/// # Example
///
/// ```
/// use nyzo_protocol::transaction::Transaction;
///
/// let mut tx = Transaction::new();
/// tx.set_amount(1_000_000);
/// tx.set_recipient_identifier(&[7u8; 32]).unwrap();
/// tx.set_sender_data(b"thanks");
/// tx.sign(&[1u8; 32]).unwrap();
///
/// let parsed = Transaction::from_bytes(&tx.get_bytes(false)).unwrap();
/// assert_eq!(parsed.signature(), tx.signature());
/// assert!(parsed.verify_signature());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    tx_type: TransactionType,
    timestamp: i64,
    amount: i64,
    recipient_identifier: [u8; IDENTIFIER_LENGTH],
    previous_hash_height: i64,
    previous_block_hash: [u8; HASH_LENGTH],
    sender_identifier: [u8; IDENTIFIER_LENGTH],
    sender_data: Vec<u8>,
    signature: [u8; SIGNATURE_LENGTH],
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            tx_type: TransactionType::Standard,
            timestamp: 0,
            amount: 0,
            recipient_identifier: [0u8; IDENTIFIER_LENGTH],
            previous_hash_height: 0,
            previous_block_hash: [0u8; HASH_LENGTH],
            sender_identifier: [0u8; IDENTIFIER_LENGTH],
            sender_data: Vec::new(),
            signature: [0u8; SIGNATURE_LENGTH],
        }
    }
}

impl Transaction {
    /// A zeroed standard transaction.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn tx_type(&self) -> TransactionType {
        self.tx_type
    }

    /// Milliseconds since the Unix epoch, UTC.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// The timestamp as a UTC date, or `None` if it is out of chrono's range.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }

    /// Amount in micronyzos.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn recipient_identifier(&self) -> &[u8; IDENTIFIER_LENGTH] {
        &self.recipient_identifier
    }

    pub fn previous_hash_height(&self) -> i64 {
        self.previous_hash_height
    }

    pub fn previous_block_hash(&self) -> &[u8; HASH_LENGTH] {
        &self.previous_block_hash
    }

    pub fn sender_identifier(&self) -> &[u8; IDENTIFIER_LENGTH] {
        &self.sender_identifier
    }

    pub fn sender_data(&self) -> &[u8] {
        &self.sender_data
    }

    pub fn signature(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.signature
    }

    /// `true` once a non-zero signature is present.
    pub fn is_signed(&self) -> bool {
        self.signature.iter().any(|&b| b != 0)
    }

    // -----------------------------------------------------------------------
    // Setters
    // -----------------------------------------------------------------------

    pub fn set_type(&mut self, tx_type: TransactionType) {
        self.tx_type = tx_type;
    }

    /// Set the timestamp in milliseconds since the Unix epoch.
    pub fn set_timestamp(&mut self, timestamp: i64) {
        self.timestamp = timestamp;
    }

    /// Set the timestamp from a UTC date. Sub-millisecond precision is dropped.
    pub fn set_timestamp_utc(&mut self, timestamp: DateTime<Utc>) {
        self.timestamp = timestamp.timestamp_millis();
    }

    /// Set the amount in micronyzos.
    pub fn set_amount(&mut self, amount: i64) {
        self.amount = amount;
    }

    /// Copy the first 32 bytes of `identifier` as the recipient.
    pub fn set_recipient_identifier(&mut self, identifier: &[u8]) -> Result<(), NyzoStringError> {
        self.recipient_identifier = copy_fixed(identifier)?;
        Ok(())
    }

    pub fn set_previous_hash_height(&mut self, height: i64) {
        self.previous_hash_height = height;
    }

    /// Copy the first 32 bytes of `hash` as the anchor block hash.
    pub fn set_previous_block_hash(&mut self, hash: &[u8]) -> Result<(), NyzoStringError> {
        self.previous_block_hash = copy_fixed(hash)?;
        Ok(())
    }

    /// Copy the first 32 bytes of `identifier` as the sender.
    ///
    /// [`sign`](Self::sign) overwrites this with the signing key's identifier.
    pub fn set_sender_identifier(&mut self, identifier: &[u8]) -> Result<(), NyzoStringError> {
        self.sender_identifier = copy_fixed(identifier)?;
        Ok(())
    }

    /// Copy up to 32 bytes of sender data. Longer input is cut short.
    pub fn set_sender_data(&mut self, data: &[u8]) {
        let keep = data.len().min(MAX_SENDER_DATA_LENGTH);
        self.sender_data = data[..keep].to_vec();
    }

    /// Copy the first 64 bytes of `signature`.
    pub fn set_signature(&mut self, signature: &[u8]) -> Result<(), NyzoStringError> {
        self.signature = copy_fixed(signature)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Serialize the transaction in signing form (`for_signing = true`) or
    /// storage form (`for_signing = false`).
    pub fn get_bytes(&self, for_signing: bool) -> Vec<u8> {
        let mut cursor = ByteCursor::new();
        self.write_form(&mut cursor, for_signing)
            .expect("writes to a growable cursor never fail");
        cursor.into_inner()
    }

    fn write_form(&self, cursor: &mut ByteCursor, for_signing: bool) -> Result<(), NyzoStringError> {
        cursor.put_u8(self.tx_type.as_byte())?;
        cursor.put_i64(self.timestamp)?;
        cursor.put_i64(self.amount)?;
        cursor.put_bytes(&self.recipient_identifier)?;

        if for_signing {
            cursor.put_bytes(&self.previous_block_hash)?;
        } else {
            cursor.put_i64(self.previous_hash_height)?;
        }

        cursor.put_bytes(&self.sender_identifier)?;

        if for_signing {
            cursor.put_bytes(&double_sha256(&self.sender_data))?;
        } else {
            // At most 32 bytes, so the length always fits.
            cursor.put_u8(self.sender_data.len() as u8)?;
            cursor.put_bytes(&self.sender_data)?;
            cursor.put_bytes(&self.signature)?;
        }
        Ok(())
    }

    /// Parse the storage form.
    ///
    /// Fields are read strictly in order; running out of bytes is a
    /// [`NyzoStringError::TruncatedInput`]. The signature is taken as-is and
    /// not verified.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NyzoStringError> {
        let mut cursor = ByteCursor::from_bytes(bytes);
        let mut tx = Self::new();

        tx.tx_type = TransactionType::from_byte(cursor.read_u8()?);
        tx.timestamp = cursor.read_i64()?;
        tx.amount = cursor.read_i64()?;
        tx.recipient_identifier = cursor.read_array()?;
        tx.previous_hash_height = cursor.read_i64()?;
        tx.sender_identifier = cursor.read_array()?;

        let data_length = cursor.read_u8()? as usize;
        let data = cursor.read_bytes(data_length)?;
        tx.set_sender_data(&data);

        tx.signature = cursor.read_array()?;

        if cursor.remaining() > 0 {
            tracing::trace!(trailing = cursor.remaining(), "ignoring bytes after transaction");
        }
        Ok(tx)
    }

    // -----------------------------------------------------------------------
    // Signing
    // -----------------------------------------------------------------------

    /// Sign with a 32-byte seed.
    ///
    /// Sets the sender identifier to the seed's public identifier, then signs
    /// the signing form. Call this after every other field is final.
    pub fn sign(&mut self, seed: &[u8]) -> Result<(), TransactionError> {
        let seed = PrivateSeed::from_slice(seed)?;
        sign_transaction(self, &seed);
        Ok(())
    }

    /// Build and sign the one-micronyzo supplemental transaction that
    /// accompanies a micropay.
    ///
    /// Recipient and sender data are copied from `reference`. The anchor is
    /// the genesis block (height 0), so the result verifies without chain
    /// lookups.
    pub fn supplemental_for(reference: &Transaction, seed: &PrivateSeed, timestamp: i64) -> Self {
        let mut tx = Self::new();
        tx.set_timestamp(timestamp);
        tx.set_amount(SUPPLEMENTAL_TRANSACTION_AMOUNT);
        tx.recipient_identifier = reference.recipient_identifier;
        tx.set_previous_hash_height(0);
        tx.previous_block_hash = GENESIS_BLOCK_HASH;
        tx.set_sender_data(&reference.sender_data);
        sign_transaction(&mut tx, seed);
        tx
    }

    /// `true` when the signature verifies against the sender identifier.
    pub fn verify_signature(&self) -> bool {
        verify_transaction(self).is_ok()
    }

    /// The sender as a typed identifier.
    pub fn sender(&self) -> PublicIdentifier {
        PublicIdentifier::new(self.sender_identifier)
    }

    /// The recipient as a typed identifier.
    pub fn recipient(&self) -> PublicIdentifier {
        PublicIdentifier::new(self.recipient_identifier)
    }

    pub(super) fn apply_signature(
        &mut self,
        sender: &PublicIdentifier,
        signer: impl FnOnce(&[u8]) -> [u8; SIGNATURE_LENGTH],
    ) {
        self.sender_identifier = *sender.as_bytes();
        self.signature = signer(&self.get_bytes(true));
    }
}

impl NyzoStringPayload for Transaction {
    const PREFIX: NyzoStringPrefix = NyzoStringPrefix::Transaction;

    fn to_content_bytes(&self) -> Vec<u8> {
        self.get_bytes(false)
    }

    fn from_content_bytes(content: &[u8]) -> Result<Self, NyzoStringError> {
        Self::from_bytes(content)
    }
}

fn copy_fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N], NyzoStringError> {
    let mut out = [0u8; N];
    let source = bytes.get(..N).ok_or(NyzoStringError::TruncatedInput {
        needed: N,
        available: bytes.len(),
    })?;
    out.copy_from_slice(source);
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MIN_TRANSACTION_STORAGE_LENGTH, TRANSACTION_TYPE_STANDARD};

    fn counting(len: usize) -> Vec<u8> {
        (1..=len).map(|i| i as u8).collect()
    }

    fn sample() -> Transaction {
        let mut tx = Transaction::new();
        tx.set_timestamp(1_700_000_000_123);
        tx.set_amount(2_500_000);
        tx.set_recipient_identifier(&[0x42; 32]).unwrap();
        tx.set_previous_hash_height(12_345);
        tx.set_previous_block_hash(&[0x24; 32]).unwrap();
        tx.set_sender_data(b"order 9");
        tx
    }

    #[test]
    fn defaults_are_zero_standard() {
        let tx = Transaction::new();
        assert_eq!(tx.tx_type().as_byte(), TRANSACTION_TYPE_STANDARD);
        assert_eq!(tx.timestamp(), 0);
        assert_eq!(tx.amount(), 0);
        assert_eq!(tx.recipient_identifier(), &[0u8; 32]);
        assert_eq!(tx.previous_hash_height(), 0);
        assert_eq!(tx.previous_block_hash(), &[0u8; 32]);
        assert_eq!(tx.sender_identifier(), &[0u8; 32]);
        assert!(tx.sender_data().is_empty());
        assert_eq!(tx.signature(), &[0u8; 64]);
        assert!(!tx.is_signed());
    }

    #[test]
    fn fixed_width_setters_take_leading_bytes() {
        let long = counting(128);
        let mut tx = Transaction::new();
        tx.set_recipient_identifier(&long).unwrap();
        tx.set_previous_block_hash(&long).unwrap();
        tx.set_sender_identifier(&long).unwrap();
        tx.set_signature(&long).unwrap();
        assert_eq!(&tx.recipient_identifier()[..], &long[..32]);
        assert_eq!(&tx.previous_block_hash()[..], &long[..32]);
        assert_eq!(&tx.sender_identifier()[..], &long[..32]);
        assert_eq!(&tx.signature()[..], &long[..64]);
    }

    #[test]
    fn fixed_width_setters_reject_short_input() {
        let mut tx = Transaction::new();
        assert_eq!(
            tx.set_recipient_identifier(&[1u8; 31]).unwrap_err(),
            NyzoStringError::TruncatedInput {
                needed: 32,
                available: 31
            }
        );
        assert!(tx.set_signature(&[1u8; 63]).is_err());
        // A failed set leaves the field untouched.
        assert_eq!(tx.recipient_identifier(), &[0u8; 32]);
    }

    #[test]
    fn setters_copy_instead_of_aliasing() {
        let mut source = vec![9u8; 32];
        let mut tx = Transaction::new();
        tx.set_recipient_identifier(&source).unwrap();
        tx.set_sender_data(&source);
        source[0] = 0;
        assert_eq!(tx.recipient_identifier()[0], 9);
        assert_eq!(tx.sender_data()[0], 9);
    }

    #[test]
    fn sender_data_truncation() {
        let mut tx = Transaction::new();
        tx.set_sender_data(&counting(64));
        assert_eq!(tx.sender_data(), &counting(64)[..32]);
        tx.set_sender_data(&counting(31));
        assert_eq!(tx.sender_data(), &counting(31)[..]);
    }

    #[test]
    fn storage_form_layout() {
        let tx = sample();
        let bytes = tx.get_bytes(false);
        assert_eq!(bytes.len(), MIN_TRANSACTION_STORAGE_LENGTH + 7);
        assert_eq!(bytes[0], 2);
        assert_eq!(&bytes[1..9], &1_700_000_000_123i64.to_be_bytes());
        assert_eq!(&bytes[9..17], &2_500_000i64.to_be_bytes());
        assert_eq!(&bytes[17..49], &[0x42u8; 32]);
        assert_eq!(&bytes[49..57], &12_345i64.to_be_bytes());
        assert_eq!(&bytes[57..89], &[0u8; 32]);
        assert_eq!(bytes[89], 7);
        assert_eq!(&bytes[90..97], b"order 9");
        assert_eq!(&bytes[97..], &[0u8; 64]);
    }

    #[test]
    fn signing_form_layout() {
        let tx = sample();
        let bytes = tx.get_bytes(true);
        assert_eq!(bytes.len(), 1 + 8 + 8 + 32 + 32 + 32 + 32);
        assert_eq!(&bytes[49..81], &[0x24u8; 32]);
        assert_eq!(&bytes[113..], &double_sha256(b"order 9"));
    }

    #[test]
    fn sign_sets_sender_and_verifies() {
        let mut tx = sample();
        let seed = [5u8; 32];
        tx.sign(&seed).unwrap();
        assert!(tx.is_signed());
        assert_eq!(tx.sender(), PrivateSeed::new(seed).public_identifier());
        assert!(tx.verify_signature());
    }

    #[test]
    fn supplemental_transaction_for_micropay() {
        let mut reference = sample();
        reference.sign(&[5u8; 32]).unwrap();
        let payer = PrivateSeed::new([8u8; 32]);

        let tx = Transaction::supplemental_for(&reference, &payer, 1_700_000_000_999);

        assert_eq!(tx.amount(), 1);
        assert_eq!(tx.timestamp(), 1_700_000_000_999);
        assert_eq!(tx.previous_hash_height(), 0);
        assert_eq!(tx.previous_block_hash(), &GENESIS_BLOCK_HASH);
        assert_eq!(tx.recipient_identifier(), reference.recipient_identifier());
        assert_eq!(tx.sender_data(), reference.sender_data());
        assert_eq!(tx.sender(), payer.public_identifier());
        assert!(tx.verify_signature());

        // Storage round trip drops the hash; genesis restores it.
        let mut parsed = Transaction::from_bytes(&tx.get_bytes(false)).unwrap();
        parsed.set_previous_block_hash(&GENESIS_BLOCK_HASH).unwrap();
        assert!(parsed.verify_signature());
    }

    #[test]
    fn sign_rejects_short_seed() {
        let mut tx = sample();
        assert!(tx.sign(&[1u8; 16]).is_err());
        assert!(!tx.is_signed());
    }

    #[test]
    fn signature_is_over_signing_form() {
        let mut tx = sample();
        let seed = PrivateSeed::new([5u8; 32]);
        tx.sign(&seed.seed()).unwrap();
        assert!(seed
            .public_identifier()
            .verify(&tx.get_bytes(true), tx.signature()));
    }

    #[test]
    fn storage_roundtrip_reproduces_fields() {
        let mut tx = sample();
        tx.sign(&[5u8; 32]).unwrap();
        let parsed = Transaction::from_bytes(&tx.get_bytes(false)).unwrap();

        assert_eq!(parsed.tx_type(), tx.tx_type());
        assert_eq!(parsed.timestamp(), tx.timestamp());
        assert_eq!(parsed.amount(), tx.amount());
        assert_eq!(parsed.recipient_identifier(), tx.recipient_identifier());
        assert_eq!(parsed.previous_hash_height(), tx.previous_hash_height());
        assert_eq!(parsed.sender_identifier(), tx.sender_identifier());
        assert_eq!(parsed.sender_data(), tx.sender_data());
        assert_eq!(parsed.signature(), tx.signature());
        // The block hash is not part of the storage form.
        assert_eq!(parsed.previous_block_hash(), &[0u8; 32]);
        assert_eq!(parsed.get_bytes(false), tx.get_bytes(false));
    }

    #[test]
    fn truncated_storage_bytes_rejected() {
        let mut tx = sample();
        tx.sign(&[5u8; 32]).unwrap();
        let bytes = tx.get_bytes(false);
        let err = Transaction::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
        assert_eq!(
            err,
            NyzoStringError::TruncatedInput {
                needed: 64,
                available: 63
            }
        );
        assert!(Transaction::from_bytes(&[]).is_err());
    }

    #[test]
    fn unknown_type_byte_roundtrips() {
        let mut tx = sample();
        tx.set_type(TransactionType::Other(1));
        let parsed = Transaction::from_bytes(&tx.get_bytes(false)).unwrap();
        assert_eq!(parsed.tx_type(), TransactionType::Other(1));
    }

    #[test]
    fn utc_timestamp_helpers() {
        let mut tx = Transaction::new();
        let when = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        tx.set_timestamp_utc(when);
        assert_eq!(tx.timestamp(), when.timestamp_millis());
        assert_eq!(tx.timestamp_utc(), Some(when));
    }

    #[test]
    fn nyzo_string_roundtrip() {
        let mut tx = sample();
        tx.sign(&[5u8; 32]).unwrap();
        let text = tx.to_nyzo_string().unwrap();
        assert!(text.starts_with("tx__"));
        let mut parsed = Transaction::from_nyzo_string(&text).unwrap().unwrap();
        assert_eq!(parsed.get_bytes(false), tx.get_bytes(false));

        // The anchor hash travels out of band; without it the signing form
        // differs and the signature does not check out.
        assert!(!parsed.verify_signature());
        parsed.set_previous_block_hash(&[0x24u8; 32]).unwrap();
        assert!(parsed.verify_signature());
    }
}
