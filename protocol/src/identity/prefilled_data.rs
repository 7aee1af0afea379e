//! Prefilled payment data: the `pre_` payload.
//!
//! A merchant hands out a `pre_` string so the payer's wallet can fill in
//! the receiver, the sender data and optionally the amount.
//!
//! ```text
//! receiver (32) | flag (1) | sender data (0-32) | [amount (8)]
//! ```
//!
//! The low seven bits of the flag byte hold the sender-data length; the
//! high bit says an amount follows.

use super::public_identifier::PublicIdentifier;
use crate::config::MAX_SENDER_DATA_LENGTH;
use crate::encoding::{ByteCursor, NyzoStringError, NyzoStringPayload, NyzoStringPrefix};

/// Flag bit marking a trailing 8-byte amount.
const AMOUNT_PRESENT: u8 = 0b1000_0000;

/// Mask for the sender-data length in the flag byte.
const SENDER_DATA_LENGTH_MASK: u8 = 0b0111_1111;

/// Receiver, sender data and optional amount for a payment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefilledData {
    receiver: PublicIdentifier,
    sender_data: Vec<u8>,
    amount: Option<i64>,
}

impl PrefilledData {
    /// Build prefilled data. Sender data past 32 bytes is dropped, and an
    /// amount of zero or less counts as unset.
    pub fn new(receiver: PublicIdentifier, sender_data: &[u8], amount: i64) -> Self {
        let keep = sender_data.len().min(MAX_SENDER_DATA_LENGTH);
        Self {
            receiver,
            sender_data: sender_data[..keep].to_vec(),
            amount: (amount > 0).then_some(amount),
        }
    }

    /// The account to pay.
    pub fn receiver(&self) -> &PublicIdentifier {
        &self.receiver
    }

    /// Sender data the payer should attach, at most 32 bytes.
    pub fn sender_data(&self) -> &[u8] {
        &self.sender_data
    }

    /// Requested amount in micronyzos, if one was set.
    ///
    /// [`new`](Self::new) only stores positive amounts, but a parsed payload
    /// keeps whatever amount its flag announced, so it re-encodes to the
    /// same bytes. Validate it before paying.
    pub fn amount(&self) -> Option<i64> {
        self.amount
    }

    fn write_content(&self, cursor: &mut ByteCursor) -> Result<(), NyzoStringError> {
        cursor.put_bytes(self.receiver.as_bytes())?;
        cursor.put_u8(self.flag_byte())?;
        cursor.put_bytes(&self.sender_data)?;
        if let Some(amount) = self.amount {
            cursor.put_i64(amount)?;
        }
        Ok(())
    }

    fn flag_byte(&self) -> u8 {
        let mut flag = self.sender_data.len() as u8 & SENDER_DATA_LENGTH_MASK;
        if self.amount.is_some() {
            flag |= AMOUNT_PRESENT;
        }
        flag
    }
}

impl NyzoStringPayload for PrefilledData {
    const PREFIX: NyzoStringPrefix = NyzoStringPrefix::PrefilledData;

    fn to_content_bytes(&self) -> Vec<u8> {
        let mut cursor = ByteCursor::new();
        self.write_content(&mut cursor)
            .expect("writes to a growable cursor never fail");
        cursor.into_inner()
    }

    fn from_content_bytes(content: &[u8]) -> Result<Self, NyzoStringError> {
        let mut cursor = ByteCursor::from_bytes(content);
        let receiver = PublicIdentifier::new(cursor.read_array()?);
        let flag = cursor.read_u8()?;
        let sender_data = cursor.read_bytes((flag & SENDER_DATA_LENGTH_MASK) as usize)?;
        let amount = if flag & AMOUNT_PRESENT != 0 {
            Some(cursor.read_i64()?)
        } else {
            None
        };

        let mut data = Self::new(receiver, &sender_data, 0);
        data.amount = amount;
        Ok(data)
    }
}
