//! Sender-data input.
//!
//! Wallets accept sender data either as plain text or in the normalized
//! form, which spells out raw bytes:
//!
//! ```text
//! X(48656c6c6f__________________________________________________________)
//! ```
//!
//! That is 67 characters: `X(`, 64 characters holding up to 32 bytes of hex
//! followed by `_` padding, and `)`. Matching is case-insensitive.

use crate::config::MAX_SENDER_DATA_LENGTH;

/// Length of a normalized sender-data string.
const NORMALIZED_LENGTH: usize = 2 * MAX_SENDER_DATA_LENGTH + 3;

/// Turn user input into sender-data bytes.
///
/// A well-formed normalized string yields its hex bytes. Anything else is
/// treated as text and cut to its first 32 UTF-8 bytes.
///
/// ```
/// use nyzo_protocol::sender_data::parse_sender_data;
///
/// assert_eq!(parse_sender_data("coffee"), b"coffee".to_vec());
/// let normalized = format!("X(ff00{})", "_".repeat(60));
/// assert_eq!(parse_sender_data(&normalized), vec![0xff, 0x00]);
/// ```
pub fn parse_sender_data(text: &str) -> Vec<u8> {
    if let Some(bytes) = parse_normalized(text) {
        return bytes;
    }
    let bytes = text.as_bytes();
    bytes[..bytes.len().min(MAX_SENDER_DATA_LENGTH)].to_vec()
}

/// The normalized `X(...)` form of up to 32 bytes. Longer input is cut.
pub fn normalized_sender_data_string(data: &[u8]) -> String {
    let data = &data[..data.len().min(MAX_SENDER_DATA_LENGTH)];
    let hex = hex::encode(data);
    let padding = "_".repeat(2 * MAX_SENDER_DATA_LENGTH - hex.len());
    format!("X({hex}{padding})")
}

/// `Some(bytes)` when `text` is a well-formed normalized string.
pub fn parse_normalized(text: &str) -> Option<Vec<u8>> {
    if text.len() != NORMALIZED_LENGTH || !text.is_ascii() {
        return None;
    }
    let lowercase = text.to_ascii_lowercase();
    let inner = lowercase.strip_prefix("x(")?.strip_suffix(')')?;

    let hex_length = inner.find('_').unwrap_or(inner.len());
    if hex_length % 2 != 0 {
        return None;
    }
    let (digits, padding) = inner.split_at(hex_length);
    if !padding.bytes().all(|b| b == b'_') {
        return None;
    }
    hex::decode(digits).ok()
}
