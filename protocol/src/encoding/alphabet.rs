//! The 64-character alphabet and the 6-bit packer.
//!
//! ```text
//! 0123456789 abcdefghijkmnopqrstuvwxyz ABCDEFGHIJKLMNPQRSTUVWXYZ -.~_
//! ```
//!
//! Lowercase `l` and uppercase `O` are missing on purpose: they are too easy
//! to confuse with `1` and `0`, and the decoder maps them back to those
//! digits. Every remaining character is URL-safe.
//!
//! Packing walks the byte array six bits at a time, most significant bit
//! first, and emits one character per group. No padding character exists:
//! a trailing partial group is zero-filled on the right.

use super::error::NyzoStringError;

/// The ordered alphabet. Index = 6-bit value.
pub const ALPHABET: &[u8; 64] =
    b"0123456789abcdefghijkmnopqrstuvwxyzABCDEFGHIJKLMNPQRSTUVWXYZ-.~_";

/// Marker for ASCII bytes that are not part of the alphabet.
const INVALID: u8 = 0xff;

/// Reverse lookup: ASCII byte -> 6-bit value, or `INVALID`.
const VALUES: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Character for a 6-bit value. Only the low six bits are used.
pub fn char_for_value(value: u8) -> char {
    ALPHABET[(value & 0x3f) as usize] as char
}

/// 6-bit value for an alphabet character, or `None` for anything else.
pub fn value_for_char(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match VALUES[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Pack bytes into alphabet characters, six bits per character.
///
/// Produces `ceil(len * 8 / 6)` characters.
pub fn pack(bytes: &[u8]) -> String {
    let mut encoded = String::with_capacity((bytes.len() * 8 + 5) / 6);
    let mut index = 0;
    let mut bit_offset = 0u32;

    while index < bytes.len() {
        let left = bytes[index] as u32;
        let right = bytes.get(index + 1).copied().unwrap_or(0) as u32;
        let value = (((left << 8) | right) >> (10 - bit_offset)) & 0x3f;
        encoded.push(char_for_value(value as u8));

        if bit_offset == 0 {
            bit_offset = 6;
        } else {
            index += 1;
            bit_offset -= 2;
        }
    }

    encoded
}

/// Unpack alphabet characters back into bytes.
///
/// The output holds `(chars * 6 + 7) / 8` bytes. Every output byte is
/// assembled from two adjacent characters; when the input length is not a
/// multiple of four the final byte has no right-hand character and that
/// half reads as zero. Such input never carries a valid frame, so the
/// framing check rejects it. A character outside the alphabet is rejected
/// with [`NyzoStringError::UnknownCharacter`].
pub fn unpack(text: &str) -> Result<Vec<u8>, NyzoStringError> {
    let values = text
        .chars()
        .enumerate()
        .map(|(position, character)| {
            value_for_char(character).ok_or(NyzoStringError::UnknownCharacter {
                character,
                position,
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let length = (values.len() * 6 + 7) / 8;
    let mut bytes = Vec::with_capacity(length);

    for i in 0..length {
        // i * 8 / 6 < values.len() for every i below length.
        let left_index = i * 8 / 6;
        let left = values[left_index];
        let right = values.get(left_index + 1).copied().unwrap_or(0);
        let bit_offset = (i * 2) % 6;
        let combined = ((left as u32) << 6) | right as u32;
        bytes.push(((combined >> (4 - bit_offset)) & 0xff) as u8);
    }

    Ok(bytes)
}
