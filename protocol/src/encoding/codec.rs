//! # Nyzo String Codec
//!
//! Framing and unframing of typed byte payloads as checksummed strings.
//!
//! ## Expanded array
//!
//! ```text
//! +--------------+-------------+----------------+------------------+
//! | prefix (3 B) | length (1B) | content (0-255)| checksum (4-6 B) |
//! +--------------+-------------+----------------+------------------+
//! ```
//!
//! The checksum is the leading bytes of `double_sha256(prefix || length ||
//! content)`. Its length is the smallest value in 4..=6 that makes the whole
//! array a multiple of three bytes, so the array packs into a whole number
//! of four-character groups and the decoder can recover the checksum length
//! from the array length alone.
//!
//! ## Failure modes
//!
//! [`decode_strict`] reports every failure as a distinct
//! [`NyzoStringError`]. [`decode`] and [`decode_with_prefix`] fold the
//! recoverable ones (bad checksum length, checksum mismatch, wrong prefix)
//! into `Ok(None)` and keep the rest as hard errors.

use super::alphabet::{pack, unpack};
use super::cursor::ByteCursor;
use super::error::NyzoStringError;
use super::prefix::NyzoStringPrefix;
use crate::config::{
    CONTENT_LENGTH_INDEX, HEADER_LENGTH, MAX_CHECKSUM_LENGTH, MAX_CONTENT_LENGTH,
    MIN_CHECKSUM_LENGTH, PREFIX_LENGTH,
};
use crate::crypto::hash::double_sha256;

/// Legacy substitutions applied to decode input. Left side is what a user
/// might type or what a URL mangled; right side is the alphabet character.
const SUBSTITUTIONS: [(char, char); 5] = [('*', '-'), ('+', '.'), ('=', '~'), ('l', '1'), ('O', '0')];

/// Checksum length for content of `content_length` bytes. Always 4, 5 or 6.
pub fn checksum_length(content_length: usize) -> usize {
    MIN_CHECKSUM_LENGTH + (3 - (content_length + 2) % 3) % 3
}

/// Trim surrounding whitespace and apply the legacy character substitutions.
pub fn normalize(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| {
            SUBSTITUTIONS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}

/// Frame `content` under `prefix` and pack it into a Nyzo string.
///
/// # Errors
///
/// [`NyzoStringError::ContentTooLong`] when `content` exceeds 255 bytes.
///
/// # Example
///
/// ```
/// use nyzo_protocol::encoding::{encode, NyzoStringPrefix};
///
/// let text = encode(NyzoStringPrefix::PrefilledData, &[]).unwrap();
/// assert_eq!(text, "pre_0f8_sz1V");
/// ```
pub fn encode(prefix: NyzoStringPrefix, content: &[u8]) -> Result<String, NyzoStringError> {
    if content.len() > MAX_CONTENT_LENGTH {
        return Err(NyzoStringError::ContentTooLong {
            length: content.len(),
        });
    }

    let checksum_len = checksum_length(content.len());
    let mut expanded =
        ByteCursor::with_capacity_limit(HEADER_LENGTH + content.len() + checksum_len);
    expanded.put_bytes(&prefix.bytes())?;
    expanded.put_u8(content.len() as u8)?;
    expanded.put_bytes(content)?;

    let checksum = double_sha256(expanded.as_slice());
    expanded.put_bytes(&checksum[..checksum_len])?;

    let encoded = pack(expanded.as_slice());
    tracing::trace!(
        prefix = prefix.as_str(),
        content_len = content.len(),
        checksum_len,
        "encoded nyzo string"
    );
    Ok(encoded)
}

/// Decode a Nyzo string of any prefix, reporting every failure.
///
/// Returns the content bytes. The prefix is not checked against the known
/// set; use [`decode_with_prefix`] for typed decoding.
pub fn decode_strict(text: &str) -> Result<Vec<u8>, NyzoStringError> {
    let normalized = normalize(text);
    let expanded = unpack(&normalized)?;

    if expanded.len() < HEADER_LENGTH {
        return Err(NyzoStringError::TruncatedInput {
            needed: HEADER_LENGTH,
            available: expanded.len(),
        });
    }

    let content_len = expanded[CONTENT_LENGTH_INDEX] as usize;
    let checksum_len = expanded.len() as isize - content_len as isize - HEADER_LENGTH as isize;
    if !(MIN_CHECKSUM_LENGTH as isize..=MAX_CHECKSUM_LENGTH as isize).contains(&checksum_len) {
        return Err(NyzoStringError::InvalidChecksumLength {
            length: checksum_len,
        });
    }

    let (framed, embedded) = expanded.split_at(HEADER_LENGTH + content_len);
    let expected = double_sha256(framed);
    if embedded != &expected[..embedded.len()] {
        return Err(NyzoStringError::ChecksumMismatch);
    }

    Ok(framed[HEADER_LENGTH..].to_vec())
}

/// Decode a Nyzo string of any prefix.
///
/// `Ok(None)` means the string is not a well-formed Nyzo string (bad
/// checksum length or checksum). Unknown characters and input too short to
/// hold a header are hard errors.
pub fn decode(text: &str) -> Result<Option<Vec<u8>>, NyzoStringError> {
    soften(decode_strict(text))
}

/// Decode a Nyzo string that must carry `prefix`.
///
/// The prefix is compared against the first four characters of the
/// normalized input before anything is unpacked; a different prefix yields
/// `Ok(None)` without further work. Input shorter than four characters is a
/// hard [`NyzoStringError::TruncatedInput`].
pub fn decode_with_prefix(
    text: &str,
    prefix: NyzoStringPrefix,
) -> Result<Option<Vec<u8>>, NyzoStringError> {
    let normalized = normalize(text);
    let available = normalized.chars().count();
    if available < PREFIX_LENGTH {
        return Err(NyzoStringError::TruncatedInput {
            needed: PREFIX_LENGTH,
            available,
        });
    }

    let found: String = normalized.chars().take(PREFIX_LENGTH).collect();
    if found != prefix.as_str() {
        tracing::debug!(expected = prefix.as_str(), %found, "nyzo string prefix mismatch");
        return Ok(None);
    }

    decode(&normalized)
}

/// Identify the prefix of a string without validating the rest of it.
pub fn detect_prefix(text: &str) -> Option<NyzoStringPrefix> {
    let normalized = normalize(text);
    let head: String = normalized.chars().take(PREFIX_LENGTH).collect();
    head.parse()
        .ok()
        .filter(|prefix: &NyzoStringPrefix| prefix.as_str() == head)
}

fn soften<T>(result: Result<T, NyzoStringError>) -> Result<Option<T>, NyzoStringError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_recoverable() => {
            tracing::debug!(%err, "nyzo string rejected");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
