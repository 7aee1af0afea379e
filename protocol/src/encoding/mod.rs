//! # Nyzo String Encoding
//!
//! The text form of every artifact this crate handles: seeds, identifiers,
//! prefilled payment data and transactions all travel as
//! `prefix + packed(header || content || checksum)` strings.
//!
//! - [`alphabet`]: the 64-character alphabet and the 6-bit packer.
//! - [`cursor`]: the big-endian byte cursor every binary layout is built on.
//! - [`codec`]: framing, checksums, and the soft/hard decode split.
//! - [`prefix`]: the known type prefixes.
//!
//! Typed payloads implement [`NyzoStringPayload`] and get `to_nyzo_string`
//! / `from_nyzo_string` for free.

pub mod alphabet;
pub mod codec;
pub mod cursor;
pub mod error;
pub mod prefix;

pub use codec::{decode, decode_strict, decode_with_prefix, detect_prefix, encode, normalize};
pub use cursor::ByteCursor;
pub use error::NyzoStringError;
pub use prefix::NyzoStringPrefix;

/// A value with a Nyzo string form.
///
/// Implementors say which prefix they use and how to turn themselves into
/// content bytes and back. Framing, checksums and prefix checks are shared.
pub trait NyzoStringPayload: Sized {
    /// The prefix strings of this type start with.
    const PREFIX: NyzoStringPrefix;

    /// The content bytes embedded in the string.
    fn to_content_bytes(&self) -> Vec<u8>;

    /// Rebuild the value from decoded content bytes.
    ///
    /// Content too short for a fixed-width field is a
    /// [`NyzoStringError::TruncatedInput`].
    fn from_content_bytes(content: &[u8]) -> Result<Self, NyzoStringError>;

    /// Encode as a Nyzo string.
    fn to_nyzo_string(&self) -> Result<String, NyzoStringError> {
        encode(Self::PREFIX, &self.to_content_bytes())
    }

    /// Decode from a Nyzo string.
    ///
    /// `Ok(None)` when the string has a different prefix or fails its
    /// checksum; `Err` for unknown characters and truncated input.
    fn from_nyzo_string(text: &str) -> Result<Option<Self>, NyzoStringError> {
        decode_with_prefix(text, Self::PREFIX)?
            .map(|content| Self::from_content_bytes(&content))
            .transpose()
    }
}
