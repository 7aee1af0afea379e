//! Error types for the Nyzo string codec and byte cursor.
//!
//! The variants split into two families. Callers that only want to know
//! "is this a valid string of kind X" treat the recoverable ones as a plain
//! no, and everything else as a bug on the calling side.

use thiserror::Error;

/// Errors raised while framing, unframing, or parsing Nyzo string content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NyzoStringError {
    /// A character outside the 64-character alphabet was found.
    #[error("unknown character {character:?} at position {position}")]
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Character index in the normalized input string.
        position: usize,
    },

    /// The checksum length implied by the content-length byte is not 4-6.
    #[error("invalid checksum length {length}: must be between 4 and 6")]
    InvalidChecksumLength {
        /// The derived (possibly negative) checksum length.
        length: isize,
    },

    /// The embedded checksum does not match the recomputed one.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// The string carries a different type prefix than the one requested.
    #[error("prefix mismatch: expected {expected:?}, found {found:?}")]
    PrefixMismatch {
        /// The prefix the caller asked for.
        expected: String,
        /// The first four characters actually present.
        found: String,
    },

    /// A read or write ran past the end of the available bytes or characters.
    #[error("truncated input: needed {needed}, only {available} available")]
    TruncatedInput {
        /// Units (bytes or characters) the operation required.
        needed: usize,
        /// Units that were actually left.
        available: usize,
    },

    /// Content longer than the single length byte can describe.
    #[error("content too long: {length} bytes exceeds the 255-byte limit")]
    ContentTooLong {
        /// Length of the rejected content.
        length: usize,
    },
}

impl NyzoStringError {
    /// `true` for failures that mean "not a valid string of this kind".
    ///
    /// Decode-family operations turn these into `Ok(None)`; the rest
    /// propagate as hard errors.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidChecksumLength { .. } | Self::ChecksumMismatch | Self::PrefixMismatch { .. }
        )
    }
}
