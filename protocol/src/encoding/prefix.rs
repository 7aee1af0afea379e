//! Type prefixes.
//!
//! Every Nyzo string starts with four alphabet characters naming what the
//! content is. Four characters of six bits each unpack to exactly three
//! bytes, which become bytes 0-2 of the expanded array.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::NyzoStringError;
use crate::config::{PREFIX_BYTE_LENGTH, PREFIX_LENGTH};

/// The known four-character type prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NyzoStringPrefix {
    /// `key_`: a 32-byte private seed.
    PrivateKey,
    /// `id__`: a 32-byte public identifier.
    PublicIdentifier,
    /// `pre_`: prefilled payment data.
    PrefilledData,
    /// `tx__`: a transaction in storage form.
    Transaction,
    /// `pay_`: reserved for micropay bundles.
    Micropay,
    /// `sig_`: reserved for standalone signatures.
    Signature,
}

impl NyzoStringPrefix {
    /// Every prefix, in a stable order.
    pub const ALL: [NyzoStringPrefix; 6] = [
        Self::PrivateKey,
        Self::PublicIdentifier,
        Self::PrefilledData,
        Self::Transaction,
        Self::Micropay,
        Self::Signature,
    ];

    /// The four characters that open a string of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrivateKey => "key_",
            Self::PublicIdentifier => "id__",
            Self::PrefilledData => "pre_",
            Self::Transaction => "tx__",
            Self::Micropay => "pay_",
            Self::Signature => "sig_",
        }
    }

    /// The three bytes the prefix characters unpack to.
    pub const fn bytes(self) -> [u8; PREFIX_BYTE_LENGTH] {
        match self {
            Self::PrivateKey => [0x50, 0xe8, 0x7f],
            Self::PublicIdentifier => [0x48, 0xdf, 0xff],
            Self::PrefilledData => [0x61, 0xa3, 0xbf],
            Self::Transaction => [0x72, 0x0f, 0xff],
            Self::Micropay => [0x60, 0xa8, 0x7f],
            Self::Signature => [0x6d, 0x24, 0x3f],
        }
    }

    /// Look up a prefix by its unpacked header bytes.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|prefix| bytes.get(..PREFIX_BYTE_LENGTH) == Some(&prefix.bytes()[..]))
    }

    /// Short name used on the command line (`key`, `id`, `pre`, ...).
    pub fn short_name(self) -> &'static str {
        self.as_str().trim_end_matches('_')
    }
}

impl fmt::Display for NyzoStringPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NyzoStringPrefix {
    type Err = NyzoStringError;

    /// Accepts the full prefix (`tx__`) or its short name (`tx`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|prefix| prefix.as_str() == s || prefix.short_name() == s)
            .ok_or_else(|| NyzoStringError::PrefixMismatch {
                expected: "one of key_, id__, pre_, tx__, pay_, sig_".to_string(),
                found: s.chars().take(PREFIX_LENGTH).collect(),
            })
    }
}
