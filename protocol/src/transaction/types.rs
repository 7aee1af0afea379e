//! Core type definitions for Nyzo transactions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::TRANSACTION_TYPE_STANDARD;

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// The leading type byte of a transaction.
///
/// Only standard transfers (type 2) are built by this crate. Other values
/// are kept as-is when parsed, so a transaction read off the wire
/// serializes back to the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// A plain transfer from sender to recipient.
    Standard,
    /// Any other type byte.
    Other(u8),
}

impl TransactionType {
    /// Interpret a raw type byte.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            TRANSACTION_TYPE_STANDARD => Self::Standard,
            other => Self::Other(other),
        }
    }

    /// The raw type byte.
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Standard => TRANSACTION_TYPE_STANDARD,
            Self::Other(byte) => byte,
        }
    }

    /// `true` for types this crate knows how to sign.
    pub fn is_supported(self) -> bool {
        self == Self::Standard
    }
}

impl Default for TransactionType {
    fn default() -> Self {
        Self::Standard
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Other(byte) => write!(f, "Other({byte})"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
