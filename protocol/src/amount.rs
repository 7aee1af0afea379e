//! # Amounts
//!
//! Nyzo amounts are integer micronyzos on the wire. People type and read
//! them in nyzos with up to six decimals. This module converts between the
//! two without going through floating point, and holds the amount rules
//! wallets check before building a transaction.

use std::ops::RangeInclusive;
use thiserror::Error;

use crate::config::{CURRENCY_SYMBOL, MICRONYZOS_PER_NYZO, MINIMUM_TRANSACTION_AMOUNT, NYZO_DECIMALS};

/// Errors from parsing or validating an amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount {0:?}: expected a decimal number of nyzos")]
    Invalid(String),

    #[error("amount {0:?} has more than 6 decimal places")]
    TooPrecise(String),

    #[error("amount {0:?} does not fit in 64 bits of micronyzos")]
    OutOfRange(String),

    #[error("amount of {micronyzos} micronyzos is below the minimum of {minimum}")]
    BelowMinimum { micronyzos: i64, minimum: i64 },
}

/// Parse a nyzo amount such as `"1.5"` or `"0.000001"` into micronyzos.
///
/// Surrounding whitespace and a leading `-` are accepted. The result is
/// exact: `"0.1"` is 100 000 micronyzos, never 99 999.
///
/// ```
/// use nyzo_protocol::amount::micronyzos_from_str;
///
/// assert_eq!(micronyzos_from_str("1.5").unwrap(), 1_500_000);
/// assert_eq!(micronyzos_from_str(".25").unwrap(), 250_000);
/// assert!(micronyzos_from_str("0.0000001").is_err());
/// ```
pub fn micronyzos_from_str(text: &str) -> Result<i64, AmountError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(AmountError::Invalid(trimmed.to_string()));
    }
    if fraction.len() > NYZO_DECIMALS {
        return Err(AmountError::TooPrecise(trimmed.to_string()));
    }

    let out_of_range = || AmountError::OutOfRange(trimmed.to_string());
    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| out_of_range())?
    };
    let fraction: i64 = if fraction.is_empty() {
        0
    } else {
        let padded = format!("{fraction:0<width$}", width = NYZO_DECIMALS);
        padded.parse().map_err(|_| out_of_range())?
    };

    let micronyzos = whole
        .checked_mul(MICRONYZOS_PER_NYZO)
        .and_then(|m| m.checked_add(fraction))
        .ok_or_else(out_of_range)?;
    Ok(if negative { -micronyzos } else { micronyzos })
}

/// The one amount rule for transfers: at least one micronyzo.
pub fn validate_micronyzos(micronyzos: i64) -> Result<i64, AmountError> {
    if micronyzos < MINIMUM_TRANSACTION_AMOUNT {
        return Err(AmountError::BelowMinimum {
            micronyzos,
            minimum: MINIMUM_TRANSACTION_AMOUNT,
        });
    }
    Ok(micronyzos)
}

/// `true` when a micronyzo amount is a valid transfer amount.
pub fn is_valid_amount_micronyzos(micronyzos: i64) -> bool {
    validate_micronyzos(micronyzos).is_ok()
}

/// `true` when a nyzo string parses to a valid transfer amount.
pub fn is_valid_amount_str(text: &str) -> bool {
    micronyzos_from_str(text)
        .and_then(validate_micronyzos)
        .is_ok()
}

/// Render micronyzos for people: `∩1.500000`.
pub fn display_amount(micronyzos: i64) -> String {
    let sign = if micronyzos < 0 { "-" } else { "" };
    let magnitude = micronyzos.unsigned_abs();
    let per_nyzo = MICRONYZOS_PER_NYZO as u64;
    format!(
        "{CURRENCY_SYMBOL}{sign}{}.{:0width$}",
        magnitude / per_nyzo,
        magnitude % per_nyzo,
        width = NYZO_DECIMALS
    )
}

// ---------------------------------------------------------------------------
// Micropay limits
// ---------------------------------------------------------------------------

/// The configurable limits of a micropay wallet, each with its own
/// accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicropayLimit {
    /// A one-off tip: 2 micronyzos to 10 nyzos.
    Tip,
    /// The most a single micropay may cost: 2 micronyzos to 50 nyzos.
    MaximumMicropay,
    /// The most paid without asking: 1 micronyzo to 1 nyzo.
    MaximumAutomatic,
    /// The total automatic spending allowed: 10 micronyzos to 100 nyzos.
    MaximumAutomaticAuthorization,
}

impl MicropayLimit {
    /// Inclusive micronyzo range for this limit.
    pub fn range(self) -> RangeInclusive<i64> {
        match self {
            Self::Tip => 2..=10 * MICRONYZOS_PER_NYZO,
            Self::MaximumMicropay => 2..=50 * MICRONYZOS_PER_NYZO,
            Self::MaximumAutomatic => 1..=MICRONYZOS_PER_NYZO,
            Self::MaximumAutomaticAuthorization => 10..=100 * MICRONYZOS_PER_NYZO,
        }
    }

    /// `true` when `text` parses to an amount inside this limit's range.
    pub fn accepts(self, text: &str) -> bool {
        micronyzos_from_str(text)
            .map(|micronyzos| self.range().contains(&micronyzos))
            .unwrap_or(false)
    }
}
