//! # Identity Module
//!
//! The account-level payloads of the Nyzo string format and the validators
//! wallets run on user input.
//!
//! 1. **PrivateSeed** (`key_`): 32 seed bytes. The key pair is derived
//!    from it, never stored alongside it.
//! 2. **PublicIdentifier** (`id__`): the raw 32-byte Ed25519 public key.
//! 3. **PrefilledData** (`pre_`): a payment request a receiver hands out.
//!
//! The validators below treat every decode failure, soft or hard, as
//! "not valid". Callers that need the reason should use
//! [`crate::encoding::decode_strict`].

pub mod prefilled_data;
pub mod private_seed;
pub mod public_identifier;

pub use prefilled_data::PrefilledData;
pub use private_seed::PrivateSeed;
pub use public_identifier::PublicIdentifier;

use crate::crypto::signatures::open_signed_message;
use crate::encoding::{alphabet, normalize, NyzoStringPayload};

/// The `id__` string for the seed in a `key_` string, or `None` when the
/// key string does not decode.
///
/// # Example
///
/// ```
/// use nyzo_protocol::identity::public_identifier_for_private_key;
///
/// let id = public_identifier_for_private_key(
///     "key_89TyJqVM_mGxLFha.9bJbch4itmGvR9G6o0ZI0ctIE.x4IUN1UTB",
/// );
/// assert_eq!(
///     id.as_deref(),
///     Some("id__8durD062JgHVTkM~S-CB1RFeWobRUHpA9r-26DAV1T4rm386SsPW"),
/// );
/// ```
pub fn public_identifier_for_private_key(key_string: &str) -> Option<String> {
    let seed = PrivateSeed::from_nyzo_string(key_string).ok().flatten()?;
    seed.public_identifier().to_nyzo_string().ok()
}

/// `true` when `key_string` decodes as a `key_` string.
pub fn is_valid_private_key(key_string: &str) -> bool {
    matches!(PrivateSeed::from_nyzo_string(key_string), Ok(Some(_)))
}

/// `true` when `identifier_string` decodes as an `id__` string.
pub fn is_valid_public_identifier(identifier_string: &str) -> bool {
    matches!(PublicIdentifier::from_nyzo_string(identifier_string), Ok(Some(_)))
}

/// The message inside an alphabet-packed attached signature, if the
/// signature verifies against the identifier in `identifier_string`.
///
/// Signed messages are packed with the string alphabet but carry no prefix,
/// length byte or checksum: the Ed25519 signature is the integrity check.
pub fn signed_message_content(signed_message: &str, identifier_string: &str) -> Option<Vec<u8>> {
    let identifier = PublicIdentifier::from_nyzo_string(identifier_string)
        .ok()
        .flatten()?;
    let signed = alphabet::unpack(&normalize(signed_message)).ok()?;
    open_signed_message(&signed, identifier.as_bytes())
}

/// `true` when `signed_message` verifies against `identifier_string`.
pub fn is_valid_signed_message(signed_message: &str, identifier_string: &str) -> bool {
    signed_message_content(signed_message, identifier_string).is_some()
}
