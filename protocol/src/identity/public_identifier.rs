//! # Public Identifiers
//!
//! A public identifier is the raw 32-byte Ed25519 verifying key of an
//! account. Unlike address schemes that hash the key first, Nyzo puts the
//! key itself in the `id__` string, so an identifier is always enough to
//! verify a signature.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{IDENTIFIER_LENGTH, SIGNATURE_LENGTH};
use crate::crypto::signatures::verify;
use crate::encoding::{NyzoStringError, NyzoStringPayload, NyzoStringPrefix};

/// A 32-byte account identifier, written as an `id__` string.
///
/// # Examples
///
/// ```
/// use nyzo_protocol::encoding::NyzoStringPayload;
/// use nyzo_protocol::identity::PublicIdentifier;
///
/// let text = "id__8durD062JgHVTkM~S-CB1RFeWobRUHpA9r-26DAV1T4rm386SsPW";
/// let id = PublicIdentifier::from_nyzo_string(text).unwrap().unwrap();
/// assert_eq!(id.to_string(), text);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicIdentifier {
    bytes: [u8; IDENTIFIER_LENGTH],
}

impl PublicIdentifier {
    /// Wrap 32 identifier bytes.
    pub const fn new(bytes: [u8; IDENTIFIER_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Copy an identifier out of a slice.
    ///
    /// The first 32 bytes are used; a shorter slice is a
    /// [`NyzoStringError::TruncatedInput`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, NyzoStringError> {
        let bytes: [u8; IDENTIFIER_LENGTH] = bytes
            .get(..IDENTIFIER_LENGTH)
            .and_then(|b| b.try_into().ok())
            .ok_or(NyzoStringError::TruncatedInput {
                needed: IDENTIFIER_LENGTH,
                available: bytes.len(),
            })?;
        Ok(Self { bytes })
    }

    /// The raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; IDENTIFIER_LENGTH] {
        &self.bytes
    }

    /// Lowercase hex form, as shown by block explorers.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Verify a detached signature made by the holder of this identifier.
    pub fn verify(&self, message: &[u8], signature: &[u8; SIGNATURE_LENGTH]) -> bool {
        verify(&self.bytes, message, signature)
    }
}

impl NyzoStringPayload for PublicIdentifier {
    const PREFIX: NyzoStringPrefix = NyzoStringPrefix::PublicIdentifier;

    fn to_content_bytes(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    fn from_content_bytes(content: &[u8]) -> Result<Self, NyzoStringError> {
        Self::from_slice(content)
    }
}

impl From<[u8; IDENTIFIER_LENGTH]> for PublicIdentifier {
    fn from(bytes: [u8; IDENTIFIER_LENGTH]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for PublicIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 32 bytes of content always fit in a frame.
        let text = self.to_nyzo_string().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl fmt::Debug for PublicIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicIdentifier({})", self.to_hex())
    }
}

impl Serialize for PublicIdentifier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            let text = self
                .to_nyzo_string()
                .map_err(serde::ser::Error::custom)?;
            serializer.serialize_str(&text)
        } else {
            serializer.serialize_bytes(&self.bytes)
        }
    }
}

impl<'de> Deserialize<'de> for PublicIdentifier {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let text = String::deserialize(deserializer)?;
            PublicIdentifier::from_nyzo_string(&text)
                .map_err(serde::de::Error::custom)?
                .ok_or_else(|| serde::de::Error::custom("not a valid id__ string"))
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            if bytes.len() != IDENTIFIER_LENGTH {
                return Err(serde::de::Error::custom(format!(
                    "expected 32-byte identifier, got {}",
                    bytes.len()
                )));
            }
            PublicIdentifier::from_slice(&bytes).map_err(serde::de::Error::custom)
        }
    }
}
