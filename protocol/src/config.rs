//! # Protocol Configuration & Constants
//!
//! Every magic number used by the string codec and the transaction
//! serializer lives here. Changing any of them changes the bytes on the
//! wire, which means every string ever printed stops decoding. Don't.

// ---------------------------------------------------------------------------
// Nyzo string framing
// ---------------------------------------------------------------------------

/// Number of characters in a type prefix (`key_`, `id__`, ...).
pub const PREFIX_LENGTH: usize = 4;

/// Number of bytes a 4-character prefix unpacks into (4 × 6 bits = 24 bits).
pub const PREFIX_BYTE_LENGTH: usize = 3;

/// Prefix bytes plus the single content-length byte.
pub const HEADER_LENGTH: usize = PREFIX_BYTE_LENGTH + 1;

/// Index of the content-length byte inside the expanded array.
pub const CONTENT_LENGTH_INDEX: usize = PREFIX_BYTE_LENGTH;

/// Smallest checksum the encoder will ever emit.
pub const MIN_CHECKSUM_LENGTH: usize = 4;

/// Largest checksum the encoder will ever emit.
pub const MAX_CHECKSUM_LENGTH: usize = 6;

/// The length byte is a single `u8`, so content tops out at 255 bytes.
pub const MAX_CONTENT_LENGTH: usize = u8::MAX as usize;

// ---------------------------------------------------------------------------
// Field byte sizes
// ---------------------------------------------------------------------------

/// Ed25519 seed length. The seed is the whole private identity.
pub const SEED_LENGTH: usize = 32;

/// Public identifier (Ed25519 verifying key) length.
pub const IDENTIFIER_LENGTH: usize = 32;

/// Block hash length (SHA-256 output).
pub const HASH_LENGTH: usize = 32;

/// Ed25519 detached signature length.
pub const SIGNATURE_LENGTH: usize = 64;

/// Width of the transaction type field.
pub const TRANSACTION_TYPE_LENGTH: usize = 1;

/// Width of a timestamp (milliseconds since the Unix epoch, signed).
pub const TIMESTAMP_LENGTH: usize = 8;

/// Width of a transaction amount in micronyzos.
pub const AMOUNT_LENGTH: usize = 8;

/// Width of a block height.
pub const BLOCK_HEIGHT_LENGTH: usize = 8;

/// Sender data is capped at 32 bytes everywhere it appears.
pub const MAX_SENDER_DATA_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// The only transaction type this library builds: a standard transfer.
pub const TRANSACTION_TYPE_STANDARD: u8 = 2;

/// Size of the storage form for a transaction with empty sender data.
/// Sender data adds its own length on top of this.
pub const MIN_TRANSACTION_STORAGE_LENGTH: usize = TRANSACTION_TYPE_LENGTH
    + TIMESTAMP_LENGTH
    + AMOUNT_LENGTH
    + IDENTIFIER_LENGTH
    + BLOCK_HEIGHT_LENGTH
    + IDENTIFIER_LENGTH
    + 1
    + SIGNATURE_LENGTH;

/// Hash of the genesis block. Used as the default previous-block anchor
/// when signing, paired with a previous-hash height of zero.
pub const GENESIS_BLOCK_HASH: [u8; HASH_LENGTH] = [
    0xbc, 0x4c, 0xca, 0x2a, 0x2a, 0x50, 0xa2, 0x29, 0x25, 0x6a, 0xe3, 0xf5, 0xb2, 0xb5, 0xcd, 0x49,
    0xaa, 0x1d, 0xf1, 0xe2, 0xd0, 0x19, 0x27, 0x26, 0xc4, 0xbb, 0x41, 0xcd, 0xce, 0xa1, 0x53, 0x64,
];

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// One nyzo is a million micronyzos. All amounts on the wire are micronyzos.
pub const MICRONYZOS_PER_NYZO: i64 = 1_000_000;

/// Number of fractional digits a nyzo amount may carry.
pub const NYZO_DECIMALS: usize = 6;

/// Smallest amount a transfer may carry: one micronyzo.
pub const MINIMUM_TRANSACTION_AMOUNT: i64 = 1;

/// Amount of a micropay supplemental transaction: one micronyzo.
pub const SUPPLEMENTAL_TRANSACTION_AMOUNT: i64 = 1;

/// Symbol used when rendering amounts for humans.
pub const CURRENCY_SYMBOL: char = '∩';
