//! # Byte Cursor
//!
//! A byte buffer with a single read/write position. Writers append
//! big-endian integers and raw runs; readers pull them back in the same
//! order. Every binary layout in this crate (the expanded string frame,
//! prefilled data, both transaction forms) is built and parsed through it.
//!
//! Reads never zero-fill: running off the end is a
//! [`NyzoStringError::TruncatedInput`], and so is writing past the limit of
//! a fixed-capacity cursor.

use super::error::NyzoStringError;

/// Growable or fixed-capacity byte buffer with a cursor.
///
/// # Examples
///
/// ```
/// use nyzo_protocol::encoding::ByteCursor;
///
/// let mut writer = ByteCursor::new();
/// writer.put_u8(2).unwrap();
/// writer.put_i64(-1).unwrap();
///
/// let mut reader = ByteCursor::from_bytes(writer.into_inner());
/// assert_eq!(reader.read_u8().unwrap(), 2);
/// assert_eq!(reader.read_i64().unwrap(), -1);
/// assert_eq!(reader.remaining(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteCursor {
    buffer: Vec<u8>,
    position: usize,
    limit: Option<usize>,
}

impl ByteCursor {
    /// An empty, growable cursor for writing.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty cursor that refuses to grow past `capacity` bytes.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            position: 0,
            limit: Some(capacity),
        }
    }

    /// A cursor positioned at the start of `bytes`, for reading.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            buffer: bytes.into(),
            position: 0,
            limit: None,
        }
    }

    /// Current cursor offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Everything written so far (or the whole input, for a reader).
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the cursor and return the underlying bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    // -----------------------------------------------------------------------
    // Writing
    // -----------------------------------------------------------------------

    /// Write a single byte.
    pub fn put_u8(&mut self, value: u8) -> Result<(), NyzoStringError> {
        self.put_bytes(&[value])
    }

    /// Write a signed 64-bit integer, big-endian.
    pub fn put_i64(&mut self, value: i64) -> Result<(), NyzoStringError> {
        self.put_bytes(&value.to_be_bytes())
    }

    /// Write a raw run of bytes at the cursor.
    ///
    /// Bytes already present at the cursor are overwritten; anything past
    /// the current end extends the buffer.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<(), NyzoStringError> {
        let end = self.position + bytes.len();
        if let Some(limit) = self.limit {
            if end > limit {
                return Err(NyzoStringError::TruncatedInput {
                    needed: bytes.len(),
                    available: limit.saturating_sub(self.position),
                });
            }
        }

        if end > self.buffer.len() {
            self.buffer.resize(end, 0);
        }
        self.buffer[self.position..end].copy_from_slice(bytes);
        self.position = end;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reading
    // -----------------------------------------------------------------------

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, NyzoStringError> {
        Ok(self.take(1)?[0])
    }

    /// Read a signed 64-bit big-endian integer.
    pub fn read_i64(&mut self) -> Result<i64, NyzoStringError> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.take(8)?);
        Ok(i64::from_be_bytes(raw))
    }

    /// Read exactly `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, NyzoStringError> {
        self.take(n).map(<[u8]>::to_vec)
    }

    /// Read exactly `N` bytes into a fixed-size array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], NyzoStringError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Read everything from the cursor to the end of the buffer.
    ///
    /// Leaves the cursor at the end, so a second call returns nothing.
    pub fn read_remaining(&mut self) -> Vec<u8> {
        let start = self.position.min(self.buffer.len());
        self.position = self.buffer.len();
        self.buffer[start..].to_vec()
    }

    fn take(&mut self, n: usize) -> Result<&[u8], NyzoStringError> {
        if self.remaining() < n {
            return Err(NyzoStringError::TruncatedInput {
                needed: n,
                available: self.remaining(),
            });
        }
        let start = self.position;
        self.position += n;
        Ok(&self.buffer[start..self.position])
    }
}
