//! Byte cursor over an in-memory buffer.
//!
//! All decode functions thread a [`Cursor`] instead of relying on an implicit
//! stream position, so the offset reported in errors is always the offset the
//! failing read started at.

use crate::error::CodecError;

/// A read position over a borrowed byte slice.
///
/// Every read advances the position; nothing is buffered or pushed back.
/// Reads past the end return [`CodecError::TruncatedInput`] carrying the
/// position where the bytes ran out.
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Wraps `buf` with the position at the start.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current byte offset from the start of the buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Reads the next byte.
    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        match self.buf.get(self.pos) {
            Some(&b) => {
                self.pos += 1;
                Ok(b)
            }
            None => Err(CodecError::TruncatedInput { at: self.pos }),
        }
    }

    /// Takes the next `n` bytes as a borrowed slice.
    ///
    /// `n` is compared against the remaining length before any cast, so a
    /// hostile declared size can never wrap into a small allocation.
    pub fn take(&mut self, n: u64) -> Result<&'a [u8], CodecError> {
        if n > self.remaining() as u64 {
            return Err(CodecError::TruncatedInput { at: self.pos });
        }
        let n = n as usize;
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Reads 4 bytes as a big-endian u32.
    pub fn read_u32_be(&mut self) -> Result<u32, CodecError> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4)?);
        Ok(u32::from_be_bytes(raw))
    }

    /// Reads 8 bytes as a big-endian u64.
    pub fn read_u64_be(&mut self) -> Result<u64, CodecError> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.take(8)?);
        Ok(u64::from_be_bytes(raw))
    }

    /// Reads 8 bytes as a little-endian u64.
    pub fn read_u64_le(&mut self) -> Result<u64, CodecError> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(raw))
    }

    /// Reads 8 bytes as a little-endian IEEE-754 double.
    pub fn read_f64_le(&mut self) -> Result<f64, CodecError> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.take(8)?);
        Ok(f64::from_le_bytes(raw))
    }
}
