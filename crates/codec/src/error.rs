//! Error type shared by the decoder and encoder.

use std::io;
use thiserror::Error;

/// Errors that can occur while decoding or encoding a snapshot.
///
/// Decode failures carry `at`, the byte offset at which the problem was
/// detected. The format has no resynchronization point: once a control byte
/// is misread every later byte's meaning is suspect, so all variants except
/// [`CodecError::ChecksumMismatch`] abort the operation. A checksum mismatch
/// is surfaced separately (see [`crate::Integrity`]) because the structure
/// decoded cleanly and only its integrity is in doubt.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The magic bytes or the 4-digit version field were malformed.
    #[error("invalid header at byte {at}: {reason}")]
    InvalidHeader {
        /// Offset of the offending byte.
        at: usize,
        /// What was wrong with the header.
        reason: &'static str,
    },

    /// A length control byte matched none of the four valid forms.
    #[error("invalid length encoding at byte {at}: control byte {byte:#04x}")]
    InvalidLengthEncoding {
        /// Offset of the control byte.
        at: usize,
        /// The control byte that was read.
        byte: u8,
    },

    /// A value type tag outside the known set. The tag carries no
    /// self-describing length, so the record cannot be skipped.
    #[error("unknown value type tag {tag} at byte {at}")]
    UnknownValueType {
        /// Offset of the tag byte.
        at: usize,
        /// The unrecognized tag.
        tag: u8,
    },

    /// An entry, expiry, or resize hint appeared before any select-db opcode.
    #[error("entry before any database selector at byte {at}")]
    EntryBeforeDatabaseSelected {
        /// Offset of the record that had no database to land in.
        at: usize,
    },

    /// The buffer ran out mid-field.
    #[error("truncated input at byte {at}")]
    TruncatedInput {
        /// Offset where more bytes were needed.
        at: usize,
    },

    /// The stored trailer did not match the checksum recomputed over the
    /// preceding bytes. Only returned by [`crate::decode_verified`]; plain
    /// [`crate::decode`] reports this through [`crate::Integrity`] instead.
    #[error("checksum mismatch: stored {stored:#018x}, computed {computed:#018x}")]
    ChecksumMismatch {
        /// The 8-byte trailer as read from the file.
        stored: u64,
        /// The value recomputed over everything before the trailer.
        computed: u64,
    },

    /// Encode-time: a size exceeds the widest length form. With the 64-bit
    /// form in place no `u64` triggers this; it exists so the encoder's
    /// contract is explicit rather than silently wrapping.
    #[error("size {value} exceeds the widest length encoding")]
    UnsupportedSize {
        /// The unrepresentable size.
        value: u64,
    },

    /// An underlying I/O error while writing encoded output.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
