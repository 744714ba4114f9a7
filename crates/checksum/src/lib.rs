//! # Checksum - snapshot trailer integrity
//!
//! Computes the 64-bit integrity value that terminates every encoded
//! snapshot. The hash covers **every byte preceding the trailer** (header,
//! metadata, database sections, entries, end marker), so a single bit flip
//! anywhere in the frame changes the recomputed value.
//!
//! The algorithm is xxHash64 with a fixed seed; both the writer and the
//! reader must use [`sum64`] so the comparison is meaningful. The trailer
//! itself is the hash serialized as 8 little-endian bytes.
//!
//! ## Example
//!
//! ```rust
//! let mut frame = b"REDIS0011".to_vec();
//! checksum::append(&mut frame);
//! assert_eq!(checksum::verify_frame(&frame), Some(true));
//! ```

use xxhash_rust::xxh64::xxh64;

/// Size of the serialized trailer in bytes.
pub const TRAILER_BYTES: usize = 8;

/// Fixed hash seed. Changing it invalidates every previously written frame.
const XXH_SEED: u64 = u64::from_le_bytes(*b"SNAPDUMP");

/// Computes the 64-bit checksum over `bytes`.
///
/// Used identically on both sides: the encoder hashes the frame it has
/// assembled so far, the decoder hashes the byte range it consumed up to
/// the end marker.
#[must_use]
pub fn sum64(bytes: &[u8]) -> u64 {
    xxh64(bytes, XXH_SEED)
}

/// Hashes the current content of `buf` and appends the 8-byte trailer.
///
/// After this call `buf` is a complete frame: `verify_frame(&buf)` returns
/// `Some(true)` until the content is modified.
pub fn append(buf: &mut Vec<u8>) {
    let sum = sum64(buf);
    buf.extend_from_slice(&sum.to_le_bytes());
}

/// Structure-blind whole-frame check: recomputes the hash over everything
/// before the final 8 bytes and compares it to the stored trailer.
///
/// Returns `None` if `frame` is too short to carry a trailer at all.
/// Decoders that track their own position (and therefore tolerate bytes
/// after the trailer) should compare [`sum64`] against the stored value
/// directly instead.
#[must_use]
pub fn verify_frame(frame: &[u8]) -> Option<bool> {
    if frame.len() < TRAILER_BYTES {
        return None;
    }
    let (body, trailer) = frame.split_at(frame.len() - TRAILER_BYTES);
    let mut stored = [0u8; TRAILER_BYTES];
    stored.copy_from_slice(trailer);
    Some(sum64(body) == u64::from_le_bytes(stored))
}
