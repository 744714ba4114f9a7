//! Snapshot binary format constants.
//!
//! ## Header (9 bytes)
//!
//! ```text
//! [magic: "REDIS" (5 ASCII bytes)][version: 4 ASCII digits]
//! ```
//!
//! ## Record opcodes
//!
//! After the header the file is a flat sequence of records, each introduced
//! by a one-byte opcode (or, for key/value entries, a value type tag):
//!
//! | Byte  | Meaning                                            |
//! |-------|----------------------------------------------------|
//! | `0xFA`| Metadata pair: two strings (name, value)           |
//! | `0xFE`| Select database: length-encoded index              |
//! | `0xFB`| Resize hint: two length-encoded counts             |
//! | `0xFC`| Expiry for the *next* entry: u64 LE milliseconds   |
//! | `0xFF`| End of records; an 8-byte LE checksum follows      |
//! | other | Value type tag opening a key/value entry           |
//!
//! ## Length encoding
//!
//! The top two bits of the first byte select the form:
//!
//! ```text
//! 00xxxxxx                      -> 6-bit length
//! 01xxxxxx [1 byte]             -> 14-bit length, big-endian
//! 10000000 [4 bytes]            -> u32 length, big-endian (first byte exactly 0x80)
//! 11111110 [8 bytes]            -> u64 length, big-endian (first byte exactly 0xFE)
//! ```
//!
//! Any other first byte is malformed.

/// The five magic bytes opening every snapshot file.
pub const MAGIC: &[u8; 5] = b"REDIS";

/// Header size in bytes: 5 (magic) + 4 (ASCII version digits).
pub const HEADER_BYTES: usize = MAGIC.len() + VERSION_DIGITS;

/// Number of ASCII digits in the header version field.
pub const VERSION_DIGITS: usize = 4;

/// Opcode introducing a metadata (name, value) string pair.
pub const OP_AUX: u8 = 0xFA;

/// Opcode introducing a database section; followed by the length-encoded index.
pub const OP_SELECT_DB: u8 = 0xFE;

/// Opcode carrying two length-encoded table-size counts. Purely advisory.
pub const OP_RESIZE_HINT: u8 = 0xFB;

/// Opcode attaching a millisecond expiry (u64 LE) to the entry that follows.
pub const OP_EXPIRE_MS: u8 = 0xFC;

/// Opcode terminating the record stream; the checksum trailer follows.
pub const OP_END: u8 = 0xFF;

/// Value type tag: raw byte string.
pub const TYPE_STRING: u8 = 0;

/// Value type tag: list of strings.
pub const TYPE_LIST: u8 = 1;

/// Value type tag: unordered set of strings.
pub const TYPE_SET: u8 = 2;

/// Value type tag: sorted set of (member, f64 score) pairs.
pub const TYPE_SORTED_SET: u8 = 3;

/// Value type tag: string-to-string hash map.
pub const TYPE_HASH: u8 = 4;

/// Value type tag: 64-bit integer stored via the length encoding.
pub const TYPE_INTEGER: u8 = 9;

/// First byte of the 5-byte (u32, big-endian) length form. Exact match only;
/// `0x81`..`0xBF` share the top bits but are malformed.
pub const LEN_32BIT: u8 = 0x80;

/// First byte of the 9-byte (u64, big-endian) length form.
pub const LEN_64BIT: u8 = 0xFE;

/// Largest length representable in the 6-bit form.
pub const LEN_6BIT_MAX: u64 = 0x3F;

/// Largest length representable in the 14-bit form.
pub const LEN_14BIT_MAX: u64 = 0x3FFF;

/// Returns `true` if `version` is exactly four ASCII digits, e.g. `"0011"`.
#[must_use]
pub fn is_valid_version(version: &str) -> bool {
    version.len() == VERSION_DIGITS && version.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if `tag` is one of the six known value type tags.
#[must_use]
pub fn is_value_tag(tag: u8) -> bool {
    matches!(
        tag,
        TYPE_STRING | TYPE_LIST | TYPE_SET | TYPE_SORTED_SET | TYPE_HASH | TYPE_INTEGER
    )
}

#[cfg(test)]
mod format_checks {
    use super::*;

    #[test]
    fn header_is_nine_bytes() {
        assert_eq!(HEADER_BYTES, 9);
    }

    #[test]
    fn version_validation() {
        assert!(is_valid_version("0011"));
        assert!(is_valid_version("0003"));
        assert!(is_valid_version("9999"));
        assert!(!is_valid_version("11"));
        assert!(!is_valid_version("00111"));
        assert!(!is_valid_version("00a1"));
        assert!(!is_valid_version(""));
    }
}
