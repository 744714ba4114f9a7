//! # Codec — snapshot wire format
//!
//! Decodes and encodes the Snapdump snapshot format: a single binary file
//! carrying a version header, optional metadata, one or more database
//! sections of typed key/value entries, an end marker, and a trailing
//! 64-bit checksum.
//!
//! ## File layout
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ HEADER (9 bytes)                                              │
//! │                                                               │
//! │ magic "REDIS" (5 ASCII) | version (4 ASCII digits)            │
//! ├───────────────────────────────────────────────────────────────┤
//! │ METADATA (0 or more)                                          │
//! │                                                               │
//! │ 0xFA | name (string) | value (string)                         │
//! ├───────────────────────────────────────────────────────────────┤
//! │ DATABASE SECTIONS (0 or more)                                 │
//! │                                                               │
//! │ 0xFE | index (length)                                         │
//! │ 0xFB | entry count (length) | expiring count (length)         │
//! │                                                               │
//! │ then per entry:                                               │
//! │ [0xFC | expiry ms (u64 LE)] | type tag | key (string) | value │
//! ├───────────────────────────────────────────────────────────────┤
//! │ TRAILER                                                       │
//! │                                                               │
//! │ 0xFF | checksum (u64 LE over all preceding bytes)             │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! "string" above is a length-prefixed raw byte sequence and "length" is the
//! 1/2/5/9-byte variable-width integer described in [`format`]. The checksum
//! covers every byte before the trailer, so a flip anywhere in the file is
//! detected.
//!
//! ## Example
//!
//! ```rust
//! use codec::{decode, encode};
//! use document::{Database, Document, Entry, Value};
//!
//! let mut doc = Document::new();
//! let mut db = Database::new(0);
//! db.entries.push(Entry::new("greeting", Value::Str(b"hello".to_vec())));
//! doc.databases.push(db);
//!
//! let bytes = encode(&doc).unwrap();
//! let decoded = decode(&bytes).unwrap();
//! assert!(decoded.integrity.is_verified());
//! assert_eq!(decoded.document, doc);
//! ```
//!
//! Decoding never trusts declared sizes for allocation and reports the byte
//! offset where any structural error was detected. A checksum mismatch is
//! the one recoverable condition: [`decode`] hands back the document with
//! [`Integrity::Mismatch`], while [`decode_verified`] turns it into a hard
//! error.

mod cursor;
mod decoder;
mod encoder;
mod error;
pub mod format;
mod length;
mod value;

pub use decoder::{decode, decode_verified, Decoded, Integrity};
pub use encoder::{encode, encode_to};
pub use error::CodecError;

#[cfg(test)]
mod tests;
