//! Typed value payload codec.
//!
//! A value on the wire is a one-byte type tag followed by a tag-specific
//! payload. The tag itself is consumed by the record loop (it doubles as the
//! control byte opening an entry); these functions handle only the payload.
//!
//! | tag | payload |
//! |-----|---------------------------------------------------------------|
//! | 0   | one length-prefixed string                                    |
//! | 1   | count, then that many strings (order preserved)               |
//! | 2   | count, then that many strings (decoder collapses duplicates)  |
//! | 3   | count, then (string, f64 LE score) pairs                      |
//! | 4   | count, then (string, string) field/value pairs                |
//! | 9   | one length-encoded integer, bits reinterpreted as signed      |

use std::collections::{BTreeMap, BTreeSet};

use byteorder::{LittleEndian, WriteBytesExt};
use document::Value;

use crate::cursor::Cursor;
use crate::error::CodecError;
use crate::format::{TYPE_HASH, TYPE_INTEGER, TYPE_LIST, TYPE_SET, TYPE_SORTED_SET, TYPE_STRING};
use crate::length::{decode_length, encode_length};

/// Reads one length-prefixed byte string.
pub fn read_string(cur: &mut Cursor<'_>) -> Result<Vec<u8>, CodecError> {
    let len = decode_length(cur)?;
    Ok(cur.take(len)?.to_vec())
}

/// Appends one length-prefixed byte string to `buf`.
pub fn write_string(buf: &mut Vec<u8>, bytes: &[u8]) -> Result<(), CodecError> {
    encode_length(buf, bytes.len() as u64)?;
    buf.extend_from_slice(bytes);
    Ok(())
}

/// Decodes the payload for `tag`, read from `cur`.
///
/// `tag_at` is the offset the tag byte was read from; it is reported in
/// [`CodecError::UnknownValueType`] when the tag is outside the known set.
///
/// Declared counts are never trusted for pre-allocation. Collections grow
/// element by element, so a hostile count fails with `TruncatedInput` once
/// the buffer runs out instead of reserving gigabytes up front.
pub fn decode_value(tag: u8, tag_at: usize, cur: &mut Cursor<'_>) -> Result<Value, CodecError> {
    match tag {
        TYPE_STRING => Ok(Value::Str(read_string(cur)?)),
        TYPE_LIST => {
            let count = decode_length(cur)?;
            let mut items = Vec::new();
            for _ in 0..count {
                items.push(read_string(cur)?);
            }
            Ok(Value::List(items))
        }
        TYPE_SET => {
            let count = decode_length(cur)?;
            let mut members = BTreeSet::new();
            for _ in 0..count {
                members.insert(read_string(cur)?);
            }
            Ok(Value::Set(members))
        }
        TYPE_SORTED_SET => {
            let count = decode_length(cur)?;
            let mut pairs: Vec<(Vec<u8>, f64)> = Vec::new();
            // Position in `pairs` of every member seen so far.
            let mut positions: BTreeMap<Vec<u8>, usize> = BTreeMap::new();
            for _ in 0..count {
                let member = read_string(cur)?;
                let score = cur.read_f64_le()?;
                // Membership is unique: a repeated member keeps its first
                // position but takes the latest score.
                match positions.get(&member) {
                    Some(&at) => pairs[at].1 = score,
                    None => {
                        positions.insert(member.clone(), pairs.len());
                        pairs.push((member, score));
                    }
                }
            }
            Ok(Value::SortedSet(pairs))
        }
        TYPE_HASH => {
            let count = decode_length(cur)?;
            let mut fields = BTreeMap::new();
            for _ in 0..count {
                let field = read_string(cur)?;
                let value = read_string(cur)?;
                fields.insert(field, value);
            }
            Ok(Value::Hash(fields))
        }
        TYPE_INTEGER => {
            let raw = decode_length(cur)?;
            Ok(Value::Int(raw as i64))
        }
        _ => Err(CodecError::UnknownValueType { at: tag_at, tag }),
    }
}

/// The wire tag for `value`.
#[must_use]
pub fn type_tag(value: &Value) -> u8 {
    match value {
        Value::Str(_) => TYPE_STRING,
        Value::List(_) => TYPE_LIST,
        Value::Set(_) => TYPE_SET,
        Value::SortedSet(_) => TYPE_SORTED_SET,
        Value::Hash(_) => TYPE_HASH,
        Value::Int(_) => TYPE_INTEGER,
    }
}

/// Appends the payload for `value` to `buf` (tag not included).
///
/// Sets and hashes are written in their collections' sorted iteration order.
/// The format does not promise byte order for these two variants, only that
/// the decoded content matches; sorted order keeps re-encodes reproducible.
pub fn encode_value(buf: &mut Vec<u8>, value: &Value) -> Result<(), CodecError> {
    match value {
        Value::Str(bytes) => write_string(buf, bytes)?,
        Value::List(items) => {
            encode_length(buf, items.len() as u64)?;
            for item in items {
                write_string(buf, item)?;
            }
        }
        Value::Set(members) => {
            encode_length(buf, members.len() as u64)?;
            for member in members {
                write_string(buf, member)?;
            }
        }
        Value::SortedSet(pairs) => {
            encode_length(buf, pairs.len() as u64)?;
            for (member, score) in pairs {
                write_string(buf, member)?;
                buf.write_f64::<LittleEndian>(*score)?;
            }
        }
        Value::Hash(fields) => {
            encode_length(buf, fields.len() as u64)?;
            for (field, val) in fields {
                write_string(buf, field)?;
                write_string(buf, val)?;
            }
        }
        Value::Int(n) => encode_length(buf, *n as u64)?,
    }
    Ok(())
}
