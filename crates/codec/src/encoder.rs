//! Snapshot encoder.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use document::Document;

use crate::error::CodecError;
use crate::format::{self, MAGIC, OP_AUX, OP_END, OP_EXPIRE_MS, OP_RESIZE_HINT, OP_SELECT_DB};
use crate::length::encode_length;
use crate::value::{encode_value, type_tag, write_string};

/// Serializes `doc` into a complete snapshot byte buffer.
///
/// Emission order: header, metadata pairs, then per database the selector,
/// a resize hint carrying entry and expiring-entry counts, and the entries
/// (expiry opcode first where set, then tag, key, payload); finally the end
/// marker and the checksum trailer over everything before it.
///
/// Metadata, sets, and hashes are written in their maps' sorted iteration
/// order, so encoding the same document twice yields identical bytes.
pub fn encode(doc: &Document) -> Result<Vec<u8>, CodecError> {
    if !format::is_valid_version(&doc.version) {
        return Err(CodecError::InvalidHeader {
            at: MAGIC.len(),
            reason: "version is not four ASCII digits",
        });
    }

    let mut buf = Vec::new();
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(doc.version.as_bytes());

    for (name, value) in &doc.metadata {
        buf.write_u8(OP_AUX)?;
        write_string(&mut buf, name.as_bytes())?;
        write_string(&mut buf, value.as_bytes())?;
    }

    for db in &doc.databases {
        buf.write_u8(OP_SELECT_DB)?;
        encode_length(&mut buf, db.index)?;

        buf.write_u8(OP_RESIZE_HINT)?;
        encode_length(&mut buf, db.len() as u64)?;
        encode_length(&mut buf, db.expiring_len() as u64)?;

        for entry in &db.entries {
            if let Some(expire_at_ms) = entry.expire_at_ms {
                buf.write_u8(OP_EXPIRE_MS)?;
                buf.write_u64::<LittleEndian>(expire_at_ms)?;
            }
            buf.write_u8(type_tag(&entry.value))?;
            write_string(&mut buf, &entry.key)?;
            encode_value(&mut buf, &entry.value)?;
        }
    }

    buf.write_u8(OP_END)?;
    checksum::append(&mut buf);
    Ok(buf)
}

/// Serializes `doc` and writes the whole snapshot to `w` in a single
/// `write_all` call.
pub fn encode_to<W: Write>(doc: &Document, w: &mut W) -> Result<(), CodecError> {
    let bytes = encode(doc)?;
    w.write_all(&bytes)?;
    Ok(())
}
