//! Opcode-driven snapshot decoder.

use document::{Database, Document, Entry};

use crate::cursor::Cursor;
use crate::error::CodecError;
use crate::format::{
    self, MAGIC, OP_AUX, OP_END, OP_EXPIRE_MS, OP_RESIZE_HINT, OP_SELECT_DB, VERSION_DIGITS,
};
use crate::length::decode_length;
use crate::value::{decode_value, read_string};

/// Outcome of the checksum comparison performed at the end of every decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Integrity {
    /// The stored trailer matched the value recomputed over the body.
    Verified,
    /// The trailer disagreed. The document structure decoded cleanly, but a
    /// bit somewhere in the file (body or trailer) has flipped.
    Mismatch {
        /// The 8-byte trailer as read.
        stored: u64,
        /// The value recomputed over everything before the trailer.
        computed: u64,
    },
}

impl Integrity {
    /// Returns `true` when the trailer matched.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        matches!(self, Integrity::Verified)
    }
}

/// A successfully decoded snapshot plus its integrity verdict.
///
/// A checksum mismatch is deliberately not fatal here: the structure was
/// parseable, so callers inspecting a damaged file still get the document,
/// together with the evidence that it cannot be trusted. Callers that want
/// mismatch to be an error use [`decode_verified`].
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The reconstructed document.
    pub document: Document,
    /// Whether the trailer checksum held up.
    pub integrity: Integrity,
}

/// Decodes a complete snapshot from `bytes`.
///
/// Walks header, metadata, database sections, and entries, stops at the end
/// marker, then compares the 8-byte trailer against the checksum recomputed
/// over every byte before it. Structural errors abort with the offset where
/// they were detected; a checksum mismatch is reported through
/// [`Decoded::integrity`] instead. Bytes after the trailer are ignored.
pub fn decode(bytes: &[u8]) -> Result<Decoded, CodecError> {
    let mut cur = Cursor::new(bytes);

    // -------- header --------
    if cur.take(MAGIC.len() as u64)? != MAGIC {
        return Err(CodecError::InvalidHeader {
            at: 0,
            reason: "bad magic",
        });
    }
    let raw_version = cur.take(VERSION_DIGITS as u64)?;
    if !raw_version.iter().all(u8::is_ascii_digit) {
        return Err(CodecError::InvalidHeader {
            at: MAGIC.len(),
            reason: "version is not four ASCII digits",
        });
    }
    let mut doc = Document::with_version(String::from_utf8_lossy(raw_version).into_owned());

    // -------- record loop --------
    let body_end;
    loop {
        let op_at = cur.position();
        let op = cur.read_u8()?;
        match op {
            OP_AUX => {
                let name = read_string(&mut cur)?;
                let value = read_string(&mut cur)?;
                // Metadata keys repeat in the wild; last one wins.
                doc.metadata.insert(
                    String::from_utf8_lossy(&name).into_owned(),
                    String::from_utf8_lossy(&value).into_owned(),
                );
            }
            OP_SELECT_DB => {
                let index = decode_length(&mut cur)?;
                doc.databases.push(Database::new(index));
            }
            OP_RESIZE_HINT => {
                // Advisory table sizes. Consumed and discarded; allocation
                // is driven by what is actually decoded, not by hints.
                current_db(&mut doc, op_at)?;
                decode_length(&mut cur)?;
                decode_length(&mut cur)?;
            }
            OP_EXPIRE_MS => {
                let db = current_db(&mut doc, op_at)?;
                let expire_at_ms = cur.read_u64_le()?;
                let tag_at = cur.position();
                let tag = cur.read_u8()?;
                let entry = decode_entry(tag, tag_at, &mut cur, Some(expire_at_ms))?;
                db.entries.push(entry);
            }
            OP_END => {
                body_end = cur.position();
                break;
            }
            tag => {
                let db = current_db(&mut doc, op_at)?;
                let entry = decode_entry(tag, op_at, &mut cur, None)?;
                db.entries.push(entry);
            }
        }
    }

    // -------- trailer --------
    let stored = cur.read_u64_le()?;
    let computed = checksum::sum64(&bytes[..body_end]);
    let integrity = if stored == computed {
        Integrity::Verified
    } else {
        Integrity::Mismatch { stored, computed }
    };

    Ok(Decoded {
        document: doc,
        integrity,
    })
}

/// Like [`decode`], but a checksum mismatch becomes a hard
/// [`CodecError::ChecksumMismatch`] and only a verified document is returned.
pub fn decode_verified(bytes: &[u8]) -> Result<Document, CodecError> {
    let decoded = decode(bytes)?;
    match decoded.integrity {
        Integrity::Verified => Ok(decoded.document),
        Integrity::Mismatch { stored, computed } => {
            Err(CodecError::ChecksumMismatch { stored, computed })
        }
    }
}

/// The database currently accumulating entries, or
/// [`CodecError::EntryBeforeDatabaseSelected`] if no select-db opcode has
/// been seen yet. `at` is the offset of the record that needed one.
fn current_db(doc: &mut Document, at: usize) -> Result<&mut Database, CodecError> {
    doc.databases
        .last_mut()
        .ok_or(CodecError::EntryBeforeDatabaseSelected { at })
}

/// Decodes one entry body: the tag has already been consumed, the key string
/// and tag-specific payload follow.
///
/// The tag is validated before the key is touched so an unknown tag reports
/// [`CodecError::UnknownValueType`] at the tag byte rather than a confusing
/// truncation error further in.
fn decode_entry(
    tag: u8,
    tag_at: usize,
    cur: &mut Cursor<'_>,
    expire_at_ms: Option<u64>,
) -> Result<Entry, CodecError> {
    if !format::is_value_tag(tag) {
        return Err(CodecError::UnknownValueType { at: tag_at, tag });
    }
    let key = read_string(cur)?;
    let value = decode_value(tag, tag_at, cur)?;
    Ok(Entry {
        key,
        value,
        expire_at_ms,
    })
}
