//! Variable-width unsigned integer codec.
//!
//! Every size and count in the format goes through these two functions. The
//! four wire forms (1, 2, 5, or 9 bytes) are documented in [`crate::format`].

use byteorder::{BigEndian, WriteBytesExt};

use crate::cursor::Cursor;
use crate::error::CodecError;
use crate::format::{LEN_14BIT_MAX, LEN_32BIT, LEN_64BIT, LEN_6BIT_MAX};

/// Decodes one length-encoded integer, branching on the control byte's two
/// high bits.
///
/// The 5-byte and 9-byte forms require the control byte to be exactly
/// `0x80` / `0xFE`; every other `10xxxxxx` or `11xxxxxx` byte is
/// [`CodecError::InvalidLengthEncoding`].
pub fn decode_length(cur: &mut Cursor<'_>) -> Result<u64, CodecError> {
    let at = cur.position();
    let ctrl = cur.read_u8()?;
    match ctrl >> 6 {
        0b00 => Ok(u64::from(ctrl & 0x3F)),
        0b01 => {
            // High 6 bits in the control byte, low 8 in the next byte.
            let low = cur.read_u8()?;
            Ok((u64::from(ctrl & 0x3F) << 8) | u64::from(low))
        }
        0b10 if ctrl == LEN_32BIT => Ok(u64::from(cur.read_u32_be()?)),
        0b11 if ctrl == LEN_64BIT => cur.read_u64_be(),
        _ => Err(CodecError::InvalidLengthEncoding { at, byte: ctrl }),
    }
}

/// Appends the narrowest encoding of `value` to `buf`.
///
/// Form selection: 6-bit below 64, 14-bit below 16384, 32-bit up to
/// `u32::MAX`, 64-bit beyond. The 9-byte form covers all of `u64`, so this
/// never returns [`CodecError::UnsupportedSize`]; the variant stands ready
/// should a caller ever hold a size wider than the widest form.
pub fn encode_length(buf: &mut Vec<u8>, value: u64) -> Result<(), CodecError> {
    if value <= LEN_6BIT_MAX {
        buf.write_u8(value as u8)?;
    } else if value <= LEN_14BIT_MAX {
        buf.write_u8(0b0100_0000 | (value >> 8) as u8)?;
        buf.write_u8((value & 0xFF) as u8)?;
    } else if value <= u64::from(u32::MAX) {
        buf.write_u8(LEN_32BIT)?;
        buf.write_u32::<BigEndian>(value as u32)?;
    } else {
        buf.write_u8(LEN_64BIT)?;
        buf.write_u64::<BigEndian>(value)?;
    }
    Ok(())
}
