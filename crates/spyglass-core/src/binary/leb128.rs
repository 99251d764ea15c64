//! LEB128 (Little Endian Base 128) decoding primitives.
//!
//! Every integer in the binary format outside the fixed 8-byte header is
//! LEB128-encoded. The 7-bit readers are the 32-bit algorithms narrowed to a
//! single-byte result.

use crate::error::{ByteOffset, DecodeContext, DecodeError, DecodeErrorKind};

/// An unsigned 32-bit LEB128 encoding terminates within this many bytes.
/// Encodings that keep the continuation bit set past it are rejected; the
/// final byte's surplus high bits are discarded rather than flagged.
const MAX_LEB128_BYTES: usize = 5;

/// A cursor over a byte slice, tracking the current read position.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Whether we've consumed all input.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Read a single byte, advancing the cursor.
    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        if self.pos < self.data.len() {
            let b = self.data[self.pos];
            self.pos += 1;
            Ok(b)
        } else {
            Err(DecodeError {
                offset: ByteOffset(self.pos),
                context: DecodeContext::Leb128,
                kind: DecodeErrorKind::UnexpectedEof,
            })
        }
    }

    /// Read exactly `n` bytes as a slice, advancing the cursor.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if n <= self.data.len() - self.pos {
            let slice = &self.data[self.pos..self.pos + n];
            self.pos += n;
            Ok(slice)
        } else {
            Err(DecodeError {
                offset: ByteOffset(self.pos),
                context: DecodeContext::Leb128,
                kind: DecodeErrorKind::UnexpectedEof,
            })
        }
    }

    /// Advance the cursor by `n` bytes.
    pub fn advance(&mut self, n: usize) -> Result<(), DecodeError> {
        if n <= self.data.len() - self.pos {
            self.pos += n;
            Ok(())
        } else {
            Err(DecodeError {
                offset: ByteOffset(self.pos),
                context: DecodeContext::Leb128,
                kind: DecodeErrorKind::UnexpectedEof,
            })
        }
    }
}

/// Decode an unsigned LEB128-encoded u32.
///
/// Fails with `UnexpectedEof` when the continuation bit is still set on the
/// last available byte, and with `Leb128TooLong` when the encoding exceeds
/// [`MAX_LEB128_BYTES`].
pub fn decode_u32(cursor: &mut Cursor<'_>) -> Result<u32, DecodeError> {
    let start = cursor.position();
    let mut result: u32 = 0;
    let mut shift: u32 = 0;

    for _ in 0..MAX_LEB128_BYTES {
        let byte = cursor.read_byte().map_err(|e| e.at_offset(start))?;

        // Shifting the 5th byte by 28 drops its top 3 bits; non-canonical
        // encodings of in-range values still decode.
        result |= u32::from(byte & 0x7F).wrapping_shl(shift);

        if byte & 0x80 == 0 {
            return Ok(result);
        }

        shift += 7;
    }

    Err(DecodeError {
        offset: ByteOffset(start),
        context: DecodeContext::Leb128,
        kind: DecodeErrorKind::Leb128TooLong,
    })
}

/// Decode a signed LEB128-encoded i32.
///
/// Sign extension is applied from the final byte's sign bit when the
/// encoding is shorter than the full 32 bits.
pub fn decode_i32(cursor: &mut Cursor<'_>) -> Result<i32, DecodeError> {
    let start = cursor.position();
    let mut result: i32 = 0;
    let mut shift: u32 = 0;

    for _ in 0..MAX_LEB128_BYTES {
        let byte = cursor.read_byte().map_err(|e| e.at_offset(start))?;

        result |= i32::from(byte & 0x7F).wrapping_shl(shift);
        shift += 7;

        if byte & 0x80 == 0 {
            if shift < 32 && (byte & 0x40) != 0 {
                result |= !0i32 << shift;
            }
            return Ok(result);
        }
    }

    Err(DecodeError {
        offset: ByteOffset(start),
        context: DecodeContext::Leb128,
        kind: DecodeErrorKind::Leb128TooLong,
    })
}

/// Decode an unsigned 7-bit field (section ids, counts, flag bytes).
pub fn decode_u7(cursor: &mut Cursor<'_>) -> Result<u8, DecodeError> {
    Ok(decode_u32(cursor)? as u8)
}

/// Decode a signed 7-bit field (type constructor codes).
pub fn decode_i7(cursor: &mut Cursor<'_>) -> Result<i8, DecodeError> {
    Ok(decode_i32(cursor)? as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── decode_u32 ──────────────────────────────────────────

    #[test]
    fn u32_zero() {
        let mut c = Cursor::new(&[0x00]);
        assert_eq!(decode_u32(&mut c).unwrap(), 0);
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn u32_single_byte() {
        let mut c = Cursor::new(&[0x08]);
        assert_eq!(decode_u32(&mut c).unwrap(), 8);
    }

    #[test]
    fn u32_max_single_byte() {
        let mut c = Cursor::new(&[0x7F]);
        assert_eq!(decode_u32(&mut c).unwrap(), 127);
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn u32_two_bytes() {
        // 128 = 0x80 0x01
        let mut c = Cursor::new(&[0x80, 0x01]);
        assert_eq!(decode_u32(&mut c).unwrap(), 128);
        assert_eq!(c.position(), 2);
    }

    #[test]
    fn u32_624485() {
        // Classic LEB128 test value: 624485 = 0xE5 0x8E 0x26
        let mut c = Cursor::new(&[0xE5, 0x8E, 0x26]);
        assert_eq!(decode_u32(&mut c).unwrap(), 624485);
        assert_eq!(c.position(), 3);
    }

    #[test]
    fn u32_max_value() {
        // u32::MAX = 0xFF 0xFF 0xFF 0xFF 0x0F
        let mut c = Cursor::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
        assert_eq!(decode_u32(&mut c).unwrap(), u32::MAX);
        assert_eq!(c.position(), 5);
    }

    #[test]
    fn u32_noncanonical_high_bits_discarded() {
        // The 5th byte only contributes 4 bits; the rest are dropped.
        let mut c = Cursor::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F]);
        assert_eq!(decode_u32(&mut c).unwrap(), u32::MAX);
    }

    #[test]
    fn u32_too_long() {
        let mut c = Cursor::new(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x00]);
        let err = decode_u32(&mut c).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::Leb128TooLong);
    }

    #[test]
    fn u32_lone_continuation_byte() {
        // A single byte with the continuation bit set never reads a second.
        let mut c = Cursor::new(&[0x80]);
        let err = decode_u32(&mut c).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::UnexpectedEof);
        assert_eq!(err.offset, ByteOffset(0));
    }

    // ── decode_i32 ──────────────────────────────────────────

    #[test]
    fn i32_zero() {
        let mut c = Cursor::new(&[0x00]);
        assert_eq!(decode_i32(&mut c).unwrap(), 0);
    }

    #[test]
    fn i32_positive() {
        let mut c = Cursor::new(&[0x2A]);
        assert_eq!(decode_i32(&mut c).unwrap(), 42);
    }

    #[test]
    fn i32_negative_one() {
        let mut c = Cursor::new(&[0x7F]);
        assert_eq!(decode_i32(&mut c).unwrap(), -1);
    }

    #[test]
    fn i32_negative_128() {
        // -128 = 0x80 0x7F
        let mut c = Cursor::new(&[0x80, 0x7F]);
        assert_eq!(decode_i32(&mut c).unwrap(), -128);
    }

    #[test]
    fn i32_min_value() {
        // i32::MIN = 0x80 0x80 0x80 0x80 0x78
        let mut c = Cursor::new(&[0x80, 0x80, 0x80, 0x80, 0x78]);
        assert_eq!(decode_i32(&mut c).unwrap(), i32::MIN);
    }

    #[test]
    fn i32_max_value() {
        // i32::MAX = 0xFF 0xFF 0xFF 0xFF 0x07
        let mut c = Cursor::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0x07]);
        assert_eq!(decode_i32(&mut c).unwrap(), i32::MAX);
    }

    #[test]
    fn i32_eof_mid_encoding() {
        let mut c = Cursor::new(&[0x80, 0x80]);
        let err = decode_i32(&mut c).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::UnexpectedEof);
    }

    // ── 7-bit readers ───────────────────────────────────────

    #[test]
    fn u7_section_id() {
        let mut c = Cursor::new(&[0x0B]);
        assert_eq!(decode_u7(&mut c).unwrap(), 11);
    }

    #[test]
    fn i7_type_constructor() {
        // -0x01 (i32) = 0x7F
        let mut c = Cursor::new(&[0x7F]);
        assert_eq!(decode_i7(&mut c).unwrap(), -0x01);
    }

    #[test]
    fn i7_func_form() {
        // -0x20 (func) = 0x60
        let mut c = Cursor::new(&[0x60]);
        assert_eq!(decode_i7(&mut c).unwrap(), -0x20);
    }

    // ── cursor ──────────────────────────────────────────────

    #[test]
    fn cursor_tracks_position() {
        let mut c = Cursor::new(&[0x01, 0x02, 0x03]);
        assert_eq!(c.position(), 0);
        c.read_byte().unwrap();
        assert_eq!(c.position(), 1);
        c.read_bytes(2).unwrap();
        assert_eq!(c.position(), 3);
        assert!(c.is_empty());
    }

    #[test]
    fn cursor_advance_is_bounds_checked() {
        let mut c = Cursor::new(&[0x01, 0x02]);
        assert!(c.advance(3).is_err());
        assert_eq!(c.position(), 0);
        c.advance(2).unwrap();
        assert!(c.is_empty());
    }
}
