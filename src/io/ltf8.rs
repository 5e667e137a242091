//! LTF8, the 64-bit companion of [`itf8`](super::itf8).
//!
//! Same leading-1s length prefix, extended to 0–8 trailing bytes. Unlike
//! ITF8 every trailing byte is whole: the 9-byte form is `0xFF` followed by
//! the value in big-endian order, and no nibble packing happens anywhere.

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::utils::error::Result;

/// Writes `value` as LTF8 and returns the number of bytes emitted.
pub fn write_ltf8<W: Write>(sink: &mut W, value: i64) -> Result<usize> {
    let v = value as u64;
    if v >> 7 == 0 {
        sink.write_u8(v as u8)?;
        Ok(1)
    } else if v >> 14 == 0 {
        sink.write_u8((v >> 8) as u8 | 0x80)?;
        sink.write_u8(v as u8)?;
        Ok(2)
    } else if v >> 21 == 0 {
        sink.write_u8((v >> 16) as u8 | 0xC0)?;
        sink.write_u16::<BigEndian>(v as u16)?;
        Ok(3)
    } else if v >> 28 == 0 {
        sink.write_u32::<BigEndian>(v as u32 | 0xE000_0000)?;
        Ok(4)
    } else if v >> 35 == 0 {
        sink.write_u8((v >> 32) as u8 | 0xF0)?;
        sink.write_u32::<BigEndian>(v as u32)?;
        Ok(5)
    } else if v >> 42 == 0 {
        sink.write_u16::<BigEndian>((v >> 32) as u16 | 0xF800)?;
        sink.write_u32::<BigEndian>(v as u32)?;
        Ok(6)
    } else if v >> 49 == 0 {
        sink.write_u8((v >> 48) as u8 | 0xFC)?;
        sink.write_u16::<BigEndian>((v >> 32) as u16)?;
        sink.write_u32::<BigEndian>(v as u32)?;
        Ok(7)
    } else if v >> 56 == 0 {
        sink.write_u64::<BigEndian>(v | 0xFE00_0000_0000_0000)?;
        Ok(8)
    } else {
        sink.write_u8(0xFF)?;
        sink.write_u64::<BigEndian>(v)?;
        Ok(9)
    }
}

/// Reads one LTF8-encoded value.
pub fn read_ltf8<R: Read>(source: &mut R) -> Result<i64> {
    let b0 = source.read_u8()? as u64;
    let value = if b0 >> 7 == 0 {
        b0
    } else if b0 >> 6 == 0b10 {
        (b0 & 0x3F) << 8 | source.read_u8()? as u64
    } else if b0 >> 5 == 0b110 {
        (b0 & 0x1F) << 16 | source.read_u16::<BigEndian>()? as u64
    } else if b0 >> 4 == 0b1110 {
        (b0 & 0x0F) << 24 | source.read_u24::<BigEndian>()? as u64
    } else if b0 >> 3 == 0b1_1110 {
        (b0 & 0x07) << 32 | source.read_u32::<BigEndian>()? as u64
    } else if b0 >> 2 == 0b11_1110 {
        (b0 & 0x03) << 40
            | (source.read_u8()? as u64) << 32
            | source.read_u32::<BigEndian>()? as u64
    } else if b0 >> 1 == 0b111_1110 {
        (b0 & 0x01) << 48
            | (source.read_u16::<BigEndian>()? as u64) << 32
            | source.read_u32::<BigEndian>()? as u64
    } else if b0 == 0xFE {
        (source.read_u24::<BigEndian>()? as u64) << 32
            | source.read_u32::<BigEndian>()? as u64
    } else {
        source.read_u64::<BigEndian>()?
    };
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: i64) -> Vec<u8> {
        let mut buf = Vec::new();
        let n = write_ltf8(&mut buf, value).unwrap();
        assert_eq!(n, buf.len());
        buf
    }

    #[test]
    fn encoded_lengths_track_the_value_width() {
        let boundaries: [(i64, usize); 9] = [
            (0x7F, 1),
            (0x80, 2),
            (0x3FFF, 2),
            (0x4000, 3),
            (0x20_0000, 4),
            (0x1000_0000, 5),
            ((1 << 35), 6),
            ((1 << 42), 7),
            ((1 << 49), 8),
        ];
        for &(value, len) in &boundaries {
            assert_eq!(encode(value).len(), len, "length for {:#x}", value);
        }
        assert_eq!(encode(1 << 56).len(), 9);
        assert_eq!(encode(-1).len(), 9);
    }

    #[test]
    fn concrete_byte_patterns() {
        assert_eq!(encode(0), [0x00]);
        assert_eq!(encode(0x80), [0x80, 0x80]);
        assert_eq!(encode(0x4000), [0xC0, 0x40, 0x00]);
        assert_eq!(
            encode((1 << 56) - 1),
            [0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
        assert_eq!(
            encode(-1),
            [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn round_trip_across_the_signed_range() {
        let mut values = vec![0i64, 1, -1, i64::MAX, i64::MIN];
        for shift in 0..63 {
            values.push(1 << shift);
            values.push((1 << shift) - 1);
            values.push(-(1 << shift));
        }
        for &value in &values {
            let buf = encode(value);
            let mut cursor = buf.as_slice();
            assert_eq!(
                read_ltf8(&mut cursor).unwrap(),
                value,
                "value {:#x} mangled by round trip",
                value
            );
            assert!(cursor.is_empty(), "trailing bytes after {:#x}", value);
        }
    }
}
