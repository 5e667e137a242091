//! MSB-first bit reader, the decoding counterpart of
//! [`BitWriter`](super::bit_writer::BitWriter).
//!
//! Values come back in the same order and bit numbering the writer used, so
//! a stream packed with `write_u64(v, n)` yields `v`'s low `n` bits from
//! `read_long_bits(n)`.

use std::io::Read;

use byteorder::ReadBytesExt;

use super::bit_writer::BitIoError;

pub struct BitReader<R: Read> {
    source: R,
    buffered_byte: u8,
    // Count of still-unread bits; the next bit out is bit buffered_bits - 1.
    buffered_bits: u32,
}

impl<R: Read> BitReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            buffered_byte: 0,
            buffered_bits: 0,
        }
    }

    pub fn read_bit(&mut self) -> Result<bool, BitIoError> {
        if self.buffered_bits == 0 {
            self.buffered_byte = self.source.read_u8()?;
            self.buffered_bits = 8;
        }
        self.buffered_bits -= 1;
        Ok((self.buffered_byte >> self.buffered_bits) & 1 == 1)
    }

    /// Reads `bit_count` bits, most significant first, into the low bits of
    /// the result. `bit_count` above 32 is a contract violation.
    pub fn read_bits(&mut self, bit_count: u32) -> Result<u32, BitIoError> {
        if bit_count > 32 {
            return Err(BitIoError::ReadTooWide { bit_count, max: 32 });
        }
        let mut value = 0u32;
        for _ in 0..bit_count {
            value = (value << 1) | self.read_bit()? as u32;
        }
        Ok(value)
    }

    /// 64-bit form of [`read_bits`](BitReader::read_bits).
    pub fn read_long_bits(&mut self, bit_count: u32) -> Result<u64, BitIoError> {
        if bit_count > 64 {
            return Err(BitIoError::ReadTooWide { bit_count, max: 64 });
        }
        let mut value = 0u64;
        for _ in 0..bit_count {
            value = (value << 1) | self.read_bit()? as u64;
        }
        Ok(value)
    }

    /// Returns true if the next read starts at a byte boundary.
    pub fn byte_aligned(&self) -> bool {
        self.buffered_bits == 0
    }
}
