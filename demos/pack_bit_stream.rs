//! Packs a handful of CRAM-style record fields into a bit stream and
//! hex-dumps the result.
//!
//! Run with: cargo run --example pack_bit_stream

use cram_encoder::Result;
use cram_encoder::io::{BitWriter, write_itf8};

fn main() -> Result<()> {
    let mut stream = Vec::new();

    // Block header: record count as ITF8, written while byte-aligned.
    write_itf8(&mut stream, 3)?;

    {
        let mut writer = BitWriter::new(&mut stream);
        // Three records: a 3-bit feature code, an 11-bit read length and a
        // mapped/unmapped flag each.
        for (code, read_len, mapped) in
            [(0b101u8, 151u64, true), (0b010, 76, true), (0b111, 1024, false)]
        {
            writer.write_bits(code, 3)?;
            writer.write_u64(read_len, 11)?;
            writer.write_bit(mapped)?;
        }
        writer.finish()?;
    }

    println!("Packed 3 records into {} bytes:", stream.len());
    for chunk in stream.chunks(16) {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02X}", b)).collect();
        println!("  {}", hex.join(" "));
    }

    Ok(())
}
