//! # Length-Prefix Varints
//!
//! Variable-width types (String, Decimal) carry their payload length, and the
//! decimal scale, as a varint between the marker byte and the payload. Short
//! text fields dominate batch data, so the encoding spends one byte on lengths
//! up to 240 and grows only when it must.
//!
//! ## Encoding Format
//!
//! | Value Range              | Bytes | Format                              |
//! |--------------------------|-------|-------------------------------------|
//! | 0 - 240                  | 1     | `[value]`                           |
//! | 241 - 2287               | 2     | `[241 + (v-240)>>8, (v-240)&FF]`    |
//! | 2288 - 67823             | 3     | `[249, (v-2288)>>8, (v-2288)&FF]`   |
//! | 67824 - 16777215         | 4     | `[250, v>>16, v>>8, v]`             |
//! | 16777216 - 4294967295    | 5     | `[251, v>>24, v>>16, v>>8, v]`      |
//! | 4294967296 - u64::MAX    | 9     | `[255, 8-byte big-endian]`          |
//!
//! Markers 252-254 are invalid. The width of an encoded varint is fully
//! determined by its first byte, which is what lets `bytes_length` skip over a
//! packed value without decoding its payload.
//!
//! ## Entry Points
//!
//! - Slice level: [`encode_varint`], [`decode_varint`], [`varint_len`], [`varint_width`]
//! - Stream level: [`write_varint`], [`read_varint`]
//!
//! Slice decoding reports malformed input through `eyre`; stream decoding
//! reports it as `io::ErrorKind::InvalidData` so it travels with genuine I/O
//! failures from the same source.

use std::io::{self, Read, Write};

use eyre::{bail, ensure, Result};

/// Largest encoded varint in bytes.
pub const MAX_VARINT_LEN: usize = 9;

pub fn varint_len(value: u64) -> usize {
    match value {
        0..=240 => 1,
        241..=2287 => 2,
        2288..=67823 => 3,
        67824..=0xFF_FFFF => 4,
        0x100_0000..=0xFFFF_FFFF => 5,
        _ => 9,
    }
}

/// Returns the total width of a varint from its first byte, or `None` for a
/// reserved marker.
pub fn varint_width(first: u8) -> Option<usize> {
    match first {
        0..=240 => Some(1),
        241..=248 => Some(2),
        249 => Some(3),
        250 => Some(4),
        251 => Some(5),
        255 => Some(9),
        _ => None,
    }
}

/// Encodes `value` into the front of `buf` and returns the bytes written.
///
/// # Panics
///
/// Panics if `buf` is shorter than `varint_len(value)`.
pub fn encode_varint(value: u64, buf: &mut [u8]) -> usize {
    let width = varint_len(value);
    match width {
        1 => buf[0] = value as u8,
        2 => {
            let v = value - 240;
            buf[0] = ((v >> 8) + 241) as u8;
            buf[1] = v as u8;
        }
        3 => {
            let v = value - 2288;
            buf[0] = 249;
            buf[1] = (v >> 8) as u8;
            buf[2] = v as u8;
        }
        4 => {
            buf[0] = 250;
            buf[1..4].copy_from_slice(&(value as u32).to_be_bytes()[1..]);
        }
        5 => {
            buf[0] = 251;
            buf[1..5].copy_from_slice(&(value as u32).to_be_bytes());
        }
        _ => {
            buf[0] = 255;
            buf[1..9].copy_from_slice(&value.to_be_bytes());
        }
    }
    width
}

/// Decodes a varint from the front of `buf`, returning `(value, bytes_read)`.
pub fn decode_varint(buf: &[u8]) -> Result<(u64, usize)> {
    ensure!(!buf.is_empty(), "empty buffer for varint decode");
    let first = buf[0];
    let Some(width) = varint_width(first) else {
        bail!("invalid varint marker: {}", first);
    };
    ensure!(buf.len() >= width, "truncated {}-byte varint", width);
    Ok((assemble(first, &buf[1..width]), width))
}

/// Writes `value` as a varint to `out`.
pub fn write_varint<W: Write + ?Sized>(value: u64, out: &mut W) -> io::Result<()> {
    let mut buf = [0u8; MAX_VARINT_LEN];
    let n = encode_varint(value, &mut buf);
    out.write_all(&buf[..n])
}

/// Reads one varint from `input`.
pub fn read_varint<R: Read + ?Sized>(input: &mut R) -> io::Result<u64> {
    let mut first = [0u8; 1];
    input.read_exact(&mut first)?;
    let width = varint_width(first[0]).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid varint marker: {}", first[0]),
        )
    })?;
    let mut rest = [0u8; MAX_VARINT_LEN - 1];
    input.read_exact(&mut rest[..width - 1])?;
    Ok(assemble(first[0], &rest[..width - 1]))
}

fn assemble(first: u8, tail: &[u8]) -> u64 {
    match first {
        0..=240 => first as u64,
        241..=248 => 240 + ((first as u64 - 241) << 8) + tail[0] as u64,
        249 => 2288 + ((tail[0] as u64) << 8) + tail[1] as u64,
        _ => tail.iter().fold(0u64, |acc, b| (acc << 8) | *b as u64),
    }
}
