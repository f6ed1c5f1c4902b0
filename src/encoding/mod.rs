//! # Encoding Module
//!
//! Byte-level building blocks shared by every option type:
//!
//! - **Sortable transforms**: big-endian fixed-width encodings whose raw byte
//!   order matches numeric order (sign-bit flip, IEEE total-order bits)
//! - **Varint encoding**: length and scale prefixes for variable-width kinds
//! - **Markers**: the one-byte present/null prefix every value starts with

pub mod sortable;
pub mod varint;

pub use varint::{decode_varint, encode_varint, read_varint, varint_len, write_varint};

use eyre::{ensure, Result};

use crate::config::{MARKER_WIDTH, NULL_MARKER, PRESENT_MARKER};

/// Reads the marker at `offset` and reports whether it denotes null.
pub fn read_marker(buf: &[u8], offset: usize, limit: usize) -> Result<bool> {
    ensure!(
        offset < limit && limit <= buf.len(),
        "no marker byte at offset {} (limit {}, buffer {})",
        offset,
        limit,
        buf.len()
    );
    match buf[offset] {
        NULL_MARKER => Ok(true),
        PRESENT_MARKER => Ok(false),
        other => eyre::bail!("invalid value marker 0x{:02X} at offset {}", other, offset),
    }
}

/// Checks that a fixed-width value of `width` bytes fits before `limit`, and
/// that a null carries only zero padding.
pub fn ensure_fixed(buf: &[u8], offset: usize, limit: usize, width: usize) -> Result<()> {
    ensure!(
        limit <= buf.len() && offset + width <= limit,
        "truncated value: need {} bytes at offset {}, limit {}",
        width,
        offset,
        limit
    );
    if read_marker(buf, offset, limit)? {
        ensure!(
            buf[offset + MARKER_WIDTH..offset + width].iter().all(|&b| b == 0),
            "null value at offset {} has non-zero padding",
            offset
        );
    }
    Ok(())
}

/// Translates a marker byte read from a stream.
pub(crate) fn marker_from_stream(marker: u8) -> std::io::Result<bool> {
    match marker {
        NULL_MARKER => Ok(true),
        PRESENT_MARKER => Ok(false),
        other => Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid value marker 0x{:02X}", other),
        )),
    }
}

/// Stream counterpart of the padding check in [`ensure_fixed`]: `value` is a
/// whole fixed-width null, marker included.
pub(crate) fn null_padding_from_stream(value: &[u8]) -> std::io::Result<()> {
    if value[MARKER_WIDTH..].iter().all(|&b| b == 0) {
        Ok(())
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "null value has non-zero padding",
        ))
    }
}

const _: () = assert!(MARKER_WIDTH == 1, "marker helpers read exactly one byte");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_recognized() {
        assert!(!read_marker(&[PRESENT_MARKER], 0, 1).unwrap());
        assert!(read_marker(&[NULL_MARKER], 0, 1).unwrap());
        assert!(read_marker(&[0x02], 0, 1).is_err());
        assert!(read_marker(&[PRESENT_MARKER], 1, 1).is_err());
        assert!(read_marker(&[PRESENT_MARKER], 0, 2).is_err());
    }

    #[test]
    fn fixed_window_must_fit() {
        let buf = [PRESENT_MARKER, 0, 0, 0, 7];
        ensure_fixed(&buf, 0, 5, 5).unwrap();
        assert!(ensure_fixed(&buf, 0, 4, 5).is_err());
        assert!(ensure_fixed(&buf, 1, 5, 5).is_err());
    }

    #[test]
    fn null_padding_must_be_zero() {
        ensure_fixed(&[NULL_MARKER, 0, 0], 0, 3, 3).unwrap();
        assert!(ensure_fixed(&[NULL_MARKER, 0, 1], 0, 3, 3).is_err());
    }

    #[test]
    fn stream_markers_map_to_invalid_data() {
        assert!(marker_from_stream(NULL_MARKER).unwrap());
        let err = marker_from_stream(0x7F).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn stream_null_padding_must_be_zero() {
        null_padding_from_stream(&[NULL_MARKER, 0, 0]).unwrap();
        let err = null_padding_from_stream(&[NULL_MARKER, 0, 1]).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
