//! Nullable arbitrary-precision decimal.
//!
//! ```text
//! present: [0x01][sign][varint scale][varint length][magnitude]
//! null:    [0xFF]
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{self, Read, Write};

use eyre::{Result, WrapErr};

use super::{compare_null_last, ValueOption};
use crate::config::{MARKER_WIDTH, NULL_MARKER, PRESENT_MARKER};
use crate::decimal::bytes::{self, EncodedDecimal};
use crate::decimal::Decimal;
use crate::encoding::{marker_from_stream, read_marker};
use crate::error::FormatError;
use crate::record::FieldKind;

#[derive(Debug, Clone, Default)]
pub struct DecimalOption {
    value: Option<Decimal>,
}

impl DecimalOption {
    pub const fn new() -> Self {
        Self { value: None }
    }

    pub fn of(value: Decimal) -> Self {
        Self { value: Some(value) }
    }

    /// # Panics
    ///
    /// Panics if the slot is null.
    pub fn get(&self) -> &Decimal {
        match &self.value {
            Some(v) => v,
            None => panic!("get() called on null DecimalOption"),
        }
    }

    pub fn or<'a>(&'a self, fallback: &'a Decimal) -> &'a Decimal {
        self.value.as_ref().unwrap_or(fallback)
    }

    pub fn as_option(&self) -> Option<&Decimal> {
        self.value.as_ref()
    }

    pub fn modify(&mut self, value: Decimal) -> &mut Self {
        self.value = Some(value);
        self
    }

    pub fn modify_opt(&mut self, value: Option<Decimal>) -> &mut Self {
        self.value = value;
        self
    }

    /// Parses and stores `text`. On error the slot is left unchanged.
    pub fn modify_str(&mut self, text: &str) -> Result<&mut Self, FormatError> {
        self.value = Some(Decimal::parse(text)?);
        Ok(self)
    }
}

/// Parses the present payload of the value at `offset`, or `None` for null.
fn encoded_at(buf: &[u8], offset: usize, limit: usize) -> Result<Option<EncodedDecimal<'_>>> {
    if read_marker(buf, offset, limit)? {
        return Ok(None);
    }
    let encoded = EncodedDecimal::parse(&buf[offset + MARKER_WIDTH..limit])
        .wrap_err_with(|| format!("malformed decimal at offset {}", offset))?;
    Ok(Some(encoded))
}

impl ValueOption for DecimalOption {
    const KIND: FieldKind = FieldKind::Decimal;

    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn set_null(&mut self) {
        self.value = None;
    }

    fn encoded_len(&self) -> usize {
        MARKER_WIDTH + self.value.as_ref().map_or(0, bytes::payload_len)
    }

    fn write<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match &self.value {
            Some(value) => {
                out.write_all(&[PRESENT_MARKER])?;
                bytes::write_payload(value, out)
            }
            None => out.write_all(&[NULL_MARKER]),
        }
    }

    fn read_fields<R: Read + ?Sized>(&mut self, input: &mut R) -> io::Result<()> {
        let mut marker = [0u8; 1];
        input.read_exact(&mut marker)?;
        self.value = if marker_from_stream(marker[0])? {
            None
        } else {
            Some(bytes::read_payload(input)?)
        };
        Ok(())
    }

    fn restore(&mut self, buf: &[u8], offset: usize, limit: usize) -> Result<usize> {
        match encoded_at(buf, offset, limit)? {
            Some(encoded) => {
                self.value = Some(encoded.to_decimal());
                Ok(offset + MARKER_WIDTH + encoded.width())
            }
            None => {
                self.value = None;
                Ok(offset + MARKER_WIDTH)
            }
        }
    }

    fn bytes_length(buf: &[u8], offset: usize, limit: usize) -> Result<usize> {
        Ok(MARKER_WIDTH + encoded_at(buf, offset, limit)?.map_or(0, |e| e.width()))
    }

    fn compare_bytes(
        a: &[u8],
        a_offset: usize,
        a_length: usize,
        b: &[u8],
        b_offset: usize,
        b_length: usize,
    ) -> Ordering {
        let (ma, mb) = (a[a_offset], b[b_offset]);
        if ma == NULL_MARKER || mb == NULL_MARKER {
            return ma.cmp(&mb);
        }
        bytes::compare_payloads(
            &a[a_offset + MARKER_WIDTH..a_offset + a_length],
            &b[b_offset + MARKER_WIDTH..b_offset + b_length],
        )
    }
}

impl Ord for DecimalOption {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_null_last(self.value.as_ref(), other.value.as_ref())
    }
}

impl PartialOrd for DecimalOption {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DecimalOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for DecimalOption {}

impl Hash for DecimalOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for DecimalOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => fmt::Display::fmt(v, f),
            None => f.write_str("null"),
        }
    }
}

impl From<Decimal> for DecimalOption {
    fn from(value: Decimal) -> Self {
        Self::of(value)
    }
}

impl From<Option<Decimal>> for DecimalOption {
    fn from(value: Option<Decimal>) -> Self {
        Self { value }
    }
}
