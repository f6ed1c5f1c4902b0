//! Nullable UTF-8 text.
//!
//! ```text
//! present: [0x01][varint byte length][UTF-8 bytes]
//! null:    [0xFF]
//! ```
//!
//! The buffer is kept across mutations and across null transitions, so a slot
//! reused for many records stops allocating once it has grown to the longest
//! value. Ordering compares UTF-8 bytes, which is code point order, and
//! `compare_bytes` compares the same bytes in place.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{self, Read, Write};

use eyre::{ensure, Result, WrapErr};

use super::{compare_null_last, invalid_data, ValueOption};
use crate::config::{MARKER_WIDTH, NULL_MARKER, PRESENT_MARKER};
use crate::encoding::varint::{decode_varint, read_varint, varint_len, write_varint};
use crate::encoding::{marker_from_stream, read_marker};
use crate::error::FormatError;
use crate::record::FieldKind;
use crate::text;

#[derive(Debug, Clone, Default)]
pub struct StringOption {
    text: String,
    present: bool,
}

impl StringOption {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            present: false,
        }
    }

    pub fn of(value: &str) -> Self {
        Self {
            text: value.to_string(),
            present: true,
        }
    }

    /// # Panics
    ///
    /// Panics if the slot is null.
    pub fn get(&self) -> &str {
        self.expect_present("get");
        &self.text
    }

    /// Raw UTF-8 bytes of the payload.
    ///
    /// # Panics
    ///
    /// Panics if the slot is null.
    pub fn get_bytes(&self) -> &[u8] {
        self.expect_present("get_bytes");
        self.text.as_bytes()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.present.then_some(self.text.as_str())
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.present.then_some(self.text.as_bytes())
    }

    pub fn or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.present {
            &self.text
        } else {
            fallback
        }
    }

    pub fn modify(&mut self, value: &str) -> &mut Self {
        self.text.clear();
        self.text.push_str(value);
        self.present = true;
        self
    }

    pub fn modify_opt(&mut self, value: Option<&str>) -> &mut Self {
        match value {
            Some(v) => self.modify(v),
            None => {
                self.set_null();
                self
            }
        }
    }

    /// Stores `length` bytes of `bytes` starting at `offset`. Invalid UTF-8 is
    /// rejected and leaves the slot unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the range lies outside `bytes`.
    pub fn modify_bytes(
        &mut self,
        bytes: &[u8],
        offset: usize,
        length: usize,
    ) -> Result<&mut Self, FormatError> {
        let value = std::str::from_utf8(&bytes[offset..offset + length])?;
        Ok(self.modify(value))
    }

    /// Makes the slot the empty string.
    pub fn reset(&mut self) -> &mut Self {
        self.text.clear();
        self.present = true;
        self
    }

    /// Appends `value` to the payload.
    ///
    /// # Panics
    ///
    /// Panics if the slot is null.
    pub fn append(&mut self, value: &str) -> &mut Self {
        self.expect_present("append");
        self.text.push_str(value);
        self
    }

    /// Appends the payload of `other`; a null `other` appends nothing.
    pub fn append_option(&mut self, other: &StringOption) -> &mut Self {
        if other.present {
            self.append(&other.text);
        }
        self
    }

    /// # Panics
    ///
    /// Panics if the slot is null.
    pub fn count_code_points(&self) -> usize {
        self.expect_present("count_code_points");
        text::count_code_points(&self.text)
    }

    /// Strips leading and trailing whitespace in place. A null slot stays
    /// null.
    pub fn trim(&mut self) -> &mut Self {
        if !self.present {
            return self;
        }
        let end = self.text.trim_end_matches(text::is_whitespace).len();
        self.text.truncate(end);
        let start = end - self.text.trim_start_matches(text::is_whitespace).len();
        self.text.drain(..start);
        self
    }

    /// # Panics
    ///
    /// Panics if either operand is null.
    pub fn contains(&self, needle: &StringOption) -> bool {
        self.expect_present("contains");
        needle.expect_present("contains");
        self.text.contains(needle.text.as_str())
    }

    /// # Panics
    ///
    /// Panics if either operand is null.
    pub fn starts_with(&self, prefix: &StringOption) -> bool {
        self.expect_present("starts_with");
        prefix.expect_present("starts_with");
        self.text.starts_with(prefix.text.as_str())
    }

    /// # Panics
    ///
    /// Panics if either operand is null.
    pub fn ends_with(&self, suffix: &StringOption) -> bool {
        self.expect_present("ends_with");
        suffix.expect_present("ends_with");
        self.text.ends_with(suffix.text.as_str())
    }

    fn expect_present(&self, operation: &str) {
        if !self.present {
            panic!("{}() called on null StringOption", operation);
        }
    }
}

/// Header of the encoded string at `offset`: `None` for null, otherwise the
/// payload start and length, checked against `limit`.
fn header_at(buf: &[u8], offset: usize, limit: usize) -> Result<Option<(usize, usize)>> {
    if read_marker(buf, offset, limit)? {
        return Ok(None);
    }
    let start = offset + MARKER_WIDTH;
    let (len, n) = decode_varint(&buf[start..limit])
        .wrap_err_with(|| format!("string length at offset {}", start))?;
    let payload = start + n;
    let len = usize::try_from(len).wrap_err("string length")?;
    ensure!(
        len <= limit - payload,
        "truncated string at offset {}: need {} bytes, have {}",
        offset,
        len,
        limit - payload
    );
    Ok(Some((payload, len)))
}

/// Payload bytes of a well-formed encoded string, `None` for null.
fn payload_of(buf: &[u8], offset: usize, length: usize) -> Option<&[u8]> {
    match header_at(buf, offset, offset + length) {
        Ok(Some((start, len))) => Some(&buf[start..start + len]),
        Ok(None) => None,
        Err(e) => panic!("compare_bytes on malformed string: {:#}", e),
    }
}

impl ValueOption for StringOption {
    const KIND: FieldKind = FieldKind::String;

    fn is_null(&self) -> bool {
        !self.present
    }

    fn set_null(&mut self) {
        self.text.clear();
        self.present = false;
    }

    fn encoded_len(&self) -> usize {
        if self.present {
            let len = self.text.len();
            MARKER_WIDTH + varint_len(len as u64) + len
        } else {
            MARKER_WIDTH
        }
    }

    fn write<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        if !self.present {
            return out.write_all(&[NULL_MARKER]);
        }
        out.write_all(&[PRESENT_MARKER])?;
        write_varint(self.text.len() as u64, out)?;
        out.write_all(self.text.as_bytes())
    }

    fn read_fields<R: Read + ?Sized>(&mut self, input: &mut R) -> io::Result<()> {
        let mut marker = [0u8; 1];
        input.read_exact(&mut marker)?;
        if marker_from_stream(marker[0])? {
            self.set_null();
            return Ok(());
        }
        let len = read_varint(input)?;

        let mut bytes = std::mem::take(&mut self.text).into_bytes();
        bytes.clear();
        self.present = false;
        input.take(len).read_to_end(&mut bytes)?;
        if (bytes.len() as u64) < len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "truncated string payload",
            ));
        }
        match String::from_utf8(bytes) {
            Ok(text) => {
                self.text = text;
                self.present = true;
                Ok(())
            }
            Err(e) => Err(invalid_data(format!(
                "invalid UTF-8 in string payload at byte {}",
                e.utf8_error().valid_up_to()
            ))),
        }
    }

    fn restore(&mut self, buf: &[u8], offset: usize, limit: usize) -> Result<usize> {
        match header_at(buf, offset, limit)? {
            Some((start, len)) => {
                let value = std::str::from_utf8(&buf[start..start + len])
                    .map_err(FormatError::from)
                    .wrap_err_with(|| format!("string at offset {}", offset))?;
                self.modify(value);
                Ok(start + len)
            }
            None => {
                self.set_null();
                Ok(offset + MARKER_WIDTH)
            }
        }
    }

    fn bytes_length(buf: &[u8], offset: usize, limit: usize) -> Result<usize> {
        Ok(match header_at(buf, offset, limit)? {
            Some((start, len)) => start + len - offset,
            None => MARKER_WIDTH,
        })
    }

    fn compare_bytes(
        a: &[u8],
        a_offset: usize,
        a_length: usize,
        b: &[u8],
        b_offset: usize,
        b_length: usize,
    ) -> Ordering {
        compare_null_last(
            payload_of(a, a_offset, a_length),
            payload_of(b, b_offset, b_length),
        )
    }
}

impl Ord for StringOption {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_null_last(self.as_bytes(), other.as_bytes())
    }
}

impl PartialOrd for StringOption {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for StringOption {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StringOption {}

impl Hash for StringOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for StringOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or("null"))
    }
}

impl From<&str> for StringOption {
    fn from(value: &str) -> Self {
        Self::of(value)
    }
}

impl From<String> for StringOption {
    fn from(text: String) -> Self {
        Self {
            text,
            present: true,
        }
    }
}

impl From<Option<&str>> for StringOption {
    fn from(value: Option<&str>) -> Self {
        let mut option = Self::new();
        option.modify_opt(value);
        option
    }
}
