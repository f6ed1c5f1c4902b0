//! # Decimal Wire Format and Byte Comparator
//!
//! ```text
//! [sign: 1][scale: varint][length: varint][magnitude: length bytes, big-endian]
//! ```
//!
//! | Sign byte | Meaning | Magnitude |
//! |-----------|---------|-----------|
//! | `0x00` | negative | non-empty, no leading zero byte |
//! | `0x01` | zero | empty |
//! | `0x02` | positive | non-empty, no leading zero byte |
//!
//! The option layer prepends the present/null marker; everything here starts
//! at the sign byte.
//!
//! ## Comparison Without Decoding
//!
//! Sign bytes already sort in numeric order, so only equal signs need more
//! work. Magnitudes are compared after aligning scales: the operand with the
//! smaller scale is multiplied by `10^diff` in place, in chunks of at most
//! `10^9`, with a base-256 carry. The scratch buffer is a `SmallVec` that stays
//! on the stack for magnitudes up to `DECIMAL_SCRATCH_INLINE` bytes.
//!
//! Two shortcuts avoid the multiplication entirely:
//!
//! 1. If the operand to be scaled is already longer, it is already larger.
//! 2. If `diff >= 3 × len(other)`, the scaled operand is at least
//!    `10^(3n) >= 256^n > other`.
//!
//! Because magnitudes never carry leading zero bytes, a longer magnitude is
//! always the larger one, and equal lengths compare lexicographically.
//! Negative operands reverse the magnitude result.

use std::cmp::Ordering;
use std::io::{self, Read, Write};

use eyre::{bail, ensure, Result, WrapErr};
use num_bigint::{BigInt, Sign};
use smallvec::SmallVec;

use super::Decimal;
use crate::config::{
    DECIMAL_CHUNK_POWER, DECIMAL_NEGATIVE, DECIMAL_POSITIVE, DECIMAL_SCRATCH_INLINE, DECIMAL_ZERO,
};
use crate::encoding::varint::{decode_varint, read_varint, varint_len, write_varint};

/// A validated view over one encoded decimal payload.
#[derive(Debug, Clone, Copy)]
pub struct EncodedDecimal<'a> {
    sign: u8,
    scale: u32,
    magnitude: &'a [u8],
    width: usize,
}

impl<'a> EncodedDecimal<'a> {
    /// Parses the payload at the front of `buf`.
    pub fn parse(buf: &'a [u8]) -> Result<Self> {
        ensure!(!buf.is_empty(), "missing decimal sign byte");
        let sign = buf[0];
        ensure!(
            sign <= DECIMAL_POSITIVE,
            "invalid decimal sign byte 0x{:02X}",
            sign
        );
        let mut pos = 1;
        let (scale, n) = decode_varint(&buf[pos..]).wrap_err("decimal scale")?;
        pos += n;
        let Ok(scale) = u32::try_from(scale) else {
            bail!("decimal scale {} out of range", scale);
        };
        let (len, n) = decode_varint(&buf[pos..]).wrap_err("decimal magnitude length")?;
        pos += n;
        let len = usize::try_from(len).wrap_err("decimal magnitude length")?;
        ensure!(
            buf.len() - pos >= len,
            "truncated decimal magnitude: need {} bytes, have {}",
            len,
            buf.len() - pos
        );
        let magnitude = &buf[pos..pos + len];
        check_magnitude(sign, magnitude)?;
        Ok(Self {
            sign,
            scale,
            magnitude,
            width: pos + len,
        })
    }

    pub fn sign(&self) -> u8 {
        self.sign
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn magnitude(&self) -> &'a [u8] {
        self.magnitude
    }

    /// Encoded width in bytes, sign byte included.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn to_decimal(&self) -> Decimal {
        to_decimal(self.sign, self.scale, self.magnitude)
    }
}

impl Ord for EncodedDecimal<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.sign != other.sign {
            return self.sign.cmp(&other.sign);
        }
        if self.sign == DECIMAL_ZERO {
            return Ordering::Equal;
        }
        let by_magnitude = match self.scale.cmp(&other.scale) {
            Ordering::Equal => cmp_magnitude(self.magnitude, other.magnitude),
            Ordering::Less => cmp_scaled(self.magnitude, other.scale - self.scale, other.magnitude),
            Ordering::Greater => {
                cmp_scaled(other.magnitude, self.scale - other.scale, self.magnitude).reverse()
            }
        };
        if self.sign == DECIMAL_NEGATIVE {
            by_magnitude.reverse()
        } else {
            by_magnitude
        }
    }
}

impl PartialOrd for EncodedDecimal<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EncodedDecimal<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EncodedDecimal<'_> {}

fn check_magnitude(sign: u8, magnitude: &[u8]) -> Result<()> {
    if sign == DECIMAL_ZERO {
        ensure!(magnitude.is_empty(), "zero decimal with non-empty magnitude");
    } else {
        ensure!(!magnitude.is_empty(), "non-zero decimal with empty magnitude");
        ensure!(magnitude[0] != 0, "decimal magnitude has a leading zero byte");
    }
    Ok(())
}

fn to_decimal(sign: u8, scale: u32, magnitude: &[u8]) -> Decimal {
    let sign = match sign {
        DECIMAL_NEGATIVE => Sign::Minus,
        DECIMAL_POSITIVE => Sign::Plus,
        _ => Sign::NoSign,
    };
    Decimal::new(BigInt::from_bytes_be(sign, magnitude), scale)
}

fn cmp_magnitude(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compares `small × 10^shift` with `other`; both are non-empty magnitudes.
fn cmp_scaled(small: &[u8], shift: u32, other: &[u8]) -> Ordering {
    if small.len() > other.len() || shift as u64 >= 3 * other.len() as u64 {
        return Ordering::Greater;
    }
    let mut scratch: SmallVec<[u8; DECIMAL_SCRATCH_INLINE]> = SmallVec::from_slice(small);
    scale_up(&mut scratch, shift);
    cmp_magnitude(&scratch, other)
}

/// Multiplies a big-endian magnitude by `10^power` in place.
fn scale_up(magnitude: &mut SmallVec<[u8; DECIMAL_SCRATCH_INLINE]>, mut power: u32) {
    while power > 0 {
        let step = power.min(DECIMAL_CHUNK_POWER);
        let factor = 10u64.pow(step);
        let mut carry = 0u64;
        for byte in magnitude.iter_mut().rev() {
            let v = *byte as u64 * factor + carry;
            *byte = v as u8;
            carry = v >> 8;
        }
        while carry > 0 {
            magnitude.insert(0, carry as u8);
            carry >>= 8;
        }
        power -= step;
    }
}

fn sign_byte(value: &Decimal) -> u8 {
    match value.sign() {
        Sign::Minus => DECIMAL_NEGATIVE,
        Sign::NoSign => DECIMAL_ZERO,
        Sign::Plus => DECIMAL_POSITIVE,
    }
}

fn magnitude_bytes(value: &Decimal) -> Vec<u8> {
    if value.is_zero() {
        Vec::new()
    } else {
        value.unscaled().magnitude().to_bytes_be()
    }
}

/// Encoded payload width of `value`, sign byte included.
pub fn payload_len(value: &Decimal) -> usize {
    let len = if value.is_zero() {
        0
    } else {
        value.unscaled().magnitude().bits().div_ceil(8) as usize
    };
    1 + varint_len(value.scale() as u64) + varint_len(len as u64) + len
}

pub fn write_payload<W: Write + ?Sized>(value: &Decimal, out: &mut W) -> io::Result<()> {
    let magnitude = magnitude_bytes(value);
    out.write_all(&[sign_byte(value)])?;
    write_varint(value.scale() as u64, out)?;
    write_varint(magnitude.len() as u64, out)?;
    out.write_all(&magnitude)
}

pub fn read_payload<R: Read + ?Sized>(input: &mut R) -> io::Result<Decimal> {
    let invalid = |msg: String| io::Error::new(io::ErrorKind::InvalidData, msg);

    let mut sign = [0u8; 1];
    input.read_exact(&mut sign)?;
    let sign = sign[0];
    if sign > DECIMAL_POSITIVE {
        return Err(invalid(format!("invalid decimal sign byte 0x{:02X}", sign)));
    }
    let scale = read_varint(input)?;
    let scale = u32::try_from(scale)
        .map_err(|_| invalid(format!("decimal scale {} out of range", scale)))?;
    let len = read_varint(input)?;

    let mut magnitude = Vec::new();
    input.take(len).read_to_end(&mut magnitude)?;
    if (magnitude.len() as u64) < len {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "truncated decimal magnitude",
        ));
    }
    check_magnitude(sign, &magnitude).map_err(|e| invalid(e.to_string()))?;
    Ok(to_decimal(sign, scale, &magnitude))
}

/// Decodes the payload at the front of `buf`, returning the value and the
/// bytes consumed.
pub fn decode_payload(buf: &[u8]) -> Result<(Decimal, usize)> {
    let encoded = EncodedDecimal::parse(buf)?;
    Ok((encoded.to_decimal(), encoded.width()))
}

/// Compares two payloads at the front of `a` and `b`.
///
/// # Panics
///
/// Panics if either slice does not start with a well-formed payload.
pub fn compare_payloads(a: &[u8], b: &[u8]) -> Ordering {
    fn parse(buf: &[u8]) -> EncodedDecimal<'_> {
        match EncodedDecimal::parse(buf) {
            Ok(encoded) => encoded,
            Err(e) => panic!("compare_bytes on malformed decimal: {:#}", e),
        }
    }
    parse(a).cmp(&parse(b))
}
