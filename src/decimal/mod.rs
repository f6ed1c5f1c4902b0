//! # Arbitrary-Precision Decimals
//!
//! A [`Decimal`] is an unscaled [`BigInt`] plus a non-negative scale and stands
//! for `unscaled × 10^-scale`. The representation is not canonical: `1`,
//! `1.0` and `1.0000000` are distinct representations of one value.
//!
//! ## Value Semantics
//!
//! - `Eq`/`Ord` compare mathematical values by aligning both operands to the
//!   larger scale, so `"1." == "1.0000000"`
//! - `Hash` hashes the normalized form (trailing fractional zeros stripped),
//!   which keeps it consistent with `Eq`
//! - `Display` keeps the representation: `1.0000000` prints as written
//!
//! ## Text Syntax
//!
//! ```text
//! [+|-] digits [. [digits]] [(e|E) [+|-] digits]
//! [+|-] . digits [(e|E) [+|-] digits]
//! ```
//!
//! At least one mantissa digit is required. A positive exponent larger than the
//! fraction is absorbed into the unscaled value, so the scale never goes
//! negative: `1.5e3` is stored as `1500` with scale 0. Exponents beyond
//! [`DECIMAL_MAX_EXPONENT`] and scales beyond [`DECIMAL_MAX_SCALE`] are
//! rejected as [`FormatError::InvalidDecimal`].
//!
//! The binary layout and the byte-level comparator live in [`bytes`].

pub mod bytes;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};

use crate::config::{DECIMAL_MAX_EXPONENT, DECIMAL_MAX_SCALE};
use crate::error::FormatError;

#[derive(Debug, Clone, Default)]
pub struct Decimal {
    unscaled: BigInt,
    scale: u32,
}

impl Decimal {
    pub fn new(unscaled: BigInt, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn sign(&self) -> Sign {
        self.unscaled.sign()
    }

    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidDecimal {
            text: text.to_string(),
        };
        let bytes = text.as_bytes();
        let mut pos = 0;

        let negative = match bytes.first() {
            Some(b'-') => {
                pos += 1;
                true
            }
            Some(b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };

        let mut digits = Vec::with_capacity(bytes.len());
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            digits.push(bytes[pos]);
            pos += 1;
        }
        let mut fraction_len: i64 = 0;
        if pos < bytes.len() && bytes[pos] == b'.' {
            pos += 1;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                digits.push(bytes[pos]);
                fraction_len += 1;
                pos += 1;
            }
        }
        if digits.is_empty() {
            return Err(invalid());
        }

        let mut exponent: i64 = 0;
        if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
            let rest = &text[pos + 1..];
            exponent = crate::text::parse_int(rest).map_err(|_| invalid())? as i64;
            if exponent.unsigned_abs() > DECIMAL_MAX_EXPONENT as u64 {
                return Err(invalid());
            }
            pos = bytes.len();
        }
        if pos != bytes.len() {
            return Err(invalid());
        }

        let magnitude = BigInt::parse_bytes(&digits, 10).ok_or_else(invalid)?;
        let unscaled = if negative { -magnitude } else { magnitude };

        let scale = fraction_len - exponent;
        if scale > DECIMAL_MAX_SCALE as i64 {
            return Err(invalid());
        }
        if scale >= 0 {
            Ok(Self {
                unscaled,
                scale: scale as u32,
            })
        } else if unscaled.is_zero() {
            Ok(Self::zero())
        } else {
            // bounded by DECIMAL_MAX_EXPONENT
            let shift = (-scale) as u32;
            Ok(Self {
                unscaled: unscaled * BigInt::from(10u32).pow(shift),
                scale: 0,
            })
        }
    }

    /// The same value with trailing fractional zeros removed. Zero normalizes
    /// to scale 0.
    pub fn normalized(&self) -> Decimal {
        if self.unscaled.is_zero() {
            return Decimal::zero();
        }
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        while scale > 0 && (&unscaled % 10u32).is_zero() {
            unscaled /= 10u32;
            scale -= 1;
        }
        Decimal { unscaled, scale }
    }
}

/// Compares `small × 10^shift` with `other`, both non-zero magnitudes.
fn cmp_scaled(small: &BigUint, shift: u32, other: &BigUint) -> Ordering {
    // other < 256^n <= 10^(3n) <= small × 10^shift once shift reaches 3n
    let other_bytes = other.bits().div_ceil(8);
    if shift as u64 >= 3 * other_bytes {
        return Ordering::Greater;
    }
    (small * BigUint::from(10u32).pow(shift)).cmp(other)
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (sa, sb) = (self.sign(), other.sign());
        if sa != sb {
            return sa.cmp(&sb);
        }
        if sa == Sign::NoSign {
            return Ordering::Equal;
        }
        let (ma, mb) = (self.unscaled.magnitude(), other.unscaled.magnitude());
        let by_magnitude = match self.scale.cmp(&other.scale) {
            Ordering::Equal => ma.cmp(mb),
            Ordering::Less => cmp_scaled(ma, other.scale - self.scale, mb),
            Ordering::Greater => cmp_scaled(mb, self.scale - other.scale, ma).reverse(),
        };
        if sa == Sign::Minus {
            by_magnitude.reverse()
        } else {
            by_magnitude
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        if self.scale == other.scale {
            return self.unscaled == other.unscaled;
        }
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.unscaled.hash(state);
        normalized.scale.hash(state);
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unscaled.is_negative() {
            f.write_str("-")?;
        }
        let digits = self.unscaled.magnitude().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return f.write_str(&digits);
        }
        if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{}.{}", int, frac)
        } else {
            f.write_str("0.")?;
            for _ in digits.len()..scale {
                f.write_str("0")?;
            }
            f.write_str(&digits)
        }
    }
}

impl FromStr for Decimal {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::parse(s)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal::new(BigInt::from(value), 0)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Decimal::new(BigInt::from(value), 0)
    }
}
