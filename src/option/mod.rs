//! # Nullable Value Options
//!
//! One mutable, reusable slot type per primitive domain. Every slot starts
//! null, can be mutated in place any number of times, and satisfies the
//! [`ValueOption`] contract:
//!
//! | Capability | Methods |
//! |------------|---------|
//! | Null state | `is_null`, `set_null` |
//! | Copy | `copy_from` (deep, never aliases) |
//! | Ordering | `Ord`, `max_assign`, `min_assign` |
//! | Stream I/O | `write`, `read_fields` |
//! | Buffer I/O | `restore`, `bytes_length` |
//! | Raw compare | `compare_bytes` |
//!
//! Typed access (`get`, `or`, `modify`, `modify_opt`) is inherent on each
//! type because the payload is passed by value for scalars and by reference
//! for `Decimal` and `String`.
//!
//! ## Null Ordering
//!
//! Null sorts **after** every present value and two nulls are equal. The
//! byte encoding follows the same rule because the null marker (`0xFF`) is
//! greater than the present marker (`0x01`). Consequently `max_assign` with a
//! null operand yields null and `min_assign` yields the present operand.
//!
//! ## Null Payload
//!
//! A slot that becomes null drops its payload: fixed-width and decimal slots
//! hold `None`, string slots clear their buffer while keeping its capacity.
//! Equality and hashing of null slots therefore never see stale data.
//!
//! ## Offsets and Limits
//!
//! Buffer entry points take `(buf, offset, limit)` where `limit` is the
//! absolute end of the readable window, not a length. `restore` returns the
//! offset just past the consumed value. `compare_bytes` takes
//! `(buf, offset, length)` triples and assumes well-formed input; it panics on
//! malformed bytes instead of returning an error, since a comparator has no
//! error channel.

mod boolean;
mod date;
mod decimal;
mod float;
mod integer;
mod string;

pub use boolean::BooleanOption;
pub use date::{DateOption, DateTimeOption};
pub use decimal::DecimalOption;
pub use float::{DoubleOption, FloatOption};
pub use integer::{ByteOption, IntOption, LongOption, ShortOption};
pub use string::StringOption;

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::io::{self, Read, Write};

use crate::record::FieldKind;

/// The capability set shared by every option type.
pub trait ValueOption: Default + Clone + Ord + Hash + fmt::Debug + fmt::Display {
    /// Field kind tag of this option type.
    const KIND: FieldKind;

    fn is_null(&self) -> bool;

    fn set_null(&mut self);

    /// Copies `other` into `self`. `None` or a null `other` makes `self` null.
    /// The copy is deep: later mutation of either side is not observed by the
    /// other.
    fn copy_from(&mut self, other: Option<&Self>) {
        match other {
            Some(other) => self.clone_from(other),
            None => self.set_null(),
        }
    }

    /// Replaces `self` with `other` if `other` orders after it.
    fn max_assign(&mut self, other: &Self) {
        if *self < *other {
            self.clone_from(other);
        }
    }

    /// Replaces `self` with `other` if `other` orders before it.
    fn min_assign(&mut self, other: &Self) {
        if *self > *other {
            self.clone_from(other);
        }
    }

    /// Number of bytes `write` produces for the current state.
    fn encoded_len(&self) -> usize;

    fn write<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()>;

    fn read_fields<R: Read + ?Sized>(&mut self, input: &mut R) -> io::Result<()>;

    /// Decodes one value at `offset` and returns the offset past it.
    fn restore(&mut self, buf: &[u8], offset: usize, limit: usize) -> eyre::Result<usize>;

    /// Width of the encoded value at `offset` without decoding its payload.
    fn bytes_length(buf: &[u8], offset: usize, limit: usize) -> eyre::Result<usize>;

    /// Compares two encoded values with the same sign as `Ord` on the decoded
    /// values.
    fn compare_bytes(
        a: &[u8],
        a_offset: usize,
        a_length: usize,
        b: &[u8],
        b_offset: usize,
        b_length: usize,
    ) -> Ordering;

    /// Encodes into a fresh buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        // io::Write for Vec<u8> never fails
        let _ = self.write(&mut out);
        out
    }
}

/// Orders two optional keys with absent values last.
pub(crate) fn compare_null_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// memcmp over one fixed-width encoded value.
///
/// # Panics
///
/// Panics if either window is shorter than `width`.
pub(crate) fn compare_fixed(
    width: usize,
    a: &[u8],
    a_offset: usize,
    a_length: usize,
    b: &[u8],
    b_offset: usize,
    b_length: usize,
) -> Ordering {
    assert!(
        a_length >= width && b_length >= width,
        "compare_bytes window shorter than encoded width {}",
        width
    );
    a[a_offset..a_offset + width].cmp(&b[b_offset..b_offset + width])
}

pub(crate) fn invalid_data(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}
