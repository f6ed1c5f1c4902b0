//! # Byte-Order-Preserving Fixed-Width Transforms
//!
//! Every fixed-width kind is stored so that comparing two encoded values with a
//! single `memcmp` yields the same order as comparing the decoded values. This
//! lets an external sort compare keys without deserializing them.
//!
//! ## Signed Integers
//!
//! Two's complement big-endian bytes almost sort correctly; only the sign bit is
//! backwards. Flipping it maps `MIN..=MAX` onto `0..=u::MAX` monotonically:
//!
//! ```text
//! i32::MIN  0x8000_0000 -> 0x0000_0000
//! -1        0xFFFF_FFFF -> 0x7FFF_FFFF
//! 0         0x0000_0000 -> 0x8000_0000
//! i32::MAX  0x7FFF_FFFF -> 0xFFFF_FFFF
//! ```
//!
//! ## Floating Point
//!
//! IEEE 754 bit patterns of non-negative values already sort by magnitude, and
//! negative values sort in reverse. The transform:
//!
//! - Negative (sign bit set): invert all bits
//! - Non-negative: flip the sign bit
//!
//! produces the IEEE total order, identical to `f64::total_cmp`:
//!
//! ```text
//! -NaN < -inf < -MAX < ... < -0.0 < +0.0 < ... < +MAX < +inf < +NaN
//! ```
//!
//! Each `encode_*` has a matching `decode_*`; none of them allocate.

macro_rules! signed_transform {
    ($encode:ident, $decode:ident, $int:ty, $uint:ty, $n:expr) => {
        #[inline]
        pub fn $encode(value: $int) -> [u8; $n] {
            ((value as $uint) ^ (1 << (<$uint>::BITS - 1))).to_be_bytes()
        }

        #[inline]
        pub fn $decode(bytes: [u8; $n]) -> $int {
            (<$uint>::from_be_bytes(bytes) ^ (1 << (<$uint>::BITS - 1))) as $int
        }
    };
}

signed_transform!(encode_i8, decode_i8, i8, u8, 1);
signed_transform!(encode_i16, decode_i16, i16, u16, 2);
signed_transform!(encode_i32, decode_i32, i32, u32, 4);
signed_transform!(encode_i64, decode_i64, i64, u64, 8);

#[inline]
pub fn encode_f32(value: f32) -> [u8; 4] {
    let bits = value.to_bits();
    let sortable = if bits & (1 << 31) != 0 {
        !bits
    } else {
        bits ^ (1 << 31)
    };
    sortable.to_be_bytes()
}

#[inline]
pub fn decode_f32(bytes: [u8; 4]) -> f32 {
    let sortable = u32::from_be_bytes(bytes);
    let bits = if sortable & (1 << 31) != 0 {
        sortable ^ (1 << 31)
    } else {
        !sortable
    };
    f32::from_bits(bits)
}

#[inline]
pub fn encode_f64(value: f64) -> [u8; 8] {
    let bits = value.to_bits();
    let sortable = if bits & (1 << 63) != 0 {
        !bits
    } else {
        bits ^ (1 << 63)
    };
    sortable.to_be_bytes()
}

#[inline]
pub fn decode_f64(bytes: [u8; 8]) -> f64 {
    let sortable = u64::from_be_bytes(bytes);
    let bits = if sortable & (1 << 63) != 0 {
        sortable ^ (1 << 63)
    } else {
        !sortable
    };
    f64::from_bits(bits)
}

/// Copies `N` bytes starting at `offset`.
///
/// # Panics
///
/// Panics if `buf` has fewer than `offset + N` bytes.
#[inline]
pub fn read_array<const N: usize>(buf: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[offset..offset + N]);
    out
}
