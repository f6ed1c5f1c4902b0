//! # Encoding and Calendar Constants
//!
//! This module centralizes every numeric constant the value runtime depends on.
//! Constants that derive from each other are co-located and their derivations
//! are checked at compile time, so a change to one cannot silently desynchronize
//! the byte layout of another.
//!
//! ## Dependency Graph
//!
//! ```text
//! MARKER_WIDTH (1)
//!       │
//!       ├─> BOOLEAN_WIDTH   = MARKER_WIDTH + 1
//!       ├─> BYTE_WIDTH      = MARKER_WIDTH + 1
//!       ├─> SHORT_WIDTH     = MARKER_WIDTH + 2
//!       ├─> INT_WIDTH       = MARKER_WIDTH + 4   (also FLOAT_WIDTH, DATE_WIDTH)
//!       └─> LONG_WIDTH      = MARKER_WIDTH + 8   (also DOUBLE_WIDTH, DATE_TIME_WIDTH)
//!
//! DAYS_PER_YEAR (365)
//!       │
//!       ├─> DAYS_PER_4_YEARS   (1461)
//!       ├─> DAYS_PER_CENTURY   (36524)
//!       └─> DAYS_PER_400_YEARS (146097)
//!             Proleptic Gregorian cycle; every conversion in `calendar`
//!             reduces to whole cycles plus a remainder inside one cycle.
//!
//! SECONDS_PER_DAY (86400)
//!       └─> no leap seconds, no time zones
//! ```
//!
//! ## Critical Invariants
//!
//! 1. `NULL_MARKER > PRESENT_MARKER` (null values sort after present values under memcmp)
//! 2. Fixed widths are the marker plus the payload width
//! 3. `DAYS_PER_400_YEARS` matches the Gregorian leap rule
//! 4. `DAYS_FROM_EPOCH_TO_UNIX` is the elapsed day of 1970-01-01

// ============================================================================
// MARKER BYTES
// Every encoded value starts with exactly one marker byte
// ============================================================================

/// Marker preceding the payload of a present (non-null) value.
pub const PRESENT_MARKER: u8 = 0x01;

/// Marker of a null value. Must be greater than `PRESENT_MARKER` so that raw
/// byte order places nulls after every present value.
pub const NULL_MARKER: u8 = 0xFF;

/// Width of the marker prefix in bytes.
pub const MARKER_WIDTH: usize = 1;

const _: () = assert!(
    NULL_MARKER > PRESENT_MARKER,
    "NULL_MARKER must sort after PRESENT_MARKER"
);

// ============================================================================
// FIXED-WIDTH ENCODED SIZES
// Null values of fixed-width kinds are padded with zeros to the same width
// ============================================================================

pub const BOOLEAN_WIDTH: usize = MARKER_WIDTH + 1;
pub const BYTE_WIDTH: usize = MARKER_WIDTH + 1;
pub const SHORT_WIDTH: usize = MARKER_WIDTH + 2;
pub const INT_WIDTH: usize = MARKER_WIDTH + 4;
pub const LONG_WIDTH: usize = MARKER_WIDTH + 8;
pub const FLOAT_WIDTH: usize = MARKER_WIDTH + 4;
pub const DOUBLE_WIDTH: usize = MARKER_WIDTH + 8;
pub const DATE_WIDTH: usize = MARKER_WIDTH + 4;
pub const DATE_TIME_WIDTH: usize = MARKER_WIDTH + 8;

/// Largest fixed width, used to size stack scratch buffers.
pub const MAX_FIXED_WIDTH: usize = LONG_WIDTH;

const _: () = assert!(
    SHORT_WIDTH == MARKER_WIDTH + std::mem::size_of::<i16>(),
    "SHORT_WIDTH derivation mismatch"
);
const _: () = assert!(
    INT_WIDTH == MARKER_WIDTH + std::mem::size_of::<i32>(),
    "INT_WIDTH derivation mismatch"
);
const _: () = assert!(
    LONG_WIDTH == MARKER_WIDTH + std::mem::size_of::<i64>(),
    "LONG_WIDTH derivation mismatch"
);
const _: () = assert!(
    FLOAT_WIDTH == MARKER_WIDTH + std::mem::size_of::<f32>(),
    "FLOAT_WIDTH derivation mismatch"
);
const _: () = assert!(
    DOUBLE_WIDTH == MARKER_WIDTH + std::mem::size_of::<f64>(),
    "DOUBLE_WIDTH derivation mismatch"
);
const _: () = assert!(
    MAX_FIXED_WIDTH >= DATE_TIME_WIDTH && MAX_FIXED_WIDTH >= DOUBLE_WIDTH,
    "MAX_FIXED_WIDTH must cover every fixed-width kind"
);

// ============================================================================
// DECIMAL LAYOUT
// [marker][sign][varint scale][varint magnitude length][magnitude big-endian]
// ============================================================================

/// Sign byte of a negative decimal.
pub const DECIMAL_NEGATIVE: u8 = 0x00;

/// Sign byte of a zero decimal.
pub const DECIMAL_ZERO: u8 = 0x01;

/// Sign byte of a positive decimal.
pub const DECIMAL_POSITIVE: u8 = 0x02;

/// Inline capacity of the scratch buffer used when aligning two decimal
/// magnitudes to a common scale during byte comparison. Magnitudes up to this
/// many bytes (about 150 decimal digits) never touch the heap.
pub const DECIMAL_SCRATCH_INLINE: usize = 64;

/// Largest power of ten applied in one carry pass while scaling a magnitude.
/// `255 * 10^9 + carry` stays well inside `u64`.
pub const DECIMAL_CHUNK_POWER: u32 = 9;

/// Largest exponent magnitude accepted in decimal text. A positive exponent
/// is applied eagerly as `10^n`.
pub const DECIMAL_MAX_EXPONENT: u32 = 10_000;

/// Largest scale a parsed decimal may carry. `Display` writes up to this many
/// fractional digits.
pub const DECIMAL_MAX_SCALE: u32 = 10_000;

const _: () = assert!(
    DECIMAL_MAX_EXPONENT <= i32::MAX as u32 && DECIMAL_MAX_SCALE <= i32::MAX as u32,
    "decimal text limits must fit the i32 exponent parser"
);
const _: () = assert!(
    DECIMAL_NEGATIVE < DECIMAL_ZERO && DECIMAL_ZERO < DECIMAL_POSITIVE,
    "decimal sign bytes must follow numeric order"
);
const _: () = assert!(
    255 * 10u64.pow(DECIMAL_CHUNK_POWER) < u64::MAX / 2,
    "one carry pass must not overflow u64"
);

// ============================================================================
// CALENDAR CONSTANTS
// Epoch: 0001-01-01 (elapsed day 0), 0001-01-01 00:00:00 (elapsed second 0)
// ============================================================================

pub const DAYS_PER_YEAR: i64 = 365;
pub const DAYS_PER_4_YEARS: i64 = DAYS_PER_YEAR * 4 + 1;
pub const DAYS_PER_CENTURY: i64 = DAYS_PER_YEAR * 100 + 24;
pub const DAYS_PER_400_YEARS: i64 = DAYS_PER_CENTURY * 4 + 1;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Elapsed days from 0001-01-01 to 1970-01-01.
pub const DAYS_FROM_EPOCH_TO_UNIX: i64 = 719_162;

/// Cumulative days before the first of each month in a common year.
pub const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const _: () = assert!(
    DAYS_PER_400_YEARS == 146_097,
    "DAYS_PER_400_YEARS must match the Gregorian leap rule"
);
const _: () = assert!(
    DAYS_FROM_EPOCH_TO_UNIX == DAYS_PER_YEAR * 1969 + 1969 / 4 - 1969 / 100 + 1969 / 400,
    "DAYS_FROM_EPOCH_TO_UNIX derivation mismatch"
);
const _: () = assert!(
    SECONDS_PER_DAY == 86_400,
    "SECONDS_PER_DAY derivation mismatch"
);

// ============================================================================
// TEXT LAYOUT
// Fixed column positions of the compact and standard date/time literals
// ============================================================================

/// `yyyyMMdd`
pub const COMPACT_DATE_LEN: usize = 8;
/// `yyyyMMddHHmmss`
pub const COMPACT_DATE_TIME_LEN: usize = 14;
/// `yyyy-MM-dd`
pub const STANDARD_DATE_LEN: usize = 10;
/// `yyyy-MM-dd HH:mm:ss`
pub const STANDARD_DATE_TIME_LEN: usize = 19;

const _: () = assert!(
    STANDARD_DATE_TIME_LEN == STANDARD_DATE_LEN + 1 + 8,
    "STANDARD_DATE_TIME_LEN derivation mismatch"
);
const _: () = assert!(
    COMPACT_DATE_TIME_LEN == COMPACT_DATE_LEN + 6,
    "COMPACT_DATE_TIME_LEN derivation mismatch"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_marker_sorts_after_present_marker() {
        assert!([NULL_MARKER] > [PRESENT_MARKER]);
    }

    #[test]
    fn days_before_month_accumulates_common_year() {
        let lengths = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        let mut acc = 0;
        for (month, len) in lengths.iter().enumerate() {
            assert_eq!(DAYS_BEFORE_MONTH[month], acc);
            acc += len;
        }
        assert_eq!(acc, DAYS_PER_YEAR);
    }
}
