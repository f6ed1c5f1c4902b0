//! # Text Module
//!
//! Strict text parsing and the per-field adapters used by text formats.
//!
//! - [`util`]: whitespace rule, trimming, code point counting and the strict
//!   number and boolean parsers
//! - [`field`]: [`fill`] / [`emit`] between text fields and option slots, with
//!   the record-level variants [`fill_record`] / [`emit_record`]

pub mod field;
pub mod util;

pub use field::{emit, emit_record, fill, fill_record};
pub use util::{
    count_code_points, is_whitespace, parse_boolean, parse_byte, parse_decimal, parse_double,
    parse_float, parse_int, parse_long, parse_short, trim,
};
