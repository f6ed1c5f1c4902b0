//! # nullable-values - Nullable Value Options with Sortable Encodings
//!
//! A family of mutable, nullable value slots ("options") for batch pipelines
//! that shuffle and externally sort records by their raw bytes. Every option:
//!
//! - **Is tri-state**: null or present, with null ordered after every value
//! - **Mutates in place**: slots are reused across records without
//!   reallocation
//! - **Orders identically in memory and on bytes**: `compare_bytes` on the
//!   encoded form agrees in sign with `Ord` on the decoded values
//! - **Round-trips exactly**: `write` / `read_fields` for streams, `restore`
//!   for buffer windows
//!
//! ## Quick Start
//!
//! ```
//! use nullable_values::option::{IntOption, ValueOption};
//!
//! let mut slot = IntOption::new();
//! slot.modify(-7);
//! let bytes = slot.to_bytes();
//!
//! let null = IntOption::new().to_bytes();
//! assert_eq!(
//!     IntOption::compare_bytes(&bytes, 0, bytes.len(), &null, 0, null.len()),
//!     std::cmp::Ordering::Less
//! );
//!
//! let mut restored = IntOption::new();
//! restored.restore(&bytes, 0, bytes.len()).unwrap();
//! assert_eq!(restored.get(), -7);
//! ```
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  text (fill/emit)   │  collections       │
//! ├─────────────────────────────────────────┤
//! │  record (schema, packed-record compare)  │
//! ├─────────────────────────────────────────┤
//! │  option (ValueOption + 11 slot types)    │
//! ├──────────────┬──────────────────────────┤
//! │  decimal     │  temporal ── calendar     │
//! ├──────────────┴──────────────────────────┤
//! │  encoding (markers, sortable, varint)    │
//! ├─────────────────────────────────────────┤
//! │  config (constants, TextOptions), error  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`]: encoding constants and text adapter options
//! - [`error`]: `FormatError` and `CollectionError`
//! - [`encoding`]: null/present markers, sortable fixed-width transforms, varints
//! - [`calendar`]: proleptic Gregorian day and second arithmetic
//! - [`temporal`]: `Date`, `DateTime`, `DateFormat`
//! - [`decimal`]: arbitrary-precision `Decimal` and its byte comparator
//! - [`option`]: the `ValueOption` contract and the option types
//! - [`record`]: heterogeneous records and record-level byte comparison
//! - [`text`]: strict parsing and per-field text adapters
//! - [`collections`]: fixed-key `OptionMap` and fixed-length `OptionList`

#[macro_use]
mod macros;

pub mod calendar;
pub mod collections;
pub mod config;
pub mod decimal;
pub mod encoding;
pub mod error;
pub mod option;
pub mod record;
pub mod temporal;
pub mod text;

pub use collections::{OptionList, OptionMap};
pub use config::{ErrorPolicy, TextOptions};
pub use decimal::Decimal;
pub use error::{CollectionError, FormatError};
pub use option::{
    BooleanOption, ByteOption, DateOption, DateTimeOption, DecimalOption, DoubleOption,
    FloatOption, IntOption, LongOption, ShortOption, StringOption, ValueOption,
};
pub use record::{AnyOption, FieldDef, FieldKind, Record, RecordSchema};
pub use temporal::{Date, DateFormat, DateTime};
