//! # Records of Nullable Fields
//!
//! A record is an ordered tuple of option slots whose kinds are fixed by a
//! [`RecordSchema`]. The encoded form is the concatenation of each field's
//! encoding, with no header:
//!
//! ```text
//! +-----------------+-----------------+-----+-----------------+
//! | field 0         | field 1         | ... | field N-1       |
//! | marker [+value] | marker [+value] |     | marker [+value] |
//! +-----------------+-----------------+-----+-----------------+
//! ```
//!
//! Because every field encoding is self-delimiting, a record can be skipped
//! ([`RecordSchema::bytes_length`]) and compared
//! ([`RecordSchema::compare_bytes`]) directly on its bytes. Byte comparison
//! agrees with [`Record`]'s in-memory ordering: the first unequal field
//! decides, nulls last.
//!
//! ## Field Widths
//!
//! | Kind | Encoded width |
//! |------|---------------|
//! | boolean, byte | 2 |
//! | short | 3 |
//! | int, float, date | 5 |
//! | long, double, date_time | 9 |
//! | decimal | 1 (null) or 1 + sign + varint scale + varint length + magnitude |
//! | string | 1 (null) or 1 + varint length + UTF-8 bytes |
//!
//! ## Module Structure
//!
//! - `types`: `FieldKind` and `FieldDef`
//! - `any`: `AnyOption`, a slot of any kind
//! - `schema`: `RecordSchema` with byte-level measuring and comparison
//! - `row`: `Record`, the mutable tuple

pub mod any;
pub mod row;
pub mod schema;
pub mod types;


pub use any::AnyOption;
pub use row::Record;
pub use schema::RecordSchema;
pub use types::{FieldDef, FieldKind};
