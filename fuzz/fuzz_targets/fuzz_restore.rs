//! Fuzz testing for buffer-window decoding.
//!
//! Feeds arbitrary bytes to `bytes_length` and `restore` of a record built
//! from arbitrary field kinds. Malformed input must surface as an error,
//! never as a panic, and a window accepted by `bytes_length` must compare
//! equal to itself.

#![no_main]

use std::sync::Arc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use nullable_values::{FieldKind, Record, RecordSchema};

#[derive(Debug, Arbitrary)]
struct RestoreInput {
    kinds: Vec<FuzzKind>,
    offset: u8,
    data: Vec<u8>,
}

#[derive(Debug, Arbitrary, Clone, Copy)]
enum FuzzKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Decimal,
    Date,
    DateTime,
    String,
}

impl From<FuzzKind> for FieldKind {
    fn from(kind: FuzzKind) -> Self {
        match kind {
            FuzzKind::Boolean => FieldKind::Boolean,
            FuzzKind::Byte => FieldKind::Byte,
            FuzzKind::Short => FieldKind::Short,
            FuzzKind::Int => FieldKind::Int,
            FuzzKind::Long => FieldKind::Long,
            FuzzKind::Float => FieldKind::Float,
            FuzzKind::Double => FieldKind::Double,
            FuzzKind::Decimal => FieldKind::Decimal,
            FuzzKind::Date => FieldKind::Date,
            FuzzKind::DateTime => FieldKind::DateTime,
            FuzzKind::String => FieldKind::String,
        }
    }
}

fuzz_target!(|input: RestoreInput| {
    if input.kinds.is_empty() || input.kinds.len() > 32 {
        return;
    }
    let schema = Arc::new(RecordSchema::of(
        input
            .kinds
            .iter()
            .enumerate()
            .map(|(idx, kind)| (format!("f{}", idx), FieldKind::from(*kind))),
    ));
    let data = &input.data;
    let offset = (input.offset as usize).min(data.len());

    let mut record = Record::new(schema.clone());
    let restored = record.restore(data, offset, data.len());

    let Ok(len) = schema.bytes_length(data, offset, data.len()) else {
        return;
    };
    assert_eq!(
        schema.compare_bytes(data, offset, len, data, offset, len),
        std::cmp::Ordering::Equal
    );
    if let Ok(end) = restored {
        assert_eq!(end, offset + len);
    }
});
