//! Fuzz testing for the strict text parsers.
//!
//! Any text accepted by `fill` must render through `emit` and parse back to
//! an equal slot.

#![no_main]

use libfuzzer_sys::fuzz_target;

use nullable_values::text::{emit, fill};
use nullable_values::{AnyOption, FieldKind, TextOptions};

fuzz_target!(|data: (u8, &str)| {
    let (selector, field) = data;
    let kind = FieldKind::ALL[selector as usize % FieldKind::ALL.len()];
    let options = TextOptions::default();

    let mut slot = AnyOption::null(kind);
    if fill(&mut slot, Some(field), &options).is_err() {
        return;
    }
    let Some(text) = emit(&slot, &options) else {
        return;
    };
    let mut again = AnyOption::null(kind);
    fill(&mut again, Some(&text), &options).unwrap();
    assert_eq!(slot, again);
});
