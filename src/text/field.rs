//! Text field adapters: parse one text field into a slot, render a slot back.
//!
//! The excluded CSV and text-format layers call these per field. Parsing is
//! strict (see [`super::util`]), so a field either round-trips through
//! [`emit`] and [`fill`] or is rejected.

use std::fmt;

use tracing::warn;

use super::util;
use crate::config::{ErrorPolicy, TextOptions};
use crate::decimal::Decimal;
use crate::error::FormatError;
use crate::record::{AnyOption, Record};
use crate::temporal::{Date, DateTime};

/// Stores `field` into `option`.
///
/// An absent field sets null. An empty field sets null, except for string
/// slots where it stores the empty string. Under [`ErrorPolicy::Skip`] a
/// malformed field stores null and is logged instead of returned.
pub fn fill(
    option: &mut AnyOption,
    field: Option<&str>,
    options: &TextOptions,
) -> Result<(), FormatError> {
    match parse_into(option, field, options) {
        Ok(()) => Ok(()),
        Err(e) if options.error_policy() == ErrorPolicy::Skip => {
            warn!(kind = %option.kind(), error = %e, "malformed field, storing null");
            option.set_null();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Fills every field of `record` from `fields`, in schema order.
///
/// The field count must match the schema. Under [`ErrorPolicy::Fail`] the
/// first malformed field aborts and earlier fields keep their new values.
pub fn fill_record(
    record: &mut Record,
    fields: &[Option<&str>],
    options: &TextOptions,
) -> Result<(), FormatError> {
    if fields.len() != record.len() {
        return Err(FormatError::FieldCount {
            expected: record.len(),
            found: fields.len(),
        });
    }
    let schema = record.schema().clone();
    for ((slot, def), field) in record.fields_mut().iter_mut().zip(schema.fields()).zip(fields) {
        match parse_into(slot, *field, options) {
            Ok(()) => {}
            Err(e) if options.error_policy() == ErrorPolicy::Skip => {
                warn!(
                    field = def.name(),
                    kind = %def.kind(),
                    error = %e,
                    "malformed field, storing null"
                );
                slot.set_null();
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn parse_into(
    option: &mut AnyOption,
    field: Option<&str>,
    options: &TextOptions,
) -> Result<(), FormatError> {
    let Some(raw) = field else {
        option.set_null();
        return Ok(());
    };
    let text = if options.trim_input() { util::trim(raw) } else { raw };

    if let AnyOption::String(slot) = option {
        slot.modify(text);
        return Ok(());
    }
    if text.is_empty() {
        option.set_null();
        return Ok(());
    }

    match option {
        AnyOption::Boolean(slot) => {
            slot.modify(util::parse_boolean(
                text,
                options.true_literal(),
                options.false_literal(),
            )?);
        }
        AnyOption::Byte(slot) => {
            slot.modify(util::parse_byte(text)?);
        }
        AnyOption::Short(slot) => {
            slot.modify(util::parse_short(text)?);
        }
        AnyOption::Int(slot) => {
            slot.modify(util::parse_int(text)?);
        }
        AnyOption::Long(slot) => {
            slot.modify(util::parse_long(text)?);
        }
        AnyOption::Float(slot) => {
            slot.modify(util::parse_float(text)?);
        }
        AnyOption::Double(slot) => {
            slot.modify(util::parse_double(text)?);
        }
        AnyOption::Decimal(slot) => {
            slot.modify(Decimal::parse(text)?);
        }
        AnyOption::Date(slot) => {
            slot.modify(Date::parse(text, options.date_format())?);
        }
        AnyOption::DateTime(slot) => {
            slot.modify(DateTime::parse(text, options.date_time_format())?);
        }
        AnyOption::String(_) => unreachable!("string slots are filled above"),
    }
    Ok(())
}

/// Renders `option` as text, or `None` for null.
pub fn emit(option: &AnyOption, options: &TextOptions) -> Option<String> {
    if option.is_null() {
        return None;
    }
    let text = match option {
        AnyOption::Boolean(slot) => {
            let literal = if slot.get() {
                options.true_literal()
            } else {
                options.false_literal()
            };
            literal.to_string()
        }
        AnyOption::Date(slot) => slot.get().format(options.date_format()),
        AnyOption::DateTime(slot) => slot.get().format(options.date_time_format()),
        AnyOption::String(slot) => slot.get().to_string(),
        AnyOption::Float(slot) => float_text(slot.get()),
        AnyOption::Double(slot) => float_text(slot.get()),
        other => other.to_string(),
    };
    Some(text)
}

/// `Display` drops the sign of NaN, which would not parse back to the same
/// bits.
fn float_text<F: Copy + Into<f64> + fmt::Display>(value: F) -> String {
    let wide: f64 = value.into();
    if wide.is_nan() && wide.is_sign_negative() {
        "-NaN".to_string()
    } else {
        value.to_string()
    }
}

/// Renders every field of `record`.
pub fn emit_record(record: &Record, options: &TextOptions) -> Vec<Option<String>> {
    record.fields().iter().map(|f| emit(f, options)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldKind, RecordSchema};
    use crate::temporal::DateFormat;
    use std::sync::Arc;

    fn filled(kind: FieldKind, field: Option<&str>) -> Result<AnyOption, FormatError> {
        let mut slot = AnyOption::null(kind);
        fill(&mut slot, field, &TextOptions::default())?;
        Ok(slot)
    }

    #[test]
    fn every_kind_round_trips_through_text() {
        let cases = [
            (FieldKind::Boolean, "true"),
            (FieldKind::Byte, "-128"),
            (FieldKind::Short, "32767"),
            (FieldKind::Int, "-2147483648"),
            (FieldKind::Long, "9223372036854775807"),
            (FieldKind::Float, "1.5"),
            (FieldKind::Double, "-0.125"),
            (FieldKind::Decimal, "-10.250"),
            (FieldKind::Date, "2011-03-31"),
            (FieldKind::DateTime, "2011-03-31 23:59:59"),
            (FieldKind::String, "hello, world"),
        ];
        let options = TextOptions::default();
        for (kind, text) in cases {
            let slot = filled(kind, Some(text)).unwrap();
            assert!(!slot.is_null(), "{}", kind);
            assert_eq!(emit(&slot, &options).as_deref(), Some(text), "{}", kind);
        }
    }

    #[test]
    fn absent_and_empty_fields() {
        for kind in FieldKind::ALL {
            assert!(filled(kind, None).unwrap().is_null());
        }
        assert!(filled(FieldKind::Int, Some("")).unwrap().is_null());
        assert!(filled(FieldKind::Date, Some("")).unwrap().is_null());
        let empty = filled(FieldKind::String, Some("")).unwrap();
        assert!(!empty.is_null());
        assert_eq!(emit(&empty, &TextOptions::default()).as_deref(), Some(""));
    }

    #[test]
    fn strict_parse_errors_surface_under_fail() {
        let err = filled(FieldKind::Int, Some("2147483648")).unwrap_err();
        assert!(err.is_overflow());
        assert!(matches!(
            filled(FieldKind::Int, Some(" 1")),
            Err(FormatError::InvalidNumber { .. })
        ));
        assert!(matches!(
            filled(FieldKind::Boolean, Some("yes")),
            Err(FormatError::InvalidBoolean { .. })
        ));
        assert!(matches!(
            filled(FieldKind::Date, Some("2011-02-29")),
            Err(FormatError::InvalidDate { .. })
        ));
    }

    #[test]
    fn failed_fill_leaves_slot_unchanged() {
        let mut slot = AnyOption::null(FieldKind::Long);
        fill(&mut slot, Some("42"), &TextOptions::default()).unwrap();
        assert!(fill(&mut slot, Some("4x2"), &TextOptions::default()).is_err());
        assert_eq!(slot.as_long().unwrap().get(), 42);
    }

    #[test]
    fn skip_policy_stores_null() {
        let options = TextOptions::builder()
            .error_policy(ErrorPolicy::Skip)
            .build();
        let mut slot = AnyOption::null(FieldKind::Short);
        fill(&mut slot, Some("7"), &options).unwrap();
        fill(&mut slot, Some("99999"), &options).unwrap();
        assert!(slot.is_null());
    }

    #[test]
    fn huge_decimal_exponent_is_a_format_error() {
        let err = filled(FieldKind::Decimal, Some("1e2000000000")).unwrap_err();
        assert!(matches!(err, FormatError::InvalidDecimal { .. }));

        let options = TextOptions::builder()
            .error_policy(ErrorPolicy::Skip)
            .build();
        let mut slot = AnyOption::null(FieldKind::Decimal);
        fill(&mut slot, Some("1e-2000000000"), &options).unwrap();
        assert!(slot.is_null());
        assert_eq!(emit(&slot, &options), None);
    }

    #[test]
    fn options_drive_literals_formats_and_trimming() {
        let options = TextOptions::builder()
            .boolean_literals("Y", "N")
            .date_format(DateFormat::Compact)
            .date_time_format(DateFormat::Compact)
            .trim_input(true)
            .build();

        let mut flag = AnyOption::null(FieldKind::Boolean);
        fill(&mut flag, Some(" n\t"), &options).unwrap();
        assert_eq!(emit(&flag, &options).as_deref(), Some("N"));

        let mut date = AnyOption::null(FieldKind::Date);
        fill(&mut date, Some("20110331"), &options).unwrap();
        assert_eq!(emit(&date, &TextOptions::default()).as_deref(), Some("2011-03-31"));

        let mut at = AnyOption::null(FieldKind::DateTime);
        fill(&mut at, Some("20110331123456"), &options).unwrap();
        assert_eq!(emit(&at, &options).as_deref(), Some("20110331123456"));

        let mut name = AnyOption::null(FieldKind::String);
        fill(&mut name, Some("\u{3000}padded "), &options).unwrap();
        assert_eq!(name.to_string(), "padded");

        let mut blank = AnyOption::null(FieldKind::Int);
        fill(&mut blank, Some("   "), &options).unwrap();
        assert!(blank.is_null());
    }

    #[test]
    fn negative_nan_keeps_its_sign() {
        let slot = filled(FieldKind::Double, Some("-NaN")).unwrap();
        let text = emit(&slot, &TextOptions::default()).unwrap();
        assert_eq!(text, "-NaN");
        assert_eq!(filled(FieldKind::Double, Some(&text)).unwrap(), slot);
    }

    #[test]
    fn emit_null_is_none() {
        for kind in FieldKind::ALL {
            assert_eq!(emit(&AnyOption::null(kind), &TextOptions::default()), None);
        }
    }

    #[test]
    fn record_fill_and_emit() {
        let schema = Arc::new(RecordSchema::of([
            ("id", FieldKind::Int),
            ("price", FieldKind::Decimal),
            ("note", FieldKind::String),
        ]));
        let mut record = Record::new(schema);
        let options = TextOptions::builder()
            .error_policy(ErrorPolicy::Skip)
            .build();

        fill_record(&mut record, &[Some("12"), Some("abc"), None], &options).unwrap();
        assert_eq!(
            emit_record(&record, &options),
            vec![Some("12".to_string()), None, None]
        );

        let err = fill_record(&mut record, &[Some("1")], &options).unwrap_err();
        assert_eq!(
            err,
            FormatError::FieldCount {
                expected: 3,
                found: 1
            }
        );
    }

    #[test]
    fn record_fill_fails_fast_under_fail() {
        let schema = Arc::new(RecordSchema::of([
            ("a", FieldKind::Int),
            ("b", FieldKind::Int),
        ]));
        let mut record = Record::new(schema);
        let err = fill_record(
            &mut record,
            &[Some("1"), Some("x")],
            &TextOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, FormatError::InvalidNumber { .. }));
        assert_eq!(record.field(0).unwrap().as_int().unwrap().get(), 1);
    }
}
