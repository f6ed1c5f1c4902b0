//! # Scenario Tests
//!
//! End-to-end checks of the documented behaviour through the public API:
//! calendar boundaries, decimal value semantics, string utilities, null
//! ordering, copy independence and the error taxonomy.

use std::cmp::Ordering;

use nullable_values::calendar;
use nullable_values::text::{parse_int, parse_long};
use nullable_values::{
    Date, DateFormat, DateOption, Decimal, DecimalOption, FormatError, IntOption, OptionMap,
    StringOption, ValueOption,
};

mod calendar_scenarios {
    use super::*;

    #[test]
    fn compact_date_boundaries() {
        let first = Date::parse("00010101", DateFormat::Compact).unwrap();
        assert_eq!(first.elapsed_days(), 0);
        assert_eq!(calendar::date_from_day(first.elapsed_days()), (1, 1, 1));

        let last = Date::parse("29991231", DateFormat::Compact).unwrap();
        assert_eq!(calendar::date_from_day(last.elapsed_days()), (2999, 12, 31));
    }

    #[test]
    fn day_and_date_are_inverse() {
        for days in (0..1_100_000).step_by(97) {
            let (y, m, d) = calendar::date_from_day(days);
            assert_eq!(calendar::day_from_date(y, m, d), days);
        }
    }

    #[test]
    fn seconds_before_the_epoch_fall_on_the_previous_day() {
        assert_eq!(calendar::day_from_seconds(-1), -1);
        assert_eq!(calendar::second_of_day(-1), 86_399);
    }

    #[test]
    fn absent_text_is_null_not_an_error() {
        let mut slot = DateOption::of(Date::from_elapsed(1));
        slot.modify_str(None, DateFormat::Standard).unwrap();
        assert!(slot.is_null());
        assert!(matches!(
            Date::parse("2011-3-31", DateFormat::Standard),
            Err(FormatError::InvalidDate { .. })
        ));
    }
}

mod decimal_scenarios {
    use super::*;

    #[test]
    fn scale_invariant_equality() {
        let a = DecimalOption::of(Decimal::parse("1.").unwrap());
        let b = DecimalOption::of(Decimal::parse("1.0000000").unwrap());
        assert_eq!(a.cmp(&b), Ordering::Equal);
        let (ea, eb) = (a.to_bytes(), b.to_bytes());
        assert_eq!(
            DecimalOption::compare_bytes(&ea, 0, ea.len(), &eb, 0, eb.len()),
            Ordering::Equal
        );
    }

    #[test]
    fn negative_values_order_by_reversed_magnitude() {
        let values = ["-100", "-99.99", "-1", "-0.5", "0", "0.000", "0.001", "1e2"];
        let slots: Vec<DecimalOption> = values
            .iter()
            .map(|t| DecimalOption::of(Decimal::parse(t).unwrap()))
            .collect();
        for pair in slots.windows(2) {
            assert!(pair[0] <= pair[1], "{} > {}", pair[0], pair[1]);
        }
    }
}

mod string_scenarios {
    use super::*;

    #[test]
    fn supplementary_code_points_count_once() {
        let s = StringOption::of("\u{1F37A}\u{1F363}");
        assert_eq!(s.count_code_points(), 2);
        assert_eq!(s.get_bytes().len(), 8);
    }

    #[test]
    fn predicates_on_edge_operands() {
        let hay = StringOption::of("hello");
        let empty = StringOption::of("");
        let long = StringOption::of("hello, world");
        assert!(hay.contains(&empty));
        assert!(hay.starts_with(&empty));
        assert!(hay.ends_with(&empty));
        assert!(!hay.contains(&long));
        assert!(!hay.starts_with(&long));
        assert!(!hay.ends_with(&long));
    }

    #[test]
    #[should_panic(expected = "contains() called on null StringOption")]
    fn predicate_on_null_operand_panics() {
        StringOption::of("x").contains(&StringOption::new());
    }

    #[test]
    fn trim_uses_the_fixed_whitespace_rule() {
        let mut s = StringOption::of("\u{2003}\t value \u{00A0}\n");
        s.trim();
        assert_eq!(s.get(), "value \u{00A0}");
    }

    #[test]
    fn raw_bytes_must_be_utf8() {
        let mut s = StringOption::new();
        let bytes = [b'o', b'k', 0xFF];
        s.modify_bytes(&bytes, 0, 2).unwrap();
        assert_eq!(s.get(), "ok");
        assert!(matches!(
            s.modify_bytes(&bytes, 1, 2),
            Err(FormatError::InvalidUtf8 { valid_up_to: 1 })
        ));
    }
}

mod option_scenarios {
    use super::*;

    #[test]
    fn null_sorts_last_and_nulls_are_equal() {
        let present = IntOption::of(i32::MAX);
        let null = IntOption::new();
        assert_eq!(present.cmp(&null), Ordering::Less);
        assert_eq!(null.cmp(&present), Ordering::Greater);
        assert_eq!(null.cmp(&IntOption::new()), Ordering::Equal);
    }

    #[test]
    fn copies_are_independent() {
        let mut source = StringOption::of("before");
        let mut copy = StringOption::new();
        copy.copy_from(Some(&source));
        source.append("!");
        assert_eq!(copy.get(), "before");
        copy.modify("changed");
        assert_eq!(source.get(), "before!");

        copy.copy_from(None);
        assert!(copy.is_null());
    }

    #[test]
    #[should_panic(expected = "get() called on null IntOption")]
    fn get_on_null_panics() {
        IntOption::new().get();
    }

    #[test]
    fn or_does_not_mutate() {
        let slot = IntOption::new();
        assert_eq!(slot.or(5), 5);
        assert!(slot.is_null());
    }

    #[test]
    fn fixed_key_map_of_options() {
        let mut totals: OptionMap<&str, IntOption> = OptionMap::new(["north", "south"]);
        totals.get_mut("north").unwrap().modify(0).add(10);
        assert!(totals.set("east", &IntOption::of(1)).is_err());
        let rendered: Vec<String> = totals.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        assert_eq!(rendered, ["north=10", "south=null"]);
    }
}

mod parse_scenarios {
    use super::*;

    #[test]
    fn int_overflow_is_a_format_error() {
        let err = parse_int("2147483648").unwrap_err();
        assert!(err.is_overflow());
        assert_eq!(parse_int("-2147483648").unwrap(), i32::MIN);
        assert_eq!(parse_long("+9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn malformed_literals_are_rejected() {
        for text in ["", "+", "-", "1_000", "12a", " 1", "0x10"] {
            assert!(
                matches!(parse_int(text), Err(FormatError::InvalidNumber { .. })),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn format_errors_travel_through_eyre() {
        fn load(text: &str) -> eyre::Result<i64> {
            Ok(parse_long(text)?)
        }
        let report = load("nope").unwrap_err();
        assert!(report.downcast_ref::<FormatError>().is_some());
    }
}
