//! Strict text helpers shared by `StringOption` and the field adapters.
//!
//! ## Number Syntax
//!
//! Integers: an optional `+` or `-` followed by one or more ASCII digits and
//! nothing else. No whitespace, no digit separators, no sign without digits.
//! Overflow is detected exactly at the target width: digits accumulate toward
//! the negative end, which is one wider than the positive end, so `MIN` parses
//! and `MAX + 1` fails.
//!
//! A malformed literal reports [`FormatError::InvalidNumber`]; a well-formed
//! one that does not fit reports [`FormatError::NumberOverflow`].
//!
//! ## Whitespace
//!
//! [`is_whitespace`] is a fixed rule, independent of locale: the ASCII controls
//! TAB, LF, VT, FF, CR, the separators U+001C through U+001F, and every Unicode
//! space separator except the no-break spaces U+00A0, U+2007 and U+202F.

use crate::decimal::Decimal;
use crate::error::FormatError;

pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | '\u{001C}'..='\u{001F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// `text` without leading and trailing [`is_whitespace`] characters.
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_whitespace)
}

/// Number of Unicode scalar values; a supplementary-plane character counts
/// once.
pub fn count_code_points(text: &str) -> usize {
    text.chars().count()
}

macro_rules! strict_integer_parser {
    ($name:ident, $int:ty) => {
        #[doc = concat!("Parses an `", stringify!($int), "` with strict syntax.")]
        pub fn $name(text: &str) -> Result<$int, FormatError> {
            let bytes = text.as_bytes();
            let (negative, digits) = match bytes.first() {
                Some(b'-') => (true, &bytes[1..]),
                Some(b'+') => (false, &bytes[1..]),
                _ => (false, bytes),
            };
            if digits.is_empty() {
                return Err(FormatError::invalid_number(text));
            }

            let mut acc: $int = 0;
            let mut overflow = false;
            for &b in digits {
                if !b.is_ascii_digit() {
                    return Err(FormatError::invalid_number(text));
                }
                if overflow {
                    continue;
                }
                match acc
                    .checked_mul(10)
                    .and_then(|v| v.checked_sub((b - b'0') as $int))
                {
                    Some(v) => acc = v,
                    None => overflow = true,
                }
            }
            if overflow {
                return Err(FormatError::overflow(text, stringify!($int)));
            }
            if negative {
                Ok(acc)
            } else {
                acc.checked_neg()
                    .ok_or_else(|| FormatError::overflow(text, stringify!($int)))
            }
        }
    };
}

strict_integer_parser!(parse_byte, i8);
strict_integer_parser!(parse_short, i16);
strict_integer_parser!(parse_int, i32);
strict_integer_parser!(parse_long, i64);

pub fn parse_decimal(text: &str) -> Result<Decimal, FormatError> {
    Decimal::parse(text)
}

/// Parses an `f32` using Rust float syntax (`inf` and `NaN` included). Values
/// beyond the range round to infinity rather than failing.
pub fn parse_float(text: &str) -> Result<f32, FormatError> {
    text.parse::<f32>()
        .map_err(|_| FormatError::invalid_number(text))
}

pub fn parse_double(text: &str) -> Result<f64, FormatError> {
    text.parse::<f64>()
        .map_err(|_| FormatError::invalid_number(text))
}

/// Matches `text` against the two literals, ignoring ASCII case.
pub fn parse_boolean(
    text: &str,
    true_literal: &str,
    false_literal: &str,
) -> Result<bool, FormatError> {
    if text.eq_ignore_ascii_case(true_literal) {
        Ok(true)
    } else if text.eq_ignore_ascii_case(false_literal) {
        Ok(false)
    } else {
        Err(FormatError::InvalidBoolean {
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_bounds_are_exact() {
        assert_eq!(parse_int("2147483647"), Ok(i32::MAX));
        assert_eq!(parse_int("-2147483648"), Ok(i32::MIN));
        let err = parse_int("2147483648").unwrap_err();
        assert!(err.is_overflow());
        assert!(parse_int("-2147483649").unwrap_err().is_overflow());
    }

    #[test]
    fn long_bounds_are_exact() {
        assert_eq!(parse_long("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_long("-9223372036854775808"), Ok(i64::MIN));
        assert!(parse_long("9223372036854775808").unwrap_err().is_overflow());
        assert!(parse_long("99999999999999999999999").unwrap_err().is_overflow());
    }

    #[test]
    fn narrow_bounds_are_exact() {
        assert_eq!(parse_byte("-128"), Ok(i8::MIN));
        assert_eq!(parse_byte("127"), Ok(i8::MAX));
        assert!(parse_byte("128").unwrap_err().is_overflow());
        assert_eq!(parse_short("-32768"), Ok(i16::MIN));
        assert!(parse_short("32768").unwrap_err().is_overflow());
    }

    #[test]
    fn signs_and_leading_zeros() {
        assert_eq!(parse_int("+42"), Ok(42));
        assert_eq!(parse_int("-0"), Ok(0));
        assert_eq!(parse_int("000123"), Ok(123));
    }

    #[test]
    fn malformed_integers_are_rejected() {
        for text in ["", "+", "-", "1a", " 1", "1 ", "--1", "1_000", "0x10", "１"] {
            assert_eq!(
                parse_int(text),
                Err(FormatError::invalid_number(text)),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn malformed_tail_wins_over_overflow() {
        assert!(!parse_int("99999999999x").unwrap_err().is_overflow());
    }

    #[test]
    fn floats_use_rust_syntax() {
        assert_eq!(parse_double("1.5e3"), Ok(1500.0));
        assert_eq!(parse_float("-0.25"), Ok(-0.25));
        assert!(parse_double("NaN").unwrap().is_nan());
        assert_eq!(parse_double("inf"), Ok(f64::INFINITY));
        assert!(parse_double("1.5.2").is_err());
        assert!(parse_float("").is_err());
    }

    #[test]
    fn boolean_literals_ignore_case() {
        assert_eq!(parse_boolean("TRUE", "true", "false"), Ok(true));
        assert_eq!(parse_boolean("n", "y", "n"), Ok(false));
        assert!(matches!(
            parse_boolean("yes", "true", "false"),
            Err(FormatError::InvalidBoolean { .. })
        ));
    }

    #[test]
    fn trim_uses_fixed_whitespace_rule() {
        assert_eq!(trim("\t hello \r\n"), "hello");
        assert_eq!(trim("\u{3000}x\u{2028}"), "x");
        assert_eq!(trim("\u{00A0}x\u{00A0}"), "\u{00A0}x\u{00A0}");
        assert_eq!(trim("   "), "");
    }

    #[test]
    fn supplementary_characters_count_once() {
        assert_eq!(count_code_points("\u{1F37A}\u{1F363}"), 2);
        assert_eq!(count_code_points("a\u{00E9}\u{3042}"), 3);
        assert_eq!(count_code_points(""), 0);
    }
}
