//! # Error Kinds
//!
//! The value runtime distinguishes three failure classes:
//!
//! | Class | Representation | Recoverable |
//! |-------|----------------|-------------|
//! | Data error | [`FormatError`] | Yes, per record |
//! | Collection misuse | [`CollectionError`] | Yes |
//! | Contract violation | panic | No |
//!
//! I/O failures from a caller-supplied sink or source are never wrapped; they
//! travel back as the original `std::io::Error`.
//!
//! `FormatError` converts into `eyre::Report` through `?`, and callers holding
//! a report can recover the typed kind with `report.downcast_ref::<FormatError>()`.

use thiserror::Error;

/// A malformed literal or an out-of-range number in text input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid number: {text:?}")]
    InvalidNumber { text: String },

    #[error("number out of range for {target}: {text:?}")]
    NumberOverflow { text: String, target: &'static str },

    #[error("invalid decimal: {text:?}")]
    InvalidDecimal { text: String },

    #[error("invalid boolean: {text:?}")]
    InvalidBoolean { text: String },

    #[error("invalid date {text:?}: {reason}")]
    InvalidDate { text: String, reason: &'static str },

    #[error("invalid date-time {text:?}: {reason}")]
    InvalidDateTime { text: String, reason: &'static str },

    #[error("invalid UTF-8 at byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
}

impl FormatError {
    pub(crate) fn invalid_number(text: &str) -> Self {
        FormatError::InvalidNumber {
            text: text.to_string(),
        }
    }

    pub(crate) fn overflow(text: &str, target: &'static str) -> Self {
        FormatError::NumberOverflow {
            text: text.to_string(),
            target,
        }
    }

    /// Returns true for range errors, as opposed to malformed syntax.
    pub fn is_overflow(&self) -> bool {
        matches!(self, FormatError::NumberOverflow { .. })
    }
}

impl From<std::str::Utf8Error> for FormatError {
    fn from(e: std::str::Utf8Error) -> Self {
        FormatError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        }
    }
}

/// Misuse of a fixed-shape collection of options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("key {key} is not part of the fixed key set")]
    UnknownKey { key: String },

    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_survives_eyre_round_trip() {
        fn parse() -> eyre::Result<()> {
            Err(FormatError::overflow("2147483648", "i32"))?;
            Ok(())
        }

        let report = parse().unwrap_err();
        let kind = report.downcast_ref::<FormatError>().unwrap();
        assert!(kind.is_overflow());
        assert!(report.to_string().contains("2147483648"));
    }

    #[test]
    fn utf8_error_keeps_position() {
        let bytes = [b'a', 0xC3];
        let err: FormatError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(err, FormatError::InvalidUtf8 { valid_up_to: 1 });
    }
}
