//! Field kinds and field definitions.

use std::cmp::Ordering;
use std::fmt;

use eyre::Result;

use crate::config::{
    BOOLEAN_WIDTH, BYTE_WIDTH, DATE_TIME_WIDTH, DATE_WIDTH, DOUBLE_WIDTH, FLOAT_WIDTH, INT_WIDTH,
    LONG_WIDTH, SHORT_WIDTH,
};
use crate::option::{
    BooleanOption, ByteOption, DateOption, DateTimeOption, DecimalOption, DoubleOption,
    FloatOption, IntOption, LongOption, ShortOption, StringOption, ValueOption,
};

/// Runs `$body` with `$t` aliased to the option type of `$kind`.
macro_rules! with_option_type {
    ($kind:expr, $t:ident => $body:expr) => {
        match $kind {
            FieldKind::Boolean => {
                type $t = BooleanOption;
                $body
            }
            FieldKind::Byte => {
                type $t = ByteOption;
                $body
            }
            FieldKind::Short => {
                type $t = ShortOption;
                $body
            }
            FieldKind::Int => {
                type $t = IntOption;
                $body
            }
            FieldKind::Long => {
                type $t = LongOption;
                $body
            }
            FieldKind::Float => {
                type $t = FloatOption;
                $body
            }
            FieldKind::Double => {
                type $t = DoubleOption;
                $body
            }
            FieldKind::Decimal => {
                type $t = DecimalOption;
                $body
            }
            FieldKind::Date => {
                type $t = DateOption;
                $body
            }
            FieldKind::DateTime => {
                type $t = DateTimeOption;
                $body
            }
            FieldKind::String => {
                type $t = StringOption;
                $body
            }
        }
    };
}

/// The eleven value domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
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

impl FieldKind {
    pub const ALL: [FieldKind; 11] = [
        FieldKind::Boolean,
        FieldKind::Byte,
        FieldKind::Short,
        FieldKind::Int,
        FieldKind::Long,
        FieldKind::Float,
        FieldKind::Double,
        FieldKind::Decimal,
        FieldKind::Date,
        FieldKind::DateTime,
        FieldKind::String,
    ];

    /// Encoded width including the marker, or `None` for variable-width kinds.
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            FieldKind::Boolean => Some(BOOLEAN_WIDTH),
            FieldKind::Byte => Some(BYTE_WIDTH),
            FieldKind::Short => Some(SHORT_WIDTH),
            FieldKind::Int => Some(INT_WIDTH),
            FieldKind::Long => Some(LONG_WIDTH),
            FieldKind::Float => Some(FLOAT_WIDTH),
            FieldKind::Double => Some(DOUBLE_WIDTH),
            FieldKind::Date => Some(DATE_WIDTH),
            FieldKind::DateTime => Some(DATE_TIME_WIDTH),
            FieldKind::Decimal | FieldKind::String => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Boolean => "boolean",
            FieldKind::Byte => "byte",
            FieldKind::Short => "short",
            FieldKind::Int => "int",
            FieldKind::Long => "long",
            FieldKind::Float => "float",
            FieldKind::Double => "double",
            FieldKind::Decimal => "decimal",
            FieldKind::Date => "date",
            FieldKind::DateTime => "date_time",
            FieldKind::String => "string",
        }
    }

    /// Width of the encoded value of this kind at `offset`.
    pub fn bytes_length(self, buf: &[u8], offset: usize, limit: usize) -> Result<usize> {
        with_option_type!(self, T => T::bytes_length(buf, offset, limit))
    }

    /// Byte comparator of this kind.
    pub fn compare_bytes(
        self,
        a: &[u8],
        a_offset: usize,
        a_length: usize,
        b: &[u8],
        b_offset: usize,
        b_length: usize,
    ) -> Ordering {
        with_option_type!(self, T => T::compare_bytes(a, a_offset, a_length, b, b_offset, b_length))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named field of a record schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub(crate) name: String,
    pub(crate) kind: FieldKind,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }
}
