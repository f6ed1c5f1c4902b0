//! `AnyOption`: one enum over the eleven option types.
//!
//! Records hold heterogeneous fields, so they store `AnyOption` and dispatch
//! each call to the concrete slot. Typed access goes through the generated
//! `as_<kind>` / `as_<kind>_mut` accessors.

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Read, Write};

use eyre::Result;

use super::types::FieldKind;
use crate::option::{
    BooleanOption, ByteOption, DateOption, DateTimeOption, DecimalOption, DoubleOption,
    FloatOption, IntOption, LongOption, ShortOption, StringOption, ValueOption,
};

macro_rules! each_variant {
    ($value:expr, $o:ident => $body:expr) => {
        match $value {
            AnyOption::Boolean($o) => $body,
            AnyOption::Byte($o) => $body,
            AnyOption::Short($o) => $body,
            AnyOption::Int($o) => $body,
            AnyOption::Long($o) => $body,
            AnyOption::Float($o) => $body,
            AnyOption::Double($o) => $body,
            AnyOption::Decimal($o) => $body,
            AnyOption::Date($o) => $body,
            AnyOption::DateTime($o) => $body,
            AnyOption::String($o) => $body,
        }
    };
}

macro_rules! any_option {
    ($($variant:ident($option:ident) => $snake:ident),* $(,)?) => {
        /// A slot of any kind.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum AnyOption {
            $($variant($option),)*
        }

        impl AnyOption {
            /// A null slot of `kind`.
            pub fn null(kind: FieldKind) -> Self {
                match kind {
                    $(FieldKind::$variant => AnyOption::$variant($option::new()),)*
                }
            }

            pub fn kind(&self) -> FieldKind {
                match self {
                    $(AnyOption::$variant(_) => FieldKind::$variant,)*
                }
            }

            /// Copies `other` into `self`.
            ///
            /// # Panics
            ///
            /// Panics if the kinds differ.
            pub fn copy_from(&mut self, other: &AnyOption) {
                match (self, other) {
                    $((AnyOption::$variant(a), AnyOption::$variant(b)) => a.copy_from(Some(b)),)*
                    (a, b) => panic!(
                        "copy_from between {} and {} slots",
                        a.kind(),
                        b.kind()
                    ),
                }
            }

            ::paste::paste! {
                $(
                    pub fn [<as_ $snake>](&self) -> Option<&$option> {
                        match self {
                            AnyOption::$variant(o) => Some(o),
                            _ => None,
                        }
                    }

                    pub fn [<as_ $snake _mut>](&mut self) -> Option<&mut $option> {
                        match self {
                            AnyOption::$variant(o) => Some(o),
                            _ => None,
                        }
                    }
                )*
            }
        }

        $(
            impl From<$option> for AnyOption {
                fn from(option: $option) -> Self {
                    AnyOption::$variant(option)
                }
            }
        )*

        impl Ord for AnyOption {
            /// Same-kind slots compare by value; slots of different kinds
            /// order by kind.
            fn cmp(&self, other: &Self) -> Ordering {
                match (self, other) {
                    $((AnyOption::$variant(a), AnyOption::$variant(b)) => a.cmp(b),)*
                    (a, b) => a.kind().cmp(&b.kind()),
                }
            }
        }
    };
}

any_option! {
    Boolean(BooleanOption) => boolean,
    Byte(ByteOption) => byte,
    Short(ShortOption) => short,
    Int(IntOption) => int,
    Long(LongOption) => long,
    Float(FloatOption) => float,
    Double(DoubleOption) => double,
    Decimal(DecimalOption) => decimal,
    Date(DateOption) => date,
    DateTime(DateTimeOption) => date_time,
    String(StringOption) => string,
}

impl AnyOption {
    pub fn is_null(&self) -> bool {
        each_variant!(self, o => o.is_null())
    }

    pub fn set_null(&mut self) {
        each_variant!(self, o => o.set_null())
    }

    pub fn encoded_len(&self) -> usize {
        each_variant!(self, o => o.encoded_len())
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        each_variant!(self, o => o.write(out))
    }

    pub fn read_fields<R: Read + ?Sized>(&mut self, input: &mut R) -> io::Result<()> {
        each_variant!(self, o => o.read_fields(input))
    }

    pub fn restore(&mut self, buf: &[u8], offset: usize, limit: usize) -> Result<usize> {
        each_variant!(self, o => o.restore(buf, offset, limit))
    }
}

impl PartialOrd for AnyOption {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AnyOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each_variant!(self, o => fmt::Display::fmt(o, f))
    }
}
