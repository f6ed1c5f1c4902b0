//! Nullable `Date` and `DateTime` slots, encoded like the elapsed counters
//! they wrap.

use crate::config::{DATE_TIME_WIDTH, DATE_WIDTH};
use crate::encoding::sortable;
use crate::error::FormatError;
use crate::fixed_width_option;
use crate::record::FieldKind;
use crate::temporal::{Date, DateFormat, DateTime};

fixed_width_option! {
    /// A nullable [`Date`].
    Date(Date),
    kind: FieldKind::Date,
    width: DATE_WIDTH,
    encode: |v: Date| sortable::encode_i32(v.elapsed_days()),
    decode: |b: [u8; 4]| Date::from_elapsed(sortable::decode_i32(b)),
    key: |v| -> Date { v },
}

fixed_width_option! {
    /// A nullable [`DateTime`].
    DateTime(DateTime),
    kind: FieldKind::DateTime,
    width: DATE_TIME_WIDTH,
    encode: |v: DateTime| sortable::encode_i64(v.elapsed_seconds()),
    decode: |b: [u8; 8]| DateTime::from_elapsed(sortable::decode_i64(b)),
    key: |v| -> DateTime { v },
}

impl DateOption {
    /// Parses `text`, or sets null when `text` is `None`. On a parse error
    /// the slot is left unchanged.
    pub fn modify_str(
        &mut self,
        text: Option<&str>,
        format: DateFormat,
    ) -> Result<(), FormatError> {
        self.value = Date::parse_opt(text, format)?;
        Ok(())
    }
}

impl DateTimeOption {
    pub fn modify_str(
        &mut self,
        text: Option<&str>,
        format: DateFormat,
    ) -> Result<(), FormatError> {
        self.value = DateTime::parse_opt(text, format)?;
        Ok(())
    }
}
