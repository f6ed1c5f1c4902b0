//! # Date and DateTime Values
//!
//! Immutable scalar wrappers over the elapsed counters of [`crate::calendar`]:
//!
//! | Type | Payload | Epoch |
//! |------|---------|-------|
//! | [`Date`] | `i32` elapsed days | 0001-01-01 |
//! | [`DateTime`] | `i64` elapsed seconds | 0001-01-01 00:00:00 |
//!
//! Equality, ordering and hashing are those of the payload, so two values with
//! the same counter are interchangeable.
//!
//! ## Text Layouts
//!
//! | Format | Date | DateTime |
//! |--------|------|----------|
//! | `Compact` | `yyyyMMdd` | `yyyyMMddHHmmss` |
//! | `Standard` | `yyyy-MM-dd` | `yyyy-MM-dd HH:mm:ss` |
//!
//! Parsing reads fixed columns: the input length must match the layout
//! exactly, every digit column must be an ASCII digit and every separator
//! column must hold its separator. Field ranges are then validated (year at
//! least 1, month 1-12, day within the month, hour 0-23, minute and second
//! 0-59). Formatting pads the year to four columns; years outside `1..=9999`
//! format but do not parse back.

mod date;
mod date_time;

pub use date::Date;
pub use date_time::DateTime;

use crate::config::{
    COMPACT_DATE_LEN, COMPACT_DATE_TIME_LEN, STANDARD_DATE_LEN, STANDARD_DATE_TIME_LEN,
};

/// Text layout of dates and date-times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// `yyyyMMdd[HHmmss]`
    Compact,
    /// `yyyy-MM-dd[ HH:mm:ss]`
    #[default]
    Standard,
}

impl DateFormat {
    pub(crate) fn date_len(self) -> usize {
        match self {
            DateFormat::Compact => COMPACT_DATE_LEN,
            DateFormat::Standard => STANDARD_DATE_LEN,
        }
    }

    pub(crate) fn date_time_len(self) -> usize {
        match self {
            DateFormat::Compact => COMPACT_DATE_TIME_LEN,
            DateFormat::Standard => STANDARD_DATE_TIME_LEN,
        }
    }

    fn date_separator(self) -> Option<u8> {
        match self {
            DateFormat::Compact => None,
            DateFormat::Standard => Some(b'-'),
        }
    }

    fn time_separator(self) -> Option<u8> {
        match self {
            DateFormat::Compact => None,
            DateFormat::Standard => Some(b':'),
        }
    }

    fn date_time_separator(self) -> Option<u8> {
        match self {
            DateFormat::Compact => None,
            DateFormat::Standard => Some(b' '),
        }
    }
}

/// Cursor over the fixed columns of a date or date-time literal.
struct Columns<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Columns<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    /// Reads `width` ASCII digits, or `None` if any column is not a digit.
    fn digits(&mut self, width: usize) -> Option<u32> {
        let end = self.pos + width;
        let window = self.bytes.get(self.pos..end)?;
        let mut value = 0u32;
        for &b in window {
            if !b.is_ascii_digit() {
                return None;
            }
            value = value * 10 + (b - b'0') as u32;
        }
        self.pos = end;
        Some(value)
    }

    /// Consumes `separator` if the layout has one; `false` on a mismatch.
    fn separator(&mut self, separator: Option<u8>) -> bool {
        match separator {
            None => true,
            Some(expected) => {
                if self.bytes.get(self.pos) == Some(&expected) {
                    self.pos += 1;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn date(&mut self, format: DateFormat) -> Result<(i32, u32, u32), &'static str> {
        let year = self.digits(4).ok_or("year is not a 4-digit number")?;
        if !self.separator(format.date_separator()) {
            return Err("missing date separator");
        }
        let month = self.digits(2).ok_or("month is not a 2-digit number")?;
        if !self.separator(format.date_separator()) {
            return Err("missing date separator");
        }
        let day = self.digits(2).ok_or("day is not a 2-digit number")?;
        let year = year as i32;
        if year < 1 {
            return Err("year must be at least 1");
        }
        if !(1..=12).contains(&month) {
            return Err("month out of range");
        }
        if day < 1 || day > crate::calendar::days_in_month(year, month) {
            return Err("day out of range");
        }
        Ok((year, month, day))
    }

    fn time(&mut self, format: DateFormat) -> Result<(u32, u32, u32), &'static str> {
        if !self.separator(format.date_time_separator()) {
            return Err("missing date-time separator");
        }
        let hour = self.digits(2).ok_or("hour is not a 2-digit number")?;
        if !self.separator(format.time_separator()) {
            return Err("missing time separator");
        }
        let minute = self.digits(2).ok_or("minute is not a 2-digit number")?;
        if !self.separator(format.time_separator()) {
            return Err("missing time separator");
        }
        let second = self.digits(2).ok_or("second is not a 2-digit number")?;
        if hour > 23 {
            return Err("hour out of range");
        }
        if minute > 59 {
            return Err("minute out of range");
        }
        if second > 59 {
            return Err("second out of range");
        }
        Ok((hour, minute, second))
    }
}

fn write_date(
    f: &mut impl std::fmt::Write,
    (year, month, day): (i32, u32, u32),
    format: DateFormat,
) -> std::fmt::Result {
    match format.date_separator() {
        Some(sep) => {
            let sep = sep as char;
            write!(f, "{:04}{}{:02}{}{:02}", year, sep, month, sep, day)
        }
        None => write!(f, "{:04}{:02}{:02}", year, month, day),
    }
}

fn write_time(
    f: &mut impl std::fmt::Write,
    (hour, minute, second): (u32, u32, u32),
    format: DateFormat,
) -> std::fmt::Result {
    if let Some(sep) = format.date_time_separator() {
        f.write_char(sep as char)?;
    }
    match format.time_separator() {
        Some(sep) => {
            let sep = sep as char;
            write!(f, "{:02}{}{:02}{}{:02}", hour, sep, minute, sep, second)
        }
        None => write!(f, "{:02}{:02}{:02}", hour, minute, second),
    }
}
