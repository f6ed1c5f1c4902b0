use std::fmt;
use std::str::FromStr;

use super::{write_date, write_time, Columns, Date, DateFormat};
use crate::calendar;
use crate::config::{DAYS_FROM_EPOCH_TO_UNIX, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::FormatError;

/// A timezone-naive instant as elapsed seconds since 0001-01-01 00:00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DateTime(i64);

impl DateTime {
    pub const fn from_elapsed(seconds: i64) -> Self {
        DateTime(seconds)
    }

    pub const fn elapsed_seconds(self) -> i64 {
        self.0
    }

    /// Builds a date-time from calendar fields without range checks.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Self {
        DateTime(calendar::second_from_date_time(
            year, month, day, hour, minute, second,
        ))
    }

    pub fn from_unix_seconds(seconds: i64) -> Self {
        DateTime(seconds + DAYS_FROM_EPOCH_TO_UNIX * SECONDS_PER_DAY)
    }

    pub fn to_unix_seconds(self) -> i64 {
        self.0 - DAYS_FROM_EPOCH_TO_UNIX * SECONDS_PER_DAY
    }

    /// The date containing this instant.
    ///
    /// Calendar fields, `date` and `Display` are exact only between
    /// [`calendar::MIN_CALENDAR_SECOND`] and [`calendar::MAX_CALENDAR_SECOND`].
    /// Ordering and the binary encoding cover the whole `i64` range.
    pub fn date(self) -> Date {
        Date::from_elapsed(calendar::day_from_seconds(self.0))
    }

    fn hms(self) -> (u32, u32, u32) {
        let rest = calendar::second_of_day(self.0) as i64;
        (
            (rest / SECONDS_PER_HOUR) as u32,
            (rest % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u32,
            (rest % SECONDS_PER_MINUTE) as u32,
        )
    }

    pub fn year(self) -> i32 {
        self.date().year()
    }

    pub fn month(self) -> u32 {
        self.date().month()
    }

    pub fn day(self) -> u32 {
        self.date().day()
    }

    pub fn hour(self) -> u32 {
        self.hms().0
    }

    pub fn minute(self) -> u32 {
        self.hms().1
    }

    pub fn second(self) -> u32 {
        self.hms().2
    }

    pub fn parse(text: &str, format: DateFormat) -> Result<Self, FormatError> {
        let invalid = |reason| FormatError::InvalidDateTime {
            text: text.to_string(),
            reason,
        };
        if text.len() != format.date_time_len() {
            return Err(invalid("wrong length"));
        }
        let mut columns = Columns::new(text);
        let (y, mo, d) = columns.date(format).map_err(invalid)?;
        let (h, mi, s) = columns.time(format).map_err(invalid)?;
        Ok(DateTime::from_ymd_hms(y, mo, d, h, mi, s))
    }

    pub fn parse_opt(text: Option<&str>, format: DateFormat) -> Result<Option<Self>, FormatError> {
        text.map(|t| DateTime::parse(t, format)).transpose()
    }

    pub fn format(self, format: DateFormat) -> String {
        let mut out = String::with_capacity(format.date_time_len());
        let _ = write_date(&mut out, self.date().ymd(), format)
            .and_then(|_| write_time(&mut out, self.hms(), format));
        out
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        DateTime(date.elapsed_days() as i64 * SECONDS_PER_DAY)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date(f, self.date().ymd(), DateFormat::Standard)?;
        write_time(f, self.hms(), DateFormat::Standard)
    }
}

impl FromStr for DateTime {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse(s, DateFormat::Standard)
    }
}
