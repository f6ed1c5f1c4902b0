use std::fmt;
use std::str::FromStr;

use super::{write_date, Columns, DateFormat};
use crate::calendar;
use crate::config::DAYS_FROM_EPOCH_TO_UNIX;
use crate::error::FormatError;

/// A calendar date as elapsed days since 0001-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

impl Date {
    pub const fn from_elapsed(days: i32) -> Self {
        Date(days)
    }

    pub const fn elapsed_days(self) -> i32 {
        self.0
    }

    /// Builds a date from calendar fields. Fields are not range-checked; use
    /// [`Date::parse`] for untrusted input.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Date(calendar::day_from_date(year, month, day))
    }

    pub fn from_unix_days(days: i64) -> Self {
        Date((days + DAYS_FROM_EPOCH_TO_UNIX) as i32)
    }

    pub fn to_unix_days(self) -> i64 {
        self.0 as i64 - DAYS_FROM_EPOCH_TO_UNIX
    }

    pub fn ymd(self) -> (i32, u32, u32) {
        calendar::date_from_day(self.0)
    }

    pub fn year(self) -> i32 {
        calendar::year_from_day(self.0)
    }

    pub fn month(self) -> u32 {
        self.ymd().1
    }

    pub fn day(self) -> u32 {
        self.ymd().2
    }

    pub fn parse(text: &str, format: DateFormat) -> Result<Self, FormatError> {
        let invalid = |reason| FormatError::InvalidDate {
            text: text.to_string(),
            reason,
        };
        if text.len() != format.date_len() {
            return Err(invalid("wrong length"));
        }
        let (y, m, d) = Columns::new(text).date(format).map_err(invalid)?;
        Ok(Date::from_ymd(y, m, d))
    }

    /// Like [`Date::parse`], but absent input is a null result rather than an
    /// error.
    pub fn parse_opt(text: Option<&str>, format: DateFormat) -> Result<Option<Self>, FormatError> {
        text.map(|t| Date::parse(t, format)).transpose()
    }

    pub fn format(self, format: DateFormat) -> String {
        let mut out = String::with_capacity(format.date_len());
        let _ = write_date(&mut out, self.ymd(), format);
        out
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date(f, self.ymd(), DateFormat::Standard)
    }
}

impl FromStr for Date {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s, DateFormat::Standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_boundaries() {
        let first = Date::parse("00010101", DateFormat::Compact).unwrap();
        assert_eq!(first.elapsed_days(), 0);
        assert_eq!(calendar::date_from_day(first.elapsed_days()), (1, 1, 1));

        let last = Date::parse("29991231", DateFormat::Compact).unwrap();
        assert_eq!(last.ymd(), (2999, 12, 31));
    }

    #[test]
    fn standard_round_trip() {
        let date = Date::parse("2011-03-31", DateFormat::Standard).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2011, 3, 31));
        assert_eq!(date.to_string(), "2011-03-31");
        assert_eq!(date.format(DateFormat::Compact), "20110331");
        assert_eq!("2011-03-31".parse::<Date>().unwrap(), date);
    }

    #[test]
    fn parse_rejects_wrong_layout() {
        for text in ["2011-3-31", "20110331 ", "2011/03/31", "2011-03-3x", ""] {
            assert!(
                matches!(
                    Date::parse(text, DateFormat::Standard),
                    Err(FormatError::InvalidDate { .. })
                ),
                "{:?}",
                text
            );
        }
        assert!(Date::parse("2011-03-31", DateFormat::Compact).is_err());
    }

    #[test]
    fn parse_rejects_out_of_range_fields() {
        for text in ["20111301", "20110229", "20110400", "00000101", "20110431"] {
            assert!(Date::parse(text, DateFormat::Compact).is_err(), "{}", text);
        }
        assert!(Date::parse("20120229", DateFormat::Compact).is_ok());
    }

    #[test]
    fn parse_opt_maps_absent_to_none() {
        assert_eq!(Date::parse_opt(None, DateFormat::Compact), Ok(None));
        assert_eq!(
            Date::parse_opt(Some("00010102"), DateFormat::Compact),
            Ok(Some(Date::from_elapsed(1)))
        );
        assert!(Date::parse_opt(Some("x"), DateFormat::Compact).is_err());
    }

    #[test]
    fn unix_days_anchor() {
        assert_eq!(Date::from_ymd(1970, 1, 1).to_unix_days(), 0);
        assert_eq!(Date::from_unix_days(0), Date::from_ymd(1970, 1, 1));
    }

    #[test]
    fn order_follows_elapsed_days() {
        assert!(Date::from_ymd(1999, 12, 31) < Date::from_ymd(2000, 1, 1));
    }
}
