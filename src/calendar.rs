//! # Proleptic Gregorian Calendar Arithmetic
//!
//! Pure conversions between calendar fields and the two scalar representations
//! used by [`crate::temporal::Date`] and [`crate::temporal::DateTime`]:
//!
//! - elapsed days since 0001-01-01 (`i32`, day 0 is 0001-01-01)
//! - elapsed seconds since 0001-01-01 00:00:00 (`i64`)
//!
//! The Gregorian leap rule (divisible by 4, except centuries not divisible by
//! 400) is applied to every year, including those before the 1582 reform.
//! Days have exactly 86400 seconds; there are no leap seconds and no zones.
//!
//! ## Year Decomposition
//!
//! ```text
//! elapsed days
//!   └─ 400-year cycles   (146097 days each, floor division)
//!        └─ centuries    (36524 days, the 4th may hold one extra day)
//!             └─ 4-year blocks (1461 days, the last one per century is short)
//!                  └─ years (365 days, the 4th may hold one extra day)
//! ```
//!
//! Floor division makes the mapping total for negative inputs, so years before
//! 0001 round-trip too.
//!
//! ## Input Ranges
//!
//! Field arguments are not validated: `month = 13` or `day = 0` produce a
//! meaningless number, and a month outside `1..=12` panics on the table lookup.
//! Callers that accept external text validate with [`days_in_month`] first, as
//! the parsers in `temporal` do.

use crate::config::{
    DAYS_BEFORE_MONTH, DAYS_PER_400_YEARS, DAYS_PER_4_YEARS, DAYS_PER_CENTURY, DAYS_PER_YEAR,
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};

/// First elapsed second whose day fits an `i32` day count.
pub const MIN_CALENDAR_SECOND: i64 = i32::MIN as i64 * SECONDS_PER_DAY;

/// Last elapsed second whose day fits an `i32` day count.
pub const MAX_CALENDAR_SECOND: i64 = (i32::MAX as i64 + 1) * SECONDS_PER_DAY - 1;

/// Returns true if `year` is a leap year.
pub fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Elapsed days from 0001-01-01 to January 1st of `year`.
pub fn day_from_year(year: i32) -> i32 {
    let y = year as i64 - 1;
    (DAYS_PER_YEAR * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)) as i32
}

/// Elapsed days from 0001-01-01 to the given date.
pub fn day_from_date(year: i32, month: u32, day: u32) -> i32 {
    let mut days = day_from_year(year) as i64;
    days += DAYS_BEFORE_MONTH[month as usize - 1];
    days += day as i64 - 1;
    if month >= 3 && is_leap(year) {
        days += 1;
    }
    days as i32
}

/// The year containing elapsed day `days`.
pub fn year_from_day(days: i32) -> i32 {
    let days = days as i64;
    let cycles = days.div_euclid(DAYS_PER_400_YEARS);
    let mut rest = days.rem_euclid(DAYS_PER_400_YEARS);

    // the last day of a 400-year cycle belongs to the 4th century
    let centuries = (rest / DAYS_PER_CENTURY).min(3);
    rest -= centuries * DAYS_PER_CENTURY;

    let blocks = rest / DAYS_PER_4_YEARS;
    rest -= blocks * DAYS_PER_4_YEARS;

    // the last day of a leap block belongs to its 4th year
    let years = (rest / DAYS_PER_YEAR).min(3);

    (cycles * 400 + centuries * 100 + blocks * 4 + years + 1) as i32
}

/// Month (1-12) of the zero-based `day_of_year`.
pub fn month_of_year(day_of_year: i32, leap: bool) -> u32 {
    month_and_day(day_of_year, leap).0
}

/// Day of month (1-31) of the zero-based `day_of_year`.
pub fn day_of_month(day_of_year: i32, leap: bool) -> u32 {
    month_and_day(day_of_year, leap).1
}

fn month_and_day(day_of_year: i32, leap: bool) -> (u32, u32) {
    let mut d = day_of_year as i64;
    if leap && d >= DAYS_BEFORE_MONTH[2] {
        if d == DAYS_BEFORE_MONTH[2] {
            return (2, 29);
        }
        d -= 1;
    }
    let month = DAYS_BEFORE_MONTH.partition_point(|&start| start <= d);
    (month as u32, (d - DAYS_BEFORE_MONTH[month - 1] + 1) as u32)
}

/// Inverse of [`day_from_date`]: `(year, month, day)` of elapsed day `days`.
pub fn date_from_day(days: i32) -> (i32, u32, u32) {
    let year = year_from_day(days);
    let day_of_year = days - day_from_year(year);
    let (month, day) = month_and_day(day_of_year, is_leap(year));
    (year, month, day)
}

/// Seconds elapsed since midnight.
pub fn second_from_time(hour: u32, minute: u32, second: u32) -> i32 {
    (hour as i64 * SECONDS_PER_HOUR + minute as i64 * SECONDS_PER_MINUTE + second as i64) as i32
}

/// Elapsed seconds from 0001-01-01 00:00:00 to the given date-time.
pub fn second_from_date_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> i64 {
    day_from_date(year, month, day) as i64 * SECONDS_PER_DAY
        + second_from_time(hour, minute, second) as i64
}

/// Elapsed day containing elapsed second `seconds`.
///
/// The day count is an `i32`, so only seconds within
/// [`MIN_CALENDAR_SECOND`]`..=`[`MAX_CALENDAR_SECOND`] (about ±5.8 million
/// years) map to a correct day. Outside that range the result wraps.
pub fn day_from_seconds(seconds: i64) -> i32 {
    seconds.div_euclid(SECONDS_PER_DAY) as i32
}

/// Seconds since midnight of the day containing elapsed second `seconds`.
pub fn second_of_day(seconds: i64) -> i32 {
    seconds.rem_euclid(SECONDS_PER_DAY) as i32
}

/// Inverse of [`second_from_date_time`]:
/// `(year, month, day, hour, minute, second)` of elapsed second `seconds`.
pub fn date_time_from_second(seconds: i64) -> (i32, u32, u32, u32, u32, u32) {
    let (year, month, day) = date_from_day(day_from_seconds(seconds));
    let rest = second_of_day(seconds) as i64;
    let hour = rest / SECONDS_PER_HOUR;
    let minute = rest % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
    let second = rest % SECONDS_PER_MINUTE;
    (year, month, day, hour as u32, minute as u32, second as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DAYS_FROM_EPOCH_TO_UNIX;

    /// Days since 1970-01-01 by the civil-from-days construction, used as an
    /// independent reference.
    fn reference_unix_days(year: i32, month: u32, day: u32) -> i64 {
        let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let mp = (month as i64 + 9) % 12;
        let doy = (153 * mp + 2) / 5 + day as i64 - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146097 + doe - 719468
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(day_from_date(1, 1, 1), 0);
        assert_eq!(date_from_day(0), (1, 1, 1));
    }

    #[test]
    fn unix_epoch_anchor() {
        assert_eq!(day_from_date(1970, 1, 1) as i64, DAYS_FROM_EPOCH_TO_UNIX);
    }

    #[test]
    fn leap_rule_is_gregorian() {
        assert!(is_leap(2000));
        assert!(is_leap(2024));
        assert!(!is_leap(1900));
        assert!(!is_leap(2100));
        assert!(is_leap(1600));
        assert!(!is_leap(1582));
    }

    #[test]
    fn every_day_from_1583_to_2500_matches_reference() {
        let mut expected = day_from_date(1583, 1, 1);
        for year in 1583..=2500 {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    let days = day_from_date(year, month, day);
                    assert_eq!(days, expected, "{}-{}-{}", year, month, day);
                    assert_eq!(
                        days as i64 - DAYS_FROM_EPOCH_TO_UNIX,
                        reference_unix_days(year, month, day)
                    );
                    assert_eq!(date_from_day(days), (year, month, day));
                    expected += 1;
                }
            }
        }
    }

    #[test]
    fn cycle_boundaries_round_trip() {
        for (y, m, d) in [
            (100, 12, 31),
            (101, 1, 1),
            (400, 2, 29),
            (400, 12, 31),
            (401, 1, 1),
            (1582, 10, 4),
            (1582, 10, 15),
            (2999, 12, 31),
            (9999, 12, 31),
        ] {
            assert_eq!(date_from_day(day_from_date(y, m, d)), (y, m, d));
        }
    }

    #[test]
    fn dates_before_epoch_round_trip() {
        assert_eq!(day_from_date(0, 12, 31), -1);
        assert_eq!(date_from_day(-1), (0, 12, 31));
        assert!(is_leap(0));
        assert_eq!(date_from_day(day_from_date(0, 2, 29)), (0, 2, 29));
        assert_eq!(date_from_day(day_from_date(-400, 3, 1)), (-400, 3, 1));
    }

    #[test]
    fn month_and_day_split_leap_february() {
        assert_eq!(month_of_year(58, true), 2);
        assert_eq!(day_of_month(58, true), 28);
        assert_eq!(day_of_month(59, true), 29);
        assert_eq!(month_of_year(59, false), 3);
        assert_eq!(day_of_month(59, false), 1);
        assert_eq!(month_of_year(365, true), 12);
        assert_eq!(day_of_month(365, true), 31);
    }

    #[test]
    fn seconds_compose_days_and_time() {
        let secs = second_from_date_time(2011, 3, 31, 23, 30, 1);
        assert_eq!(secs, day_from_date(2011, 3, 31) as i64 * 86400 + 84601);
        assert_eq!(date_time_from_second(secs), (2011, 3, 31, 23, 30, 1));
        assert_eq!(date_time_from_second(0), (1, 1, 1, 0, 0, 0));
    }

    #[test]
    fn negative_seconds_floor_to_previous_day() {
        assert_eq!(day_from_seconds(-1), -1);
        assert_eq!(second_of_day(-1), 86399);
        assert_eq!(date_time_from_second(-1), (0, 12, 31, 23, 59, 59));
    }

    #[test]
    fn calendar_second_bounds_cover_the_day_range() {
        assert_eq!(day_from_seconds(MAX_CALENDAR_SECOND), i32::MAX);
        assert_eq!(day_from_seconds(MIN_CALENDAR_SECOND), i32::MIN);
        assert_eq!(second_of_day(MAX_CALENDAR_SECOND), 86_399);
        assert_eq!(second_of_day(MIN_CALENDAR_SECOND), 0);
    }
}
