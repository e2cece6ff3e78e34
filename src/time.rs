//! Calendar and time conversions.
//!
//! Gregorian dates are mapped to Julian Days with the Meeus algorithm, Julian
//! Days to Julian Centuries since J2000.0, and fractional hours back to
//! wall-clock instants.

use crate::constants::{DAYS_PER_JULIAN_CENTURY, JULIAN_DAY_J2000};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use crate::HoursUtc;
#[cfg(feature = "chrono")]
use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone, Utc};

/// Converts a Gregorian calendar date to the Julian Day at 0h UT.
///
/// January and February count as months 13 and 14 of the previous year.
/// Every division truncates toward zero, so years before the epoch of the
/// formula follow the reference algorithm exactly.
///
/// # Errors
/// Returns `InvalidDateTime` for a month outside 1-12 or a day that does not
/// exist in that month.
///
/// # Example
/// ```
/// # use solar_events::time::date_to_julian_day;
/// assert_eq!(date_to_julian_day(2000, 1, 1).unwrap(), 2_451_544.5);
/// ```
pub fn date_to_julian_day(year: i32, month: u32, day: u32) -> Result<f64> {
    validate_date(year, month, day)?;

    let (mut y, mut m) = (i64::from(year), i64::from(month));
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    let a = y / 100;
    let b = 2 - a + a / 4;
    let c = y + 4716;
    let d = (30.6001 * (m + 1) as f64) as i64;

    Ok((b + 365 * c + c / 4 + d + i64::from(day)) as f64 - 1524.5)
}

/// Converts a Julian Day to Julian Centuries since J2000.0.
#[must_use]
pub fn julian_day_to_century(julian_day: f64) -> f64 {
    (julian_day - JULIAN_DAY_J2000) / DAYS_PER_JULIAN_CENTURY
}

/// Converts Julian Centuries since J2000.0 back to a Julian Day.
#[must_use]
pub fn century_to_julian_day(julian_century: f64) -> f64 {
    julian_century * DAYS_PER_JULIAN_CENTURY + JULIAN_DAY_J2000
}

/// Ordinal day of the year, 1 for January 1st.
///
/// # Errors
/// Returns `InvalidDateTime` if the date does not exist.
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    validate_date(year, month, day)?;
    let preceding: u32 = (1..month)
        .map(|m| days_in_month(year, m))
        .sum();
    Ok(preceding + day)
}

/// Expresses `hours` after 0h UTC as an instant in the zone of `reference`.
///
/// The clock time is assembled from the truncated hour, minute, second and
/// nanosecond components of `hours` on the UTC calendar date of `reference`.
/// Values below 0 or at/above 24 are not folded back into that day, they
/// land on the neighbouring UTC day. Callers near a day boundary must not
/// assume the result shares the semantic date of the event.
///
/// # Errors
/// Returns `InvalidDateTime` if the instant falls outside the range `chrono`
/// can represent.
///
/// # Example
/// ```
/// # use solar_events::{time::fractional_hours_to_instant, HoursUtc};
/// use chrono::{DateTime, FixedOffset, Timelike};
///
/// let reference = "2024-06-21T00:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let instant = fractional_hours_to_instant(HoursUtc::from_hours(4.5), &reference).unwrap();
/// assert_eq!((instant.hour(), instant.minute()), (6, 30));
/// ```
#[cfg(feature = "chrono")]
pub fn fractional_hours_to_instant<Tz: TimeZone>(
    hours: HoursUtc,
    reference: &DateTime<Tz>,
) -> Result<DateTime<Tz>> {
    let (h, m, s, ns) = hours.components();
    let utc_midnight = reference
        .with_timezone(&Utc)
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc();

    let offset = TimeDelta::try_hours(h)
        .zip(TimeDelta::try_minutes(m))
        .zip(TimeDelta::try_seconds(s))
        .and_then(|((h, m), s)| h.checked_add(&m)?.checked_add(&s))
        .and_then(|delta| delta.checked_add(&TimeDelta::nanoseconds(ns)))
        .ok_or(Error::invalid_datetime("event time is out of range"))?;

    let utc = utc_midnight
        .checked_add_signed(offset)
        .ok_or(Error::invalid_datetime("event time is out of range"))?;

    Ok(utc.with_timezone(&reference.timezone()))
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn validate_date(year: i32, month: u32, day: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_datetime("month must be between 1 and 12"));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(Error::invalid_datetime("day is out of range for month"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_julian_day_of_known_dates() {
        assert_eq!(date_to_julian_day(2000, 1, 1).unwrap(), 2_451_544.5);
        assert_eq!(date_to_julian_day(1970, 1, 1).unwrap(), 2_440_587.5);
        assert_eq!(date_to_julian_day(2024, 6, 21).unwrap(), 2_460_482.5);
        // Meeus, Astronomical Algorithms, example 7.a
        assert_eq!(date_to_julian_day(1957, 10, 4).unwrap(), 2_436_115.5);
    }

    #[test]
    fn test_julian_day_truncates_before_epoch() {
        // c = year + 4716 is negative here; truncation toward zero differs
        // from flooring by a day.
        assert_eq!(date_to_julian_day(-4800, 3, 1).unwrap(), -32_044.5);
        assert_eq!(date_to_julian_day(-4802, 3, 1).unwrap(), -32_774.5);
        assert_eq!(date_to_julian_day(-5000, 3, 1).unwrap(), -105_092.5);
        assert_eq!(date_to_julian_day(-5000, 3, 2).unwrap(), -105_091.5);
    }

    #[test]
    fn test_julian_day_date_validation() {
        assert!(date_to_julian_day(2024, 13, 1).is_err());
        assert!(date_to_julian_day(2024, 0, 1).is_err());
        assert!(date_to_julian_day(2024, 2, 30).is_err());
        assert!(date_to_julian_day(2023, 2, 29).is_err());
        assert!(date_to_julian_day(1900, 2, 29).is_err());
        assert!(date_to_julian_day(2000, 2, 29).is_ok());
        assert!(date_to_julian_day(2024, 4, 0).is_err());
    }

    #[test]
    fn test_century_conversions() {
        assert!(julian_day_to_century(JULIAN_DAY_J2000).abs() < EPSILON);
        assert!((julian_day_to_century(2_488_070.0) - 1.0).abs() < EPSILON);
        assert!((century_to_julian_day(-1.0) - 2_415_020.0).abs() < EPSILON);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(2024, 1, 1).unwrap(), 1);
        assert_eq!(day_of_year(2023, 3, 1).unwrap(), 60);
        assert_eq!(day_of_year(2024, 3, 1).unwrap(), 61);
        assert_eq!(day_of_year(2024, 6, 21).unwrap(), 173);
        assert_eq!(day_of_year(2024, 12, 31).unwrap(), 366);
        assert!(day_of_year(2024, 6, 31).is_err());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_fractional_hours_truncates_components() {
        use chrono::{FixedOffset, Timelike};

        let reference = "2024-06-21T09:15:00Z"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        // 6.999999 h is 06:59:59.996400000, never rounded up to 07:00
        let instant = fractional_hours_to_instant(HoursUtc::from_hours(6.999_999), &reference).unwrap();
        assert_eq!((instant.hour(), instant.minute(), instant.second()), (6, 59, 59));
        assert!(instant.nanosecond() > 996_000_000 && instant.nanosecond() < 997_000_000);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_fractional_hours_keeps_zone_and_rolls_over_utc_day() {
        use chrono::{Datelike, FixedOffset, Timelike};

        let new_york = FixedOffset::west_opt(4 * 3600).unwrap();
        let reference = new_york.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();

        let evening = fractional_hours_to_instant(HoursUtc::from_hours(24.5), &reference).unwrap();
        assert_eq!(evening.offset(), reference.offset());
        assert_eq!((evening.day(), evening.hour(), evening.minute()), (21, 20, 30));

        let early = fractional_hours_to_instant(HoursUtc::from_hours(-1.0), &reference).unwrap();
        assert_eq!((early.day(), early.hour()), (20, 19));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_fractional_hours_uses_utc_date_of_reference() {
        use chrono::{Datelike, FixedOffset};

        // Local midnight in UTC+10 is still the previous day in UTC.
        let sydney = FixedOffset::east_opt(10 * 3600).unwrap();
        let reference = sydney.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        let instant = fractional_hours_to_instant(HoursUtc::from_hours(20.0), &reference).unwrap();
        assert_eq!(instant.day(), 21);
        assert_eq!(instant.with_timezone(&Utc).day(), 20);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_fractional_hours_out_of_range_is_error() {
        let reference = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        assert!(matches!(
            fractional_hours_to_instant(HoursUtc::from_hours(1e18), &reference),
            Err(Error::InvalidDateTime { .. })
        ));
        assert!(fractional_hours_to_instant(HoursUtc::from_hours(-1e12), &reference).is_err());

        // One hour past chrono's last representable day
        let last_day = DateTime::<Utc>::MAX_UTC
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc();
        assert!(fractional_hours_to_instant(HoursUtc::from_hours(25.0), &last_day).is_err());
        assert!(fractional_hours_to_instant(HoursUtc::from_hours(12.0), &last_day).is_ok());
    }
}
