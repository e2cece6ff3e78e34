//! NOAA sunrise/sunset algorithm.
//!
//! Sunrise and sunset from the solar position model of NOAA's Global
//! Monitoring Laboratory calculator, itself based on Meeus, "Astronomical
//! Algorithms". The zenith is corrected for elevation, then the event time
//! is found in two fixed passes:
//!
//! 1. declination and equation of time at local solar noon give a first
//!    estimate of the event time;
//! 2. the same quantities at that estimate give the final time.
//!
//! The pass count is fixed. Further iteration would change the results.

use crate::constants::{MINUTES_PER_DAY, MINUTES_PER_DEGREE};
use crate::error::{check_finite, check_longitude, check_zenith};
use crate::hour_angle::hour_angle;
use crate::math::{asin, atan2, cos, degrees_to_radians, radians_to_degrees, sin, tan};
use crate::position::{declination, equation_of_time};
use crate::time::{century_to_julian_day, date_to_julian_day, julian_day_to_century};
use crate::zenith::adjust_zenith;
use crate::{EventKind, GeoLocation, HoursUtc, Result, SolarEvent, SolarPosition, Zenith};

#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

/// Name reported by [`NoaaCalculator`].
pub const CALCULATOR_NAME: &str = "US National Oceanic and Atmospheric Administration Algorithm";

/// Minutes after 0h UTC of local solar noon.
///
/// `longitude_west` is positive west of Greenwich, the NOAA convention.
/// The equation of time is evaluated at an approximate noon, then once more
/// at the noon that estimate gives.
#[must_use]
pub fn solar_noon_utc(julian_century: f64, longitude_west: f64) -> f64 {
    let julian_day = century_to_julian_day(julian_century);

    let approximate = julian_day_to_century(julian_day + longitude_west / 360.0);
    let noon = 720.0 + MINUTES_PER_DEGREE * longitude_west - equation_of_time(approximate);

    let refined = julian_day_to_century(julian_day - 0.5 + noon / MINUTES_PER_DAY);
    720.0 + MINUTES_PER_DEGREE * longitude_west - equation_of_time(refined)
}

/// Local solar noon for a date and east-positive longitude.
///
/// # Errors
/// Returns error for an invalid date or longitude.
///
/// # Example
/// ```
/// # use solar_events::noaa;
/// // Greenwich, early November: noon is about 16 minutes early
/// let noon = noaa::solar_noon(2024, 11, 3, 0.0).unwrap();
/// assert!((noon.hours() - (12.0 - 16.4 / 60.0)).abs() < 0.01);
/// ```
pub fn solar_noon(year: i32, month: u32, day: u32, longitude: f64) -> Result<HoursUtc> {
    check_longitude(longitude)?;
    let julian_century = julian_day_to_century(date_to_julian_day(year, month, day)?);
    Ok(HoursUtc::from_minutes(solar_noon_utc(julian_century, -longitude)))
}

/// Time of a zenith crossing in hours after 0h UTC of the given date.
///
/// With `adjust_for_elevation` false the location is treated as being at
/// sea level. The result is not folded into 0-24 hours: an evening event
/// west of Greenwich may be reported as, say, 24.5 hours.
///
/// # Errors
/// Returns error for an invalid date or zenith, or if the calculation
/// produces a non-finite value.
///
/// # Example
/// ```
/// use solar_events::{noaa, EventKind, GeoLocation, Zenith};
///
/// let vienna = GeoLocation::new(48.21, 16.37, 190.0).unwrap();
/// let sunrise = noaa::utc_time(
///     2024, 6, 21,
///     &vienna,
///     Zenith::Geometric,
///     EventKind::Sunrise,
///     true,
/// ).unwrap();
///
/// let hours = sunrise.occurs().unwrap().hours();
/// assert!(hours > 2.5 && hours < 3.0); // about 02:51 UTC
/// ```
pub fn utc_time(
    year: i32,
    month: u32,
    day: u32,
    location: &GeoLocation,
    zenith: Zenith,
    kind: EventKind,
    adjust_for_elevation: bool,
) -> Result<SolarEvent<HoursUtc>> {
    check_zenith(zenith.degrees())?;
    let julian_day = date_to_julian_day(year, month, day)?;
    let elevation = if adjust_for_elevation {
        location.elevation()
    } else {
        0.0
    };
    let zenith = adjust_zenith(zenith.degrees(), elevation);

    let minutes = event_minutes(
        julian_day,
        location.latitude(),
        -location.longitude(),
        zenith,
        kind,
    )?;
    if !minutes.is_occurring() {
        log::debug!(
            "no {kind:?} on {year}-{month:02}-{day:02} at {:.4},{:.4} for zenith {zenith:.4}: {minutes:?}",
            location.latitude(),
            location.longitude(),
        );
    }

    minutes.try_map(|m| Ok(HoursUtc::from_minutes(check_finite(m, "event time is not finite")?)))
}

/// Sunrise and sunset at the geometric zenith, elevation-adjusted.
///
/// # Errors
/// Returns error for an invalid date.
pub fn sunrise_sunset_utc(
    year: i32,
    month: u32,
    day: u32,
    location: &GeoLocation,
) -> Result<(SolarEvent<HoursUtc>, SolarEvent<HoursUtc>)> {
    Ok((
        utc_time(year, month, day, location, Zenith::Geometric, EventKind::Sunrise, true)?,
        utc_time(year, month, day, location, Zenith::Geometric, EventKind::Sunset, true)?,
    ))
}

/// Two-pass event time in minutes after 0h UTC.
fn event_minutes(
    julian_day: f64,
    latitude: f64,
    longitude_west: f64,
    zenith: f64,
    kind: EventKind,
) -> Result<SolarEvent<f64>> {
    let julian_century = julian_day_to_century(julian_day);

    // Declination at solar noon is a better first guess than at 0h UT
    let noon = solar_noon_utc(julian_century, longitude_west);
    let noon_century = julian_day_to_century(julian_day + noon / MINUTES_PER_DAY);

    let first = event_minutes_at(noon_century, latitude, longitude_west, zenith, kind)?;
    first.try_and_then(|estimate| {
        log::trace!("{kind:?} first pass: {estimate:.4} min UTC");
        let refined = julian_day_to_century(
            century_to_julian_day(julian_century) + estimate / MINUTES_PER_DAY,
        );
        let second = event_minutes_at(refined, latitude, longitude_west, zenith, kind)?;
        log::trace!("{kind:?} second pass: {second:?} min UTC");
        Ok(second)
    })
}

/// One refinement pass: the event time implied by the sun's declination and
/// the equation of time at `julian_century`.
fn event_minutes_at(
    julian_century: f64,
    latitude: f64,
    longitude_west: f64,
    zenith: f64,
    kind: EventKind,
) -> Result<SolarEvent<f64>> {
    let eot = equation_of_time(julian_century);
    let solar_declination = declination(julian_century);

    Ok(
        hour_angle(latitude, solar_declination, zenith, kind)?.map(|angle| {
            let delta = longitude_west - radians_to_degrees(angle);
            720.0 + MINUTES_PER_DEGREE * delta - eot
        }),
    )
}

/// Sun position for a UTC date and time of day.
///
/// Uses the same low-precision model as the sunrise/sunset calculation;
/// no refraction is applied.
///
/// # Errors
/// Returns error for an invalid date or, if the result is not finite, a
/// computation error.
pub fn solar_position_utc(
    year: i32,
    month: u32,
    day: u32,
    hours: HoursUtc,
    location: &GeoLocation,
) -> Result<SolarPosition> {
    let julian_day = date_to_julian_day(year, month, day)?;
    let julian_century = julian_day_to_century(julian_day + hours.hours() / 24.0);

    let eot = equation_of_time(julian_century);
    let subsolar_longitude = -(hours.hours() - 12.0 + eot / 60.0) * 15.0;
    let hour_angle = degrees_to_radians(location.longitude() - subsolar_longitude);

    let lat = degrees_to_radians(location.latitude());
    let dec = degrees_to_radians(declination(julian_century));

    let elevation = radians_to_degrees(asin(
        sin(lat) * sin(dec) + cos(lat) * cos(dec) * cos(hour_angle),
    ));
    let azimuth = radians_to_degrees(atan2(
        sin(hour_angle),
        cos(hour_angle) * sin(lat) - tan(dec) * cos(lat),
    )) + 180.0;

    SolarPosition::new(azimuth, 90.0 - elevation)
}

/// Sun position at an instant.
///
/// # Errors
/// Returns a computation error if the result is not finite.
///
/// # Example
/// ```
/// use solar_events::{noaa, GeoLocation};
/// use chrono::{DateTime, Utc};
///
/// let greenwich = GeoLocation::new(51.4769, 0.0, 0.0).unwrap();
/// let noon = "2024-06-21T12:02:00Z".parse::<DateTime<Utc>>().unwrap();
/// let position = noaa::solar_position(&noon, &greenwich).unwrap();
/// assert!((position.elevation_angle() - 61.96).abs() < 0.1);
/// ```
#[cfg(feature = "chrono")]
pub fn solar_position<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    location: &GeoLocation,
) -> Result<SolarPosition> {
    let utc = datetime.with_timezone(&Utc);
    let hours = f64::from(utc.hour())
        + (f64::from(utc.minute())
            + (f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9) / 60.0)
            / 60.0;
    solar_position_utc(
        utc.year(),
        utc.month(),
        utc.day(),
        HoursUtc::from_hours(hours),
        location,
    )
}

/// NOAA calculator bound to a location and date.
///
/// The calendar date of `date` in its own zone selects the day; results are
/// expressed in the same zone.
///
/// # Example
/// ```
/// use solar_events::{AstronomicalCalculator, GeoLocation, NoaaCalculator};
/// use chrono::{FixedOffset, TimeZone, Timelike};
///
/// let new_york = GeoLocation::new(40.7128, -74.0060, 0.0).unwrap();
/// let edt = FixedOffset::west_opt(4 * 3600).unwrap();
/// let date = edt.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
///
/// let calculator = NoaaCalculator::new(new_york, date);
/// let sunrise = calculator.sunrise().unwrap().into_occurs().unwrap();
/// assert_eq!(sunrise.hour(), 5);
/// assert!((24..=25).contains(&sunrise.minute()));
/// ```
#[cfg(feature = "chrono")]
#[derive(Debug, Clone)]
pub struct NoaaCalculator<Tz: TimeZone> {
    location: GeoLocation,
    date: DateTime<Tz>,
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> NoaaCalculator<Tz> {
    /// Creates a calculator for `location` on the date of `date`.
    #[must_use]
    pub const fn new(location: GeoLocation, date: DateTime<Tz>) -> Self {
        Self { location, date }
    }
}

#[cfg(feature = "chrono")]
impl NoaaCalculator<chrono::FixedOffset> {
    /// Creates a calculator for local midnight of `date` at the location's
    /// UTC offset.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` if the location's offset is unusable, or
    /// `InvalidDateTime` if local midnight cannot be represented.
    pub fn for_date(location: GeoLocation, date: NaiveDate) -> Result<Self> {
        let midnight = crate::calculator::local_midnight(&location, date)?;
        Ok(Self::new(location, midnight))
    }
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> crate::AstronomicalCalculator for NoaaCalculator<Tz> {
    type Tz = Tz;

    fn calculator_name(&self) -> &'static str {
        CALCULATOR_NAME
    }

    fn location(&self) -> &GeoLocation {
        &self.location
    }

    fn date(&self) -> &DateTime<Tz> {
        &self.date
    }

    fn utc_time(
        &self,
        zenith: Zenith,
        kind: EventKind,
        adjust_for_elevation: bool,
    ) -> Result<SolarEvent<HoursUtc>> {
        let date = self.date.date_naive();
        utc_time(
            date.year(),
            date.month(),
            date.day(),
            &self.location,
            zenith,
            kind,
            adjust_for_elevation,
        )
    }
}
