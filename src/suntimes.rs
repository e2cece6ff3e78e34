//! Sun Times sunrise/sunset algorithm.
//!
//! The closed-form approximation published in the US Naval Observatory's
//! Almanac for Computers (1990). A single pass from the day of the year,
//! accurate to a minute or two at mid-latitudes.

#![allow(clippy::unreadable_literal)]

use crate::constants::DEGREES_PER_HOUR;
use crate::error::{check_finite, check_zenith};
use crate::hour_angle::solve_cos_hour_angle;
use crate::math::{
    asin, atan, cos, degrees_to_radians, floor, normalize_degrees_0_to_360,
    normalize_hours_0_to_24, radians_to_degrees, sin, tan,
};
use crate::time::day_of_year;
use crate::zenith::adjust_zenith;
use crate::{EventKind, GeoLocation, HoursUtc, Result, SolarEvent, Zenith};

#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

/// Name reported by [`SunTimesCalculator`].
pub const CALCULATOR_NAME: &str = "US Naval Almanac Algorithm";

/// Time of a zenith crossing in hours after 0h UTC, in [0, 24).
///
/// Unlike [`noaa::utc_time`](crate::noaa::utc_time) the result is folded
/// into a single UTC day, so an evening event west of Greenwich comes out
/// as an early-morning hour.
///
/// # Errors
/// Returns error for an invalid date or zenith, or if the calculation
/// produces a non-finite value.
///
/// # Example
/// ```
/// use solar_events::{suntimes, EventKind, GeoLocation, Zenith};
///
/// let vienna = GeoLocation::new(48.21, 16.37, 190.0).unwrap();
/// let sunrise = suntimes::utc_time(
///     2024, 6, 21,
///     &vienna,
///     Zenith::Geometric,
///     EventKind::Sunrise,
///     true,
/// ).unwrap();
///
/// let hours = sunrise.occurs().unwrap().hours();
/// assert!(hours > 2.5 && hours < 3.0);
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
    let day_of_year = f64::from(day_of_year(year, month, day)?);
    let elevation = if adjust_for_elevation {
        location.elevation()
    } else {
        0.0
    };
    let zenith = adjust_zenith(zenith.degrees(), elevation);

    let longitude_hours = location.longitude() / DEGREES_PER_HOUR;
    let base_hour = if kind.is_sunrise() { 6.0 } else { 18.0 };
    let approx = day_of_year + (base_hour - longitude_hours) / 24.0;

    let mean_anomaly = 0.9856 * approx - 3.289;
    let true_longitude = normalize_degrees_0_to_360(
        mean_anomaly
            + 1.916 * sin(degrees_to_radians(mean_anomaly))
            + 0.020 * sin(degrees_to_radians(2.0 * mean_anomaly))
            + 282.634,
    );
    let right_ascension = right_ascension_hours(true_longitude);

    let sin_declination = 0.39782 * sin(degrees_to_radians(true_longitude));
    let cos_declination = cos(asin(sin_declination));
    let lat = degrees_to_radians(location.latitude());
    let cos_hour_angle = (cos(degrees_to_radians(zenith)) - sin_declination * sin(lat))
        / (cos_declination * cos(lat));

    let event = solve_cos_hour_angle(cos_hour_angle)?;
    if !event.is_occurring() {
        log::debug!(
            "no {kind:?} on {year}-{month:02}-{day:02} at {:.4},{:.4} for zenith {zenith:.4}: {event:?}",
            location.latitude(),
            location.longitude(),
        );
    }

    event.try_map(|angle| {
        let mut hour_angle = radians_to_degrees(angle);
        if kind.is_sunrise() {
            hour_angle = 360.0 - hour_angle;
        }
        let local_mean_time =
            hour_angle / DEGREES_PER_HOUR + right_ascension - 0.06571 * approx - 6.622;
        let hours = normalize_hours_0_to_24(local_mean_time - longitude_hours);
        log::trace!("{kind:?}: {hours:.6} h UTC");
        Ok(HoursUtc::from_hours(check_finite(hours, "event time is not finite")?))
    })
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

/// Right ascension in hours, moved into the 90° quadrant of the true
/// longitude.
fn right_ascension_hours(true_longitude: f64) -> f64 {
    let right_ascension = radians_to_degrees(atan(0.91764 * tan(degrees_to_radians(true_longitude))));
    let longitude_quadrant = floor(true_longitude / 90.0) * 90.0;
    let ascension_quadrant = floor(right_ascension / 90.0) * 90.0;
    (right_ascension + longitude_quadrant - ascension_quadrant) / DEGREES_PER_HOUR
}

/// Sun Times calculator bound to a location and date.
///
/// # Example
/// ```
/// use solar_events::{AstronomicalCalculator, GeoLocation, SunTimesCalculator};
/// use chrono::{TimeZone, Timelike, Utc};
///
/// let greenwich = GeoLocation::new(51.4769, 0.0, 0.0).unwrap();
/// let date = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
///
/// let sunset = SunTimesCalculator::new(greenwich, date)
///     .sunset()
///     .unwrap()
///     .into_occurs()
///     .unwrap();
/// assert_eq!(sunset.hour(), 18);
/// ```
#[cfg(feature = "chrono")]
#[derive(Debug, Clone)]
pub struct SunTimesCalculator<Tz: TimeZone> {
    location: GeoLocation,
    date: DateTime<Tz>,
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> SunTimesCalculator<Tz> {
    /// Creates a calculator for `location` on the date of `date`.
    #[must_use]
    pub const fn new(location: GeoLocation, date: DateTime<Tz>) -> Self {
        Self { location, date }
    }
}

#[cfg(feature = "chrono")]
impl SunTimesCalculator<chrono::FixedOffset> {
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
impl<Tz: TimeZone> crate::AstronomicalCalculator for SunTimesCalculator<Tz> {
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
