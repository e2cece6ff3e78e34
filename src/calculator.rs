//! Common interface of the sunrise/sunset calculators.
//!
//! Each calculator only supplies the time of a zenith crossing in hours
//! after 0h UTC; sunrise, sunset, twilight, sea-level variants and the
//! derived temporal hour are built on top of that one primitive.

use crate::time::fractional_hours_to_instant;
use crate::{Error, EventKind, GeoLocation, HoursUtc, Result, SolarEvent, Zenith};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone};

/// A sunrise/sunset calculator bound to a location and a date.
///
/// Every event is returned as a [`SolarEvent`]: a date on which the sun never
/// crosses the requested zenith yields `AllDay` or `AllNight` rather than an
/// error or a sentinel time.
///
/// Results are expressed in the time zone of [`date`](Self::date), on the
/// clock of its UTC calendar date. An event whose UTC time falls outside that
/// UTC day is not moved back onto it.
///
/// # Example
/// ```
/// use solar_events::{AstronomicalCalculator, GeoLocation, NoaaCalculator};
/// use chrono::{TimeZone, Utc};
///
/// let quito = GeoLocation::new(-0.18, -78.47, 2850.0).unwrap();
/// let calculator = NoaaCalculator::new(quito, Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap());
///
/// let sunrise = calculator.sunrise().unwrap().into_occurs().unwrap();
/// let sea_level = calculator.sea_level_sunrise().unwrap().into_occurs().unwrap();
/// assert!(sunrise < sea_level);
/// ```
pub trait AstronomicalCalculator {
    /// Time zone of the date and of every result.
    type Tz: TimeZone;

    /// Human-readable name of the algorithm.
    fn calculator_name(&self) -> &'static str;

    /// Observer location.
    fn location(&self) -> &GeoLocation;

    /// Date of the calculation; its calendar date in its own zone selects
    /// the day.
    fn date(&self) -> &DateTime<Self::Tz>;

    /// Time of a zenith crossing in hours after 0h UTC.
    ///
    /// # Errors
    /// Returns error for an invalid zenith or a failed computation.
    fn utc_time(
        &self,
        zenith: Zenith,
        kind: EventKind,
        adjust_for_elevation: bool,
    ) -> Result<SolarEvent<HoursUtc>>;

    /// Time of a zenith crossing in the zone of [`date`](Self::date).
    ///
    /// # Errors
    /// Returns error for an invalid zenith or a failed computation, and
    /// `InvalidDateTime` if the event falls outside chrono's range.
    fn time(
        &self,
        zenith: Zenith,
        kind: EventKind,
        adjust_for_elevation: bool,
    ) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        self.utc_time(zenith, kind, adjust_for_elevation)?
            .try_map(|hours| fractional_hours_to_instant(hours, self.date()))
    }

    /// Sunrise, corrected for refraction, solar radius and elevation.
    ///
    /// # Errors
    /// Returns error if the computation fails.
    fn sunrise(&self) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        self.time(Zenith::Geometric, EventKind::Sunrise, true)
    }

    /// Sunset, corrected for refraction, solar radius and elevation.
    ///
    /// # Errors
    /// Returns error if the computation fails.
    fn sunset(&self) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        self.time(Zenith::Geometric, EventKind::Sunset, true)
    }

    /// Sunrise as seen from sea level at the same coordinates.
    ///
    /// # Errors
    /// Returns error if the computation fails.
    fn sea_level_sunrise(&self) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        self.time(Zenith::Geometric, EventKind::Sunrise, false)
    }

    /// Sunset as seen from sea level at the same coordinates.
    ///
    /// # Errors
    /// Returns error if the computation fails.
    fn sea_level_sunset(&self) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        self.time(Zenith::Geometric, EventKind::Sunset, false)
    }

    /// Morning crossing of an arbitrary zenith, e.g. 106.1 for the sun
    /// 16.1° below the horizon.
    ///
    /// # Errors
    /// Returns `InvalidZenith` unless `zenith` is in (0, 180].
    fn sunrise_offset_by_degrees(&self, zenith: f64) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        self.time(Zenith::custom(zenith)?, EventKind::Sunrise, true)
    }

    /// Evening crossing of an arbitrary zenith.
    ///
    /// # Errors
    /// Returns `InvalidZenith` unless `zenith` is in (0, 180].
    fn sunset_offset_by_degrees(&self, zenith: f64) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        self.time(Zenith::custom(zenith)?, EventKind::Sunset, true)
    }

    /// Start of civil twilight (sun 6° below the horizon).
    ///
    /// # Errors
    /// Returns error if the computation fails.
    fn begin_civil_twilight(&self) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        self.time(Zenith::Civil, EventKind::Sunrise, true)
    }

    /// End of civil twilight.
    ///
    /// # Errors
    /// Returns error if the computation fails.
    fn end_civil_twilight(&self) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        self.time(Zenith::Civil, EventKind::Sunset, true)
    }

    /// Start of nautical twilight (sun 12° below the horizon).
    ///
    /// # Errors
    /// Returns error if the computation fails.
    fn begin_nautical_twilight(&self) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        self.time(Zenith::Nautical, EventKind::Sunrise, true)
    }

    /// End of nautical twilight.
    ///
    /// # Errors
    /// Returns error if the computation fails.
    fn end_nautical_twilight(&self) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        self.time(Zenith::Nautical, EventKind::Sunset, true)
    }

    /// Start of astronomical twilight (sun 18° below the horizon).
    ///
    /// # Errors
    /// Returns error if the computation fails.
    fn begin_astronomical_twilight(&self) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        self.time(Zenith::Astronomical, EventKind::Sunrise, true)
    }

    /// End of astronomical twilight.
    ///
    /// # Errors
    /// Returns error if the computation fails.
    fn end_astronomical_twilight(&self) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        self.time(Zenith::Astronomical, EventKind::Sunset, true)
    }

    /// One twelfth of the time from sea-level sunrise to sea-level sunset.
    ///
    /// # Errors
    /// Returns error if either computation fails.
    fn temporal_hour(&self) -> Result<SolarEvent<Duration>> {
        let sunrise = self.sea_level_sunrise()?;
        let sunset = self.sea_level_sunset()?;
        Ok(both(sunrise, sunset).map(|(start, end)| temporal_hour_between(&start, &end)))
    }

    /// Midpoint of sea-level sunrise and sunset, six temporal hours after
    /// sunrise. This is close to, but not exactly, the meridian transit.
    ///
    /// # Errors
    /// Returns error if either computation fails.
    fn sun_transit(&self) -> Result<SolarEvent<DateTime<Self::Tz>>> {
        let sunrise = self.sea_level_sunrise()?;
        let sunset = self.sea_level_sunset()?;
        Ok(both(sunrise, sunset).map(|(start, end)| {
            let hour = temporal_hour_between(&start, &end);
            start + hour * 6
        }))
    }
}

/// One twelfth of the time between `start` and `end`.
#[must_use]
pub fn temporal_hour_between<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Duration {
    end.clone().signed_duration_since(start) / 12
}

/// Local midnight of `date` at the location's UTC offset.
pub(crate) fn local_midnight(
    location: &GeoLocation,
    date: NaiveDate,
) -> Result<DateTime<FixedOffset>> {
    let offset = location.fixed_offset()?;
    date.and_time(NaiveTime::MIN)
        .and_local_timezone(offset)
        .single()
        .ok_or(Error::invalid_datetime("local midnight is not representable"))
}

/// Pairs two events, the first polar outcome winning.
fn both<T>(first: SolarEvent<T>, second: SolarEvent<T>) -> SolarEvent<(T, T)> {
    match (first, second) {
        (SolarEvent::Occurs(a), SolarEvent::Occurs(b)) => SolarEvent::Occurs((a, b)),
        (SolarEvent::AllDay, _) | (SolarEvent::Occurs(_), SolarEvent::AllDay) => {
            SolarEvent::AllDay
        }
        (SolarEvent::AllNight, _) | (SolarEvent::Occurs(_), SolarEvent::AllNight) => {
            SolarEvent::AllNight
        }
    }
}
