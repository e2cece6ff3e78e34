//! Core data types for sunrise/sunset calculations.

use crate::constants::{ASTRONOMICAL_ZENITH, CIVIL_ZENITH, GEOMETRIC_ZENITH, NAUTICAL_ZENITH};
use crate::error::{check_coordinates, check_elevation, check_finite, check_zenith};
use crate::math::{floor, normalize_degrees_0_to_360};
use crate::{Error, Result};

/// An observer on the Earth's surface.
///
/// Coordinates are validated once at construction, so every calculator can
/// rely on them being in range.
///
/// # Example
/// ```
/// # use solar_events::GeoLocation;
/// let new_york = GeoLocation::new(40.7128, -74.0060, 10.0).unwrap();
/// assert_eq!(new_york.latitude(), 40.7128);
/// assert_eq!(new_york.at_sea_level().elevation(), 0.0);
///
/// assert!(GeoLocation::new(91.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive
    latitude: f64,
    /// Longitude in degrees, east positive
    longitude: f64,
    /// Elevation above sea level in meters
    elevation: f64,
    /// Offset of local standard time from UTC in seconds
    utc_offset_seconds: i32,
}

impl GeoLocation {
    /// Creates a location at UTC offset zero.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidElevation` for
    /// out-of-range values.
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_elevation(elevation)?;
        Ok(Self {
            latitude,
            longitude,
            elevation,
            utc_offset_seconds: 0,
        })
    }

    /// Returns a copy with the given UTC offset.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` unless the offset is strictly within ±24 hours.
    pub fn with_utc_offset(self, seconds: i32) -> Result<Self> {
        if seconds.unsigned_abs() >= 86_400 {
            return Err(Error::invalid_utc_offset(seconds));
        }
        Ok(Self {
            utc_offset_seconds: seconds,
            ..self
        })
    }

    /// Returns a copy of this location with the elevation set to zero.
    #[must_use]
    pub const fn at_sea_level(&self) -> Self {
        Self {
            elevation: 0.0,
            ..*self
        }
    }

    /// Latitude in degrees (-90 to +90, north positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees (-180 to +180, east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Elevation above sea level in meters.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Offset of local time from UTC in seconds, east positive.
    #[must_use]
    pub const fn utc_offset_seconds(&self) -> i32 {
        self.utc_offset_seconds
    }

    /// The location's UTC offset as a chrono zone.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` if chrono rejects the stored offset.
    #[cfg(feature = "chrono")]
    pub fn fixed_offset(&self) -> Result<chrono::FixedOffset> {
        chrono::FixedOffset::east_opt(self.utc_offset_seconds)
            .ok_or(Error::invalid_utc_offset(self.utc_offset_seconds))
    }
}

/// Predefined zenith angles for sunrise, sunset and twilight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zenith {
    /// Sun's center on a mathematical horizon (90°). The only zenith that is
    /// corrected for refraction, solar radius and observer elevation.
    Geometric,
    /// Civil twilight (96°)
    Civil,
    /// Nautical twilight (102°)
    Nautical,
    /// Astronomical twilight (108°)
    Astronomical,
    /// Custom zenith angle in degrees
    Custom(f64),
}

impl Zenith {
    /// Zenith angle in degrees.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Geometric => GEOMETRIC_ZENITH,
            Self::Civil => CIVIL_ZENITH,
            Self::Nautical => NAUTICAL_ZENITH,
            Self::Astronomical => ASTRONOMICAL_ZENITH,
            Self::Custom(degrees) => *degrees,
        }
    }

    /// Creates a custom zenith.
    ///
    /// # Errors
    /// Returns `InvalidZenith` unless `degrees` is in (0, 180].
    pub fn custom(degrees: f64) -> Result<Self> {
        check_zenith(degrees)?;
        Ok(Self::Custom(degrees))
    }
}

impl Eq for Zenith {}

impl core::hash::Hash for Zenith {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Geometric => 0.hash(state),
            Self::Civil => 1.hash(state),
            Self::Nautical => 2.hash(state),
            Self::Astronomical => 3.hash(state),
            Self::Custom(degrees) => {
                4.hash(state);
                // -0.0 == 0.0, so they must hash alike
                let normalized = if *degrees == 0.0 { 0.0 } else { *degrees };
                normalized.to_bits().hash(state);
            }
        }
    }
}

/// Which horizon crossing to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Morning crossing, sun rising through the zenith angle
    Sunrise,
    /// Evening crossing, sun setting through the zenith angle
    Sunset,
}

impl EventKind {
    /// `true` for [`EventKind::Sunrise`].
    #[must_use]
    pub const fn is_sunrise(&self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Outcome of a single sunrise/sunset calculation.
///
/// At high latitudes the sun may not cross the requested zenith at all on a
/// given date. That is a regular result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarEvent<T> {
    /// The sun crosses the zenith at this time
    Occurs(T),
    /// The sun stays above the zenith all day (polar day)
    AllDay,
    /// The sun stays below the zenith all day (polar night)
    AllNight,
}

impl<T> SolarEvent<T> {
    /// Maps the time of an occurring event, keeping polar outcomes.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> SolarEvent<U> {
        match self {
            Self::Occurs(value) => SolarEvent::Occurs(f(value)),
            Self::AllDay => SolarEvent::AllDay,
            Self::AllNight => SolarEvent::AllNight,
        }
    }

    /// Like [`SolarEvent::map`] with a fallible mapping.
    ///
    /// # Errors
    /// Propagates the error returned by `f`.
    pub fn try_map<U, F: FnOnce(T) -> Result<U>>(self, f: F) -> Result<SolarEvent<U>> {
        Ok(match self {
            Self::Occurs(value) => SolarEvent::Occurs(f(value)?),
            Self::AllDay => SolarEvent::AllDay,
            Self::AllNight => SolarEvent::AllNight,
        })
    }

    /// Chains a calculation that may itself not occur.
    ///
    /// # Errors
    /// Propagates the error returned by `f`.
    pub fn try_and_then<U, F: FnOnce(T) -> Result<SolarEvent<U>>>(
        self,
        f: F,
    ) -> Result<SolarEvent<U>> {
        match self {
            Self::Occurs(value) => f(value),
            Self::AllDay => Ok(SolarEvent::AllDay),
            Self::AllNight => Ok(SolarEvent::AllNight),
        }
    }

    /// Time of the event, if it occurs.
    pub const fn occurs(&self) -> Option<&T> {
        if let Self::Occurs(value) = self {
            Some(value)
        } else {
            None
        }
    }

    /// Consumes the result, returning the time if the event occurs.
    pub fn into_occurs(self) -> Option<T> {
        if let Self::Occurs(value) = self {
            Some(value)
        } else {
            None
        }
    }

    /// Checks if the event occurs.
    pub const fn is_occurring(&self) -> bool {
        matches!(self, Self::Occurs(_))
    }

    /// Checks if the sun never goes below the zenith (polar day).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Checks if the sun never reaches the zenith (polar night).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight)
    }
}

/// Hours since midnight UTC that can extend beyond a single day.
///
/// Values represent hours since 0h UTC of the calculation date:
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// # Example
/// ```
/// # use solar_events::HoursUtc;
/// let sunset = HoursUtc::from_hours(24.5); // 00:30 UTC the next day
/// assert_eq!(sunset.day_and_hours(), (1, 0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Creates a new `HoursUtc` from minutes since midnight UTC.
    #[must_use]
    pub fn from_minutes(minutes: f64) -> Self {
        Self(minutes / 60.0)
    }

    /// Gets the raw hours value, possibly negative or ≥ 24.0.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Splits the value into hours, minutes, seconds and nanoseconds.
    ///
    /// Each component is the truncated integer part of the remaining
    /// fraction, never rounded. Negative values yield non-positive
    /// components.
    ///
    /// ```
    /// # use solar_events::HoursUtc;
    /// assert_eq!(HoursUtc::from_hours(5.5).components(), (5, 30, 0, 0));
    /// assert_eq!(HoursUtc::from_hours(-1.5).components(), (-1, -30, 0, 0));
    /// ```
    #[must_use]
    pub fn components(&self) -> (i64, i64, i64, i64) {
        let mut rest = self.0;
        let hours = rest as i64;
        rest = (rest - hours as f64) * 60.0;
        let minutes = rest as i64;
        rest = (rest - minutes as f64) * 60.0;
        let seconds = rest as i64;
        rest = (rest - seconds as f64) * 1e9;
        (hours, minutes, seconds, rest as i64)
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        (day_offset_raw as i32, normalized_hours)
    }
}

/// Sun position as seen by an observer.
///
/// - Azimuth: 0° = North, measured clockwise to 360°
/// - Zenith angle: 0° = directly overhead, 90° = horizon, 180° = nadir
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    azimuth: f64,
    zenith_angle: f64,
}

impl SolarPosition {
    /// Creates a new solar position from azimuth and zenith angle.
    ///
    /// # Errors
    /// Returns `ComputationError` if either angle is not finite, or the
    /// zenith angle is outside [0, 180].
    pub fn new(azimuth: f64, zenith_angle: f64) -> Result<Self> {
        let azimuth = normalize_degrees_0_to_360(check_finite(azimuth, "azimuth is not finite")?);
        let zenith_angle = check_finite(zenith_angle, "zenith angle is not finite")?;
        if !(0.0..=180.0).contains(&zenith_angle) {
            return Err(Error::computation_error(
                "zenith angle must be between 0° and 180°",
            ));
        }
        Ok(Self {
            azimuth,
            zenith_angle,
        })
    }

    /// Azimuth in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Zenith angle in degrees (0° to 180°).
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.zenith_angle
    }

    /// Elevation above the horizon in degrees, 90° - zenith.
    #[must_use]
    pub fn elevation_angle(&self) -> f64 {
        90.0 - self.zenith_angle
    }

    /// Checks if the sun's center is above the horizon.
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation_angle() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_location_validation() {
        let location = GeoLocation::new(40.7128, -74.006, 12.0).unwrap();
        assert_eq!(location.elevation(), 12.0);
        assert_eq!(location.utc_offset_seconds(), 0);

        assert_eq!(
            GeoLocation::new(90.5, 0.0, 0.0),
            Err(Error::invalid_latitude(90.5))
        );
        assert_eq!(
            GeoLocation::new(0.0, -180.5, 0.0),
            Err(Error::invalid_longitude(-180.5))
        );
        assert_eq!(
            GeoLocation::new(0.0, 0.0, -10.0),
            Err(Error::invalid_elevation(-10.0))
        );
    }

    #[test]
    fn test_geo_location_utc_offset() {
        let location = GeoLocation::new(31.778, 35.235, 754.0)
            .unwrap()
            .with_utc_offset(2 * 3600)
            .unwrap();
        assert_eq!(location.utc_offset_seconds(), 7200);
        assert_eq!(location.at_sea_level().utc_offset_seconds(), 7200);
        assert!(location.with_utc_offset(86_400).is_err());
        assert!(location.with_utc_offset(-86_400).is_err());
    }

    #[test]
    fn test_zenith_degrees() {
        assert_eq!(Zenith::Geometric.degrees(), 90.0);
        assert_eq!(Zenith::Civil.degrees(), 96.0);
        assert_eq!(Zenith::Nautical.degrees(), 102.0);
        assert_eq!(Zenith::Astronomical.degrees(), 108.0);
        assert_eq!(Zenith::custom(93.5).unwrap().degrees(), 93.5);
        assert!(Zenith::custom(0.0).is_err());
        assert!(Zenith::custom(200.0).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_zenith_hash_normalizes_zero_sign() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Zenith::Custom(0.0));
        set.insert(Zenith::Custom(-0.0));
        set.insert(Zenith::Civil);

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_solar_event_combinators() {
        let event = SolarEvent::Occurs(6.5);
        assert_eq!(event.map(|h| h * 60.0), SolarEvent::Occurs(390.0));
        assert_eq!(event.occurs(), Some(&6.5));
        assert!(event.is_occurring());

        let night: SolarEvent<f64> = SolarEvent::AllNight;
        assert_eq!(night.map(|h| h * 60.0), SolarEvent::AllNight);
        assert!(night.is_polar_night());
        assert_eq!(night.into_occurs(), None);

        let failed = event.try_map(|_| -> Result<f64> { Err(Error::computation_error("x")) });
        assert!(failed.is_err());
        assert_eq!(
            SolarEvent::<f64>::AllDay.try_and_then(|h| Ok(SolarEvent::Occurs(h))),
            Ok(SolarEvent::AllDay)
        );
    }

    #[test]
    fn test_hours_utc_components() {
        assert_eq!(HoursUtc::from_hours(0.0).components(), (0, 0, 0, 0));
        assert_eq!(HoursUtc::from_hours(13.25).components(), (13, 15, 0, 0));
        assert_eq!(HoursUtc::from_minutes(90.0).components(), (1, 30, 0, 0));
        assert_eq!(HoursUtc::from_hours(25.75).components(), (25, 45, 0, 0));
    }

    #[test]
    fn test_hours_utc_day_and_hours() {
        assert_eq!(HoursUtc::from_hours(6.5).day_and_hours(), (0, 6.5));
        assert_eq!(HoursUtc::from_hours(-0.5).day_and_hours(), (-1, 23.5));
        assert_eq!(HoursUtc::from_hours(48.0).day_and_hours(), (2, 0.0));
    }

    #[test]
    fn test_solar_position() {
        let position = SolarPosition::new(-90.0, 30.0).unwrap();
        assert_eq!(position.azimuth(), 270.0);
        assert_eq!(position.elevation_angle(), 60.0);
        assert!(position.is_sun_up());

        assert!(SolarPosition::new(0.0, 181.0).is_err());
        assert!(SolarPosition::new(f64::NAN, 90.0).is_err());
    }
}
