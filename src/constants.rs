//! Shared numeric constants for the sunrise/sunset algorithms.
//!
//! Every component reads zenith values, the Julian epoch and the atmospheric
//! corrections from here rather than repeating the literals.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00:00 UTC).
pub const JULIAN_DAY_J2000: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Minutes per day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Minutes of time per degree of longitude (1440 / 360).
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Degrees of hour angle per hour of time (360 / 24).
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Zenith of the sun's center on a mathematical horizon.
pub const GEOMETRIC_ZENITH: f64 = 90.0;

/// Zenith at the start/end of civil twilight (sun 6° below the horizon).
pub const CIVIL_ZENITH: f64 = 96.0;

/// Zenith at the start/end of nautical twilight (sun 12° below the horizon).
pub const NAUTICAL_ZENITH: f64 = 102.0;

/// Zenith at the start/end of astronomical twilight (sun 18° below the horizon).
pub const ASTRONOMICAL_ZENITH: f64 = 108.0;

/// Average atmospheric refraction at the horizon, in degrees.
pub const REFRACTION: f64 = 34.0 / 60.0;

/// Average apparent radius of the solar disc, in degrees.
pub const SOLAR_RADIUS: f64 = 16.0 / 60.0;

/// Earth radius used for the horizon dip correction, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6_356.9;
