//! Zenith correction for atmospheric refraction, solar radius and elevation.

use crate::constants::{EARTH_RADIUS_KM, GEOMETRIC_ZENITH, REFRACTION, SOLAR_RADIUS};
use crate::math::{acos, radians_to_degrees};

/// Horizon dip in degrees seen from `elevation` meters above sea level.
///
/// An elevated observer sees past the geometric horizon, so the sun rises
/// earlier and sets later.
#[must_use]
pub fn elevation_adjustment(elevation: f64) -> f64 {
    let elevation_km = elevation / 1000.0;
    radians_to_degrees(acos(EARTH_RADIUS_KM / (EARTH_RADIUS_KM + elevation_km)))
}

/// Adjusts a zenith for refraction, solar radius and horizon dip.
///
/// Only the geometric zenith (exactly 90°) is adjusted. Civil, nautical,
/// astronomical and any other zenith are returned unchanged: twilight is
/// defined by the sun's center relative to the true horizon.
///
/// # Example
/// ```
/// # use solar_events::zenith::adjust_zenith;
/// let sea_level = adjust_zenith(90.0, 0.0);
/// assert!((sea_level - 90.833_333).abs() < 1e-6);
/// assert_eq!(adjust_zenith(96.0, 1000.0), 96.0);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn adjust_zenith(zenith: f64, elevation: f64) -> f64 {
    if zenith != GEOMETRIC_ZENITH {
        return zenith;
    }
    zenith + SOLAR_RADIUS + REFRACTION + elevation_adjustment(elevation)
}
