//! Low-precision solar position model and the equation of time.
//!
//! All functions take Julian Centuries since J2000.0 and return degrees
//! unless noted otherwise. The polynomial and series coefficients are those
//! published by NOAA's Global Monitoring Laboratory, taken from Meeus,
//! "Astronomical Algorithms".

#![allow(clippy::unreadable_literal)]

use crate::math::{
    asin, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial, radians_to_degrees, sin,
    squared, tan,
};

/// Longitude of the Moon's ascending node, used by the nutation terms.
fn omega(julian_century: f64) -> f64 {
    125.04 - 1934.136 * julian_century
}

/// Mean obliquity of the ecliptic (axial tilt).
#[must_use]
pub fn mean_obliquity_of_ecliptic(julian_century: f64) -> f64 {
    let seconds = polynomial(&[21.448, -46.8150, -0.00059, 0.001813], julian_century);
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Mean obliquity corrected for nutation.
#[must_use]
pub fn obliquity_correction(julian_century: f64) -> f64 {
    mean_obliquity_of_ecliptic(julian_century)
        + 0.00256 * cos(degrees_to_radians(omega(julian_century)))
}

/// Geometric mean longitude of the sun, in [0, 360).
#[must_use]
pub fn geometric_mean_longitude(julian_century: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(
        &[280.46646, 36000.76983, 0.0003032],
        julian_century,
    ))
}

/// Geometric mean anomaly of the sun, not normalized.
#[must_use]
pub fn geometric_mean_anomaly(julian_century: f64) -> f64 {
    polynomial(&[357.52911, 35999.05029, -0.0001537], julian_century)
}

/// Eccentricity of the Earth's orbit (unitless).
#[must_use]
pub fn orbit_eccentricity(julian_century: f64) -> f64 {
    polynomial(&[0.016708634, -0.000042037, -0.0000001267], julian_century)
}

/// Equation of center of the sun.
#[must_use]
pub fn equation_of_center(julian_century: f64) -> f64 {
    let m = degrees_to_radians(geometric_mean_anomaly(julian_century));
    let jc = julian_century;

    sin(m) * (1.914602 - jc * (0.004817 + 0.000014 * jc))
        + sin(2.0 * m) * (0.019993 - 0.000101 * jc)
        + sin(3.0 * m) * 0.000289
}

/// True longitude of the sun.
#[must_use]
pub fn true_longitude(julian_century: f64) -> f64 {
    geometric_mean_longitude(julian_century) + equation_of_center(julian_century)
}

/// Apparent longitude of the sun, corrected for nutation and aberration.
#[must_use]
pub fn apparent_longitude(julian_century: f64) -> f64 {
    true_longitude(julian_century)
        - 0.00569
        - 0.00478 * sin(degrees_to_radians(omega(julian_century)))
}

/// Declination of the sun.
#[must_use]
pub fn declination(julian_century: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity_correction(julian_century));
    let lambda = degrees_to_radians(apparent_longitude(julian_century));
    radians_to_degrees(asin(sin(epsilon) * sin(lambda)))
}

/// Equation of time in minutes: apparent minus mean solar time.
///
/// Positive when the sundial runs ahead of the clock.
#[must_use]
pub fn equation_of_time(julian_century: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity_correction(julian_century));
    let l0 = degrees_to_radians(geometric_mean_longitude(julian_century));
    let e = orbit_eccentricity(julian_century);
    let m = degrees_to_radians(geometric_mean_anomaly(julian_century));
    let y = squared(tan(epsilon / 2.0));

    let eot = y * sin(2.0 * l0) - 2.0 * e * sin(m) + 4.0 * e * y * sin(m) * cos(2.0 * l0)
        - 0.5 * y * y * sin(4.0 * l0)
        - 1.25 * e * e * sin(2.0 * m);

    radians_to_degrees(eot) * 4.0
}
