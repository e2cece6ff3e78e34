//! Mathematical utilities for the sunrise/sunset algorithms.
//!
//! Trigonometry goes through these wrappers so the same code builds against
//! native `f64` methods (`std`) or `libm` (`no_std`).

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    wrap(degrees, 360.0)
}

/// Normalizes a time of day in hours to the range [0, 24).
pub fn normalize_hours_0_to_24(hours: f64) -> f64 {
    wrap(hours, 24.0)
}

fn wrap(value: f64, period: f64) -> f64 {
    let normalized = value % period;
    if normalized < 0.0 {
        normalized + period
    } else {
        normalized
    }
}

/// Evaluates a polynomial with Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    coeffs
        .iter()
        .rev()
        .skip(1)
        .fold(last, |acc, &coeff| mul_add(acc, x, coeff))
}

macro_rules! unary_math {
    ($($(#[$attr:meta])* $name:ident => $libm:ident;)*) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $name(x: f64) -> f64 {
                #[cfg(feature = "std")]
                return x.$name();

                #[cfg(not(feature = "std"))]
                return libm::$libm(x);
            }
        )*
    };
}

unary_math! {
    /// Sine of an angle in radians.
    sin => sin;
    /// Cosine of an angle in radians.
    cos => cos;
    /// Tangent of an angle in radians.
    tan => tan;
    /// Arcsine in radians. NaN outside [-1, 1].
    asin => asin;
    /// Arccosine in radians. NaN outside [-1, 1].
    acos => acos;
    /// Arctangent in radians, range (-π/2, π/2).
    atan => atan;
    /// Largest integer value not greater than `x`.
    floor => floor;
}

/// Four-quadrant arctangent of `y / x` in radians.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes (x * a) + b with a single rounding.
#[inline]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}

/// Square of `x`.
#[inline]
pub fn squared(x: f64) -> f64 {
    x * x
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_degrees_0_to_360() {
        assert_eq!(normalize_degrees_0_to_360(0.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(360.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(450.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(-90.0), 270.0);
        assert_eq!(normalize_degrees_0_to_360(-720.0), 0.0);
    }

    #[test]
    fn test_normalize_hours_0_to_24() {
        assert_eq!(normalize_hours_0_to_24(23.5), 23.5);
        assert_eq!(normalize_hours_0_to_24(24.0), 0.0);
        assert_eq!(normalize_hours_0_to_24(25.5), 1.5);
        assert_eq!(normalize_hours_0_to_24(-1.5), 22.5);
        assert_eq!(normalize_hours_0_to_24(-48.0), 0.0);
    }

    #[test]
    fn test_polynomial() {
        assert_eq!(polynomial(&[], 5.0), 0.0);
        assert_eq!(polynomial(&[3.0], 5.0), 3.0);
        assert_eq!(polynomial(&[2.0, 3.0], 4.0), 14.0);
        assert!((polynomial(&[1.0, 2.0, 3.0], 2.0) - 17.0).abs() < EPSILON);
    }

    #[test]
    fn test_trigonometric_functions() {
        assert!(sin(0.0).abs() < EPSILON);
        assert!((cos(0.0) - 1.0).abs() < EPSILON);
        assert!(tan(0.0).abs() < EPSILON);
        assert!(acos(1.0).abs() < EPSILON);
        assert!((asin(1.0) - PI / 2.0).abs() < EPSILON);
        assert!((atan2(1.0, 0.0) - PI / 2.0).abs() < EPSILON);
        assert!(acos(1.5).is_nan());
        assert_eq!(floor(-1.5), -2.0);
        assert_eq!(squared(3.0), 9.0);
    }
}
