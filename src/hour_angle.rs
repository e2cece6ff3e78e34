//! Hour angle of the sun at a zenith crossing.

use crate::math::{acos, cos, degrees_to_radians, tan};
use crate::{Error, EventKind, Result, SolarEvent};

/// Hour angle in radians at which the sun crosses `zenith`.
///
/// Positive for [`EventKind::Sunrise`] and negated for
/// [`EventKind::Sunset`]. When the sun never reaches the zenith on that
/// date the result is [`SolarEvent::AllNight`]; when it never drops below it,
/// [`SolarEvent::AllDay`].
///
/// # Errors
/// Returns `ComputationError` if the inputs produce a non-finite cosine.
///
/// # Example
/// ```
/// # use solar_events::{hour_angle::hour_angle, EventKind, SolarEvent};
/// // Equinox at the equator: sunrise six hours before noon
/// let ha = hour_angle(0.0, 0.0, 90.0, EventKind::Sunrise).unwrap();
/// let SolarEvent::Occurs(radians) = ha else { panic!() };
/// assert!((radians.to_degrees() - 90.0).abs() < 1e-9);
///
/// // 80°N near the winter solstice: the sun does not rise
/// let polar = hour_angle(80.0, -23.44, 90.833, EventKind::Sunrise).unwrap();
/// assert_eq!(polar, SolarEvent::AllNight);
/// ```
pub fn hour_angle(
    latitude: f64,
    declination: f64,
    zenith: f64,
    kind: EventKind,
) -> Result<SolarEvent<f64>> {
    let lat = degrees_to_radians(latitude);
    let dec = degrees_to_radians(declination);
    let cos_hour_angle =
        cos(degrees_to_radians(zenith)) / (cos(lat) * cos(dec)) - tan(lat) * tan(dec);

    let event = solve_cos_hour_angle(cos_hour_angle)?;
    Ok(if kind.is_sunrise() {
        event
    } else {
        event.map(|angle| -angle)
    })
}

/// Takes the arccosine of an hour-angle cosine, classifying out-of-range
/// values as polar day or night.
pub(crate) fn solve_cos_hour_angle(cos_hour_angle: f64) -> Result<SolarEvent<f64>> {
    if cos_hour_angle.is_nan() {
        return Err(Error::computation_error("hour angle cosine is not a number"));
    }
    if cos_hour_angle > 1.0 {
        log::debug!("no zenith crossing, sun stays below (cos H = {cos_hour_angle})");
        return Ok(SolarEvent::AllNight);
    }
    if cos_hour_angle < -1.0 {
        log::debug!("no zenith crossing, sun stays above (cos H = {cos_hour_angle})");
        return Ok(SolarEvent::AllDay);
    }
    Ok(SolarEvent::Occurs(acos(cos_hour_angle)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degrees(event: SolarEvent<f64>) -> f64 {
        event.into_occurs().unwrap().to_degrees()
    }

    #[test]
    fn test_sunset_is_negated_sunrise() {
        let rise = degrees(hour_angle(48.2, 15.0, 90.833, EventKind::Sunrise).unwrap());
        let set = degrees(hour_angle(48.2, 15.0, 90.833, EventKind::Sunset).unwrap());
        assert!(rise > 90.0 && rise < 130.0);
        assert_eq!(rise, -set);
    }

    #[test]
    fn test_polar_night_and_day() {
        assert_eq!(
            hour_angle(80.0, -23.44, 90.833, EventKind::Sunrise).unwrap(),
            SolarEvent::AllNight
        );
        assert_eq!(
            hour_angle(80.0, -23.44, 90.833, EventKind::Sunset).unwrap(),
            SolarEvent::AllNight
        );
        assert_eq!(
            hour_angle(80.0, 23.44, 90.833, EventKind::Sunrise).unwrap(),
            SolarEvent::AllDay
        );
        assert_eq!(
            hour_angle(-80.0, -23.44, 90.833, EventKind::Sunset).unwrap(),
            SolarEvent::AllDay
        );
    }

    #[test]
    fn test_boundary_cosines() {
        assert_eq!(solve_cos_hour_angle(1.0).unwrap(), SolarEvent::Occurs(0.0));
        assert!(solve_cos_hour_angle(-1.0).unwrap().is_occurring());
        assert!(solve_cos_hour_angle(1.0 + 1e-12).unwrap().is_polar_night());
        assert!(solve_cos_hour_angle(-1.0 - 1e-12).unwrap().is_polar_day());
        assert!(solve_cos_hour_angle(f64::NAN).is_err());
    }
}
