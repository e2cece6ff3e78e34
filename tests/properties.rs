//! Property tests over the numeric API.

use proptest::prelude::*;
use solar_events::hour_angle::hour_angle;
use solar_events::time::{century_to_julian_day, julian_day_to_century};
use solar_events::zenith::adjust_zenith;
use solar_events::{noaa, suntimes, EventKind, GeoLocation, SolarEvent};

fn valid_date() -> impl Strategy<Value = (i32, u32, u32)> {
    (1900..2100i32, 1..=12u32, 1..=28u32)
}

proptest! {
    #[test]
    fn prop_century_round_trip(century in -5.0..5.0f64) {
        let back = julian_day_to_century(century_to_julian_day(century));
        prop_assert!((back - century).abs() < 1e-12);
    }

    #[test]
    fn prop_adjust_zenith_identity_away_from_geometric(
        zenith in 0.01..180.0f64,
        elevation in 0.0..9000.0f64,
    ) {
        prop_assume!(zenith != 90.0);
        prop_assert_eq!(adjust_zenith(zenith, elevation), zenith);
    }

    #[test]
    fn prop_adjust_zenith_grows_with_elevation(low in 0.0..5000.0f64, extra in 1.0..4000.0f64) {
        prop_assert!(adjust_zenith(90.0, low + extra) > adjust_zenith(90.0, low));
        prop_assert!(adjust_zenith(90.0, low) >= 90.0 + 50.0 / 60.0);
    }

    #[test]
    fn prop_hour_angle_is_in_range(
        latitude in -89.0..89.0f64,
        declination in -23.5..23.5f64,
        zenith in 80.0..110.0f64,
    ) {
        match hour_angle(latitude, declination, zenith, EventKind::Sunrise).unwrap() {
            SolarEvent::Occurs(angle) => {
                prop_assert!((0.0..=core::f64::consts::PI).contains(&angle));
                let sunset = hour_angle(latitude, declination, zenith, EventKind::Sunset).unwrap();
                prop_assert_eq!(sunset, SolarEvent::Occurs(-angle));
            }
            SolarEvent::AllDay | SolarEvent::AllNight => {}
        }
    }

    #[test]
    fn prop_noaa_sunrise_precedes_sunset(
        latitude in -60.0..60.0f64,
        longitude in -180.0..180.0f64,
        (year, month, day) in valid_date(),
    ) {
        let location = GeoLocation::new(latitude, longitude, 0.0).unwrap();
        let (sunrise, sunset) = noaa::sunrise_sunset_utc(year, month, day, &location).unwrap();
        let (sunrise, sunset) = (sunrise.into_occurs().unwrap(), sunset.into_occurs().unwrap());
        prop_assert!(sunrise.hours() < sunset.hours());

        let noon = noaa::solar_noon(year, month, day, longitude).unwrap();
        prop_assert!(sunrise.hours() < noon.hours() && noon.hours() < sunset.hours());
    }

    #[test]
    fn prop_suntimes_stays_within_one_utc_day(
        latitude in -60.0..60.0f64,
        longitude in -180.0..180.0f64,
        (year, month, day) in valid_date(),
    ) {
        let location = GeoLocation::new(latitude, longitude, 0.0).unwrap();
        let (sunrise, sunset) = suntimes::sunrise_sunset_utc(year, month, day, &location).unwrap();
        for hours in [sunrise.into_occurs().unwrap(), sunset.into_occurs().unwrap()] {
            prop_assert!((0.0..24.0).contains(&hours.hours()));
        }
    }

    #[test]
    fn prop_calculators_agree_on_the_clock(
        latitude in -55.0..55.0f64,
        longitude in -180.0..180.0f64,
        (year, month, day) in (2000..2050i32, 1..=12u32, 1..=28u32),
    ) {
        let location = GeoLocation::new(latitude, longitude, 0.0).unwrap();
        let noaa_events = noaa::sunrise_sunset_utc(year, month, day, &location).unwrap();
        let suntimes_events = suntimes::sunrise_sunset_utc(year, month, day, &location).unwrap();

        for (a, b) in [
            (noaa_events.0, suntimes_events.0),
            (noaa_events.1, suntimes_events.1),
        ] {
            // Sun Times folds into one UTC day; compare the clock only
            let a = a.into_occurs().unwrap().day_and_hours().1;
            let b = b.into_occurs().unwrap().day_and_hours().1;
            let diff = (a - b).abs();
            prop_assert!(diff.min(24.0 - diff) < 5.0 / 60.0, "noaa {} suntimes {}", a, b);
        }
    }
}
