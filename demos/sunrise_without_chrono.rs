//! Example demonstrating sunrise/sunset calculation without the chrono library.
//!
//! This example shows how to use the numeric API when you don't want to depend on chrono.

use solar_events::{noaa, suntimes, EventKind, GeoLocation, SolarEvent, Zenith};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // San Francisco on June 21, 2023
    let san_francisco = GeoLocation::new(37.7749, -122.4194, 0.0)?;
    let (sunrise, sunset) = noaa::sunrise_sunset_utc(2023, 6, 21, &san_francisco)?;
    let noon = noaa::solar_noon(2023, 6, 21, san_francisco.longitude())?;

    match (sunrise, sunset) {
        (SolarEvent::Occurs(sunrise), SolarEvent::Occurs(sunset)) => {
            println!("San Francisco, June 21, 2023 (UTC):");
            println!("  Sunrise:    {} hours", sunrise.hours());
            println!("  Solar noon: {} hours", noon.hours());
            println!("  Sunset:     {} hours", sunset.hours());
            println!();

            // Sunset falls after midnight UTC
            let (day_offset, hours) = sunset.day_and_hours();
            println!("Sunset breakdown:");
            println!("  Day offset: {day_offset}");
            println!("  Hours in day: {hours:.2}");
        }
        (SolarEvent::AllDay, _) => println!("Polar day - sun never sets"),
        _ => println!("Polar night - sun never rises"),
    }

    // Custom zenith: sun 16.1° below the horizon
    println!("\nWith custom zenith (106.1°):");
    let zenith = Zenith::custom(106.1)?;
    for kind in [EventKind::Sunrise, EventKind::Sunset] {
        let noaa = noaa::utc_time(2023, 6, 21, &san_francisco, zenith, kind, true)?;
        let suntimes = suntimes::utc_time(2023, 6, 21, &san_francisco, zenith, kind, true)?;
        println!("  {kind:?}: NOAA {noaa:?}, Sun Times {suntimes:?}");
    }

    Ok(())
}
