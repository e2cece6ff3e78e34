//! Sunrise/sunset calculation example with different twilight types across diverse global locations.

use chrono::{DateTime, NaiveDate, Utc};
use solar_events::{AstronomicalCalculator, GeoLocation, NoaaCalculator, SolarEvent};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

type Event = fn(&NoaaCalculator<Utc>) -> solar_events::Result<SolarEvent<DateTime<Utc>>>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Cities from around the world (diverse latitudes and longitudes)
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            elevation: 0.0,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
            elevation: 31.0,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            elevation: 0.0,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            elevation: 15.0,
        },
        City {
            name: "Brasília, Brazil",
            latitude: -15.8,
            longitude: -47.85,
            elevation: 1172.0,
        },
    ];

    // Winter solstice shows the most extreme variations
    let date = NaiveDate::from_ymd_opt(2023, 12, 21)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc();

    for city in &cities {
        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E, {:.0} m",
            city.latitude, city.longitude, city.elevation
        );
        println!("Date: December 21, 2023 (Winter Solstice)");
        println!();

        let location = GeoLocation::new(city.latitude, city.longitude, city.elevation)?;
        calculate_and_print_times(&NoaaCalculator::new(location, date))?;
        println!();
    }

    Ok(())
}

fn calculate_and_print_times(
    calculator: &NoaaCalculator<Utc>,
) -> Result<(), Box<dyn std::error::Error>> {
    let pairs: [(&str, Event, Event); 4] = [
        ("Sunrise/Sunset", |c| c.sunrise(), |c| c.sunset()),
        (
            "Civil Twilight",
            |c| c.begin_civil_twilight(),
            |c| c.end_civil_twilight(),
        ),
        (
            "Nautical Twilight",
            |c| c.begin_nautical_twilight(),
            |c| c.end_nautical_twilight(),
        ),
        (
            "Astronomical Twilight",
            |c| c.begin_astronomical_twilight(),
            |c| c.end_astronomical_twilight(),
        ),
    ];

    for (label, begin, end) in pairs {
        println!("{label}:");
        print_event("Begin", &begin(calculator)?);
        print_event("End", &end(calculator)?);
    }

    if let SolarEvent::Occurs(hour) = calculator.temporal_hour()? {
        println!("Temporal hour: {} min", hour.num_minutes());
    }
    Ok(())
}

fn print_event(label: &str, event: &SolarEvent<DateTime<Utc>>) {
    match event {
        SolarEvent::Occurs(time) => println!("  {label}: {}", time.format("%Y-%m-%d %H:%M:%S UTC")),
        SolarEvent::AllDay => println!("  {label}: all day above horizon"),
        SolarEvent::AllNight => println!("  {label}: all night below horizon"),
    }
}
