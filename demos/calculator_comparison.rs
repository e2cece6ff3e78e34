//! Compares the NOAA and Sun Times calculators over a year.

use chrono::{Datelike, Duration, NaiveDate};
use chrono_tz::Europe::London;
use solar_events::{
    AstronomicalCalculator, GeoLocation, NoaaCalculator, SolarEvent, SunTimesCalculator,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let london = GeoLocation::new(51.5074, -0.1278, 11.0)?;
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid date")?;

    println!("London, first day of each month (local time)");
    println!("{:<12} {:>10} {:>10} {:>8}", "date", "NOAA", "Sun Times", "diff s");

    let mut date = start;
    while date.year() == 2024 {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .and_then(|naive| naive.and_local_timezone(London).single())
            .ok_or("ambiguous local midnight")?;

        let noaa = NoaaCalculator::new(london, midnight).sunrise()?;
        let suntimes = SunTimesCalculator::new(london, midnight).sunrise()?;

        if let (SolarEvent::Occurs(a), SolarEvent::Occurs(b)) = (noaa, suntimes) {
            println!(
                "{:<12} {:>10} {:>10} {:>8}",
                date,
                a.format("%H:%M:%S"),
                b.format("%H:%M:%S"),
                a.signed_duration_since(b).num_seconds()
            );
        }

        date = (date + Duration::days(32)).with_day(1).ok_or("invalid date")?;
    }

    Ok(())
}
