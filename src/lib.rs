//! # Solar Events
//!
//! Sunrise, sunset and twilight times for a location and date.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Two independent algorithms are provided behind one interface:
//! - **NOAA**: the solar position model of NOAA's Global Monitoring
//!   Laboratory (after Meeus), refined in two passes. About a minute of
//!   accuracy within ±72° latitude.
//! - **Sun Times**: the closed-form approximation of the US Naval
//!   Observatory's Almanac for Computers. Single pass, a minute or two of
//!   accuracy at mid-latitudes.
//!
//! Both share the zenith conventions (geometric, civil, nautical and
//! astronomical) and the refraction, solar radius and elevation correction
//! of the geometric horizon.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable the `DateTime<Tz>` based calculator API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-events = "0.1"
//!
//! # Numeric API only
//! solar-events = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # no_std
//! solar-events = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: rejected
//! inputs and events that do not occur at `debug`, refinement passes at
//! `trace`. Install any logger to see them.
//!
//! ## References
//!
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell.
//! - NOAA Global Monitoring Laboratory, Solar Calculator.
//!   <https://gml.noaa.gov/grad/solcalc/>
//! - Nautical Almanac Office (1990). Almanac for Computers. US Naval
//!   Observatory.
//!
//! ## Quick Start
//!
//! ### Sunrise and Sunset (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_events::{AstronomicalCalculator, GeoLocation, NoaaCalculator, SolarEvent};
//! use chrono::{DateTime, FixedOffset};
//!
//! let vienna = GeoLocation::new(48.21, 16.37, 190.0).unwrap();
//! let date = "2026-06-21T00:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let calculator = NoaaCalculator::new(vienna, date);
//!
//! match calculator.sunrise().unwrap() {
//!     SolarEvent::Occurs(sunrise) => println!("Sunrise: {sunrise}"),
//!     SolarEvent::AllDay => println!("Sun never sets"),
//!     SolarEvent::AllNight => println!("Sun never rises"),
//! }
//! println!("Dusk: {:?}", calculator.end_civil_twilight().unwrap().into_occurs());
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use solar_events::{suntimes, GeoLocation};
//!
//! let vienna = GeoLocation::new(48.21, 16.37, 190.0).unwrap();
//! let (sunrise, sunset) = suntimes::sunrise_sunset_utc(2026, 6, 21, &vienna).unwrap();
//!
//! if let (Some(rise), Some(set)) = (sunrise.occurs(), sunset.occurs()) {
//!     println!("Day length: {:.2} h", set.hours() - rise.hours());
//! }
//! ```
//!
//! ## Day boundaries
//!
//! Event times are computed in hours after 0h UTC of the calculation date
//! and placed on the clock of the date's UTC calendar day. West of
//! Greenwich an evening event can fall after midnight UTC: NOAA reports it
//! beyond 24 hours (so it lands on the following UTC day), Sun Times folds
//! it into the same UTC day (so it lands a day early in local time).
//! Compare [`HoursUtc::day_and_hours`] when the calendar day matters.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of zenith constants
)]

// Public API exports
#[cfg(feature = "chrono")]
pub use crate::calculator::AstronomicalCalculator;
pub use crate::error::{Error, Result};
#[cfg(feature = "chrono")]
pub use crate::noaa::NoaaCalculator;
#[cfg(feature = "chrono")]
pub use crate::suntimes::SunTimesCalculator;
pub use crate::types::{EventKind, GeoLocation, HoursUtc, SolarEvent, SolarPosition, Zenith};

// Algorithm modules
pub mod noaa;
pub mod suntimes;

// Core modules
#[cfg(feature = "chrono")]
pub mod calculator;
pub mod constants;
pub mod error;
pub mod hour_angle;
pub mod position;
pub mod types;
pub mod zenith;

// Internal modules
mod math;

// Public modules
pub mod time;
