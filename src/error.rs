//! Error types for the sunrise/sunset calculators.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while computing solar events.
///
/// A sun that never crosses the requested zenith is not an error: it is
/// reported as [`SolarEvent::AllDay`](crate::SolarEvent::AllDay) or
/// [`SolarEvent::AllNight`](crate::SolarEvent::AllNight).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid observer elevation (must be finite and not below sea level).
    InvalidElevation {
        /// The invalid elevation in meters.
        value: f64,
    },
    /// Invalid zenith angle for an event calculation.
    InvalidZenith {
        /// The invalid zenith angle in degrees.
        value: f64,
    },
    /// Invalid UTC offset for a location.
    InvalidUtcOffset {
        /// The invalid offset in seconds.
        seconds: i32,
    },
    /// Invalid calendar date or time.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Numerical computation error (e.g. a non-finite intermediate value).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevation { value } => {
                write!(f, "invalid elevation {value} m (must be 0 or above)")
            }
            Self::InvalidZenith { value } => {
                write!(
                    f,
                    "invalid zenith angle {value}° (must be above 0° and at most 180°)"
                )
            }
            Self::InvalidUtcOffset { seconds } => {
                write!(f, "invalid UTC offset {seconds} s (must be within ±24 h)")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation error.
    #[must_use]
    pub const fn invalid_elevation(value: f64) -> Self {
        Self::InvalidElevation { value }
    }

    /// Creates an invalid zenith error.
    #[must_use]
    pub const fn invalid_zenith(value: f64) -> Self {
        Self::InvalidZenith { value }
    }

    /// Creates an invalid UTC offset error.
    #[must_use]
    pub const fn invalid_utc_offset(seconds: i32) -> Self {
        Self::InvalidUtcOffset { seconds }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        log::debug!("rejecting latitude {latitude}");
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        log::debug!("rejecting longitude {longitude}");
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates an observer elevation in meters.
///
/// # Errors
/// Returns `InvalidElevation` if elevation is negative or not finite.
pub fn check_elevation(elevation: f64) -> Result<()> {
    if !elevation.is_finite() || elevation < 0.0 {
        log::debug!("rejecting elevation {elevation}");
        return Err(Error::invalid_elevation(elevation));
    }
    Ok(())
}

/// Validates a zenith angle for event calculations, (0, 180] degrees.
///
/// # Errors
/// Returns `InvalidZenith` if the angle is not finite or out of range.
pub fn check_zenith(zenith: f64) -> Result<()> {
    if !(zenith > 0.0 && zenith <= 180.0) {
        log::debug!("rejecting zenith {zenith}");
        return Err(Error::invalid_zenith(zenith));
    }
    Ok(())
}

/// Validates that a computed value is finite.
///
/// # Errors
/// Returns `ComputationError` with `message` if `value` is NaN or infinite.
pub fn check_finite(value: f64, message: &'static str) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::computation_error(message));
    }
    Ok(value)
}
