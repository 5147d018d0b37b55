//! Error types for the ambience derivation library.
//!
//! The calculators themselves are total and never return errors; validation
//! happens at the edge, when raw upstream weather fields are assembled into a
//! [`crate::LocationSnapshot`].

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while validating upstream weather data.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid cloud cover value (must be between 0 and 100 percent).
    InvalidCloudCover {
        /// The invalid cloud cover value provided.
        value: f64,
    },
    /// Invalid UTC offset (must be less than one day in magnitude).
    InvalidUtcOffset {
        /// The invalid UTC offset value provided, in seconds.
        value: i32,
    },
    /// Sunset precedes sunrise, so the two do not describe a daylight window.
    InvalidSunWindow {
        /// The sunrise timestamp provided, in Unix epoch seconds.
        sunrise_epoch_seconds: i64,
        /// The sunset timestamp provided, in Unix epoch seconds.
        sunset_epoch_seconds: i64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCloudCover { value } => {
                write!(
                    f,
                    "invalid cloud cover {value}% (must be between 0% and 100%)"
                )
            }
            Self::InvalidUtcOffset { value } => {
                write!(
                    f,
                    "invalid UTC offset {value} s (must be less than 86400 s in magnitude)"
                )
            }
            Self::InvalidSunWindow {
                sunrise_epoch_seconds,
                sunset_epoch_seconds,
            } => {
                write!(
                    f,
                    "invalid sun window: sunset at {sunset_epoch_seconds} precedes sunrise at {sunrise_epoch_seconds}"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid cloud cover error.
    #[must_use]
    pub const fn invalid_cloud_cover(value: f64) -> Self {
        Self::InvalidCloudCover { value }
    }

    /// Creates an invalid UTC offset error.
    #[must_use]
    pub const fn invalid_utc_offset(value: i32) -> Self {
        Self::InvalidUtcOffset { value }
    }

    /// Creates an invalid sun window error.
    #[must_use]
    pub const fn invalid_sun_window(sunrise_epoch_seconds: i64, sunset_epoch_seconds: i64) -> Self {
        Self::InvalidSunWindow {
            sunrise_epoch_seconds,
            sunset_epoch_seconds,
        }
    }
}

/// Validates cloud cover is within the valid range (0 to 100 percent).
///
/// # Errors
/// Returns `InvalidCloudCover` if cloud cover is not a finite value between
/// 0 and 100.
pub fn check_cloud_cover(cloud_cover_percent: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&cloud_cover_percent) {
        return Err(Error::invalid_cloud_cover(cloud_cover_percent));
    }
    Ok(())
}

/// Validates a UTC offset is less than one day in magnitude.
///
/// Real-world offsets stay within ±14 hours, but upstream feeds report the
/// offset as a raw integer, so only the structurally impossible values are
/// rejected here.
///
/// # Errors
/// Returns `InvalidUtcOffset` if the offset is ±86400 seconds or beyond.
pub fn check_utc_offset(utc_offset_seconds: i32) -> Result<()> {
    if i64::from(utc_offset_seconds).abs() >= crate::time::SECONDS_PER_DAY {
        return Err(Error::invalid_utc_offset(utc_offset_seconds));
    }
    Ok(())
}

/// Validates that sunrise and sunset describe a daylight window.
///
/// A zero-length window (sunset equal to sunrise) is accepted; the
/// calculators treat it as a day with no daylight.
///
/// # Errors
/// Returns `InvalidSunWindow` if sunset precedes sunrise.
pub fn check_sun_window(sunrise_epoch_seconds: i64, sunset_epoch_seconds: i64) -> Result<()> {
    if sunset_epoch_seconds < sunrise_epoch_seconds {
        return Err(Error::invalid_sun_window(
            sunrise_epoch_seconds,
            sunset_epoch_seconds,
        ));
    }
    Ok(())
}

/// Validates a full set of snapshot fields in one call.
///
/// # Errors
/// Returns the first violation found: `InvalidCloudCover`,
/// `InvalidUtcOffset`, or `InvalidSunWindow`.
pub fn check_snapshot_fields(
    cloud_cover_percent: f64,
    utc_offset_seconds: i32,
    sunrise_epoch_seconds: i64,
    sunset_epoch_seconds: i64,
) -> Result<()> {
    check_cloud_cover(cloud_cover_percent)?;
    check_utc_offset(utc_offset_seconds)?;
    check_sun_window(sunrise_epoch_seconds, sunset_epoch_seconds)?;
    Ok(())
}
