//! Ambient illuminance estimation from the daylight window and cloud cover.
//!
//! Between sunrise and sunset the estimate follows a half-sine solar curve:
//! progress through the daylight window is mapped to `sin(progress · π)`,
//! scaled by a 100,000 lux clear-sky peak, and attenuated by cloud cover
//! down to a 10% floor. Outside the window a small placeholder value stands
//! in for moonlight and street lighting; it varies with the minute of day so
//! consecutive readings do not look frozen.
//!
//! All times are folded to local minute of day before comparison, matching
//! how the daylight window is displayed. A window that crosses local
//! midnight therefore reads as night.
//!
//! # Example
//! ```
//! # use sky_ambience::illuminance;
//! // Clear sky at local noon, 06:00-18:00 daylight window (UTC location)
//! let result = illuminance::estimate(0.0, 1_710_482_400, 1_710_525_600, 0, 1_710_504_000);
//! assert_eq!(result.estimated_lux(), 100_000);
//! assert!(!result.is_night_estimate());
//! ```

use crate::math::{round, sin, PI};
use crate::time::WallClock;
use crate::types::IlluminanceResult;
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Lux floor of the nighttime placeholder.
pub const NIGHT_BASE_LUX: u32 = 10;

/// Period, in minutes, of the nighttime placeholder's variation.
pub const NIGHT_VARIATION_MINUTES: u32 = 40;

/// Clear-sky illuminance at the top of the solar curve, in lux.
pub const CLEAR_SKY_PEAK_LUX: f64 = 100_000.0;

/// Fraction of the peak that full overcast still lets through.
pub const MIN_CLOUD_TRANSMISSION: f64 = 0.1;

/// Fraction of the peak removed by full (100%) cloud cover.
pub const MAX_CLOUD_ATTENUATION: f64 = 0.9;

/// Estimates ambient illuminance at an instant of a location's day.
///
/// Total for any inputs. Cloud cover outside 0-100 flows through the
/// attenuation formula unclamped (values above ~111% bottom out at the
/// transmission floor, negative values brighten beyond the clear-sky peak),
/// and a sunset at or before the sunrise minute yields the nighttime
/// placeholder.
///
/// # Arguments
/// * `cloud_cover_percent` - Cloud cover percentage (0-100)
/// * `sunrise_epoch_seconds` - Sunrise in Unix epoch seconds (UTC)
/// * `sunset_epoch_seconds` - Sunset in Unix epoch seconds (UTC)
/// * `utc_offset_seconds` - Location's offset from UTC in seconds
/// * `evaluation_epoch_seconds` - Instant to estimate for, in epoch seconds
#[must_use]
pub fn estimate(
    cloud_cover_percent: f64,
    sunrise_epoch_seconds: i64,
    sunset_epoch_seconds: i64,
    utc_offset_seconds: i32,
    evaluation_epoch_seconds: i64,
) -> IlluminanceResult {
    estimate_from_minutes(
        cloud_cover_percent,
        WallClock::from_epoch(sunrise_epoch_seconds, utc_offset_seconds).minute_of_day(),
        WallClock::from_epoch(sunset_epoch_seconds, utc_offset_seconds).minute_of_day(),
        WallClock::from_epoch(evaluation_epoch_seconds, utc_offset_seconds).minute_of_day(),
    )
}

/// Estimates ambient illuminance from timezone-aware datetimes.
///
/// Each datetime contributes its own local wall-clock time, so all three
/// should carry the same timezone.
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
#[must_use]
pub fn estimate_at<Tz: TimeZone>(
    cloud_cover_percent: f64,
    sunrise: DateTime<Tz>,
    sunset: DateTime<Tz>,
    evaluation: DateTime<Tz>,
) -> IlluminanceResult {
    estimate_from_minutes(
        cloud_cover_percent,
        WallClock::from_datetime(&sunrise).minute_of_day(),
        WallClock::from_datetime(&sunset).minute_of_day(),
        WallClock::from_datetime(&evaluation).minute_of_day(),
    )
}

/// Shared core over local minutes of day.
fn estimate_from_minutes(
    cloud_cover_percent: f64,
    sunrise_minute: u32,
    sunset_minute: u32,
    evaluation_minute: u32,
) -> IlluminanceResult {
    if evaluation_minute < sunrise_minute || evaluation_minute > sunset_minute {
        return IlluminanceResult::new(night_placeholder_lux(evaluation_minute), true);
    }

    let day_length = sunset_minute - sunrise_minute;
    if day_length == 0 {
        return IlluminanceResult::new(night_placeholder_lux(evaluation_minute), true);
    }

    let day_progress = f64::from(evaluation_minute - sunrise_minute) / f64::from(day_length);
    let solar_curve = sin(day_progress * PI);
    let cloud_factor = f64::max(
        MIN_CLOUD_TRANSMISSION,
        1.0 - (cloud_cover_percent / 100.0) * MAX_CLOUD_ATTENUATION,
    );

    let lux = round(f64::max(0.0, CLEAR_SKY_PEAK_LUX * solar_curve * cloud_factor));
    IlluminanceResult::new(lux as u32, false)
}

/// Nighttime placeholder: a small value that drifts with the minute of day.
const fn night_placeholder_lux(evaluation_minute: u32) -> u32 {
    NIGHT_BASE_LUX + evaluation_minute % NIGHT_VARIATION_MINUTES
}
