//! Lighting theme classification from the local hour and daylight window.
//!
//! The day is carved into four themes by whole local hours: `morning` from
//! 05:00 until two hours past the sunrise hour, `day` from there until the
//! golden window, `golden` for the hour before the sunset hour through the
//! hour after, and `night` for everything else. Each theme carries an
//! intensity in `[0, 1]` that cloud cover pulls down to a per-theme floor.
//!
//! The windows are derived independently from the sunrise and sunset hours,
//! so unusual daylight windows (polar latitudes, windows folding past local
//! midnight) can make them overlap or leave gaps. Classification order is
//! the tie-break: morning is checked first, then golden, then day, and
//! whatever matches nothing is night. Consumers key visual styles to these
//! exact boundaries.
//!
//! # Example
//! ```
//! # use sky_ambience::{theme, LightingTheme};
//! // 06:00-18:00 daylight window (UTC location), scattered clouds at noon
//! let result = theme::classify(12, 1_710_482_400, 1_710_525_600, 40.0, 0);
//! assert_eq!(result.theme(), LightingTheme::Day);
//! assert!((result.intensity() - 0.8).abs() < 1e-12);
//! ```

use crate::time::WallClock;
use crate::types::{LightingTheme, ThemeResult};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone, Timelike};

/// Classifies the lighting theme for a local hour of a location's day.
///
/// Total for any inputs: hours outside 0-23 simply fall outside every
/// window (night), and cloud cover outside 0-100 saturates at the per-theme
/// intensity floors.
///
/// # Arguments
/// * `local_hour` - Local wall-clock hour to classify (0-23)
/// * `sunrise_epoch_seconds` - Sunrise in Unix epoch seconds (UTC)
/// * `sunset_epoch_seconds` - Sunset in Unix epoch seconds (UTC)
/// * `cloud_cover_percent` - Cloud cover percentage (0-100)
/// * `utc_offset_seconds` - Location's offset from UTC in seconds
#[must_use]
pub fn classify(
    local_hour: u32,
    sunrise_epoch_seconds: i64,
    sunset_epoch_seconds: i64,
    cloud_cover_percent: f64,
    utc_offset_seconds: i32,
) -> ThemeResult {
    classify_from_hours(
        i64::from(local_hour),
        i64::from(WallClock::from_epoch(sunrise_epoch_seconds, utc_offset_seconds).hour()),
        i64::from(WallClock::from_epoch(sunset_epoch_seconds, utc_offset_seconds).hour()),
        cloud_cover_percent,
    )
}

/// Classifies the lighting theme from timezone-aware datetimes.
///
/// Each datetime contributes its own local wall-clock hour, so all three
/// should carry the same timezone.
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
#[must_use]
pub fn classify_at<Tz: TimeZone>(
    cloud_cover_percent: f64,
    sunrise: DateTime<Tz>,
    sunset: DateTime<Tz>,
    evaluation: DateTime<Tz>,
) -> ThemeResult {
    classify_from_hours(
        i64::from(evaluation.hour()),
        i64::from(sunrise.hour()),
        i64::from(sunset.hour()),
        cloud_cover_percent,
    )
}

/// Shared core over whole local hours. Signed so the golden window can start
/// before hour zero when the sunset hour folds to midnight.
fn classify_from_hours(
    local_hour: i64,
    sunrise_hour: i64,
    sunset_hour: i64,
    cloud_cover_percent: f64,
) -> ThemeResult {
    let golden_start = sunset_hour - 1;
    let golden_end = sunset_hour + 1;

    if local_hour >= 5 && local_hour < sunrise_hour + 2 {
        let intensity = f64::max(0.3, 1.0 - cloud_cover_percent / 100.0);
        return ThemeResult::new(LightingTheme::Morning, intensity);
    }

    if local_hour >= golden_start && local_hour <= golden_end {
        let intensity = f64::max(0.7, 1.0 - cloud_cover_percent / 150.0);
        return ThemeResult::new(LightingTheme::Golden, intensity);
    }

    if local_hour >= sunrise_hour + 2 && local_hour < golden_start {
        let intensity = f64::max(0.5, 1.0 - cloud_cover_percent / 200.0);
        return ThemeResult::new(LightingTheme::Day, intensity);
    }

    ThemeResult::new(LightingTheme::Night, 0.2)
}
