//! Time normalization for the ambience calculations.
//!
//! Every calculator in this crate works on the same two local-time views of
//! an instant: the wall-clock time of day ([`WallClock`]) and the calendar
//! date ([`CivilDate`]), both obtained by shifting a UTC epoch timestamp by a
//! fixed UTC offset. Consolidating that shift here keeps the calculators from
//! re-deriving local time in subtly different ways.

use crate::math::floor;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Seconds per day (86,400)
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds per hour (3,600)
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Local wall-clock time of day, truncated to minute precision.
///
/// Derived from a UTC epoch timestamp and a fixed UTC offset by Euclidean
/// modulo over the day length, so any `i64` epoch (including instants before
/// 1970) and any offset yield a time of day in `00:00..=23:59`.
///
/// # Example
/// ```
/// # use sky_ambience::time::WallClock;
/// // 2024-03-15 15:00:00 UTC seen from UTC-3 is local noon
/// let clock = WallClock::from_epoch(1_710_514_800, -10_800);
/// assert_eq!(clock.hour(), 12);
/// assert_eq!(clock.minute(), 0);
/// assert_eq!(clock.minute_of_day(), 720);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    /// Hour of day (0-23)
    hour: u32,
    /// Minute of hour (0-59)
    minute: u32,
}

impl WallClock {
    /// Creates a wall clock from a UTC epoch timestamp and a UTC offset.
    ///
    /// Saturates instead of overflowing for offsets near the `i64` epoch
    /// limits, so the conversion is total.
    ///
    /// # Arguments
    /// * `epoch_seconds` - Seconds since the Unix epoch (may be negative)
    /// * `utc_offset_seconds` - Signed offset from UTC for the location
    #[must_use]
    pub const fn from_epoch(epoch_seconds: i64, utc_offset_seconds: i32) -> Self {
        let local = epoch_seconds.saturating_add(utc_offset_seconds as i64);
        let second_of_day = local.rem_euclid(SECONDS_PER_DAY);

        Self {
            hour: (second_of_day / SECONDS_PER_HOUR) as u32,
            minute: ((second_of_day % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u32,
        }
    }

    /// Creates a wall clock from the local fields of a timezone-aware datetime.
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self {
            hour: datetime.hour(),
            minute: datetime.minute(),
        }
    }

    /// Gets the hour of day (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the minute of hour (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Gets the minute of day (0-1439), counted from local midnight.
    #[must_use]
    pub const fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// Proleptic Gregorian calendar date in a location's local time.
///
/// # Example
/// ```
/// # use sky_ambience::time::CivilDate;
/// // 2024-03-15 15:00:00 UTC is still March 15 at UTC-3
/// let date = CivilDate::from_epoch(1_710_514_800, -10_800);
/// assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 15));
///
/// // ...but 2024-03-16 at UTC+10
/// let date = CivilDate::from_epoch(1_710_514_800, 36_000);
/// assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDate {
    year: i32,
    /// Month (1-12)
    month: u32,
    /// Day of month (1-31)
    day: u32,
}

impl CivilDate {
    /// Creates a civil date from a UTC epoch timestamp and a UTC offset.
    ///
    /// Total for any `i64` epoch; day counts beyond the `i32` year range are
    /// clamped to the nearest representable calendar date.
    ///
    /// # Arguments
    /// * `epoch_seconds` - Seconds since the Unix epoch (may be negative)
    /// * `utc_offset_seconds` - Signed offset from UTC for the location
    #[must_use]
    pub const fn from_epoch(epoch_seconds: i64, utc_offset_seconds: i32) -> Self {
        let local = epoch_seconds.saturating_add(utc_offset_seconds as i64);
        let days = local.div_euclid(SECONDS_PER_DAY);

        let clamped = if days > i32::MAX as i64 {
            i32::MAX as i64
        } else if days < i32::MIN as i64 {
            i32::MIN as i64
        } else {
            days
        };

        let (year, month, day) = civil_from_days(clamped);
        Self { year, month, day }
    }

    /// Creates a civil date from any chrono date-like value.
    ///
    /// The caller is responsible for the value already being in the wanted
    /// local calendar (e.g. a `DateTime<FixedOffset>` carrying the location's
    /// offset, or a `NaiveDate` produced from one).
    #[cfg(feature = "chrono")]
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_date_like<D: Datelike>(date: D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Gets the year (may be negative for BCE dates).
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }
}

/// Converts a day count since 1970-01-01 to a proleptic Gregorian date.
///
/// Standard era-based civil-from-days conversion (pure integer arithmetic,
/// exact over the full supported range).
const fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let shifted = if z >= 0 { z } else { z - 146_096 };
    let era = shifted / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };

    (year as i32, month as u32, day as u32)
}

/// Calculates the Julian Day Number for a calendar date at midnight UT.
///
/// This follows the Meeus formulation restricted to the date portion: for
/// January and February the date is treated as month 13/14 of the previous
/// year, the century correction `e = 2 - c + floor(c / 4)` uses the
/// integer-truncated century `c`, and the result is
/// `floor(365.25 (y + 4716)) + floor(30.6001 (m + 1)) + d + e - 1524.5`.
///
/// The correction is applied unconditionally (proleptic Gregorian calendar),
/// and the calendar fields are not range-checked: the formula extrapolates
/// consistently, e.g. month 13 of a year is January of the following year.
///
/// # Example
/// ```
/// # use sky_ambience::time::julian_day_number;
/// // J2000.0 epoch date (midnight)
/// assert_eq!(julian_day_number(2000, 1, 1), 2_451_544.5);
/// // Unix epoch date
/// assert_eq!(julian_day_number(1970, 1, 1), 2_440_587.5);
/// ```
#[must_use]
pub fn julian_day_number(year: i32, month: u32, day: u32) -> f64 {
    let mut y = i64::from(year);
    let mut m = i64::from(month);

    // January and February count as months 13 and 14 of the previous year
    if m < 3 {
        y -= 1;
        m += 12;
    }

    let c = y / 100;
    let e = 2 - c + c.div_euclid(4);

    floor(365.25 * (y + 4716) as f64) + floor(30.6001 * (m + 1) as f64)
        + f64::from(day)
        + e as f64
        - 1524.5
}
