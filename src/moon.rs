//! Moon phase calculation from the calendar date.
//!
//! The phase is derived arithmetically: the date's Julian Day Number is
//! compared against a reference new moon (2000-01-06) and the elapsed time is
//! folded into the mean synodic month of 29.53 days. The fractional position
//! in that cycle is the phase fraction (0.0 = new, 0.5 = full), from which
//! the illuminated percentage follows as `(1 - cos(2π · fraction)) / 2`.
//!
//! This is a mean-cycle model: it ignores the eccentricity of the lunar
//! orbit, so individual phases can be off by up to about a day. That is
//! accurate enough to pick the right eight-bin phase for display, which is
//! all the dashboard needs.
//!
//! # Example
//! ```
//! # use sky_ambience::{moon, MoonPhase};
//! let result = moon::phase_for_date(2024, 6, 21);
//! assert_eq!(result.phase(), MoonPhase::Full);
//! assert_eq!(result.illumination_percent(), 100);
//! ```

use crate::math::{cos, floor, round, PI};
use crate::time::{julian_day_number, CivilDate};
use crate::types::{MoonPhase, MoonPhaseResult};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.53;

/// Julian Day Number of the reference new moon, 2000-01-06.
pub const REFERENCE_NEW_MOON_JD: f64 = 2_451_549.5;

/// Calculates the moon state for a proleptic Gregorian calendar date.
///
/// Total for any date fields: out-of-range months and days extrapolate
/// through the underlying Julian Day arithmetic (see
/// [`julian_day_number`]), and the phase fraction is always in `[0, 1)`.
///
/// # Example
/// ```
/// # use sky_ambience::{moon, MoonPhase};
/// // The reference new moon itself
/// let result = moon::phase_for_date(2000, 1, 6);
/// assert_eq!(result.phase(), MoonPhase::New);
/// assert_eq!(result.illumination_percent(), 0);
/// assert!(result.phase_fraction() < 1e-9);
/// ```
#[must_use]
pub fn phase_for_date(year: i32, month: u32, day: u32) -> MoonPhaseResult {
    let julian_day = julian_day_number(year, month, day);
    let cycles = (julian_day - REFERENCE_NEW_MOON_JD) / SYNODIC_MONTH_DAYS;
    let phase_fraction = cycles - floor(cycles);

    let illumination = round((1.0 - cos(phase_fraction * 2.0 * PI)) / 2.0 * 100.0);
    let phase = MoonPhase::from_phase_fraction(phase_fraction);

    MoonPhaseResult::new(phase_fraction, illumination as u8, phase)
}

/// Calculates the moon state for the local calendar date of an instant.
///
/// The instant is shifted by the location's UTC offset first, so two
/// locations observing the same instant on different calendar dates get
/// different results.
#[must_use]
pub fn phase_at(evaluation_epoch_seconds: i64, utc_offset_seconds: i32) -> MoonPhaseResult {
    let date = CivilDate::from_epoch(evaluation_epoch_seconds, utc_offset_seconds);
    phase_for_date(date.year(), date.month(), date.day())
}

/// Calculates the moon state for any chrono date-like value.
///
/// The value's own calendar fields are used as the local date.
///
/// # Example
/// ```
/// # use sky_ambience::{moon, MoonPhase};
/// # use chrono::NaiveDate;
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
/// assert_eq!(moon::phase_for_date_like(date).phase(), MoonPhase::Full);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
#[must_use]
pub fn phase_for_date_like<D: Datelike>(date: D) -> MoonPhaseResult {
    phase_for_date(date.year(), date.month(), date.day())
}
