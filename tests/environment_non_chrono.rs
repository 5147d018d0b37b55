//! Tests for the epoch-based (non-chrono) derivation API

use sky_ambience::time::{CivilDate, WallClock};
use sky_ambience::{
    derive_environment, illuminance, moon, theme, LightingTheme, LocationSnapshot, MoonPhase,
};

// Berlin, 2024-06-21 (UTC+2): sunrise 04:43, sunset 21:33 local
const BASE: i64 = 1_718_928_000; // 2024-06-21 00:00:00 UTC
const SUNRISE: i64 = BASE + 2 * 3_600 + 43 * 60;
const SUNSET: i64 = BASE + 19 * 3_600 + 33 * 60;
const OFFSET: i32 = 7_200;

#[test]
fn test_derive_environment_basic() {
    // Midsummer noon under 25% cloud
    let noon = BASE + 10 * 3_600; // 12:00 local
    let snapshot = LocationSnapshot::new(SUNRISE, SUNSET, 25.0, OFFSET, noon).unwrap();
    let derived = derive_environment(&snapshot);

    assert!(!derived.illuminance().is_night_estimate());
    assert_eq!(derived.illuminance().estimated_lux(), 75_773);

    assert_eq!(derived.theme().theme(), LightingTheme::Day);
    assert!((derived.theme().intensity() - 0.875).abs() < 1e-12);

    // The solstice full moon of June 2024
    assert_eq!(derived.moon().phase(), MoonPhase::Full);
    assert_eq!(derived.moon().illumination_percent(), 100);
    assert!((derived.moon().phase_fraction() - 0.505_926).abs() < 1e-6);
}

#[test]
fn test_evening_golden_hour() {
    // 20:00 local falls in the hour before the 21:33 sunset
    let evening = BASE + 18 * 3_600;
    let snapshot = LocationSnapshot::new(SUNRISE, SUNSET, 25.0, OFFSET, evening).unwrap();
    let derived = derive_environment(&snapshot);

    assert_eq!(derived.theme().theme(), LightingTheme::Golden);
    assert!((derived.theme().intensity() - (1.0 - 25.0 / 150.0)).abs() < 1e-12);

    assert!(!derived.illuminance().is_night_estimate());
    assert_eq!(derived.illuminance().estimated_lux(), 22_107);
}

#[test]
fn test_wall_clock_and_civil_date_folding() {
    // Epoch zero
    let clock = WallClock::from_epoch(0, 0);
    assert_eq!((clock.hour(), clock.minute()), (0, 0));
    let date = CivilDate::from_epoch(0, 0);
    assert_eq!((date.year(), date.month(), date.day()), (1970, 1, 1));

    // Offsets shift the local clock
    let clock = WallClock::from_epoch(BASE + 10 * 3_600, OFFSET);
    assert_eq!((clock.hour(), clock.minute()), (12, 0));
    let clock = WallClock::from_epoch(BASE + 10 * 3_600, -10_800);
    assert_eq!((clock.hour(), clock.minute()), (7, 0));

    // An eastern offset can roll the local date forward
    let date = CivilDate::from_epoch(BASE + 23 * 3_600, OFFSET);
    assert_eq!((date.year(), date.month(), date.day()), (2024, 6, 22));

    // Pre-epoch instants fold backwards
    let clock = WallClock::from_epoch(-1, 0);
    assert_eq!((clock.hour(), clock.minute()), (23, 59));
    let date = CivilDate::from_epoch(-1, 0);
    assert_eq!((date.year(), date.month(), date.day()), (1969, 12, 31));
}

#[test]
fn test_invalid_inputs() {
    let noon = BASE + 10 * 3_600;

    // Cloud cover above 100%
    let result = LocationSnapshot::new(SUNRISE, SUNSET, 100.5, OFFSET, noon);
    assert!(result.is_err());

    // Negative cloud cover
    let result = LocationSnapshot::new(SUNRISE, SUNSET, -0.5, OFFSET, noon);
    assert!(result.is_err());

    // Non-finite cloud cover
    let result = LocationSnapshot::new(SUNRISE, SUNSET, f64::NAN, OFFSET, noon);
    assert!(result.is_err());

    // Offset of a full day or more
    let result = LocationSnapshot::new(SUNRISE, SUNSET, 25.0, 86_400, noon);
    assert!(result.is_err());
    let result = LocationSnapshot::new(SUNRISE, SUNSET, 25.0, -86_400, noon);
    assert!(result.is_err());

    // Sunset before sunrise
    let result = LocationSnapshot::new(SUNSET, SUNRISE, 25.0, OFFSET, noon);
    assert!(result.is_err());
}

#[test]
fn test_consistency_across_api() {
    // The pipeline and the standalone calculators agree field for field
    let evening = BASE + 18 * 3_600;
    let snapshot = LocationSnapshot::new(SUNRISE, SUNSET, 25.0, OFFSET, evening).unwrap();
    let derived = derive_environment(&snapshot);

    assert_eq!(derived.moon(), moon::phase_at(evening, OFFSET));
    assert_eq!(
        derived.illuminance(),
        illuminance::estimate(25.0, SUNRISE, SUNSET, OFFSET, evening)
    );

    let local_hour = WallClock::from_epoch(evening, OFFSET).hour();
    assert_eq!(
        derived.theme(),
        theme::classify(local_hour, SUNRISE, SUNSET, 25.0, OFFSET)
    );
}

#[cfg(feature = "chrono")]
#[test]
fn test_chrono_vs_non_chrono_consistency() {
    use chrono::{FixedOffset, NaiveDate, TimeZone};

    let berlin = FixedOffset::east_opt(OFFSET).unwrap();
    let local = |hour, minute| {
        berlin
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(2024, 6, 21)
                    .unwrap()
                    .and_hms_opt(hour, minute, 0)
                    .unwrap(),
            )
            .unwrap()
    };

    let sunrise = local(4, 43);
    let sunset = local(21, 33);
    let noon = local(12, 0);
    assert_eq!(sunrise.timestamp(), SUNRISE);
    assert_eq!(sunset.timestamp(), SUNSET);

    let epoch_noon = noon.timestamp();
    assert_eq!(
        illuminance::estimate_at(25.0, sunrise, sunset, noon),
        illuminance::estimate(25.0, SUNRISE, SUNSET, OFFSET, epoch_noon)
    );
    assert_eq!(
        theme::classify_at(25.0, sunrise, sunset, noon),
        theme::classify(12, SUNRISE, SUNSET, 25.0, OFFSET)
    );
    assert_eq!(
        moon::phase_for_date_like(noon.date_naive()),
        moon::phase_at(epoch_noon, OFFSET)
    );
}
