//! One-call derivation of the full ambient environment.
//!
//! This is the orchestration layer: it normalizes the snapshot's evaluation
//! instant once and feeds the same local-time view to every calculator, so
//! the moon phase, illuminance, and theme in one [`DerivedEnvironment`]
//! always describe the same local instant.

use crate::time::WallClock;
use crate::types::{DerivedEnvironment, LocationSnapshot};
use crate::{illuminance, moon, theme};

/// Derives the complete ambient environment for one snapshot.
///
/// # Example
/// ```
/// # use sky_ambience::{derive_environment, LightingTheme, LocationSnapshot};
/// // São Paulo (UTC-3) at local noon under scattered clouds
/// let snapshot = LocationSnapshot::new(
///     1_710_493_920,
///     1_710_539_220,
///     40.0,
///     -10_800,
///     1_710_514_800,
/// )
/// .unwrap();
///
/// let environment = derive_environment(&snapshot);
/// assert_eq!(environment.theme().theme(), LightingTheme::Day);
/// assert!(!environment.illuminance().is_night_estimate());
/// ```
#[must_use]
pub fn derive_environment(snapshot: &LocationSnapshot) -> DerivedEnvironment {
    let clock = WallClock::from_epoch(
        snapshot.evaluation_epoch_seconds(),
        snapshot.utc_offset_seconds(),
    );

    let moon = moon::phase_at(
        snapshot.evaluation_epoch_seconds(),
        snapshot.utc_offset_seconds(),
    );

    let illuminance = illuminance::estimate(
        snapshot.cloud_cover_percent(),
        snapshot.sunrise_epoch_seconds(),
        snapshot.sunset_epoch_seconds(),
        snapshot.utc_offset_seconds(),
        snapshot.evaluation_epoch_seconds(),
    );

    let theme = theme::classify(
        clock.hour(),
        snapshot.sunrise_epoch_seconds(),
        snapshot.sunset_epoch_seconds(),
        snapshot.cloud_cover_percent(),
        snapshot.utc_offset_seconds(),
    );

    DerivedEnvironment::new(moon, illuminance, theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LightingTheme, MoonPhase};

    fn sao_paulo_noon() -> LocationSnapshot {
        LocationSnapshot::new(1_710_493_920, 1_710_539_220, 40.0, -10_800, 1_710_514_800)
            .unwrap()
    }

    #[test]
    fn test_midday_scenario() {
        let environment = derive_environment(&sao_paulo_noon());

        assert_eq!(environment.illuminance().estimated_lux(), 63_518);
        assert!(!environment.illuminance().is_night_estimate());

        assert_eq!(environment.theme().theme(), LightingTheme::Day);
        assert!((environment.theme().intensity() - 0.8).abs() < 1e-12);

        assert_eq!(environment.moon().phase(), MoonPhase::WaxingCrescent);
        assert_eq!(environment.moon().illumination_percent(), 31);
        assert!((environment.moon().phase_fraction() - 0.187267).abs() < 1e-6);
    }

    #[test]
    fn test_small_hours_scenario() {
        // Same day at 03:00 local
        let snapshot =
            LocationSnapshot::new(1_710_493_920, 1_710_539_220, 40.0, -10_800, 1_710_482_400)
                .unwrap();
        let environment = derive_environment(&snapshot);

        assert!(environment.illuminance().is_night_estimate());
        assert_eq!(environment.illuminance().estimated_lux(), 30);
        assert_eq!(environment.theme().theme(), LightingTheme::Night);
        assert!((environment.theme().intensity() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_parts_match_direct_calculator_calls() {
        let snapshot = sao_paulo_noon();
        let environment = derive_environment(&snapshot);

        assert_eq!(
            environment.moon(),
            moon::phase_at(
                snapshot.evaluation_epoch_seconds(),
                snapshot.utc_offset_seconds()
            )
        );
        assert_eq!(
            environment.illuminance(),
            illuminance::estimate(
                snapshot.cloud_cover_percent(),
                snapshot.sunrise_epoch_seconds(),
                snapshot.sunset_epoch_seconds(),
                snapshot.utc_offset_seconds(),
                snapshot.evaluation_epoch_seconds(),
            )
        );
        assert_eq!(
            environment.theme(),
            theme::classify(
                12,
                snapshot.sunrise_epoch_seconds(),
                snapshot.sunset_epoch_seconds(),
                snapshot.cloud_cover_percent(),
                snapshot.utc_offset_seconds(),
            )
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let snapshot = sao_paulo_noon();
        assert_eq!(derive_environment(&snapshot), derive_environment(&snapshot));
    }
}
