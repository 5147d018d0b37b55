//! # Sky Ambience
//!
//! Display-ready sky ambience (moon phase, ambient light, lighting theme) derived from a single weather snapshot.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library turns the handful of fields a weather feed reports for a
//! location (sunrise, sunset, cloud cover, UTC offset) into the three derived
//! quantities a dashboard renders:
//! - **Moon phase**: position in the synodic cycle, illuminated percentage, and an eight-bin phase with emoji
//! - **Illuminance**: an estimated lux value following a half-sine solar curve with cloud attenuation
//! - **Lighting theme**: `morning` / `golden` / `day` / `night` with a rendering intensity
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Total functions: every calculator returns a result for any input, validation is opt-in at the edge
//! - Deterministic: the evaluation instant is an explicit input, never read from a clock
//! - Thread-safe: Stateless, immutable data structures
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: Derive `Serialize`/`Deserialize` for the snapshot and result types
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! sky-ambience = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! sky-ambience = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # no_std + chrono (embedded with DateTime support)
//! sky-ambience = { version = "0.1", default-features = false, features = ["libm", "chrono"] }
//!
//! # Minimal no_std (pure numeric API)
//! sky-ambience = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Full derivation
//! ```rust
//! use sky_ambience::{derive_environment, LocationSnapshot};
//!
//! // São Paulo (UTC-3) at local noon, 40% cloud cover
//! let snapshot = LocationSnapshot::new(
//!     1_710_493_920, // sunrise (Unix epoch seconds, UTC)
//!     1_710_539_220, // sunset
//!     40.0,          // cloud cover %
//!     -10_800,       // UTC offset seconds
//!     1_710_514_800, // instant to evaluate
//! )
//! .unwrap();
//!
//! let environment = derive_environment(&snapshot);
//!
//! println!(
//!     "{} {}% illuminated",
//!     environment.moon().emoji(),
//!     environment.moon().illumination_percent()
//! );
//! println!("~{} lux", environment.illuminance().estimated_lux());
//! println!(
//!     "{} theme at intensity {:.2}",
//!     environment.theme().theme(),
//!     environment.theme().intensity()
//! );
//! ```
//!
//! ### Individual calculators (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sky_ambience::{moon, MoonPhase};
//! use chrono::{DateTime, FixedOffset};
//!
//! let datetime = "2024-06-21T12:00:00-03:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let result = moon::phase_for_date_like(datetime);
//!
//! assert_eq!(result.phase(), MoonPhase::Full);
//! println!("{} {}", result.emoji(), result.phase());
//! # }
//! ```
//!
//! ## Derivation Model
//!
//! ### Moon phase
//!
//! Mean-cycle date arithmetic: the local calendar date's Julian Day Number is
//! compared against the 2000-01-06 reference new moon and folded into the
//! 29.53-day mean synodic month. Accurate to about a day, which is enough to
//! pick the right display bin.
//!
//! ### Illuminance
//!
//! Inside the daylight window, `sin(progress · π)` scaled to a 100,000 lux
//! clear-sky peak and attenuated by cloud cover down to a 10% floor. Outside
//! it, a small minute-varying placeholder stands in for moonlight and street
//! lighting.
//!
//! ### Lighting theme
//!
//! Whole-hour windows anchored on the sunrise and sunset hours, classified in
//! a fixed priority order (morning, golden, day, night) with cloud cover
//! pulling each theme's intensity down to a per-theme floor. Boundaries are
//! part of the contract; consumers key visual styles to them.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss, // Casts to unsigned result fields are range-checked
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::environment::derive_environment;
pub use crate::error::{Error, Result};
pub use crate::types::{
    DerivedEnvironment, IlluminanceResult, LightingTheme, LocationSnapshot, MoonPhase,
    MoonPhaseResult, ThemeResult,
};

// Calculator modules
pub mod illuminance;
pub mod moon;
pub mod theme;

// Pipeline module
pub mod environment;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    const SUNRISE: i64 = 1_710_493_920;
    const SUNSET: i64 = 1_710_539_220;
    const NOON: i64 = 1_710_514_800;
    const OFFSET: i32 = -10_800;

    fn at(epoch: i64) -> DateTime<FixedOffset> {
        use chrono::TimeZone;
        FixedOffset::west_opt(-OFFSET).unwrap().timestamp_opt(epoch, 0).unwrap()
    }

    #[test]
    fn test_chrono_and_numeric_moon_apis_agree() {
        let numeric = moon::phase_at(NOON, OFFSET);
        let convenient = moon::phase_for_date_like(at(NOON));
        assert_eq!(numeric, convenient);
    }

    #[test]
    fn test_pipeline_matches_chrono_calculators() {
        let snapshot = LocationSnapshot::new(SUNRISE, SUNSET, 40.0, OFFSET, NOON).unwrap();
        let environment = derive_environment(&snapshot);

        assert_eq!(
            environment.illuminance(),
            illuminance::estimate_at(40.0, at(SUNRISE), at(SUNSET), at(NOON))
        );
        assert_eq!(
            environment.theme(),
            theme::classify_at(40.0, at(SUNRISE), at(SUNSET), at(NOON))
        );
        assert_eq!(environment.moon(), moon::phase_for_date_like(at(NOON)));
    }
}
