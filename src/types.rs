//! Core data types for ambience derivation.

use crate::error::{check_cloud_cover, check_sun_window, check_utc_offset};
use crate::Result;
use core::fmt;

/// One observation of a location's sky conditions, as reported by a weather
/// feed, together with the instant the derivation should be evaluated at.
///
/// All timestamps are UTC epoch seconds; `utc_offset_seconds` carries the
/// location's fixed offset from UTC and is the only timezone information the
/// derivation uses.
///
/// # Example
/// ```
/// # use sky_ambience::LocationSnapshot;
/// // São Paulo (UTC-3) around local noon on 2024-03-15
/// let snapshot = LocationSnapshot::new(
///     1_710_493_920, // sunrise 06:12 local
///     1_710_539_220, // sunset 18:47 local
///     40.0,          // cloud cover %
///     -10_800,       // UTC offset
///     1_710_514_800, // evaluation instant, 12:00 local
/// )
/// .unwrap();
/// assert_eq!(snapshot.cloud_cover_percent(), 40.0);
/// assert_eq!(snapshot.utc_offset_seconds(), -10_800);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationSnapshot {
    /// Sunrise in Unix epoch seconds (UTC)
    sunrise_epoch_seconds: i64,
    /// Sunset in Unix epoch seconds (UTC)
    sunset_epoch_seconds: i64,
    /// Cloud cover percentage (0-100)
    cloud_cover_percent: f64,
    /// Location's offset from UTC in seconds
    utc_offset_seconds: i32,
    /// Instant the derivation is evaluated at, in Unix epoch seconds (UTC)
    evaluation_epoch_seconds: i64,
}

impl LocationSnapshot {
    /// Creates a snapshot from raw upstream weather fields.
    ///
    /// # Errors
    /// Returns `InvalidCloudCover`, `InvalidUtcOffset`, or `InvalidSunWindow`
    /// for values no weather feed should produce.
    pub fn new(
        sunrise_epoch_seconds: i64,
        sunset_epoch_seconds: i64,
        cloud_cover_percent: f64,
        utc_offset_seconds: i32,
        evaluation_epoch_seconds: i64,
    ) -> Result<Self> {
        check_cloud_cover(cloud_cover_percent)?;
        check_utc_offset(utc_offset_seconds)?;
        check_sun_window(sunrise_epoch_seconds, sunset_epoch_seconds)?;

        Ok(Self {
            sunrise_epoch_seconds,
            sunset_epoch_seconds,
            cloud_cover_percent,
            utc_offset_seconds,
            evaluation_epoch_seconds,
        })
    }

    /// Gets the sunrise timestamp in Unix epoch seconds.
    #[must_use]
    pub const fn sunrise_epoch_seconds(&self) -> i64 {
        self.sunrise_epoch_seconds
    }

    /// Gets the sunset timestamp in Unix epoch seconds.
    #[must_use]
    pub const fn sunset_epoch_seconds(&self) -> i64 {
        self.sunset_epoch_seconds
    }

    /// Gets the cloud cover percentage (0-100).
    #[must_use]
    pub const fn cloud_cover_percent(&self) -> f64 {
        self.cloud_cover_percent
    }

    /// Gets the location's offset from UTC in seconds.
    #[must_use]
    pub const fn utc_offset_seconds(&self) -> i32 {
        self.utc_offset_seconds
    }

    /// Gets the evaluation instant in Unix epoch seconds.
    #[must_use]
    pub const fn evaluation_epoch_seconds(&self) -> i64 {
        self.evaluation_epoch_seconds
    }
}

/// Principal phase of the lunar cycle.
///
/// The cycle is divided into eight equal bins of 1/8 synodic month each,
/// centered on the four principal phases: the `New` bin covers phase
/// fractions below 0.0625 and at or above 0.9375, and each following bin
/// spans the next 0.125.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoonPhase {
    /// Moon between Sun and Earth; dark disc
    New,
    /// Growing sliver after new moon
    WaxingCrescent,
    /// Half lit, brightening
    FirstQuarter,
    /// More than half lit, brightening
    WaxingGibbous,
    /// Fully lit disc
    Full,
    /// More than half lit, dimming
    WaningGibbous,
    /// Half lit, dimming
    LastQuarter,
    /// Shrinking sliver before new moon
    WaningCrescent,
}

impl MoonPhase {
    /// Maps a phase fraction in `[0, 1)` to its eight-bin phase.
    ///
    /// # Example
    /// ```
    /// # use sky_ambience::MoonPhase;
    /// assert_eq!(MoonPhase::from_phase_fraction(0.0), MoonPhase::New);
    /// assert_eq!(MoonPhase::from_phase_fraction(0.25), MoonPhase::FirstQuarter);
    /// assert_eq!(MoonPhase::from_phase_fraction(0.5), MoonPhase::Full);
    /// assert_eq!(MoonPhase::from_phase_fraction(0.75), MoonPhase::LastQuarter);
    /// assert_eq!(MoonPhase::from_phase_fraction(0.95), MoonPhase::New);
    /// ```
    #[must_use]
    pub fn from_phase_fraction(phase_fraction: f64) -> Self {
        if phase_fraction < 0.0625 || phase_fraction >= 0.9375 {
            Self::New
        } else if phase_fraction < 0.1875 {
            Self::WaxingCrescent
        } else if phase_fraction < 0.3125 {
            Self::FirstQuarter
        } else if phase_fraction < 0.4375 {
            Self::WaxingGibbous
        } else if phase_fraction < 0.5625 {
            Self::Full
        } else if phase_fraction < 0.6875 {
            Self::WaningGibbous
        } else if phase_fraction < 0.8125 {
            Self::LastQuarter
        } else {
            Self::WaningCrescent
        }
    }

    /// Gets the emoji commonly used to depict this phase.
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::New => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::Full => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
        }
    }

    /// Checks if the illuminated fraction is growing (between new and full).
    #[must_use]
    pub const fn is_waxing(&self) -> bool {
        matches!(
            self,
            Self::WaxingCrescent | Self::FirstQuarter | Self::WaxingGibbous
        )
    }

    /// Checks if the illuminated fraction is shrinking (between full and new).
    #[must_use]
    pub const fn is_waning(&self) -> bool {
        matches!(
            self,
            Self::WaningGibbous | Self::LastQuarter | Self::WaningCrescent
        )
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        };
        f.write_str(name)
    }
}

/// Moon state for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonPhaseResult {
    /// Position in the synodic cycle, 0.0 = new moon, in [0, 1)
    phase_fraction: f64,
    /// Illuminated fraction of the disc as a whole percentage (0-100)
    illumination_percent: u8,
    /// Eight-bin phase for the fraction
    phase: MoonPhase,
}

impl MoonPhaseResult {
    pub(crate) const fn new(
        phase_fraction: f64,
        illumination_percent: u8,
        phase: MoonPhase,
    ) -> Self {
        Self {
            phase_fraction,
            illumination_percent,
            phase,
        }
    }

    /// Gets the position in the synodic cycle (0.0 = new moon, in `[0, 1)`).
    #[must_use]
    pub const fn phase_fraction(&self) -> f64 {
        self.phase_fraction
    }

    /// Gets the illuminated percentage of the disc (0-100).
    #[must_use]
    pub const fn illumination_percent(&self) -> u8 {
        self.illumination_percent
    }

    /// Gets the eight-bin phase.
    #[must_use]
    pub const fn phase(&self) -> MoonPhase {
        self.phase
    }

    /// Gets the emoji for the phase.
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        self.phase.emoji()
    }
}

/// Ambient light estimate for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlluminanceResult {
    /// Estimated illuminance in lux
    estimated_lux: u32,
    /// Whether the estimate came from the nighttime placeholder
    night_estimate: bool,
}

impl IlluminanceResult {
    pub(crate) const fn new(estimated_lux: u32, night_estimate: bool) -> Self {
        Self {
            estimated_lux,
            night_estimate,
        }
    }

    /// Gets the estimated illuminance in lux.
    #[must_use]
    pub const fn estimated_lux(&self) -> u32 {
        self.estimated_lux
    }

    /// Checks if the value came from the nighttime placeholder rather than
    /// the solar-elevation model.
    #[must_use]
    pub const fn is_night_estimate(&self) -> bool {
        self.night_estimate
    }
}

/// Lighting theme for an instant of a location's day.
///
/// Themes are ordered by classification priority: an instant inside both the
/// morning window and the golden-hour window is reported as `Morning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LightingTheme {
    /// From 05:00 local until two hours past the sunrise hour
    Morning,
    /// The hour before the sunset hour through the hour after
    Golden,
    /// From two hours past the sunrise hour up to the golden window
    Day,
    /// Everything else
    Night,
}

impl LightingTheme {
    /// Checks if this is the nighttime theme.
    #[must_use]
    pub const fn is_night(&self) -> bool {
        matches!(self, Self::Night)
    }
}

impl fmt::Display for LightingTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Morning => "morning",
            Self::Golden => "golden",
            Self::Day => "day",
            Self::Night => "night",
        };
        f.write_str(name)
    }
}

/// Lighting theme with its display intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeResult {
    /// Classified theme
    theme: LightingTheme,
    /// Rendering intensity in [0, 1]
    intensity: f64,
}

impl ThemeResult {
    pub(crate) const fn new(theme: LightingTheme, intensity: f64) -> Self {
        Self { theme, intensity }
    }

    /// Gets the classified theme.
    #[must_use]
    pub const fn theme(&self) -> LightingTheme {
        self.theme
    }

    /// Gets the rendering intensity in `[0, 1]`.
    #[must_use]
    pub const fn intensity(&self) -> f64 {
        self.intensity
    }
}

/// Everything the dashboard needs about one instant of a location's sky,
/// derived from a single [`LocationSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedEnvironment {
    /// Moon state for the local calendar date
    moon: MoonPhaseResult,
    /// Ambient light estimate for the evaluation instant
    illuminance: IlluminanceResult,
    /// Lighting theme for the evaluation instant
    theme: ThemeResult,
}

impl DerivedEnvironment {
    pub(crate) const fn new(
        moon: MoonPhaseResult,
        illuminance: IlluminanceResult,
        theme: ThemeResult,
    ) -> Self {
        Self {
            moon,
            illuminance,
            theme,
        }
    }

    /// Gets the moon state for the local calendar date.
    #[must_use]
    pub const fn moon(&self) -> MoonPhaseResult {
        self.moon
    }

    /// Gets the ambient light estimate for the evaluation instant.
    #[must_use]
    pub const fn illuminance(&self) -> IlluminanceResult {
        self.illuminance
    }

    /// Gets the lighting theme for the evaluation instant.
    #[must_use]
    pub const fn theme(&self) -> ThemeResult {
        self.theme
    }
}
