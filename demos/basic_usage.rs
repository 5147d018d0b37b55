//! Basic environment derivation example.

use chrono::{FixedOffset, TimeZone};
use sky_ambience::{derive_environment, moon, LocationSnapshot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // São Paulo on March 15, 2024 (UTC-3): sunrise 06:12, sunset 18:47 local
    let snapshot = LocationSnapshot::new(
        1_710_493_920, // sunrise (epoch seconds)
        1_710_539_220, // sunset (epoch seconds)
        40.0,          // cloud cover (%)
        -10_800,       // UTC offset (s)
        1_710_514_800, // evaluation instant: local noon
    )?;

    let derived = derive_environment(&snapshot);

    println!("São Paulo, March 15, 2024, 12:00 local time:");
    println!(
        "  Lighting theme: {} (intensity {:.2})",
        derived.theme().theme(),
        derived.theme().intensity()
    );
    if derived.illuminance().is_night_estimate() {
        println!(
            "  Ambient light: {} lx (night placeholder)",
            derived.illuminance().estimated_lux()
        );
    } else {
        println!(
            "  Ambient light: {} lx",
            derived.illuminance().estimated_lux()
        );
    }
    println!(
        "  Moon: {} {}, {}% illuminated",
        derived.moon().emoji(),
        derived.moon().phase(),
        derived.moon().illumination_percent()
    );

    // The chrono-aware calculators accept timezone values directly
    let zone = FixedOffset::west_opt(3 * 3600).unwrap();
    let noon = zone.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    let chrono_moon = moon::phase_for_date_like(noon.date_naive());

    println!(
        "\nSame moment via chrono: {} ({}% illuminated)",
        chrono_moon.phase(),
        chrono_moon.illumination_percent()
    );
    println!(
        "Both paths produce identical results: {}",
        chrono_moon == derived.moon()
    );

    Ok(())
}
