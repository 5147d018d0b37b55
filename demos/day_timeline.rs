//! Hour-by-hour lighting timeline for a handful of locations.

use sky_ambience::{derive_environment, LocationSnapshot};

#[derive(Debug)]
struct Location {
    name: &'static str,
    /// 00:00 local time, in epoch seconds.
    local_midnight: i64,
    sunrise: i64,
    sunset: i64,
    cloud_cover_percent: f64,
    utc_offset_seconds: i32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let locations = [
        Location {
            name: "São Paulo, March 15, 2024 (40% cloud)",
            local_midnight: 1_710_471_600,
            sunrise: 1_710_493_920, // 06:12 local
            sunset: 1_710_539_220,  // 18:47 local
            cloud_cover_percent: 40.0,
            utc_offset_seconds: -10_800,
        },
        Location {
            name: "Berlin, June 21, 2024 (25% cloud)",
            local_midnight: 1_718_920_800,
            sunrise: 1_718_937_780, // 04:43 local
            sunset: 1_718_998_380,  // 21:33 local
            cloud_cover_percent: 25.0,
            utc_offset_seconds: 7_200,
        },
        Location {
            name: "Tokyo, January 11, 2024 (10% cloud)",
            local_midnight: 1_704_898_800,
            sunrise: 1_704_923_460, // 06:51 local
            sunset: 1_704_959_400,  // 16:50 local
            cloud_cover_percent: 10.0,
            utc_offset_seconds: 32_400,
        },
    ];

    for location in &locations {
        println!("=== {} ===", location.name);
        print_timeline(location)?;
        println!();
    }

    Ok(())
}

fn print_timeline(location: &Location) -> Result<(), Box<dyn std::error::Error>> {
    for hour in 0..24 {
        let evaluation = location.local_midnight + i64::from(hour) * 3_600;
        let snapshot = LocationSnapshot::new(
            location.sunrise,
            location.sunset,
            location.cloud_cover_percent,
            location.utc_offset_seconds,
            evaluation,
        )?;

        let derived = derive_environment(&snapshot);
        let marker = if derived.illuminance().is_night_estimate() {
            " (night placeholder)"
        } else {
            ""
        };

        println!(
            "  {:02}:00  {:<7}  intensity {:.2}  {:>6} lx{}",
            hour,
            derived.theme().theme().to_string(),
            derived.theme().intensity(),
            derived.illuminance().estimated_lux(),
            marker
        );

        if hour == 23 {
            println!(
                "  Moon: {} {}, {}% illuminated",
                derived.moon().emoji(),
                derived.moon().phase(),
                derived.moon().illumination_percent()
            );
        }
    }

    Ok(())
}
