//! Config command: show or change engine settings.

use crate::commands::open_store;
use crate::render::{header, kv, status, Level};
use anyhow::Result;
use tend_core::Intensity;

/// Range the CLI accepts for the daily minute budget. The engine takes
/// settings verbatim; clamping is a presentation concern.
const MINUTES_RANGE: (u32, u32) = (4, 15);

pub fn config(set: Option<String>) -> Result<()> {
    println!("{}", header("Tend configuration"));
    println!();

    let mut store = open_store();

    if let Some(set_expr) = set {
        let parts: Vec<&str> = set_expr.splitn(2, '=').collect();
        if parts.len() != 2 {
            println!(
                "{}",
                status(Level::Error, "Invalid format. Use: key=value")
            );
            return Ok(());
        }

        let key = parts[0].trim();
        let value = parts[1].trim();

        match key {
            "daily_minutes" => {
                let minutes: u32 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid number of minutes"))?;
                let clamped = minutes.clamp(MINUTES_RANGE.0, MINUTES_RANGE.1);
                store.set_daily_minutes(clamped);
                if clamped != minutes {
                    println!(
                        "{}",
                        status(
                            Level::Warning,
                            &format!(
                                "Clamped to {} (allowed range {}-{})",
                                clamped, MINUTES_RANGE.0, MINUTES_RANGE.1
                            )
                        )
                    );
                } else {
                    println!(
                        "{}",
                        status(
                            Level::Success,
                            &format!("Daily minutes set to {}", clamped)
                        )
                    );
                }
            }
            "intensity" => {
                let intensity = match value.to_lowercase().as_str() {
                    "gentle" => Intensity::Gentle,
                    "standard" => Intensity::Standard,
                    _ => anyhow::bail!(
                        "Invalid intensity: '{}'. Valid values: gentle, standard",
                        value
                    ),
                };
                store.set_intensity(intensity);
                println!(
                    "{}",
                    status(Level::Success, &format!("Intensity set to {}", value))
                );
            }
            _ => {
                anyhow::bail!(
                    "Unknown key: '{}'. Valid keys: daily_minutes, intensity",
                    key
                );
            }
        }
        println!();
    }

    let settings = &store.state().settings;
    println!(
        "{}",
        kv("daily_minutes", &settings.daily_minutes.to_string())
    );
    println!(
        "{}",
        kv(
            "intensity",
            match settings.intensity {
                Intensity::Gentle => "gentle",
                Intensity::Standard => "standard",
            }
        )
    );
    println!(
        "{}",
        kv("member_since", &store.state().created_at.to_string())
    );

    Ok(())
}
