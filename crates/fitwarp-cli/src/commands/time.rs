//! Time command handler for a single warp-time calculation.

use anyhow::{bail, Result};

use fitwarp_lib::{compute_warp_time, DistanceUnit};

use fitwarp_cli::output::{format_distance, format_seconds};

/// Arguments for the time command.
#[derive(Debug, Clone, Copy)]
pub struct TimeCommandArgs {
    /// Warp speed in AU/s.
    pub warp_speed: f64,
    /// Subwarp speed in m/s.
    pub subwarp_speed: f64,
    /// Distance in `unit`.
    pub distance: f64,
    pub unit: DistanceUnit,
}

/// Handle the time subcommand.
pub fn handle_time(args: &TimeCommandArgs) -> Result<()> {
    let seconds = warp_time(args)?;
    println!(
        "Warp of {} at {:.2} AU/s ({:.1} m/s subwarp): {}",
        format_distance(args.distance, args.unit),
        args.warp_speed,
        args.subwarp_speed,
        format_seconds(seconds)
    );
    Ok(())
}

/// Validate inputs and compute the warp time in seconds.
pub fn warp_time(args: &TimeCommandArgs) -> Result<f64> {
    for (value, name) in [
        (args.warp_speed, "warp speed"),
        (args.subwarp_speed, "subwarp speed"),
    ] {
        if !value.is_finite() || value <= 0.0 {
            bail!("{name} must be a finite positive number, got {value}");
        }
    }
    if !args.distance.is_finite() || args.distance < 0.0 {
        bail!(
            "distance must be finite and non-negative, got {}",
            args.distance
        );
    }

    Ok(compute_warp_time(
        args.warp_speed,
        args.subwarp_speed,
        args.unit.to_meters(args.distance),
    ))
}
