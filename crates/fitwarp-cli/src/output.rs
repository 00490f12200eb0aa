//! Output formatting for warp-time results.

use clap::ValueEnum;

use fitwarp_lib::{DistanceUnit, WarpTimeCurve};

use crate::terminal::{format_with_separators, ColorPalette};

/// Output format for commands that produce structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format a duration in seconds, switching to minutes past one minute.
pub fn format_seconds(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{seconds:.2} s")
    } else {
        let minutes = (seconds / 60.0).floor();
        format!("{minutes:.0} min {:.2} s", seconds - minutes * 60.0)
    }
}

/// Format a distance in its unit; kilometers and meters get separators.
pub fn format_distance(value: f64, unit: DistanceUnit) -> String {
    match unit {
        DistanceUnit::Au => format!("{value:.2} AU"),
        DistanceUnit::Km | DistanceUnit::M => {
            format!("{} {}", format_with_separators(value.round() as u64), unit)
        }
    }
}

/// Render a curve as an aligned text table.
pub fn render_curve_text(curve: &WarpTimeCurve, palette: &ColorPalette) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}Warp time for fit {}{}\n",
        palette.white_bold, curve.fit, palette.reset
    ));
    out.push_str(&format!(
        "Warp speed: {}{:.2} AU/s{}  Clean subwarp speed: {}{:.1} m/s{}\n",
        palette.cyan,
        curve.warp_speed,
        palette.reset,
        palette.cyan,
        curve.subwarp_speed,
        palette.reset
    ));
    out.push_str(&format!(
        "{}{:>24} {:>18}{}\n",
        palette.gray, "Distance", "Time", palette.reset
    ));
    for point in &curve.points {
        out.push_str(&format!(
            "{:>24} {}{:>18}{}\n",
            format_distance(point.distance, curve.unit),
            palette.green,
            format_seconds(point.time_s),
            palette.reset
        ));
    }
    out
}
