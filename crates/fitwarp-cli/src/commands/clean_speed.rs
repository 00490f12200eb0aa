//! Clean-speed command handler.

use std::path::Path;

use anyhow::{Context, Result};

use fitwarp_lib::fit::MAX_VELOCITY;
use fitwarp_lib::{CleanSubwarpSpeedProbe, Fit};

use super::load_fit;

/// Handle the clean-speed subcommand.
///
/// Prints the fit's live max velocity next to its clean subwarp speed.
pub fn handle_clean_speed(fit_path: Option<&Path>) -> Result<()> {
    let mut fit = load_fit(fit_path)?;
    fit.calculate_modified_attributes()
        .context("failed to calculate fit attributes")?;
    let live = fit.ship().and_then(|ship| ship.modified_attr(MAX_VELOCITY));

    let mut probe = CleanSubwarpSpeedProbe::new();
    let clean = probe
        .clean_subwarp_speed(&mut fit)
        .with_context(|| format!("failed to measure clean subwarp speed of fit {}", fit.id))?;

    let label = if fit.name.is_empty() {
        fit.id.to_string()
    } else {
        format!("{} ({})", fit.name, fit.id)
    };
    println!("Fit: {label}");
    if let Some(live) = live {
        println!("Current max velocity: {live:.1} m/s");
    }
    println!("Clean subwarp speed: {clean:.1} m/s");
    Ok(())
}
