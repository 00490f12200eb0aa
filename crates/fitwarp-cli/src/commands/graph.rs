//! Graph command handler for sampling warp time across a distance range.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use fitwarp_lib::{DistanceRange, DistanceUnit, GraphConfig, WarpTimeGraph};

use fitwarp_cli::output::{render_curve_text, OutputFormat};
use fitwarp_cli::terminal::ColorPalette;

use super::load_fit;

/// Arguments for the graph command.
#[derive(Debug, Clone)]
pub struct GraphCommandArgs {
    pub fit: Option<PathBuf>,
    pub unit: DistanceUnit,
    /// Range start; the unit's default when absent.
    pub from: Option<f64>,
    /// Range end; the unit's default when absent.
    pub to: Option<f64>,
    pub resolution: usize,
    pub format: OutputFormat,
}

/// Handle the graph subcommand.
pub fn handle_graph(args: &GraphCommandArgs) -> Result<()> {
    if args.unit == DistanceUnit::M {
        bail!("graph distances must be given in au or km");
    }

    let mut fit = load_fit(args.fit.as_deref())?;
    let mut graph = WarpTimeGraph::new(GraphConfig {
        resolution: args.resolution,
    })
    .context("invalid graph configuration")?;

    let defaults = DistanceRange::default_for(args.unit);
    let range = DistanceRange::new(
        args.unit,
        args.from.unwrap_or(defaults.low),
        args.to.unwrap_or(defaults.high),
    );

    let curve = graph
        .distance_to_time(&mut fit, &range)
        .with_context(|| format!("failed to compute warp time curve for fit {}", fit.id))?;

    match args.format {
        OutputFormat::Text => print!("{}", render_curve_text(&curve, &ColorPalette::detect())),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&curve)?),
    }
    Ok(())
}
