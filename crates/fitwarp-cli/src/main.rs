mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fitwarp_cli::output::OutputFormat;
use fitwarp_lib::DistanceUnit;

use commands::graph::{handle_graph, GraphCommandArgs};
use commands::time::{handle_time, TimeCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fit warp-time utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the warp time for one distance.
    Time {
        /// Warp speed in AU/s.
        #[arg(long)]
        warp_speed: f64,
        /// Subwarp speed in m/s.
        #[arg(long)]
        subwarp_speed: f64,
        /// Warp distance.
        #[arg(long)]
        distance: f64,
        /// Unit of --distance (au, km or m).
        #[arg(long, default_value = "au", value_parser = parse_unit)]
        unit: DistanceUnit,
    },
    /// Measure a fit's clean subwarp speed.
    CleanSpeed {
        /// Fit document (JSON). Falls back to FITWARP_FIT.
        #[arg(long)]
        fit: Option<PathBuf>,
    },
    /// Sample warp time across a distance range for a fit.
    Graph {
        /// Fit document (JSON). Falls back to FITWARP_FIT.
        #[arg(long)]
        fit: Option<PathBuf>,
        /// Distance unit (au or km).
        #[arg(long, default_value = "au", value_parser = parse_unit)]
        unit: DistanceUnit,
        /// Range start in --unit.
        #[arg(long)]
        from: Option<f64>,
        /// Range end in --unit.
        #[arg(long)]
        to: Option<f64>,
        /// Number of steps between the range endpoints.
        #[arg(long, default_value_t = 200)]
        resolution: usize,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn parse_unit(value: &str) -> std::result::Result<DistanceUnit, String> {
    value.parse().map_err(|err: fitwarp_lib::Error| err.to_string())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Time {
            warp_speed,
            subwarp_speed,
            distance,
            unit,
        } => handle_time(&TimeCommandArgs {
            warp_speed,
            subwarp_speed,
            distance,
            unit,
        }),
        Command::CleanSpeed { fit } => commands::clean_speed::handle_clean_speed(fit.as_deref()),
        Command::Graph {
            fit,
            unit,
            from,
            to,
            resolution,
            format,
        } => handle_graph(&GraphCommandArgs {
            fit,
            unit,
            from,
            to,
            resolution,
            format,
        }),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
