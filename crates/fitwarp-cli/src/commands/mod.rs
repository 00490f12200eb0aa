// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod clean_speed;
pub mod graph;
pub mod time;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use fitwarp_lib::FitDocument;

/// Environment variable consulted when `--fit` is not given.
pub const FIT_ENV: &str = "FITWARP_FIT";

/// Resolve the fit document path from the flag or `FITWARP_FIT`.
pub fn resolve_fit_path(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    std::env::var_os(FIT_ENV)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("no fit document given; pass --fit or set {FIT_ENV}"))
}

/// Load the fit document named by the flag or environment.
pub fn load_fit(flag: Option<&Path>) -> Result<FitDocument> {
    let path = resolve_fit_path(flag)?;
    FitDocument::from_path(&path)
        .with_context(|| format!("failed to load fit from {}", path.display()))
}
