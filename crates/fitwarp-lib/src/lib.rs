//! fitwarp library entry points.
//!
//! This crate computes how long a starship fit takes to warp a given
//! distance. It exposes the closed-form warp-time model, a probe that
//! measures a fit's clean subwarp speed without permanently altering it, and
//! a distance-to-time graph combining the two. Higher-level consumers (the
//! CLI) should only depend on the items exported here.
//!

#![deny(warnings)]

pub mod error;
pub mod fit;
pub mod graph;
pub mod probe;
pub mod warp;

pub use error::{Error, Result};
pub use fit::{Fit, FitDocument, FitId};
pub use graph::{DistanceRange, GraphConfig, WarpTimeCurve, WarpTimeGraph, WarpTimePoint};
pub use probe::{CleanSpeedCache, CleanSubwarpSpeedProbe, NeutralizedFit};
pub use warp::{
    compute_warp_time, compute_warp_time_series, DistanceUnit, LinearSamples, WarpTimeSeries,
    AU_METERS,
};
