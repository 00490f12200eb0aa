//! Warp-time model, distance units, and distance sampling.
//!
//! This module is organized into focused submodules:
//!
//! - [`constants`] - Shared physical constants
//! - [`time`] - Closed-form warp-time calculation
//! - [`units`] - Distance unit normalization
//! - [`sampling`] - Linear scans over a distance range
//!
//! # Example
//!
//! ```
//! use fitwarp_lib::warp::{compute_warp_time, AU_METERS};
//!
//! // 5 AU/s warp, 4000 m/s subwarp, 100 AU jump
//! let seconds = compute_warp_time(5.0, 4000.0, 100.0 * AU_METERS);
//! assert!(seconds > 0.0);
//! assert_eq!(compute_warp_time(5.0, 4000.0, 0.0), 0.0);
//! ```

pub mod constants;
pub mod sampling;
pub mod time;
pub mod units;

pub use constants::{AU_METERS, MAX_DECELERATION_RATE};
pub use sampling::LinearSamples;
pub use time::{compute_warp_time, compute_warp_time_series, WarpTimeSeries};
pub use units::DistanceUnit;
