//! Warp time as a function of distance for a single fit.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::fit::{Fit, FitId};
use crate::probe::CleanSubwarpSpeedProbe;
use crate::warp::{compute_warp_time_series, DistanceUnit, LinearSamples, AU_METERS};

/// Sampling configuration for warp-time curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Number of steps between the range endpoints (samples = resolution + 1).
    pub resolution: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { resolution: 200 }
    }
}

impl GraphConfig {
    /// Largest accepted resolution.
    pub const MAX_RESOLUTION: usize = 100_000;

    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 || self.resolution > Self::MAX_RESOLUTION {
            return Err(Error::InvalidInput {
                message: format!(
                    "resolution must be between 1 and {}, got {}",
                    Self::MAX_RESOLUTION,
                    self.resolution
                ),
            });
        }
        Ok(())
    }
}

/// Requested distance range in a given unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceRange {
    pub unit: DistanceUnit,
    pub low: f64,
    pub high: f64,
}

impl DistanceRange {
    pub fn new(unit: DistanceUnit, low: f64, high: f64) -> Self {
        Self { unit, low, high }
    }

    /// The unit's default input range.
    pub fn default_for(unit: DistanceUnit) -> Self {
        let (low, high) = unit.default_range();
        Self { unit, low, high }
    }

    fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(Error::InvalidInput {
                message: format!(
                    "distance range must be finite, got {}..{}",
                    self.low, self.high
                ),
            });
        }
        Ok(())
    }
}

/// One sample of a warp-time curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WarpTimePoint {
    /// Distance in the curve's unit.
    pub distance: f64,
    /// Warp time in seconds.
    pub time_s: f64,
}

/// Warp time sampled over a distance range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarpTimeCurve {
    pub fit: FitId,
    pub unit: DistanceUnit,
    /// Warp speed used, AU/s.
    pub warp_speed: f64,
    /// Clean subwarp speed used, m/s.
    pub subwarp_speed: f64,
    pub points: Vec<WarpTimePoint>,
}

/// Distance-to-time graph backed by a clean-speed probe.
///
/// The probe cache lives as long as the graph, so repeated curves for the
/// same fit measure it only once.
#[derive(Debug, Clone, Default)]
pub struct WarpTimeGraph {
    config: GraphConfig,
    probe: CleanSubwarpSpeedProbe,
}

impl WarpTimeGraph {
    pub fn new(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            probe: CleanSubwarpSpeedProbe::new(),
        })
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn probe(&self) -> &CleanSubwarpSpeedProbe {
        &self.probe
    }

    /// Valid distance input range for `fit`, in meters.
    pub fn distance_limits<F: Fit + ?Sized>(fit: &F) -> Result<(f64, f64)> {
        let max = fit.max_warp_distance() * AU_METERS;
        if !max.is_finite() || max < 0.0 {
            return Err(Error::InvalidInput {
                message: format!(
                    "fit {} max warp distance must be finite and non-negative, got {}",
                    fit.id(),
                    fit.max_warp_distance()
                ),
            });
        }
        Ok((0.0, max))
    }

    /// Sample warp time across `range`, clamped to the fit's warp limits.
    pub fn distance_to_time<F: Fit + ?Sized>(
        &mut self,
        fit: &mut F,
        range: &DistanceRange,
    ) -> Result<WarpTimeCurve> {
        range.validate()?;

        let warp_speed = fit.warp_speed();
        if !warp_speed.is_finite() || warp_speed <= 0.0 {
            return Err(Error::InvalidInput {
                message: format!(
                    "fit {} warp speed must be finite and positive, got {warp_speed}",
                    fit.id()
                ),
            });
        }

        let (min_m, max_m) = Self::distance_limits(&*fit)?;
        let low_m = range.unit.to_meters(range.low).clamp(min_m, max_m);
        let high_m = range.unit.to_meters(range.high).clamp(min_m, max_m);

        let subwarp_speed = self.probe.clean_subwarp_speed(fit)?;
        if !subwarp_speed.is_finite() || subwarp_speed <= 0.0 {
            return Err(Error::InvalidInput {
                message: format!(
                    "fit {} clean subwarp speed must be finite and positive, got {subwarp_speed}",
                    fit.id()
                ),
            });
        }
        debug!(
            fit = %fit.id(),
            warp_speed,
            subwarp_speed,
            low_m,
            high_m,
            "sampling warp time curve"
        );

        let samples = LinearSamples::new(low_m, high_m, self.config.resolution);
        let series = compute_warp_time_series(warp_speed, subwarp_speed, samples);

        let points = series
            .iter()
            .map(|(distance, time_s)| WarpTimePoint {
                distance: range.unit.from_meters(distance),
                time_s,
            })
            .collect();

        Ok(WarpTimeCurve {
            fit: fit.id(),
            unit: range.unit,
            warp_speed,
            subwarp_speed,
            points,
        })
    }
}
