//! Closed-form warp-time calculation.
//!
//! A warp consists of three phases: exponential acceleration over the first
//! AU, a cruise at peak warp speed, and exponential deceleration down to the
//! dropout speed (half the ship's subwarp speed). Jumps too short to reach
//! peak speed skip the cruise and peak at a reduced speed instead.

use serde::Serialize;

use super::constants::{AU_METERS, MAX_DECELERATION_RATE};

/// Parallel distance/time sequences produced by [`compute_warp_time_series`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WarpTimeSeries {
    /// Distance samples in meters, in input order.
    pub distances: Vec<f64>,
    /// Warp time in seconds for the distance at the same index.
    pub times: Vec<f64>,
}

impl WarpTimeSeries {
    /// Number of samples in the series.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Iterate `(distance, time)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.distances
            .iter()
            .copied()
            .zip(self.times.iter().copied())
    }
}

/// Compute the time in seconds needed to warp `distance_m` meters.
///
/// # Arguments
/// - `max_warp_speed`: warp speed in AU/s (must be > 0)
/// - `max_subwarp_speed`: subwarp speed in m/s (must be > 0)
/// - `distance_m`: warp distance in meters (must be >= 0)
///
/// The speed preconditions are not checked: non-positive speeds produce
/// non-finite results. A zero distance returns exactly `0.0`.
///
/// Below roughly a kilometer the logarithms go negative and so does the
/// result (about -4.7 s for 1 m at 5 AU/s and 4000 m/s), so the time is only
/// non-decreasing in distance from there up. Real warps start at 150 km.
///
/// The acceleration rate equals the warp speed numerically (k = v in 1/s),
/// and the deceleration rate is `min(v / 3, 2)`.
pub fn compute_warp_time(max_warp_speed: f64, max_subwarp_speed: f64, distance_m: f64) -> f64 {
    if distance_m == 0.0 {
        return 0.0;
    }

    let k_accel = max_warp_speed;
    let k_decel = (max_warp_speed / 3.0).min(MAX_DECELERATION_RATE);

    let dropout_speed = max_subwarp_speed / 2.0;
    let mut peak_speed = max_warp_speed * AU_METERS;

    let accel_dist = AU_METERS;
    let decel_dist = peak_speed / k_decel;
    let minimum_dist = accel_dist + decel_dist;

    let mut cruise_time = 0.0;
    if minimum_dist > distance_m {
        peak_speed = distance_m * k_accel * k_decel / (k_accel + k_decel);
    } else {
        cruise_time = (distance_m - minimum_dist) / peak_speed;
    }

    let accel_time = (peak_speed / k_accel).ln() / k_accel;
    let decel_time = (peak_speed / dropout_speed).ln() / k_decel;

    cruise_time + accel_time + decel_time
}

/// Apply [`compute_warp_time`] to every distance of a sequence.
///
/// Samples are evaluated independently and returned in input order. The
/// sequence must be finite.
pub fn compute_warp_time_series<I>(
    max_warp_speed: f64,
    max_subwarp_speed: f64,
    distances_m: I,
) -> WarpTimeSeries
where
    I: IntoIterator<Item = f64>,
{
    let iter = distances_m.into_iter();
    let (lower, _) = iter.size_hint();
    let mut series = WarpTimeSeries {
        distances: Vec::with_capacity(lower),
        times: Vec::with_capacity(lower),
    };

    for distance in iter {
        series.distances.push(distance);
        series
            .times
            .push(compute_warp_time(max_warp_speed, max_subwarp_speed, distance));
    }

    series
}
