//! Constants used across warp-time calculations.

/// One astronomical unit in meters.
pub const AU_METERS: f64 = 149_597_870_700.0;

/// Upper bound of the deceleration rate (1/s). Ships slower than 6 AU/s
/// decelerate at a third of their warp speed instead.
pub const MAX_DECELERATION_RATE: f64 = 2.0;
