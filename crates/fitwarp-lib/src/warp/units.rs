//! Distance units accepted by graph inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::AU_METERS;

/// Unit a distance input or output is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Astronomical units.
    Au,
    /// Kilometers.
    Km,
    /// Meters.
    M,
}

impl DistanceUnit {
    /// Convert a value in this unit to meters.
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Au => value * AU_METERS,
            DistanceUnit::Km => value * 1000.0,
            DistanceUnit::M => value,
        }
    }

    /// Convert a value in meters to this unit.
    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Au => meters / AU_METERS,
            DistanceUnit::Km => meters / 1000.0,
            DistanceUnit::M => meters,
        }
    }

    /// Default input range offered for this unit.
    pub fn default_range(self) -> (f64, f64) {
        match self {
            DistanceUnit::Au => (0.0, 50.0),
            DistanceUnit::Km => (150.0, 5000.0),
            DistanceUnit::M => (150_000.0, 5_000_000.0),
        }
    }

    /// Short label used when rendering values.
    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Au => "AU",
            DistanceUnit::Km => "km",
            DistanceUnit::M => "m",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "au" => Ok(DistanceUnit::Au),
            "km" => Ok(DistanceUnit::Km),
            "m" => Ok(DistanceUnit::M),
            other => Err(Error::InvalidInput {
                message: format!("unknown distance unit '{other}'; expected au, km or m"),
            }),
        }
    }
}
