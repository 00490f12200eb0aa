//! Fit collaborator surface consumed by the clean-speed probe.
//!
//! The attribute engine that owns a fit lives outside this crate. It is
//! reached only through the [`Fit`] trait: entity collections with mutable
//! activation state, the ship's modified attributes, and the recalculation
//! operation. [`FitDocument`] is a declarative implementation used by the CLI
//! and tests.

pub mod document;
pub mod entities;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use document::FitDocument;
pub use entities::{
    Drone, Fighter, Item, ItemGroup, Module, ModuleState, ProjectedFit, ProjectionInfo, Ship,
    MAX_VELOCITY,
};

/// Stable identifier of a fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FitId(pub u64);

impl fmt::Display for FitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FitId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Operations the probe and graph need from a fitting engine.
///
/// Entity slices are handed out mutably so activation state can be
/// neutralized and restored in place. Modified ship attributes are only
/// meaningful immediately after [`Fit::calculate_modified_attributes`].
pub trait Fit {
    /// Stable identifier used as the clean-speed cache key.
    fn id(&self) -> FitId;

    /// Warp speed in AU/s.
    fn warp_speed(&self) -> f64;

    /// Maximum warp distance in AU.
    fn max_warp_distance(&self) -> f64;

    /// The fitted ship, if any.
    fn ship(&self) -> Option<&Ship>;

    fn modules_mut(&mut self) -> &mut [Module];

    fn projected_modules_mut(&mut self) -> &mut [Module];

    fn projected_drones_mut(&mut self) -> &mut [Drone];

    fn projected_fighters_mut(&mut self) -> &mut [Fighter];

    /// Other fits projecting onto this one.
    fn projected_fits_mut(&mut self) -> &mut [ProjectedFit];

    /// Recompute all modified attributes from the current activation state.
    fn calculate_modified_attributes(&mut self) -> Result<()>;
}
