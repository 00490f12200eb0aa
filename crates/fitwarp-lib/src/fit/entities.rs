//! Entities attached to a fit and their activation state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::FitId;

/// Name of the ship attribute holding maximum subwarp velocity (m/s).
pub const MAX_VELOCITY: &str = "maxVelocity";

/// Module activation level, ordered from least to most engaged.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ModuleState {
    Offline,
    #[default]
    Online,
    Active,
    Overheated,
}

impl ModuleState {
    /// Whether the module is at or above the active state.
    pub fn is_active(self) -> bool {
        self >= ModuleState::Active
    }
}

/// Market group classification of an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemGroup {
    PropulsionModule,
    MassEntangler,
    CloakingDevice,
    Other(String),
}

impl ItemGroup {
    /// Groups whose active effects change subwarp speed.
    pub fn affects_subwarp_speed(&self) -> bool {
        matches!(
            self,
            ItemGroup::PropulsionModule | ItemGroup::MassEntangler | ItemGroup::CloakingDevice
        )
    }

    pub fn name(&self) -> &str {
        match self {
            ItemGroup::PropulsionModule => "Propulsion Module",
            ItemGroup::MassEntangler => "Mass Entanglers",
            ItemGroup::CloakingDevice => "Cloaking Device",
            ItemGroup::Other(name) => name,
        }
    }
}

impl From<String> for ItemGroup {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Propulsion Module" => ItemGroup::PropulsionModule,
            "Mass Entanglers" => ItemGroup::MassEntangler,
            "Cloaking Device" => ItemGroup::CloakingDevice,
            _ => ItemGroup::Other(name),
        }
    }
}

impl From<ItemGroup> for String {
    fn from(group: ItemGroup) -> Self {
        group.name().to_string()
    }
}

/// Item type backing a module, drone, or fighter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub group: ItemGroup,
    /// Percentage change applied to ship max velocity while the item is in effect.
    #[serde(default)]
    pub velocity_bonus: f64,
}

/// Fitted or projected module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Empty slots carry no item.
    #[serde(default)]
    pub item: Option<Item>,
    #[serde(default)]
    pub state: ModuleState,
    /// System-wide effects (e.g. environment beacons) that are never toggled.
    #[serde(default)]
    pub exclusive_system_effect: bool,
}

/// Projected drone stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub item: Item,
    pub amount: u32,
    #[serde(default)]
    pub amount_active: u32,
}

/// Projected fighter squadron.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub item: Item,
    #[serde(default)]
    pub active: bool,
}

/// Link state of one fit projecting onto another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInfo {
    pub active: bool,
}

/// Another fit projected onto the owning fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedFit {
    pub fit_id: FitId,
    #[serde(default)]
    pub name: Option<String>,
    /// Net percentage change the source fit applies to our max velocity.
    #[serde(default)]
    pub velocity_bonus: f64,
    /// Link onto the owning fit; absent when the source no longer projects.
    #[serde(default)]
    pub projection: Option<ProjectionInfo>,
}

impl ProjectedFit {
    pub fn projection_info(&self) -> Option<&ProjectionInfo> {
        self.projection.as_ref()
    }

    pub fn projection_info_mut(&mut self) -> Option<&mut ProjectionInfo> {
        self.projection.as_mut()
    }
}

/// Ship hull with its base and modified attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub name: String,
    /// Unmodified max velocity in m/s.
    pub base_max_velocity: f64,
    #[serde(skip)]
    modified: BTreeMap<String, f64>,
}

impl Ship {
    pub fn new(name: impl Into<String>, base_max_velocity: f64) -> Self {
        Self {
            name: name.into(),
            base_max_velocity,
            modified: BTreeMap::new(),
        }
    }

    /// Modified attribute value from the most recent recalculation.
    pub fn modified_attr(&self, name: &str) -> Option<f64> {
        self.modified.get(name).copied()
    }

    pub fn set_modified_attr(&mut self, name: &str, value: f64) {
        self.modified.insert(name.to_string(), value);
    }
}
