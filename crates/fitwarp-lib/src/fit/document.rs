//! Declarative fits loaded from JSON.
//!
//! A [`FitDocument`] carries just enough data to drive the probe and the
//! warp-time graph. Its recalculation is a flat multiplier model: every item
//! currently in effect scales the hull's base max velocity by
//! `1 + velocity_bonus / 100`, with no stacking penalties.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::entities::{Drone, Fighter, Item, Module, ProjectedFit, Ship, MAX_VELOCITY};
use super::{Fit, FitId};

/// Fit described entirely by its JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitDocument {
    pub id: FitId,
    #[serde(default)]
    pub name: String,
    /// Warp speed in AU/s.
    pub warp_speed: f64,
    /// Maximum warp distance in AU.
    pub max_warp_distance: f64,
    #[serde(default)]
    pub ship: Option<Ship>,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub projected_modules: Vec<Module>,
    #[serde(default)]
    pub projected_drones: Vec<Drone>,
    #[serde(default)]
    pub projected_fighters: Vec<Fighter>,
    #[serde(default)]
    pub projected_fits: Vec<ProjectedFit>,
}

impl FitDocument {
    /// Load and validate a fit document from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|source| Error::FitRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Load and validate a fit document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: Self = serde_json::from_reader(reader)?;
        document.validate()?;
        Ok(document)
    }

    /// Validate the document for correctness.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.warp_speed, "warp_speed"),
            (self.max_warp_distance, "max_warp_distance"),
        ];
        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::FitDataValidation {
                    message: format!("{field} must be a finite positive number, got {value}"),
                });
            }
        }

        if let Some(ship) = &self.ship {
            if !ship.base_max_velocity.is_finite() || ship.base_max_velocity <= 0.0 {
                return Err(Error::FitDataValidation {
                    message: format!(
                        "ship '{}' base_max_velocity must be a finite positive number",
                        ship.name
                    ),
                });
            }
        }

        for item in self.items() {
            if !item.velocity_bonus.is_finite() || item.velocity_bonus <= -100.0 {
                return Err(Error::FitDataValidation {
                    message: format!(
                        "item '{}' velocity_bonus must be finite and above -100, got {}",
                        item.name, item.velocity_bonus
                    ),
                });
            }
        }

        for drone in &self.projected_drones {
            if drone.amount_active > drone.amount {
                return Err(Error::FitDataValidation {
                    message: format!(
                        "drone '{}' has {} active out of {}",
                        drone.item.name, drone.amount_active, drone.amount
                    ),
                });
            }
        }

        for projected in &self.projected_fits {
            if !projected.velocity_bonus.is_finite() || projected.velocity_bonus <= -100.0 {
                return Err(Error::FitDataValidation {
                    message: format!(
                        "projected fit {} velocity_bonus must be finite and above -100",
                        projected.fit_id
                    ),
                });
            }
        }

        Ok(())
    }

    fn items(&self) -> impl Iterator<Item = &Item> {
        self.modules
            .iter()
            .chain(&self.projected_modules)
            .filter_map(|module| module.item.as_ref())
            .chain(self.projected_drones.iter().map(|drone| &drone.item))
            .chain(self.projected_fighters.iter().map(|fighter| &fighter.item))
    }

    /// Product of every velocity factor currently in effect.
    fn velocity_multiplier(&self) -> f64 {
        let factor = |bonus: f64| 1.0 + bonus / 100.0;

        let modules = self
            .modules
            .iter()
            .chain(&self.projected_modules)
            .filter(|module| module.state.is_active())
            .filter_map(|module| module.item.as_ref())
            .map(|item| factor(item.velocity_bonus));

        let drones = self
            .projected_drones
            .iter()
            .map(|drone| factor(drone.item.velocity_bonus).powf(f64::from(drone.amount_active)));

        let fighters = self
            .projected_fighters
            .iter()
            .filter(|fighter| fighter.active)
            .map(|fighter| factor(fighter.item.velocity_bonus));

        let projections = self
            .projected_fits
            .iter()
            .filter(|projected| projected.projection_info().is_some_and(|info| info.active))
            .map(|projected| factor(projected.velocity_bonus));

        modules
            .chain(drones)
            .chain(fighters)
            .chain(projections)
            .product()
    }
}

impl Fit for FitDocument {
    fn id(&self) -> FitId {
        self.id
    }

    fn warp_speed(&self) -> f64 {
        self.warp_speed
    }

    fn max_warp_distance(&self) -> f64 {
        self.max_warp_distance
    }

    fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    fn modules_mut(&mut self) -> &mut [Module] {
        &mut self.modules
    }

    fn projected_modules_mut(&mut self) -> &mut [Module] {
        &mut self.projected_modules
    }

    fn projected_drones_mut(&mut self) -> &mut [Drone] {
        &mut self.projected_drones
    }

    fn projected_fighters_mut(&mut self) -> &mut [Fighter] {
        &mut self.projected_fighters
    }

    fn projected_fits_mut(&mut self) -> &mut [ProjectedFit] {
        &mut self.projected_fits
    }

    fn calculate_modified_attributes(&mut self) -> Result<()> {
        let multiplier = self.velocity_multiplier();
        let id = self.id;
        let Some(ship) = self.ship.as_mut() else {
            return Ok(());
        };

        let velocity = ship.base_max_velocity * multiplier;
        if !velocity.is_finite() {
            return Err(Error::Recalculation {
                fit: id,
                message: format!("{MAX_VELOCITY} evaluated to {velocity}"),
            });
        }
        ship.set_modified_attr(MAX_VELOCITY, velocity);
        Ok(())
    }
}
