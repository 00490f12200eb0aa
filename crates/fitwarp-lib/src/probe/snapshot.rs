//! Neutralization of speed-altering effects with restore on drop.

use crate::fit::{Fit, ModuleState};

/// Kinds of entities whose activation state can alter subwarp speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectCategory {
    /// Local propulsion, mass entanglement and cloaking modules.
    Modules,
    /// Projection links from other fits.
    ProjectionLinks,
    /// Projected modules, excluding system-wide effects.
    ProjectedModules,
    ProjectedDrones,
    ProjectedFighters,
}

impl EffectCategory {
    pub const ALL: [EffectCategory; 5] = [
        EffectCategory::Modules,
        EffectCategory::ProjectionLinks,
        EffectCategory::ProjectedModules,
        EffectCategory::ProjectedDrones,
        EffectCategory::ProjectedFighters,
    ];

    /// Force every affecting entity of this category to its neutral state,
    /// recording the prior value in `saved`.
    fn neutralize<F: Fit + ?Sized>(self, fit: &mut F, saved: &mut Vec<SavedState>) {
        match self {
            EffectCategory::Modules => {
                for (index, module) in fit.modules_mut().iter_mut().enumerate() {
                    let speed_affecting = module
                        .item
                        .as_ref()
                        .is_some_and(|item| item.group.affects_subwarp_speed());
                    if speed_affecting && module.state.is_active() {
                        saved.push(SavedState::Module {
                            index,
                            state: module.state,
                        });
                        module.state = ModuleState::Online;
                    }
                }
            }
            EffectCategory::ProjectionLinks => {
                for (index, projected) in fit.projected_fits_mut().iter_mut().enumerate() {
                    if let Some(info) = projected.projection_info_mut() {
                        if info.active {
                            saved.push(SavedState::ProjectionLink {
                                index,
                                active: info.active,
                            });
                            info.active = false;
                        }
                    }
                }
            }
            EffectCategory::ProjectedModules => {
                for (index, module) in fit.projected_modules_mut().iter_mut().enumerate() {
                    if !module.exclusive_system_effect && module.state.is_active() {
                        saved.push(SavedState::ProjectedModule {
                            index,
                            state: module.state,
                        });
                        module.state = ModuleState::Online;
                    }
                }
            }
            EffectCategory::ProjectedDrones => {
                for (index, drone) in fit.projected_drones_mut().iter_mut().enumerate() {
                    if drone.amount_active > 0 {
                        saved.push(SavedState::ProjectedDrone {
                            index,
                            amount_active: drone.amount_active,
                        });
                        drone.amount_active = 0;
                    }
                }
            }
            EffectCategory::ProjectedFighters => {
                for (index, fighter) in fit.projected_fighters_mut().iter_mut().enumerate() {
                    if fighter.active {
                        saved.push(SavedState::ProjectedFighter {
                            index,
                            active: fighter.active,
                        });
                        fighter.active = false;
                    }
                }
            }
        }
    }
}

/// Pre-neutralization value of one entity, addressed by its position in the
/// category's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedState {
    Module { index: usize, state: ModuleState },
    ProjectionLink { index: usize, active: bool },
    ProjectedModule { index: usize, state: ModuleState },
    ProjectedDrone { index: usize, amount_active: u32 },
    ProjectedFighter { index: usize, active: bool },
}

impl SavedState {
    pub fn category(&self) -> EffectCategory {
        match self {
            SavedState::Module { .. } => EffectCategory::Modules,
            SavedState::ProjectionLink { .. } => EffectCategory::ProjectionLinks,
            SavedState::ProjectedModule { .. } => EffectCategory::ProjectedModules,
            SavedState::ProjectedDrone { .. } => EffectCategory::ProjectedDrones,
            SavedState::ProjectedFighter { .. } => EffectCategory::ProjectedFighters,
        }
    }

    fn restore<F: Fit + ?Sized>(self, fit: &mut F) {
        match self {
            SavedState::Module { index, state } => {
                if let Some(module) = fit.modules_mut().get_mut(index) {
                    module.state = state;
                }
            }
            SavedState::ProjectionLink { index, active } => {
                if let Some(info) = fit
                    .projected_fits_mut()
                    .get_mut(index)
                    .and_then(|projected| projected.projection_info_mut())
                {
                    info.active = active;
                }
            }
            SavedState::ProjectedModule { index, state } => {
                if let Some(module) = fit.projected_modules_mut().get_mut(index) {
                    module.state = state;
                }
            }
            SavedState::ProjectedDrone {
                index,
                amount_active,
            } => {
                if let Some(drone) = fit.projected_drones_mut().get_mut(index) {
                    drone.amount_active = amount_active;
                }
            }
            SavedState::ProjectedFighter { index, active } => {
                if let Some(fighter) = fit.projected_fighters_mut().get_mut(index) {
                    fighter.active = active;
                }
            }
        }
    }
}

/// Exclusive borrow of a fit with every speed-altering effect neutralized.
///
/// Dropping the guard restores each recorded entity, including when the
/// scope is left through `?` or a panic. The fit's derived attributes are
/// not recalculated on restore.
pub struct NeutralizedFit<'a, F: Fit + ?Sized> {
    fit: &'a mut F,
    saved: Vec<SavedState>,
}

impl<'a, F: Fit + ?Sized> NeutralizedFit<'a, F> {
    /// Neutralize all effect categories of `fit`.
    pub fn engage(fit: &'a mut F) -> Self {
        let mut saved = Vec::new();
        for category in EffectCategory::ALL {
            category.neutralize(&mut *fit, &mut saved);
        }
        Self { fit, saved }
    }

    /// States recorded before neutralization.
    pub fn saved(&self) -> &[SavedState] {
        &self.saved
    }

    pub fn fit(&self) -> &F {
        &*self.fit
    }

    pub fn fit_mut(&mut self) -> &mut F {
        &mut *self.fit
    }
}

impl<F: Fit + ?Sized> Drop for NeutralizedFit<'_, F> {
    fn drop(&mut self) {
        for state in self.saved.drain(..) {
            state.restore(&mut *self.fit);
        }
    }
}
