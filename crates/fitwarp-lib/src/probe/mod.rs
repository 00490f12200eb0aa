//! Clean subwarp-speed measurement.
//!
//! A fit's clean subwarp speed is its max velocity with every dynamic
//! speed effect switched off: active propulsion, mass entanglement and
//! cloaking modules, plus everything projected onto it. The probe measures it
//! by temporarily neutralizing those effects around a recalculation, and
//! caches the result per fit.

pub mod cache;
pub mod snapshot;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::fit::{Fit, FitId, MAX_VELOCITY};

pub use cache::CleanSpeedCache;
pub use snapshot::{EffectCategory, NeutralizedFit, SavedState};

/// Measures and caches clean subwarp speed per fit.
#[derive(Debug, Clone, Default)]
pub struct CleanSubwarpSpeedProbe {
    cache: CleanSpeedCache,
}

impl CleanSubwarpSpeedProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache(&self) -> &CleanSpeedCache {
        &self.cache
    }

    /// Forget the measurement for one fit so the next call re-measures it.
    pub fn invalidate(&mut self, fit: FitId) -> Option<f64> {
        self.cache.invalidate(fit)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Return the fit's clean subwarp speed in m/s.
    ///
    /// Cached fits return immediately without touching the fit. Otherwise the
    /// fit is recalculated twice: once with speed effects neutralized to take
    /// the measurement, and once after every entity has been restored so its
    /// live attributes match its real configuration again. Restoration
    /// happens on every path, including a failed recalculation.
    ///
    /// # Errors
    /// - [`Error::Recalculation`] (or whatever the fit reports) if either
    ///   recalculation fails
    /// - [`Error::MissingShip`] / [`Error::MissingAttribute`] if the
    ///   measurement cannot be read
    pub fn clean_subwarp_speed<F: Fit + ?Sized>(&mut self, fit: &mut F) -> Result<f64> {
        let fit_id = fit.id();
        if let Some(speed) = self.cache.get(fit_id) {
            debug!(fit = %fit_id, speed, "clean subwarp speed cache hit");
            return Ok(speed);
        }

        let measured = measure_neutralized(fit);
        if let Ok(speed) = &measured {
            self.cache.insert(fit_id, *speed);
        }

        let resync = fit.calculate_modified_attributes();
        match measured {
            Ok(speed) => {
                resync?;
                debug!(fit = %fit_id, speed, "measured clean subwarp speed");
                Ok(speed)
            }
            Err(err) => {
                if let Err(resync_err) = resync {
                    warn!(
                        fit = %fit_id,
                        error = %resync_err,
                        "failed to recalculate restored fit after probe failure"
                    );
                }
                Err(err)
            }
        }
    }
}

/// Neutralize, recalculate, and read max velocity. The guard restores the
/// fit when this returns.
fn measure_neutralized<F: Fit + ?Sized>(fit: &mut F) -> Result<f64> {
    let fit_id = fit.id();
    let mut neutralized = NeutralizedFit::engage(fit);
    debug!(
        fit = %fit_id,
        neutralized = neutralized.saved().len(),
        "neutralized speed effects"
    );

    neutralized.fit_mut().calculate_modified_attributes()?;

    let ship = neutralized
        .fit()
        .ship()
        .ok_or(Error::MissingShip { fit: fit_id })?;
    ship.modified_attr(MAX_VELOCITY)
        .ok_or_else(|| Error::MissingAttribute {
            fit: fit_id,
            attribute: MAX_VELOCITY.to_string(),
        })
}
