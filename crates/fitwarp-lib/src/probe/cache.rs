//! Per-fit cache of measured clean subwarp speeds.

use std::collections::HashMap;

use crate::fit::FitId;

/// Measured clean subwarp speeds keyed by fit.
///
/// Entries are never evicted automatically. Whoever changes a fit's
/// speed-affecting loadout (installing a different propulsion module, for
/// example) must call [`CleanSpeedCache::invalidate`] for that fit.
#[derive(Debug, Clone, Default)]
pub struct CleanSpeedCache {
    entries: HashMap<FitId, f64>,
}

impl CleanSpeedCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, fit: FitId) -> Option<f64> {
        self.entries.get(&fit).copied()
    }

    pub fn contains(&self, fit: FitId) -> bool {
        self.entries.contains_key(&fit)
    }

    pub fn insert(&mut self, fit: FitId, speed: f64) {
        self.entries.insert(fit, speed);
    }

    /// Drop the cached speed for `fit`, returning it if present.
    pub fn invalidate(&mut self, fit: FitId) -> Option<f64> {
        self.entries.remove(&fit)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
