//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use fitwarp_lib::fit::{Drone, Fighter, Module, ProjectedFit, Ship};
use fitwarp_lib::{Error, Fit, FitDocument, FitId, Result};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load a fit document from the fixtures directory.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> FitDocument {
    let path = fixtures_dir().join(name);
    FitDocument::from_path(&path).expect("fixture fit should load")
}

/// Fit wrapper that counts recalculations and can be told to fail them.
#[allow(dead_code)]
pub struct RecordingFit {
    pub inner: FitDocument,
    pub recalculations: usize,
    /// Recalculation call numbers (1-based) that should fail.
    pub fail_on: Vec<usize>,
    /// Module states observed during each recalculation.
    pub observed_module_states: Vec<Vec<fitwarp_lib::fit::ModuleState>>,
}

#[allow(dead_code)]
impl RecordingFit {
    pub fn new(inner: FitDocument) -> Self {
        Self {
            inner,
            recalculations: 0,
            fail_on: Vec::new(),
            observed_module_states: Vec::new(),
        }
    }

    pub fn failing_on(mut self, calls: &[usize]) -> Self {
        self.fail_on = calls.to_vec();
        self
    }
}

impl Fit for RecordingFit {
    fn id(&self) -> FitId {
        self.inner.id()
    }

    fn warp_speed(&self) -> f64 {
        self.inner.warp_speed()
    }

    fn max_warp_distance(&self) -> f64 {
        self.inner.max_warp_distance()
    }

    fn ship(&self) -> Option<&Ship> {
        self.inner.ship()
    }

    fn modules_mut(&mut self) -> &mut [Module] {
        self.inner.modules_mut()
    }

    fn projected_modules_mut(&mut self) -> &mut [Module] {
        self.inner.projected_modules_mut()
    }

    fn projected_drones_mut(&mut self) -> &mut [Drone] {
        self.inner.projected_drones_mut()
    }

    fn projected_fighters_mut(&mut self) -> &mut [Fighter] {
        self.inner.projected_fighters_mut()
    }

    fn projected_fits_mut(&mut self) -> &mut [ProjectedFit] {
        self.inner.projected_fits_mut()
    }

    fn calculate_modified_attributes(&mut self) -> Result<()> {
        self.recalculations += 1;
        self.observed_module_states
            .push(self.inner.modules.iter().map(|m| m.state).collect());
        if self.fail_on.contains(&self.recalculations) {
            return Err(Error::Recalculation {
                fit: self.inner.id,
                message: format!("injected failure on call {}", self.recalculations),
            });
        }
        self.inner.calculate_modified_attributes()
    }
}
