use crate::core::models::atom::Atom;
use crate::core::models::grid::GridShape;
use crate::core::utils::geometry::{GridFrame, GridSphere};
use crate::engine::progress::ProgressReporter;

/// Read-only inputs shared by every pass of one pipeline run.
pub struct Context<'a> {
    pub shape: GridShape,
    pub frame: &'a GridFrame,
    pub atoms: &'a [Atom],
    pub probe: f64,
    pub reporter: &'a ProgressReporter<'a>,
}

impl<'a> Context<'a> {
    pub fn new(
        shape: GridShape,
        frame: &'a GridFrame,
        atoms: &'a [Atom],
        probe: f64,
        reporter: &'a ProgressReporter<'a>,
    ) -> Self {
        Self {
            shape,
            frame,
            atoms,
            probe,
            reporter,
        }
    }

    /// All atoms projected into grid coordinates with probe-inflated radii.
    pub fn grid_spheres(&self) -> Vec<GridSphere> {
        self.atoms
            .iter()
            .map(|atom| self.frame.project_sphere(atom, self.probe))
            .collect()
    }

    /// Probe radius in voxel units.
    pub fn probe_extent(&self) -> f64 {
        self.probe / self.frame.step()
    }
}
