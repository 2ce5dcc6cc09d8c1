use crate::core::models::atom::Atom;
use crate::core::models::grid::{label, GridShape};
use crate::core::utils::geometry::{GridFrame, TwoAxisRotation};
use crate::engine::config::{SurfaceConfig, SurfaceMode};
use crate::engine::context::Context;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::tasks;
use crate::engine::utils::pool;
use nalgebra::Point3;
use tracing::{info, instrument};

/// Rewrites `labels` into the final surface labeling of the atom set.
///
/// `atoms` is the flat `[x, y, z, radius]` array, `reference` the world
/// position of voxel `(0, 0, 0)` and `sincos` the `[sin a, cos a, sin b,
/// cos b]` values of the grid rotation. On success every voxel carries one
/// of [`label::SOLVENT`], [`label::INTERIOR`] or [`label::SURFACE`].
#[instrument(skip_all, name = "surface_workflow")]
pub fn run(
    labels: &mut [i32],
    shape: GridShape,
    atoms: &[f64],
    reference: &[f64; 3],
    sincos: &[f64; 4],
    config: &SurfaceConfig,
    reporter: &ProgressReporter,
) -> Result<(), EngineError> {
    super::check_inputs(labels.len(), shape, config.probe)?;
    let atoms = Atom::from_flat(atoms).ok_or(EngineError::MalformedAtoms { len: atoms.len() })?;

    let rotation = TwoAxisRotation::from_sincos(sincos)?;
    let origin = Point3::new(reference[0], reference[1], reference[2]);
    let frame = GridFrame::new(origin, rotation, config.step)?;

    let ctx = Context::new(shape, &frame, &atoms, config.probe, reporter);
    info!(
        mode = ?config.mode,
        natoms = atoms.len(),
        step = config.step,
        probe = config.probe,
        "Starting surface pipeline."
    );

    pool::with_pool(config.threads, || {
        labels.fill(label::SURFACE);
        tasks::rasterize::run(labels, &ctx);
        if config.mode == SurfaceMode::Ses {
            tasks::ses::run(labels, &ctx);
        }
        tasks::surface::run(labels, &ctx);
        tasks::cluster::run(labels, &ctx);
        tasks::noise::run(labels, &ctx);
    })
}
