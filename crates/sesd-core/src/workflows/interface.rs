use crate::core::models::atom::Atom;
use crate::core::models::grid::GridShape;
use crate::core::utils::geometry::{GridFrame, TwoAxisRotation};
use crate::engine::config::InterfaceConfig;
use crate::engine::context::Context;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::tasks;
use crate::engine::utils::pool;
use nalgebra::Point3;
use tracing::instrument;

/// Returns the residue identifiers of the solvent-exposed atoms, reading a
/// grid previously produced by [`crate::workflows::surface::run`] with the
/// same geometry. The grid is not mutated.
///
/// `residues` supplies one opaque identifier per atom; the result keeps
/// ascending atom order and suppresses duplicates.
#[instrument(skip_all, name = "interface_workflow")]
pub fn run(
    labels: &[i32],
    shape: GridShape,
    residues: &[String],
    atoms: &[f64],
    reference: &[f64; 3],
    sincos: &[f64; 4],
    config: &InterfaceConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<String>, EngineError> {
    super::check_inputs(labels.len(), shape, config.probe)?;
    let atoms = Atom::from_flat(atoms).ok_or(EngineError::MalformedAtoms { len: atoms.len() })?;
    if residues.len() != atoms.len() {
        return Err(EngineError::ResidueCountMismatch {
            residues: residues.len(),
            atoms: atoms.len(),
        });
    }

    let rotation = TwoAxisRotation::from_sincos(sincos)?;
    let origin = Point3::new(reference[0], reference[1], reference[2]);
    let frame = GridFrame::new(origin, rotation, config.step)?;

    let ctx = Context::new(shape, &frame, &atoms, config.probe, reporter);
    pool::with_pool(config.threads, || {
        tasks::interface::run(labels, &ctx, residues)
    })?
}
