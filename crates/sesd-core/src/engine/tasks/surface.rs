//! Surface extraction: splits the solvent into surface voxels (in contact
//! with the occupied volume) and deep solvent.

use crate::core::models::grid::{label, GridShape};
use crate::engine::context::Context;
use crate::engine::progress::Progress;
use crate::engine::utils::neighbors;
use tracing::instrument;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Relabels every [`label::SURFACE`] voxel: it stays `SURFACE` when some
/// 26-neighbor is [`label::INTERIOR`], and becomes [`label::SOLVENT`]
/// otherwise. Classification reads a snapshot of the incoming grid, so the
/// result is independent of traversal order.
#[instrument(skip_all, name = "surface_task")]
pub fn run(labels: &mut [i32], ctx: &Context) {
    ctx.reporter.report(Progress::StageStart {
        name: "Surface extraction",
    });

    let shape = ctx.shape;
    let next = classify(labels, &shape);
    labels.copy_from_slice(&next);

    ctx.reporter.report(Progress::StageFinish);
}

fn classify(labels: &[i32], shape: &GridShape) -> Vec<i32> {
    #[cfg(not(feature = "parallel"))]
    let indices = 0..shape.len();

    #[cfg(feature = "parallel")]
    let indices = (0..shape.len()).into_par_iter();

    indices
        .map(|idx| {
            let l = labels[idx];
            if l != label::SURFACE {
                return l;
            }
            let (i, j, k) = shape.delinear(idx);
            if neighbors::any_neighbor(labels, shape, i, j, k, |n| n == label::INTERIOR) {
                label::SURFACE
            } else {
                label::SOLVENT
            }
        })
        .collect()
}
