//! Connected-component clustering of surface voxels.
//!
//! The outer surface of the biomolecule is the first component the i-major
//! scan encounters; every later component is an enclosed pocket and is
//! discarded. The flood fill uses an explicit work queue, so component size
//! is bounded by memory rather than stack depth.

use crate::core::models::grid::{label, GridShape};
use crate::engine::context::Context;
use crate::engine::progress::Progress;
use itertools::iproduct;
use std::collections::VecDeque;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// First cluster tag; the scan pre-increments, so the first component found
/// carries `FIRST_TAG + 1`.
const FIRST_TAG: i32 = 1;

/// Tags every 26-connected component of [`label::SURFACE`] voxels, keeps
/// the first one found and discards the rest as enclosed.
///
/// Voxels on the outermost shell are never entered; the shell acts as a
/// sentinel, and shell voxels that reach this pass still labeled `SURFACE`
/// are left for the noise filter. The scan runs serially because the tag
/// counter is a cross-voxel dependency; the final remap is parallel.
#[instrument(skip_all, name = "cluster_task")]
pub fn run(labels: &mut [i32], ctx: &Context) {
    ctx.reporter.report(Progress::StageStart {
        name: "Region clustering",
    });

    let shape = ctx.shape;
    let mut tag = FIRST_TAG;

    for (i, j, k) in iproduct!(0..shape.nx, 0..shape.ny, 0..shape.nz) {
        if labels[shape.linear(i, j, k)] == label::SURFACE {
            tag += 1;
            flood(labels, &shape, (i, j, k), tag);
        }
    }

    if tag > FIRST_TAG {
        remap(labels);
    }

    info!(components = tag - FIRST_TAG, "Surface clustering complete.");
    ctx.reporter.report(Progress::StageFinish);
}

/// Writes `tag` onto every surface voxel 26-reachable from `seed` without
/// crossing the grid shell.
fn flood(labels: &mut [i32], shape: &GridShape, seed: (usize, usize, usize), tag: i32) {
    let (i, j, k) = seed;
    if shape.on_shell(i, j, k) {
        return;
    }

    labels[shape.linear(i, j, k)] = tag;
    let mut queue = VecDeque::new();
    queue.push_back(seed);

    while let Some((ci, cj, ck)) = queue.pop_front() {
        // Off-shell invariant of the queue keeps every index in bounds.
        for (x, y, z) in iproduct!(ci - 1..=ci + 1, cj - 1..=cj + 1, ck - 1..=ck + 1) {
            if shape.on_shell(x, y, z) {
                continue;
            }
            let idx = shape.linear(x, y, z);
            if labels[idx] == label::SURFACE {
                labels[idx] = tag;
                queue.push_back((x, y, z));
            }
        }
    }
}

/// The first component becomes the surface; every later one is erased.
fn remap(labels: &mut [i32]) {
    #[cfg(not(feature = "parallel"))]
    let voxels = labels.iter_mut();

    #[cfg(feature = "parallel")]
    let voxels = labels.par_iter_mut();

    voxels.for_each(|l| {
        if *l == FIRST_TAG + 1 {
            *l = label::SURFACE;
        } else if *l > FIRST_TAG + 1 {
            *l = label::INTERIOR;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::geometry::{GridFrame, TwoAxisRotation};
    use crate::engine::progress::ProgressReporter;
    use nalgebra::Point3;

    fn clustered(shape: GridShape, labels: &mut [i32]) {
        let frame = GridFrame::new(Point3::origin(), TwoAxisRotation::identity(), 1.0).unwrap();
        let reporter = ProgressReporter::default();
        let ctx = Context::new(shape, &frame, &[], 1.4, &reporter);
        run(labels, &ctx);
    }

    #[test]
    fn first_component_is_kept_and_later_ones_erased() {
        let shape = GridShape::new(7, 7, 7);
        let mut labels = vec![label::SOLVENT; shape.len()];
        labels[shape.linear(1, 1, 1)] = label::SURFACE;
        labels[shape.linear(1, 1, 2)] = label::SURFACE;
        labels[shape.linear(4, 4, 4)] = label::SURFACE;

        clustered(shape, &mut labels);

        assert_eq!(labels[shape.linear(1, 1, 1)], label::SURFACE);
        assert_eq!(labels[shape.linear(1, 1, 2)], label::SURFACE);
        assert_eq!(labels[shape.linear(4, 4, 4)], label::INTERIOR);
    }

    #[test]
    fn diagonal_voxels_belong_to_one_component() {
        let shape = GridShape::new(6, 6, 6);
        let mut labels = vec![label::SOLVENT; shape.len()];
        labels[shape.linear(1, 1, 1)] = label::SURFACE;
        labels[shape.linear(2, 2, 2)] = label::SURFACE;
        labels[shape.linear(3, 3, 3)] = label::SURFACE;

        clustered(shape, &mut labels);

        assert_eq!(labels[shape.linear(1, 1, 1)], label::SURFACE);
        assert_eq!(labels[shape.linear(2, 2, 2)], label::SURFACE);
        assert_eq!(labels[shape.linear(3, 3, 3)], label::SURFACE);
    }

    #[test]
    fn enclosed_pocket_surface_is_erased() {
        // A cubic shell of surface voxels with a lone pocket voxel at its
        // center, separated by an occupied wall.
        let shape = GridShape::new(9, 9, 9);
        let mut labels = vec![label::SOLVENT; shape.len()];
        for (i, j, k) in iproduct!(2..=6usize, 2..=6usize, 2..=6usize) {
            let chebyshev = [i, j, k]
                .iter()
                .map(|&c| (c as i64 - 4).abs())
                .max()
                .unwrap();
            match chebyshev {
                2 => labels[shape.linear(i, j, k)] = label::SURFACE,
                1 => labels[shape.linear(i, j, k)] = label::INTERIOR,
                _ => labels[shape.linear(i, j, k)] = label::SURFACE,
            }
        }

        clustered(shape, &mut labels);

        // Outer shell survives, pocket center is erased.
        assert_eq!(labels[shape.linear(2, 2, 2)], label::SURFACE);
        assert_eq!(labels[shape.linear(6, 4, 4)], label::SURFACE);
        assert_eq!(labels[shape.linear(4, 4, 4)], label::INTERIOR);
    }

    #[test]
    fn shell_voxels_are_never_entered() {
        let shape = GridShape::new(7, 7, 7);
        let mut labels = vec![label::SOLVENT; shape.len()];
        labels[shape.linear(0, 3, 3)] = label::SURFACE;
        labels[shape.linear(3, 3, 3)] = label::SURFACE;

        clustered(shape, &mut labels);

        // The shell seed consumes the first tag but is never filled, so the
        // interior component is treated as enclosed. No shell voxel ever
        // carries a tag.
        assert_eq!(labels[shape.linear(0, 3, 3)], label::SURFACE);
        assert_eq!(labels[shape.linear(3, 3, 3)], label::INTERIOR);
    }

    #[test]
    fn grid_without_surface_voxels_is_untouched() {
        let shape = GridShape::new(5, 5, 5);
        let mut labels = vec![label::SOLVENT; shape.len()];
        labels[shape.linear(2, 2, 2)] = label::INTERIOR;
        let before = labels.clone();

        clustered(shape, &mut labels);

        assert_eq!(labels, before);
    }
}
