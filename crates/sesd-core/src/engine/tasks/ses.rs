//! SAS-to-SES erosion: re-opens the occupied volume to a depth of one probe
//! radius around every solvent voxel that touches it.
//!
//! The pass runs in two phases. Phase one collects the contact seeds
//! (solvent voxels with at least one occupied neighbor) from the grid as
//! the rasterizer left it, then carves [`label::CARVED`] into every
//! occupied voxel strictly within one probe radius of a seed. Phase two
//! remaps the carve marker to [`label::SURFACE`]. Because the seeds come
//! from a pre-carve snapshot, the carved volume is exactly the one the
//! sequential algorithm produces.

use crate::core::models::grid::{label, GridShape};
use crate::engine::context::Context;
use crate::engine::progress::Progress;
use crate::engine::utils::neighbors;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[instrument(skip_all, name = "ses_task")]
pub fn run(labels: &mut [i32], ctx: &Context) {
    ctx.reporter.report(Progress::StageStart {
        name: "SES erosion",
    });

    let shape = ctx.shape;
    let reach = ctx.probe_extent();

    let seeds = contact_seeds(labels, &shape);
    debug!(seeds = seeds.len(), "Collected SAS contact seeds.");

    // Bucket seeds by their x coordinate so each slab only visits seeds
    // whose carve ball can reach it.
    let mut seeds_by_slab: Vec<Vec<(usize, usize)>> = vec![Vec::new(); shape.nx];
    for (i, j, k) in seeds {
        seeds_by_slab[i].push((j, k));
    }

    let plane = shape.plane();

    #[cfg(not(feature = "parallel"))]
    let slabs = labels.chunks_mut(plane);

    #[cfg(feature = "parallel")]
    let slabs = labels.par_chunks_mut(plane);

    slabs.enumerate().for_each(|(i, slab)| {
        // The zero slab is never carved, matching the exclusive lower
        // bound of the in-grid guard on every axis.
        if i > 0 {
            carve_slab(i, slab, &seeds_by_slab, reach, &shape);
        }
    });

    remap_carved(labels);

    ctx.reporter.report(Progress::StageFinish);
}

/// Solvent voxels in contact with the occupied volume.
fn contact_seeds(labels: &[i32], shape: &GridShape) -> Vec<(usize, usize, usize)> {
    #[cfg(not(feature = "parallel"))]
    let indices = 0..shape.len();

    #[cfg(feature = "parallel")]
    let indices = (0..shape.len()).into_par_iter();

    indices
        .filter_map(|idx| {
            if labels[idx] != label::SURFACE {
                return None;
            }
            let (i, j, k) = shape.delinear(idx);
            neighbors::any_neighbor(labels, shape, i, j, k, |l| l == label::INTERIOR)
                .then_some((i, j, k))
        })
        .collect()
}

/// Carves the probe ball of every nearby seed into the y-z plane at `i`.
fn carve_slab(
    i: usize,
    slab: &mut [i32],
    seeds_by_slab: &[Vec<(usize, usize)>],
    reach: f64,
    shape: &GridShape,
) {
    let limit = reach.ceil() as i64;
    let r2 = reach * reach;

    let si_lo = (i as i64 - limit).max(0) as usize;
    let si_hi = ((i as i64 + limit).min(shape.nx as i64 - 1)) as usize;

    for si in si_lo..=si_hi {
        let dx2 = (i as f64 - si as f64).powi(2);
        if dx2 >= r2 {
            continue;
        }
        for &(sj, sk) in &seeds_by_slab[si] {
            let j_lo = (sj as i64 - limit).max(1) as usize;
            let j_hi = ((sj as i64 + limit).min(shape.ny as i64 - 1)) as usize;
            let k_lo = (sk as i64 - limit).max(1) as usize;
            let k_hi = ((sk as i64 + limit).min(shape.nz as i64 - 1)) as usize;

            for j in j_lo..=j_hi {
                let dy2 = (j as f64 - sj as f64).powi(2);
                if dx2 + dy2 >= r2 {
                    continue;
                }
                let row = shape.nz * j;
                for k in k_lo..=k_hi {
                    let dz2 = (k as f64 - sk as f64).powi(2);
                    if dx2 + dy2 + dz2 < r2 && slab[row + k] == label::INTERIOR {
                        slab[row + k] = label::CARVED;
                    }
                }
            }
        }
    }
}

fn remap_carved(labels: &mut [i32]) {
    #[cfg(not(feature = "parallel"))]
    let voxels = labels.iter_mut();

    #[cfg(feature = "parallel")]
    let voxels = labels.par_iter_mut();

    voxels.for_each(|l| {
        if *l == label::CARVED {
            *l = label::SURFACE;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::utils::geometry::{GridFrame, TwoAxisRotation};
    use crate::engine::progress::ProgressReporter;
    use crate::engine::tasks::rasterize;
    use nalgebra::Point3;

    const STEP: f64 = 1.0;
    const PROBE: f64 = 1.4;

    fn sas_grid(shape: GridShape, atoms: &[Atom]) -> Vec<i32> {
        let frame = GridFrame::new(Point3::origin(), TwoAxisRotation::identity(), STEP).unwrap();
        let reporter = ProgressReporter::default();
        let ctx = Context::new(shape, &frame, atoms, PROBE, &reporter);

        let mut labels = vec![label::SURFACE; shape.len()];
        rasterize::run(&mut labels, &ctx);
        labels
    }

    fn eroded(shape: GridShape, atoms: &[Atom]) -> Vec<i32> {
        let frame = GridFrame::new(Point3::origin(), TwoAxisRotation::identity(), STEP).unwrap();
        let reporter = ProgressReporter::default();
        let ctx = Context::new(shape, &frame, atoms, PROBE, &reporter);

        let mut labels = sas_grid(shape, atoms);
        run(&mut labels, &ctx);
        labels
    }

    #[test]
    fn erosion_leaves_no_transient_marker() {
        let shape = GridShape::new(11, 11, 11);
        let atoms = [Atom::new(Point3::new(5.0, 5.0, 5.0), 1.5)];
        let labels = eroded(shape, &atoms);

        assert!(labels
            .iter()
            .all(|&l| l == label::SURFACE || l == label::INTERIOR));
    }

    #[test]
    fn erosion_only_shrinks_the_occupied_volume() {
        let shape = GridShape::new(11, 11, 11);
        let atoms = [Atom::new(Point3::new(5.0, 5.0, 5.0), 1.5)];
        let sas = sas_grid(shape, &atoms);
        let ses = eroded(shape, &atoms);

        for idx in 0..shape.len() {
            if ses[idx] == label::INTERIOR {
                assert_eq!(sas[idx], label::INTERIOR);
            }
        }
    }

    #[test]
    fn erosion_never_reaches_the_van_der_waals_core() {
        let shape = GridShape::new(11, 11, 11);
        let atoms = [Atom::new(Point3::new(5.0, 5.0, 5.0), 1.5)];
        let ses = eroded(shape, &atoms);

        // Seeds sit at distance >= 2.9 voxels from the center and carve
        // strictly less than 1.4 voxels deep, so nothing below 1.5 voxels
        // can be re-opened.
        for idx in 0..shape.len() {
            let (i, j, k) = shape.delinear(idx);
            let d2 = (i as f64 - 5.0).powi(2)
                + (j as f64 - 5.0).powi(2)
                + (k as f64 - 5.0).powi(2);
            if d2 < 1.5 * 1.5 {
                assert_eq!(ses[idx], label::INTERIOR, "voxel ({i}, {j}, {k})");
            }
        }
    }

    #[test]
    fn contact_shell_is_reopened() {
        let shape = GridShape::new(11, 11, 11);
        let atoms = [Atom::new(Point3::new(5.0, 5.0, 5.0), 1.5)];
        let ses = eroded(shape, &atoms);

        // (5, 5, 7) sits 2 voxels from the center: occupied in the SAS,
        // one voxel away from the seed at (5, 5, 8).
        assert_eq!(ses[shape.linear(5, 5, 7)], label::SURFACE);
    }
}
