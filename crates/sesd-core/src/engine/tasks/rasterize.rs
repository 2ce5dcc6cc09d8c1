//! Sphere rasterization: marks every voxel inside an atom's probe-inflated
//! sphere as [`label::INTERIOR`].

use crate::core::models::grid::{label, GridShape};
use crate::core::utils::geometry::GridSphere;
use crate::engine::context::Context;
use crate::engine::progress::Progress;
use crate::engine::utils::span;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rasterizes all atoms into a grid seeded with [`label::SURFACE`].
///
/// Work is partitioned over x-slabs, so every write lands in a slab owned
/// exclusively by one worker; the resulting labeling is identical to a
/// serial atom-by-atom fill.
#[instrument(skip_all, name = "rasterize_task")]
pub fn run(labels: &mut [i32], ctx: &Context) {
    info!(natoms = ctx.atoms.len(), "Rasterizing atom spheres.");
    ctx.reporter.report(Progress::StageStart {
        name: "Rasterization",
    });

    let spheres = ctx.grid_spheres();
    let shape = ctx.shape;
    let plane = shape.plane();

    #[cfg(not(feature = "parallel"))]
    let slabs = labels.chunks_mut(plane);

    #[cfg(feature = "parallel")]
    let slabs = labels.par_chunks_mut(plane);

    slabs
        .enumerate()
        .for_each(|(i, slab)| mark_slab(i, slab, &spheres, &shape));

    ctx.reporter.report(Progress::StageFinish);
}

/// Marks the intersection of every sphere with the y-z plane at `i`.
fn mark_slab(i: usize, slab: &mut [i32], spheres: &[GridSphere], shape: &GridShape) {
    for sphere in spheres {
        let Some((i_lo, i_hi)) = span::clamped(sphere.center.x, sphere.radius, shape.nx, 0)
        else {
            continue;
        };
        if i < i_lo || i > i_hi {
            continue;
        }
        let Some((j_lo, j_hi)) = span::clamped(sphere.center.y, sphere.radius, shape.ny, 0)
        else {
            continue;
        };
        let Some((k_lo, k_hi)) = span::clamped(sphere.center.z, sphere.radius, shape.nz, 0)
        else {
            continue;
        };

        let r2 = sphere.radius * sphere.radius;
        let dx2 = (i as f64 - sphere.center.x).powi(2);
        for j in j_lo..=j_hi {
            let dy2 = (j as f64 - sphere.center.y).powi(2);
            if dx2 + dy2 >= r2 {
                continue;
            }
            let row = shape.nz * j;
            for k in k_lo..=k_hi {
                let dz2 = (k as f64 - sphere.center.z).powi(2);
                if dx2 + dy2 + dz2 < r2 {
                    slab[row + k] = label::INTERIOR;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::utils::geometry::{GridFrame, TwoAxisRotation};
    use crate::engine::progress::ProgressReporter;
    use nalgebra::Point3;

    fn rasterized(shape: GridShape, atoms: &[Atom], step: f64, probe: f64) -> Vec<i32> {
        let frame = GridFrame::new(Point3::origin(), TwoAxisRotation::identity(), step).unwrap();
        let reporter = ProgressReporter::default();
        let ctx = Context::new(shape, &frame, atoms, probe, &reporter);

        let mut labels = vec![label::SURFACE; shape.len()];
        run(&mut labels, &ctx);
        labels
    }

    #[test]
    fn single_sphere_matches_reference_classification() {
        let shape = GridShape::new(11, 11, 11);
        let atoms = [Atom::new(Point3::new(5.0, 5.0, 5.0), 1.5)];
        let labels = rasterized(shape, &atoms, 1.0, 1.4);

        // Inflated radius 2.9 voxels around (5, 5, 5), strict inequality.
        for idx in 0..shape.len() {
            let (i, j, k) = shape.delinear(idx);
            let d2 = (i as f64 - 5.0).powi(2)
                + (j as f64 - 5.0).powi(2)
                + (k as f64 - 5.0).powi(2);
            let expected = if d2 < 2.9 * 2.9 {
                label::INTERIOR
            } else {
                label::SURFACE
            };
            assert_eq!(labels[idx], expected, "voxel ({i}, {j}, {k})");
        }
    }

    #[test]
    fn sphere_outside_the_grid_marks_nothing() {
        let shape = GridShape::new(11, 11, 11);
        let atoms = [Atom::new(Point3::new(50.0, 50.0, 50.0), 1.5)];
        let labels = rasterized(shape, &atoms, 1.0, 1.4);

        assert!(labels.iter().all(|&l| l == label::SURFACE));
    }

    #[test]
    fn sphere_clipped_by_the_boundary_marks_the_overlap() {
        let shape = GridShape::new(8, 8, 8);
        let atoms = [Atom::new(Point3::new(0.0, 4.0, 4.0), 1.0)];
        let labels = rasterized(shape, &atoms, 1.0, 0.0);

        assert_eq!(labels[shape.linear(0, 4, 4)], label::INTERIOR);
        assert_eq!(labels[shape.linear(2, 4, 4)], label::SURFACE);
    }

    #[test]
    fn step_scales_the_inflated_radius() {
        // 0.5 A voxels double every radius in grid units.
        let shape = GridShape::new(24, 24, 24);
        let atoms = [Atom::new(Point3::new(6.0, 6.0, 6.0), 1.5)];
        let labels = rasterized(shape, &atoms, 0.5, 1.4);

        // Center maps to voxel (12, 12, 12); 2.9 A covers 5.8 voxels.
        assert_eq!(labels[shape.linear(12, 12, 12)], label::INTERIOR);
        assert_eq!(labels[shape.linear(12, 12, 17)], label::INTERIOR);
        assert_eq!(labels[shape.linear(12, 12, 18)], label::SURFACE);
    }
}
