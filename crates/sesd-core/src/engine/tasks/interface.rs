//! Interface-residue extraction: replays the rasterization geometry
//! read-only against the final surface labeling.

use crate::core::models::grid::{label, GridShape};
use crate::core::utils::geometry::GridSphere;
use crate::engine::context::Context;
use crate::engine::error::EngineError;
use crate::engine::progress::Progress;
use crate::engine::utils::span;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Collects the residue identifiers of every atom whose inflated sphere
/// touches a surface voxel, in ascending atom order and without duplicates.
///
/// The distance test is inclusive (`<= H`), unlike the strict rasterization
/// test: a surface voxel sits at the rim of the sphere that produced it,
/// and the erosion pass re-opens voxels strictly inside it.
#[instrument(skip_all, name = "interface_task")]
pub fn run(
    labels: &[i32],
    ctx: &Context,
    residues: &[String],
) -> Result<Vec<String>, EngineError> {
    info!(natoms = ctx.atoms.len(), "Retrieving interface residues.");
    ctx.reporter.report(Progress::StageStart {
        name: "Interface extraction",
    });

    let spheres = ctx.grid_spheres();
    let shape = ctx.shape;

    #[cfg(not(feature = "parallel"))]
    let sphere_iter = spheres.iter();

    #[cfg(feature = "parallel")]
    let sphere_iter = spheres.par_iter();

    let hits: Vec<bool> = sphere_iter
        .map(|sphere| touches_surface(labels, &shape, sphere))
        .collect();

    let mut found = Vec::new();
    found.try_reserve_exact(hits.iter().filter(|&&hit| hit).count())?;
    for (atom, &hit) in hits.iter().enumerate() {
        if hit {
            found.push(residues[atom].clone());
        }
    }

    info!(residues = found.len(), "Interface extraction complete.");
    ctx.reporter.report(Progress::StageFinish);
    Ok(found)
}

/// Whether any surface voxel lies within the sphere, bounds excluding the
/// zero slab on every axis.
fn touches_surface(labels: &[i32], shape: &GridShape, sphere: &GridSphere) -> bool {
    let Some((i_lo, i_hi)) = span::clamped(sphere.center.x, sphere.radius, shape.nx, 1) else {
        return false;
    };
    let Some((j_lo, j_hi)) = span::clamped(sphere.center.y, sphere.radius, shape.ny, 1) else {
        return false;
    };
    let Some((k_lo, k_hi)) = span::clamped(sphere.center.z, sphere.radius, shape.nz, 1) else {
        return false;
    };

    let r2 = sphere.radius * sphere.radius;
    for i in i_lo..=i_hi {
        let dx2 = (i as f64 - sphere.center.x).powi(2);
        for j in j_lo..=j_hi {
            let dy2 = (j as f64 - sphere.center.y).powi(2);
            let row = shape.nz * (j + shape.ny * i);
            for k in k_lo..=k_hi {
                if labels[row + k] == label::SURFACE {
                    let dz2 = (k as f64 - sphere.center.z).powi(2);
                    if dx2 + dy2 + dz2 <= r2 {
                        return true;
                    }
                }
            }
        }
    }
    false
}
