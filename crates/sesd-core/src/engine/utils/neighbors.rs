//! Scans over the 3x3x3 cube around a voxel, clipped to the grid.

use crate::core::models::grid::GridShape;
use itertools::iproduct;

/// Returns true when any voxel of the 3x3x3 cube around `(i, j, k)` that
/// lies inside the grid satisfies `pred`. The cube includes the center
/// voxel; every caller queries a label the center cannot hold, so this
/// matches a 26-neighborhood test.
#[inline]
pub fn any_neighbor(
    labels: &[i32],
    shape: &GridShape,
    i: usize,
    j: usize,
    k: usize,
    pred: impl Fn(i32) -> bool,
) -> bool {
    let (i_lo, i_hi) = (i.saturating_sub(1), (i + 1).min(shape.nx - 1));
    let (j_lo, j_hi) = (j.saturating_sub(1), (j + 1).min(shape.ny - 1));
    let (k_lo, k_hi) = (k.saturating_sub(1), (k + 1).min(shape.nz - 1));

    for (x, y, z) in iproduct!(i_lo..=i_hi, j_lo..=j_hi, k_lo..=k_hi) {
        if pred(labels[shape.linear(x, y, z)]) {
            return true;
        }
    }
    false
}
