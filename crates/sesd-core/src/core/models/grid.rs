//! Shape and label alphabet of the caller-allocated voxel grid.
//!
//! The grid is a dense `i32` buffer of exactly `nx * ny * nz` voxels,
//! linearized as `k + nz * (j + ny * i)`; the z axis is stride-1, which
//! every stencil pass relies on for cache behavior.

/// Voxel labels. The same numeric value carries a different meaning at
/// different pipeline stages: `SURFACE` starts out as "unoccupied
/// candidate", means "solvent in contact with the occupied volume" after
/// surface extraction, and finally marks the retained surface component.
/// Each engine pass documents the convention it leaves behind.
pub mod label {
    /// Unoccupied candidate, later the solvent-exposed surface.
    pub const SURFACE: i32 = 1;
    /// Occupied by an inflated atom sphere.
    pub const INTERIOR: i32 = 0;
    /// Deep solvent: free space with no occupied neighbor.
    pub const SOLVENT: i32 = -1;
    /// Transient marker used while eroding the SAS into the SES.
    pub const CARVED: i32 = -2;
}

/// Dimensions of a voxel grid and its linear memory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

impl GridShape {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// Total number of voxels.
    pub fn len(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of voxels in one x-slab (a full y-z plane).
    pub fn plane(&self) -> usize {
        self.ny * self.nz
    }

    /// Linear index of voxel `(i, j, k)`.
    #[inline]
    pub fn linear(&self, i: usize, j: usize, k: usize) -> usize {
        k + self.nz * (j + self.ny * i)
    }

    /// Inverse of [`linear`](Self::linear).
    #[inline]
    pub fn delinear(&self, idx: usize) -> (usize, usize, usize) {
        let k = idx % self.nz;
        let j = (idx / self.nz) % self.ny;
        let i = idx / (self.nz * self.ny);
        (i, j, k)
    }

    /// Whether `(i, j, k)` lies on the outermost shell of the grid. The
    /// shell is reserved as a sentinel: the region clusterer never enters
    /// it.
    #[inline]
    pub fn on_shell(&self, i: usize, j: usize, k: usize) -> bool {
        i == 0
            || j == 0
            || k == 0
            || i == self.nx - 1
            || j == self.ny - 1
            || k == self.nz - 1
    }
}
