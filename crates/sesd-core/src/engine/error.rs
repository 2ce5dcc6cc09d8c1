use thiserror::Error;

use crate::core::utils::geometry::GeometryError;
use std::collections::TryReserveError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("grid buffer holds {actual} voxels but {nx}x{ny}x{nz} requires {expected}")]
    GridSizeMismatch {
        nx: usize,
        ny: usize,
        nz: usize,
        expected: usize,
        actual: usize,
    },

    #[error("every grid dimension must be at least 3 voxels, got {nx}x{ny}x{nz}")]
    GridTooSmall { nx: usize, ny: usize, nz: usize },

    #[error("atom array length {len} is not a multiple of 4 (x, y, z, radius per atom)")]
    MalformedAtoms { len: usize },

    #[error("residue list holds {residues} identifiers for {atoms} atoms")]
    ResidueCountMismatch { residues: usize, atoms: usize },

    #[error("probe radius must be non-negative, got {probe}")]
    NegativeProbe { probe: f64 },

    #[error("invalid grid geometry: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },

    #[error("failed to allocate the interface residue list: {source}")]
    Allocation {
        #[from]
        source: TryReserveError,
    },

    #[error("failed to build the worker pool: {0}")]
    ThreadPool(String),
}
