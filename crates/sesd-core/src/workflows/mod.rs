//! # Workflows Module
//!
//! High-level entry points of the library. Each workflow validates the
//! caller's buffers before touching them, builds the grid frame from the
//! raw reference/rotation arrays, and runs the engine passes inside an
//! optional dedicated worker pool.
//!
//! - **Surface** ([`surface`]) - rewrites the caller's grid into the final
//!   surface labeling.
//! - **Interface** ([`interface`]) - reads a finished surface grid and
//!   returns the solvent-exposed residue identifiers.

pub mod interface;
pub mod surface;

use crate::core::models::grid::GridShape;
use crate::engine::error::EngineError;

/// Checks the constraints shared by both workflows. All validation happens
/// before the first grid write, so a failed call leaves the grid untouched.
pub(crate) fn check_inputs(
    grid_len: usize,
    shape: GridShape,
    probe: f64,
) -> Result<(), EngineError> {
    if shape.nx < 3 || shape.ny < 3 || shape.nz < 3 {
        return Err(EngineError::GridTooSmall {
            nx: shape.nx,
            ny: shape.ny,
            nz: shape.nz,
        });
    }
    if grid_len != shape.len() {
        return Err(EngineError::GridSizeMismatch {
            nx: shape.nx,
            ny: shape.ny,
            nz: shape.nz,
            expected: shape.len(),
            actual: grid_len,
        });
    }
    if probe < 0.0 {
        return Err(EngineError::NegativeProbe { probe });
    }
    Ok(())
}
