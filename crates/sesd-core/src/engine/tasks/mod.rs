//! Grid labeling passes.
//!
//! Each pass rewrites the voxel grid in place and documents the label
//! convention it leaves behind. Passes run in the fixed order of
//! [`crate::workflows::surface`]; the interface pass reads the final grid
//! without mutating it.

pub mod cluster;
pub mod interface;
pub mod noise;
pub mod rasterize;
pub mod ses;
pub mod surface;
