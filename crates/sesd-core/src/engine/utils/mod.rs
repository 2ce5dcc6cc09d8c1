//! Helpers shared by the grid passes: neighborhood scans, bounding-box
//! clamping, and the scoped worker pool.

pub mod neighbors;
pub mod pool;
pub mod span;
