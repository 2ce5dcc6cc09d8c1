//! # Core Module
//!
//! Fundamental building blocks for voxelized surface detection: the data
//! models shared by every engine pass and the pure geometry that maps
//! world-space atoms into the rotated grid frame.
//!
//! ## Architecture
//!
//! - **Molecular representation** ([`models`]) - atoms, the grid shape and
//!   its linear memory layout, and the voxel label alphabet
//! - **Geometry** ([`utils`]) - the two-axis rotation and the world-to-grid
//!   coordinate transform
//!
//! Everything in this layer is stateless and infallible once constructed;
//! constructors validate their inputs and return dedicated error types that
//! the engine layer wraps.

pub mod models;
pub mod utils;
