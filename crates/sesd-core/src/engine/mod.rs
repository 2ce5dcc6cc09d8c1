//! # Engine Module
//!
//! This module implements the labeling passes that turn a seeded voxel grid
//! into the final surface representation.
//!
//! ## Overview
//!
//! Each pass rewrites the caller's grid in place and leaves behind a
//! documented label convention (see [`crate::core::models::grid::label`]).
//! Passes run strictly in sequence; inside a pass, work is data-parallel
//! over atoms or voxels when the `parallel` feature is enabled.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - surface mode, probe radius, grid step
//!   and worker-thread count
//! - **Progress Monitoring** ([`progress`]) - stage reporting callbacks
//! - **Error Handling** ([`error`]) - argument validation and resource
//!   errors
//! - **Tasks** (`tasks`) - the individual grid passes, one per submodule

pub mod config;
pub(crate) mod context;
pub mod error;
pub mod progress;
pub(crate) mod tasks;
pub(crate) mod utils;
