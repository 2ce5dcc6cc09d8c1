//! # SESD Core Library
//!
//! A high-performance engine for detecting the solvent-exposed surface of a
//! biomolecule on a dense voxel grid, and for extracting the residues whose
//! atoms touch that surface.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Atom`,
//!   `GridShape` and the label alphabet) and pure geometry (`GridFrame`, the
//!   two-axis grid rotation).
//!
//! - **[`engine`]: The Logic Core.** This layer implements the labeling
//!   passes that rewrite the voxel grid in place: sphere rasterization,
//!   SAS-to-SES erosion, surface extraction, connected-component clustering,
//!   and noise removal.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It validates caller input, ties the engine passes into the fixed
//!   surface pipeline, and exposes the interface-residue query.
//!
//! The grid itself is caller-allocated: both workflows operate on a plain
//! `&[i32]` / `&mut [i32]` buffer whose layout is described by
//! [`core::models::grid::GridShape`].

pub mod core;
pub mod engine;
pub mod workflows;
