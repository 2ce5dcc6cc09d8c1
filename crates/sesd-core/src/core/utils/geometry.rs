//! World-to-grid coordinate geometry.
//!
//! The grid is axis-aligned in its own frame; the molecule is brought into
//! that frame by a rotation about two axes, supplied by the caller as the
//! four values `(sin a, cos a, sin b, cos b)`.

use crate::core::models::atom::Atom;
use nalgebra::{Point3, Vector3};
use thiserror::Error;

/// Tolerance on `sin^2 + cos^2 = 1` for caller-supplied rotation values.
const TRIG_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum GeometryError {
    #[error("grid step must be positive, got {step}")]
    NonPositiveStep { step: f64 },

    #[error("rotation sin/cos pair for axis {axis} is off the unit circle (sin^2 + cos^2 = {norm})")]
    InconsistentRotation { axis: &'static str, norm: f64 },
}

/// Rotation about two axes, stored as the sines and cosines the caller
/// computed when dimensioning the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoAxisRotation {
    sin_a: f64,
    cos_a: f64,
    sin_b: f64,
    cos_b: f64,
}

impl TwoAxisRotation {
    /// Builds the rotation from the caller's `[sin a, cos a, sin b, cos b]`
    /// array, rejecting pairs that do not lie on the unit circle.
    pub fn from_sincos(sincos: &[f64; 4]) -> Result<Self, GeometryError> {
        for (axis, sin, cos) in [("a", sincos[0], sincos[1]), ("b", sincos[2], sincos[3])] {
            let norm = sin * sin + cos * cos;
            if (norm - 1.0).abs() > TRIG_TOLERANCE {
                return Err(GeometryError::InconsistentRotation { axis, norm });
            }
        }
        Ok(Self {
            sin_a: sincos[0],
            cos_a: sincos[1],
            sin_b: sincos[2],
            cos_b: sincos[3],
        })
    }

    /// The identity rotation, `(0, 1, 0, 1)`.
    pub fn identity() -> Self {
        Self {
            sin_a: 0.0,
            cos_a: 1.0,
            sin_b: 0.0,
            cos_b: 1.0,
        }
    }

    /// Rotates a grid-space vector: first about the b axis, then about the
    /// a axis.
    #[inline]
    pub fn apply(&self, v: &Vector3<f64>) -> Vector3<f64> {
        let x = v.x * self.cos_b + v.z * self.sin_b;
        let y = v.y;
        let z = -v.x * self.sin_b + v.z * self.cos_b;
        Vector3::new(x, y * self.cos_a - z * self.sin_a, y * self.sin_a + z * self.cos_a)
    }
}

/// An atom sphere mapped into grid coordinates: center in voxel units and
/// radius inflated by the probe, also in voxel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSphere {
    pub center: Point3<f64>,
    pub radius: f64,
}

/// Placement of the voxel grid in world space: the world position of voxel
/// `(0, 0, 0)`, the rotation into the grid frame, and the voxel edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFrame {
    origin: Point3<f64>,
    rotation: TwoAxisRotation,
    step: f64,
}

impl GridFrame {
    pub fn new(
        origin: Point3<f64>,
        rotation: TwoAxisRotation,
        step: f64,
    ) -> Result<Self, GeometryError> {
        if step <= 0.0 {
            return Err(GeometryError::NonPositiveStep { step });
        }
        Ok(Self {
            origin,
            rotation,
            step,
        })
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Maps a world-space point into (fractional) voxel coordinates.
    #[inline]
    pub fn to_grid(&self, world: &Point3<f64>) -> Point3<f64> {
        let scaled = (world - self.origin) / self.step;
        Point3::from(self.rotation.apply(&scaled))
    }

    /// Projects an atom into the grid frame, inflating its radius by the
    /// probe radius.
    #[inline]
    pub fn project_sphere(&self, atom: &Atom, probe: f64) -> GridSphere {
        GridSphere {
            center: self.to_grid(&atom.center),
            radius: (atom.radius + probe) / self.step,
        }
    }
}
