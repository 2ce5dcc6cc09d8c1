use nalgebra::Point3;

/// A single atom: its world-space center and van der Waals radius, both in
/// Ångströms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    pub center: Point3<f64>,
    pub radius: f64,
}

impl Atom {
    pub fn new(center: Point3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Builds atoms from the caller's flat `[x, y, z, r]` quadruple array.
    ///
    /// Returns `None` when the length is not a multiple of four; the
    /// workflows turn that into [`MalformedAtoms`].
    ///
    /// [`MalformedAtoms`]: crate::engine::error::EngineError::MalformedAtoms
    pub fn from_flat(raw: &[f64]) -> Option<Vec<Atom>> {
        if raw.len() % 4 != 0 {
            return None;
        }
        Some(
            raw.chunks_exact(4)
                .map(|q| Atom::new(Point3::new(q[0], q[1], q[2]), q[3]))
                .collect(),
        )
    }
}
