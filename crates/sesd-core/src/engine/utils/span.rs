//! Clamped axis spans for sphere bounding boxes.

/// Integer index range `floor(center - radius) ..= ceil(center + radius)`
/// clamped to `lower ..= len - 1`, or `None` when the box misses the axis
/// entirely. `lower` is 0 for rasterization and 1 for the passes that skip
/// the zero slab.
#[inline]
pub fn clamped(center: f64, radius: f64, len: usize, lower: usize) -> Option<(usize, usize)> {
    let lo = ((center - radius).floor() as i64).max(lower as i64);
    let hi = ((center + radius).ceil() as i64).min(len as i64 - 1);
    if lo > hi {
        return None;
    }
    Some((lo as usize, hi as usize))
}
