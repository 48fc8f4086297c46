//! Geometry utilities: clamp, distance, AABB overlap.
//!
//! Standalone helpers with no caller in the game loop itself; kept as a
//! tested utility module for future collision/AI work.

/// Clamp `v` into `[lo, hi]`.
///
/// Unspecified when `lo > hi`.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Euclidean distance between two points.
pub fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}

/// Axis-aligned bounding-box overlap test.
///
/// Boxes that merely touch along an edge count as overlapping.
/// Symmetric under swapping the two boxes.
pub fn boxes_overlap(
    ax: f64,
    ay: f64,
    aw: f64,
    ah: f64,
    bx: f64,
    by: f64,
    bw: f64,
    bh: f64,
) -> bool {
    !(ax + aw < bx || ax > bx + bw || ay + ah < by || ay > by + bh)
}
