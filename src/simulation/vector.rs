//! Small 2D vector helpers used by every resolver
//!
//! All math runs on `NVec2` (nalgebra `Vector2<f64>`); these wrappers pin down
//! the degenerate cases (zero-length normals) in one place

use super::states::NVec2;

/// Euclidean distance between two points
pub fn distance(a: &NVec2, b: &NVec2) -> f64 {
    (*a - *b).norm()
}

/// Dot product
pub fn dot(a: &NVec2, b: &NVec2) -> f64 {
    a.dot(b)
}

/// Unit vector along `v`, or the zero vector when `v` has no length
pub fn normalize_or_zero(v: &NVec2) -> NVec2 {
    let mag = v.norm();
    if mag == 0.0 {
        NVec2::zeros()
    } else {
        *v / mag
    }
}

/// Unit vector along `v`, or `fallback` when `|v| < eps`
pub fn normalize_or(v: &NVec2, fallback: NVec2, eps: f64) -> NVec2 {
    let mag = v.norm();
    if mag < eps {
        fallback
    } else {
        *v / mag
    }
}
