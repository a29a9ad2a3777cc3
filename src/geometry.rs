//! Triangle normals.
//!
//! Every generator emits flat-shaded triangles. Their vertices are ordered so
//! that the geometric cross product `(b - a) x (c - a)` points into the
//! surface (downwards on a grid, inwards on an extrusion), which is why the
//! emitted normal is the negation of it.

use cgmath::Zero;

use crate::math::{self, Vec3};

/// Normalized `(b - a) x (c - a)`, or `None` for a triangle without area.
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Option<Vec3> {
    math::try_normalize((b - a).cross(c - a))
}

/// Outward normal for the vertex order used throughout the crate.
///
/// Degenerate triangles (mesh apexes, collapsed jitter) get the zero vector;
/// callers that care can check with [`is_degenerate`].
pub fn surface_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    triangle_normal(a, b, c).map(|n| -n).unwrap_or_else(Vec3::zero)
}

pub fn is_degenerate(a: Vec3, b: Vec3, c: Vec3) -> bool {
    triangle_normal(a, b, c).is_none()
}
