//! Vector primitives shared by every generator.
//!
//! Addition, subtraction, cross and dot products come straight from `cgmath`;
//! this module adds the pieces the generators need on top: a normalize that
//! tolerates zero-length input and colour blending.

use cgmath::{InnerSpace, Vector3, Vector4, Zero};

/// Position, direction or normal.
pub type Vec3 = Vector3<f32>;
/// RGBA colour.
pub type Vec4 = Vector4<f32>;

/// Vectors shorter than this are treated as having no direction.
pub const NORMALIZE_EPSILON: f32 = 1.0e-5;

pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vector3::new(x, y, z)
}

pub fn vec4(r: f32, g: f32, b: f32, a: f32) -> Vec4 {
    Vector4::new(r, g, b, a)
}

pub fn magnitude(v: Vec3) -> f32 {
    v.magnitude()
}

/// Unit vector in the direction of `v`, or `None` when `v` is (nearly) zero.
pub fn try_normalize(v: Vec3) -> Option<Vec3> {
    let len = magnitude(v);
    if len > NORMALIZE_EPSILON {
        Some(v / len)
    } else {
        None
    }
}

/// Like [`try_normalize`] but maps degenerate input to the zero vector.
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    try_normalize(v).unwrap_or_else(Vec3::zero)
}

/// Squared distance in the horizontal (x, z) plane.
pub fn horizontal_distance2(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    dx * dx + dz * dz
}

/// Linear blend between two colours, `t` clamped to `[0, 1]`.
pub fn lerp_color(from: Vec4, to: Vec4, t: f32) -> Vec4 {
    let t = t.clamp(0.0, 1.0);
    from + (to - from) * t
}
