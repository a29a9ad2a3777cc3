//! The four parallel vertex attribute streams every generator appends to.
//!
//! `SceneGeometry` only grows one whole triangle at a time, so the streams
//! always have equal length and that length is always a multiple of three.
//! The flat slices returned by the `*_flat` accessors can be uploaded as-is.

use crate::{
    geometry,
    math::{Vec3, Vec4},
};

/// Flat triangle list split into position, normal, colour and shininess streams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneGeometry {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    colors: Vec<[f32; 4]>,
    shininess: Vec<f32>,
    degenerate_triangles: usize,
}

impl SceneGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
            shininess: Vec::with_capacity(vertices),
            degenerate_triangles: 0,
        }
    }

    /// Append one triangle sharing a single normal, colour and shininess.
    pub fn push_triangle(
        &mut self,
        corners: [Vec3; 3],
        normal: Vec3,
        color: Vec4,
        shininess: f32,
    ) {
        self.push_vertices(corners, normal, [color; 3], shininess);
    }

    /// Append one triangle with a colour per corner.
    pub fn push_vertices(
        &mut self,
        corners: [Vec3; 3],
        normal: Vec3,
        colors: [Vec4; 3],
        shininess: f32,
    ) {
        for (corner, color) in corners.into_iter().zip(colors) {
            self.positions.push(corner.into());
            self.normals.push(normal.into());
            self.colors.push(color.into());
            self.shininess.push(shininess);
        }
    }

    /// Append a triangle with its own flat normal computed from the corners.
    ///
    /// Zero-area triangles still get appended (with a zero normal) so callers
    /// can rely on fixed vertex counts; they are tallied in
    /// [`SceneGeometry::degenerate_triangles`].
    pub fn push_flat_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, color: Vec4, shininess: f32) {
        let normal = self.checked_normal(a, b, c);
        self.push_triangle([a, b, c], normal, color, shininess);
    }

    /// Append the quad `tl, bl, br, tr` as `(tl, bl, br)` and `(tl, br, tr)`,
    /// each with its own flat normal.
    pub fn push_quad(&mut self, tl: Vec3, bl: Vec3, br: Vec3, tr: Vec3, color: Vec4, shininess: f32) {
        self.push_flat_triangle(tl, bl, br, color, shininess);
        self.push_flat_triangle(tl, br, tr, color, shininess);
    }

    /// Normal of `a, b, c` with degenerate triangles recorded.
    pub(crate) fn checked_normal(&mut self, a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
        if geometry::is_degenerate(a, b, c) {
            self.degenerate_triangles += 1;
            log::trace!("degenerate triangle at {:?}", a);
        }
        geometry::surface_normal(a, b, c)
    }

    /// Number of vertices (equal across all four streams).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.len() / 3
    }

    /// Drop everything past `len` vertices. `len` must sit on a triangle boundary.
    pub fn truncate(&mut self, len: usize) {
        debug_assert!(len % 3 == 0, "truncating inside a triangle");
        self.positions.truncate(len);
        self.normals.truncate(len);
        self.colors.truncate(len);
        self.shininess.truncate(len);
    }

    pub fn clear(&mut self) {
        self.truncate(0);
        self.degenerate_triangles = 0;
    }

    /// Zero-area triangles appended since the last [`SceneGeometry::clear`].
    pub fn degenerate_triangles(&self) -> usize {
        self.degenerate_triangles
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    pub fn shininess(&self) -> &[f32] {
        &self.shininess
    }

    /// Positions as `x, y, z, x, y, z, ...`.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn normals_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Colours as `r, g, b, a, ...`.
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }
}
