use std::f32::consts::{FRAC_PI_4, TAU};

use rand::Rng;

use crate::{
    data_structures::{
        buffers::SceneGeometry,
        instance::{MeshInstance, MeshKind},
    },
    math::{Vec3, Vec4, vec3, vec4},
};

/**
 * Silhouette of a rotationally symmetric mesh.
 *
 * `points` are `(radius, height)` pairs from the top of the mesh down. The
 * builder sweeps them through `rotation_segments` equal steps around the
 * vertical axis; a point with zero radius sits on the axis and turns the
 * segment below it into a cone slice.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contour {
    pub points: &'static [[f32; 2]],
    pub rotation_segments: u32,
    /// Size before the instance's scale offset is added.
    pub base_size: f32,
    pub shininess: f32,
}

impl Contour {
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Vertices one extrusion of this contour appends.
    pub fn vertex_count(&self) -> usize {
        let per_step: usize = self
            .points
            .windows(2)
            .map(|pair| if pair[0][0] == 0.0 { 3 } else { 6 })
            .sum();
        per_step * self.rotation_segments as usize
    }
}

pub const TREE: Contour = Contour {
    points: &[
        [0.0, 1.0],   // crown tip
        [0.3, 0.25],  // foliage rim
        [0.05, 0.25], // where the foliage meets the trunk
        [0.05, 0.0],  // trunk base
    ],
    rotation_segments: 5,
    base_size: 0.4,
    shininess: 100_000.0,
};

pub const ROCK: Contour = Contour {
    points: &[[0.0, 0.3], [0.15, 0.2], [0.3, 0.1], [0.15, 0.0]],
    rotation_segments: 6,
    base_size: 0.3,
    shininess: 10.0,
};

pub const HOUSE: Contour = Contour {
    points: &[
        [0.0, 0.45],  // roof ridge
        [0.32, 0.25], // eaves
        [0.22, 0.25], // wall top
        [0.22, 0.0],  // foundation
    ],
    rotation_segments: 4,
    base_size: 0.35,
    shininess: 40.0,
};

pub const GRASS_HEIGHT: f32 = 0.05;
pub const GRASS_WIDTH: f32 = 0.01;
pub const GRASS_SHININESS: f32 = 0.0;
/// Blades are two quads crossed at these yaw angles.
const GRASS_BLADE_ANGLES: [f32; 2] = [0.0, FRAC_PI_4];

pub const TRUNK_COLOR: Vec4 = Vec4::new(0.5, 0.4, 0.2, 1.0);
pub const ROOF_COLOR: Vec4 = Vec4::new(0.45, 0.45, 0.45, 1.0);

/// The silhouette for `kind`, or `None` for kinds that are not extruded.
pub fn contour_for(kind: MeshKind) -> Option<&'static Contour> {
    match kind {
        MeshKind::Tree => Some(&TREE),
        MeshKind::Rock => Some(&ROCK),
        MeshKind::House => Some(&HOUSE),
        MeshKind::Grass => None,
    }
}

/// Build the geometry for one placed object. Returns the vertices appended.
pub fn build_mesh<R: Rng + ?Sized>(
    mesh: &MeshInstance,
    geometry: &mut SceneGeometry,
    rng: &mut R,
) -> usize {
    match mesh.kind {
        MeshKind::Tree => build_tree(mesh, geometry, rng),
        MeshKind::Rock => build_rock(mesh, geometry, rng),
        MeshKind::House => build_house(mesh, geometry, rng),
        MeshKind::Grass => build_grass(mesh, geometry, rng),
    }
}

pub fn build_meshes<R: Rng + ?Sized>(
    meshes: &[MeshInstance],
    geometry: &mut SceneGeometry,
    rng: &mut R,
) -> usize {
    meshes.iter().map(|mesh| build_mesh(mesh, geometry, rng)).sum()
}

/// Sweep `contour` around `mesh.origin`.
///
/// `color_of(near, far)` picks the colour of the band between two adjacent
/// contour points. Bands whose near point lies on the axis emit a single
/// triangle per step, every other band a quad. Both triangles of a quad share
/// the normal of the first one.
pub fn extrude(
    mesh: &MeshInstance,
    contour: &Contour,
    geometry: &mut SceneGeometry,
    mut color_of: impl FnMut([f32; 2], [f32; 2]) -> Vec4,
) -> usize {
    let start = geometry.len();
    let size = contour.base_size + mesh.scale_offset;
    let step = TAU / contour.rotation_segments as f32;
    let place = |point: [f32; 2], (sin, cos): (f32, f32)| -> Vec3 {
        mesh.origin + vec3(point[0] * cos * size, point[1] * size, point[0] * sin * size)
    };

    for segment in 0..contour.rotation_segments {
        let left = (segment as f32 * step + mesh.rotation).sin_cos();
        let right = ((segment + 1) as f32 * step + mesh.rotation).sin_cos();

        for pair in contour.points.windows(2) {
            let (near, far) = (pair[0], pair[1]);
            let tl = place(near, left);
            let bl = place(far, left);
            let tr = place(near, right);
            let br = place(far, right);
            let color = color_of(near, far);

            let normal = geometry.checked_normal(tl, bl, br);
            geometry.push_triangle([tl, bl, br], normal, color, contour.shininess);
            if near[0] != 0.0 {
                geometry.push_triangle([tl, br, tr], normal, color, contour.shininess);
            }
        }
    }
    geometry.len() - start
}

/// Conifer: brown trunk, one random green for the whole crown.
pub fn build_tree<R: Rng + ?Sized>(mesh: &MeshInstance, geometry: &mut SceneGeometry, rng: &mut R) -> usize {
    let foliage = vec4(
        0.35 + rng.r#gen::<f32>() * 0.1,
        0.55 + rng.r#gen::<f32>() * 0.1,
        0.25 + rng.r#gen::<f32>() * 0.1,
        1.0,
    );
    // bands that end at the ground are trunk
    extrude(mesh, &TREE, geometry, |_, far| {
        if far[1] == 0.0 { TRUNK_COLOR } else { foliage }
    })
}

/// Boulder with a slightly different gray on every face.
pub fn build_rock<R: Rng + ?Sized>(mesh: &MeshInstance, geometry: &mut SceneGeometry, rng: &mut R) -> usize {
    extrude(mesh, &ROCK, geometry, |_, _| {
        vec4(
            0.5 + rng.r#gen::<f32>() * 0.1,
            0.5 + rng.r#gen::<f32>() * 0.1,
            0.5 + rng.r#gen::<f32>() * 0.1,
            1.0,
        )
    })
}

/// Square hut with a pyramid roof. Vertical bands are walls, the rest roof.
pub fn build_house<R: Rng + ?Sized>(mesh: &MeshInstance, geometry: &mut SceneGeometry, rng: &mut R) -> usize {
    let shade = rng.r#gen::<f32>() * 0.15;
    let walls = vec4(0.6 + shade, 0.5 + shade, 0.4 + shade * 0.5, 1.0);
    extrude(mesh, &HOUSE, geometry, |near, far| {
        if near[0] == far[0] { walls } else { ROOF_COLOR }
    })
}

/**
 * Two crossed vertical quads.
 *
 * Alpha is zero so the renderer skips lighting for blades, and the normals
 * point straight up whatever the blade orientation.
 */
pub fn build_grass<R: Rng + ?Sized>(mesh: &MeshInstance, geometry: &mut SceneGeometry, rng: &mut R) -> usize {
    let start = geometry.len();
    let height = GRASS_HEIGHT + mesh.scale_offset * 0.001;
    let color = vec4(
        0.3 + rng.r#gen::<f32>() * 0.1,
        0.6 + rng.r#gen::<f32>() * 0.2,
        0.3 + rng.r#gen::<f32>() * 0.1,
        0.0,
    );
    let up = vec3(0.0, 1.0, 0.0);

    for angle in GRASS_BLADE_ANGLES {
        let (sin, cos) = angle.sin_cos();
        let half = vec3(GRASS_WIDTH * cos, 0.0, GRASS_WIDTH * sin);
        let bottom_left = mesh.origin - half;
        let bottom_right = mesh.origin + half;
        let top_left = bottom_left + up * height;
        let top_right = bottom_right + up * height;

        geometry.push_triangle([top_left, bottom_left, bottom_right], up, color, GRASS_SHININESS);
        geometry.push_triangle([top_left, bottom_right, top_right], up, color, GRASS_SHININESS);
    }
    geometry.len() - start
}
