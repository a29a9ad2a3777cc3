use crate::{
    data_structures::buffers::SceneGeometry,
    math::{Vec4, lerp_color, vec3},
};

pub const SKY_BOTTOM_COLOR: Vec4 = Vec4::new(0.3, 0.5, 0.7, 1.0);
pub const SKY_TOP_COLOR: Vec4 = Vec4::new(0.5, 0.8, 1.0, 1.0);
pub const SKY_SHININESS: f32 = 10.0;

/// Unit cube corners, four per face.
const CORNERS: [[f32; 3]; 20] = [
    [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0], // front
    [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0], // back
    [-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], // top
    [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0], // right
    [-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0], // left
];

/// Outward face normals, in the order of `CORNERS`.
const FACE_NORMALS: [[f32; 3]; 5] = [
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
    [0.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
];

/// Two triangles per face, as indices into the face's four corners.
const FACE_TRIANGLES: [[usize; 3]; 2] = [[0, 1, 2], [0, 2, 3]];

/// Vertices appended by [`generate_skybox`]. The floor is never seen from the
/// orbit camera and is left out.
pub const SKYBOX_VERTEX_COUNT: usize = FACE_NORMALS.len() * FACE_TRIANGLES.len() * 3;

/**
 * Append an inward-facing box around the scene.
 *
 * The box is `2 * size` wide and `4 * size` tall, centred on the origin.
 * Colours blend from `SKY_BOTTOM_COLOR` at the bottom edge to `SKY_TOP_COLOR`
 * at the top.
 */
pub fn generate_skybox(size: f32, geometry: &mut SceneGeometry) -> usize {
    let start = geometry.len();
    for (face, normal) in FACE_NORMALS.iter().enumerate() {
        let inward = -vec3(normal[0], normal[1], normal[2]);
        for triangle in FACE_TRIANGLES {
            let mut corners = [vec3(0.0, 0.0, 0.0); 3];
            let mut colors = [SKY_BOTTOM_COLOR; 3];
            for (slot, index) in triangle.into_iter().enumerate() {
                let [x, y, z] = CORNERS[face * 4 + index];
                corners[slot] = vec3(x * size, y * size * 2.0, z * size);
                colors[slot] = lerp_color(SKY_BOTTOM_COLOR, SKY_TOP_COLOR, (y + 1.0) / 2.0);
            }
            geometry.push_vertices(corners, inward, colors, SKY_SHININESS);
        }
    }
    geometry.len() - start
}
