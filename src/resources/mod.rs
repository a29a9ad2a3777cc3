//! Object geometry: contour-extruded trees, rocks and houses, grass blades,
//! and the skybox.

pub mod mesh;
pub mod skybox;
