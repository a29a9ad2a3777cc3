//! Automated fly-around camera.
//!
//! The camera circles the origin just inside the map edge, skimming a fixed
//! height above whichever is higher under it, land or sea. Scene generation
//! does not depend on the camera; the pose is only handed to the renderer.

use std::f32::consts::TAU;

use cgmath::{Deg, Matrix4, Point3, Vector3};

use crate::{config::SceneConfig, data_structures::grid::HeightGrid};

/// Converts cgmath's OpenGL clip space (z in -1..1) to wgpu's (z in 0..1).
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Everything the renderer needs to build view and projection matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fovy: Deg<f32>,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl CameraPose {
    /// Pose after `counter` animation steps along the orbit.
    pub fn orbit(config: &SceneConfig, land: &HeightGrid, counter: u32) -> Self {
        let cam = &config.camera;
        let sea_level = config.water.sea_level;
        let steps_per_orbit = (cam.speed * config.animation.frame_count).max(1) as f32;
        let angle = TAU / steps_per_orbit * counter as f32;
        let radius = config.terrain.map_size - cam.radius_inset;
        let x = radius * angle.sin();
        let z = radius * angle.cos();
        let ground = land.elevation_near(x, z);
        let y = ground.max(sea_level) + cam.height;

        Self {
            eye: Point3::new(x, y, z),
            target: Point3::new(0.0, sea_level + cam.target_height, 0.0),
            up: Vector3::unit_y(),
            fovy: Deg(cam.fovy_degrees),
            aspect: cam.aspect,
            znear: cam.near,
            zfar: cam.far,
        }
    }

    pub fn view(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * cgmath::perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection() * self.view()
    }
}
