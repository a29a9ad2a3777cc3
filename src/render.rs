//! Handing finished geometry to a rendering backend.
//!
//! The scene never talks to the GPU itself. Each animation step it builds a
//! [`Frame`]: the four attribute streams, the camera pose, and one
//! [`DrawRange`] per pass. A [`DrawSurface`] uploads the streams and issues
//! the passes in [`DrawPass::ORDER`].
//!
//! # Key types
//!
//! - [`DrawSurface`] is the backend seam
//! - [`DrawPass`] names the four draw calls and their depth behaviour
//! - [`DrawRange`] is a contiguous vertex slice for one pass
//! - [`stream_layouts`] describes the streams as wgpu vertex buffers
//!

use std::mem;

use crate::{camera::CameraPose, data_structures::buffers::SceneGeometry};

/// The separate draw calls a frame is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawPass {
    Skybox,
    Water,
    Land,
    Objects,
}

impl DrawPass {
    /// Order in which a backend must issue the passes.
    pub const ORDER: [DrawPass; 4] = [
        DrawPass::Skybox,
        DrawPass::Water,
        DrawPass::Land,
        DrawPass::Objects,
    ];

    /// The skybox is drawn without depth writes so everything else lands in front.
    pub fn writes_depth(&self) -> bool {
        !matches!(self, DrawPass::Skybox)
    }
}

/// `count` vertices starting at `start`, drawn as a triangle list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRange {
    pub pass: DrawPass,
    pub start: u32,
    pub count: u32,
}

impl DrawRange {
    pub fn new(pass: DrawPass, start: usize, count: usize) -> Self {
        Self {
            pass,
            start: start as u32,
            count: count as u32,
        }
    }

    pub fn end(&self) -> u32 {
        self.start + self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn as_range(&self) -> std::ops::Range<u32> {
        self.start..self.end()
    }
}

/// One finished animation step, ready to upload.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub geometry: &'a SceneGeometry,
    /// One range per pass, in [`DrawPass::ORDER`].
    pub ranges: [DrawRange; 4],
    pub camera: CameraPose,
    pub step: u64,
}

impl<'a> Frame<'a> {
    pub fn positions(&self) -> &'a [f32] {
        self.geometry.positions_flat()
    }

    pub fn normals(&self) -> &'a [f32] {
        self.geometry.normals_flat()
    }

    pub fn colors(&self) -> &'a [f32] {
        self.geometry.colors_flat()
    }

    pub fn shininess(&self) -> &'a [f32] {
        self.geometry.shininess()
    }

    pub fn range(&self, pass: DrawPass) -> Option<&DrawRange> {
        self.ranges.iter().find(|range| range.pass == pass)
    }
}

/// A rendering backend the frame loop draws into.
pub trait DrawSurface {
    /// Upload the frame's streams and issue its draw ranges in order.
    fn draw(&mut self, frame: &Frame<'_>) -> anyhow::Result<()>;
}

/// Backend that only logs what it would draw.
#[derive(Debug, Default)]
pub struct LogSurface {
    frames: u64,
}

impl LogSurface {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl DrawSurface for LogSurface {
    fn draw(&mut self, frame: &Frame<'_>) -> anyhow::Result<()> {
        self.frames += 1;
        log::trace!(
            "step {}: {} vertices, eye {:?}",
            frame.step,
            frame.geometry.len(),
            frame.camera.eye
        );
        for pass in DrawPass::ORDER {
            let Some(range) = frame.range(pass) else {
                anyhow::bail!("step {}: no draw range for {:?}", frame.step, pass);
            };
            if range.is_empty() {
                log::debug!("step {}: nothing to draw for {:?}", frame.step, pass);
            } else {
                log::trace!(
                    "step {}: {:?} vertices {:?}, depth writes {}",
                    frame.step,
                    pass,
                    range.as_range(),
                    pass.writes_depth()
                );
            }
        }
        Ok(())
    }
}

/// Shader locations of the four attribute streams.
pub const POSITION_LOCATION: u32 = 0;
pub const NORMAL_LOCATION: u32 = 1;
pub const COLOR_LOCATION: u32 = 2;
pub const SHININESS_LOCATION: u32 = 3;

const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    offset: 0,
    shader_location: POSITION_LOCATION,
    format: wgpu::VertexFormat::Float32x3,
}];
const NORMAL_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    offset: 0,
    shader_location: NORMAL_LOCATION,
    format: wgpu::VertexFormat::Float32x3,
}];
const COLOR_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    offset: 0,
    shader_location: COLOR_LOCATION,
    format: wgpu::VertexFormat::Float32x4,
}];
const SHININESS_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    offset: 0,
    shader_location: SHININESS_LOCATION,
    format: wgpu::VertexFormat::Float32,
}];

/**
 * The streams are not interleaved: each one is its own vertex buffer with a
 * single attribute, so the slices from `SceneGeometry` can be uploaded as-is
 * with `bytemuck::cast_slice`.
 *
 * Returned in the order positions, normals, colours, shininess.
 */
pub fn stream_layouts() -> [wgpu::VertexBufferLayout<'static>; 4] {
    [
        stream::<[f32; 3]>(&POSITION_ATTRIBUTES),
        stream::<[f32; 3]>(&NORMAL_ATTRIBUTES),
        stream::<[f32; 4]>(&COLOR_ATTRIBUTES),
        stream::<f32>(&SHININESS_ATTRIBUTES),
    ]
}

fn stream<T>(attributes: &'static [wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: mem::size_of::<T>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}
