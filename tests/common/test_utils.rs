use rand::{SeedableRng, rngs::StdRng};
use scenery_ngin::{
    Context, SceneConfig,
    data_structures::buffers::SceneGeometry,
    math::Vec3,
    render::{DrawRange, DrawSurface, Frame},
};

/// What a surface saw in one frame.
#[derive(Debug, Clone)]
pub(crate) struct RecordedFrame {
    pub step: u64,
    pub vertices: usize,
    pub positions: usize,
    pub ranges: [DrawRange; 4],
    pub eye: [f32; 3],
}

/// A backend double that keeps every frame it is handed.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub frames: Vec<RecordedFrame>,
}

impl DrawSurface for RecordingSurface {
    fn draw(&mut self, frame: &Frame<'_>) -> anyhow::Result<()> {
        self.frames.push(RecordedFrame {
            step: frame.step,
            vertices: frame.geometry.len(),
            positions: frame.positions().len(),
            ranges: frame.ranges,
            eye: [frame.camera.eye.x, frame.camera.eye.y, frame.camera.eye.z],
        });
        Ok(())
    }
}

/// A backend that refuses every frame.
pub(crate) struct FailingSurface;

impl DrawSurface for FailingSurface {
    fn draw(&mut self, _: &Frame<'_>) -> anyhow::Result<()> {
        anyhow::bail!("device lost")
    }
}

pub(crate) fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Default tunables on smaller grids so tests stay fast.
pub(crate) fn small_config() -> SceneConfig {
    let mut config = SceneConfig::default();
    config.seed = Some(42);
    config.terrain.land_resolution = 24;
    config.water.resolution = 16;
    config.animation.regeneration_steps = 1_000;
    config
}

pub(crate) fn seeded_context(seed: u64) -> Context {
    Context::with_rng(small_config(), rng(seed)).expect("small config is valid")
}

/// Every stream has the same length and holds whole triangles.
pub(crate) fn assert_consistent(geometry: &SceneGeometry) {
    let len = geometry.len();
    assert_eq!(len % 3, 0, "vertex count {} is not whole triangles", len);
    assert_eq!(geometry.positions().len(), len);
    assert_eq!(geometry.normals().len(), len);
    assert_eq!(geometry.colors().len(), len);
    assert_eq!(geometry.shininess().len(), len);
    assert_eq!(geometry.positions_flat().len(), len * 3);
    assert_eq!(geometry.normals_flat().len(), len * 3);
    assert_eq!(geometry.colors_flat().len(), len * 4);
}

pub(crate) fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1.0e-5
}

pub(crate) fn approx_vec(a: [f32; 3], b: Vec3) -> bool {
    approx_eq(a[0], b.x) && approx_eq(a[1], b.y) && approx_eq(a[2], b.z)
}
