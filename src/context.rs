//! Scene assembly: the one owner of all generated state.
//!
//! `Context` holds the configuration, the random generator, the persistent
//! land grid and the geometry buffers. The buffers are laid out as
//!
//! ```text
//! [ land | objects ][ skybox | water ]
//! ^0               ^static_len
//! ```
//!
//! The static half is rebuilt only on a world regeneration or a sea-level
//! change; the dynamic half is cut off and re-appended every animation step.

use std::f32::consts::TAU;

use instant::Instant;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::SceneConfig,
    data_structures::{
        buffers::SceneGeometry,
        grid::HeightGrid,
        instance::MeshKind,
    },
    error::Result,
    placement::{self, Placement},
    render::{DrawPass, DrawRange},
    resources::{
        mesh,
        skybox::{self, SKYBOX_VERTEX_COUNT},
    },
    terrain::{
        heightfield::{self, LandParams},
        triangulate, water,
    },
};

/// The skybox sits this far inside the map edge.
pub const SKYBOX_INSET: f32 = 0.1;

#[derive(Debug)]
pub struct Context {
    config: SceneConfig,
    rng: StdRng,
    land: HeightGrid,
    land_params: LandParams,
    placement: Placement,
    geometry: SceneGeometry,
    land_vertices: usize,
    object_vertices: usize,
    skybox_vertices: usize,
    water_vertices: usize,
    /// Wave frame within the current cycle, `0..frame_count`.
    frame: u32,
    phase: f32,
}

impl Context {
    /// Validate `config`, generate a world and its first water surface.
    ///
    /// Seeds from `config.seed`, or from entropy when unset.
    pub fn new(config: SceneConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: SceneConfig, mut rng: StdRng) -> Result<Self> {
        config.validate()?;
        let land_params = LandParams::random(&config, &mut rng);
        let land = heightfield::generate_land(&config, &land_params, &mut rng)?;
        let capacity = initial_capacity(&config);
        let mut ctx = Self {
            config,
            rng,
            land,
            land_params,
            placement: Placement::default(),
            geometry: SceneGeometry::with_capacity(capacity),
            land_vertices: 0,
            object_vertices: 0,
            skybox_vertices: 0,
            water_vertices: 0,
            frame: 0,
            phase: 0.0,
        };
        ctx.rebuild_static();
        ctx.rebuild_dynamic()?;
        Ok(ctx)
    }

    /// Draw new ridge parameters, resample the land and rebuild everything on it.
    pub fn regenerate_world(&mut self) -> Result<()> {
        let started = Instant::now();
        self.land_params = LandParams::random(&self.config, &mut self.rng);
        self.land = heightfield::generate_land(&self.config, &self.land_params, &mut self.rng)?;
        self.rebuild_static();
        self.rebuild_dynamic()?;
        log::info!(
            "world regenerated in {:?}: {} land + {} object vertices, {} trees, {} rocks, {} grass, {} houses",
            started.elapsed(),
            self.land_vertices,
            self.object_vertices,
            self.placement.count(MeshKind::Tree),
            self.placement.count(MeshKind::Rock),
            self.placement.count(MeshKind::Grass),
            self.placement.count(MeshKind::House),
        );
        Ok(())
    }

    /// Move the sea to `level` and rebuild the world on the existing land.
    pub fn set_sea_level(&mut self, level: f32) -> Result<()> {
        let mut config = self.config.clone();
        config.water.sea_level = level;
        config.validate()?;
        self.config = config;
        log::info!("sea level set to {}", level);
        self.rebuild_static();
        self.rebuild_dynamic()
    }

    pub fn raise_sea_level(&mut self, delta: f32) -> Result<()> {
        self.set_sea_level(self.config.water.sea_level + delta)
    }

    /// Clear the buffers and emit land and placed objects.
    ///
    /// Placement is rerolled, the land grid is kept. Afterwards the buffers
    /// hold only static geometry.
    pub fn rebuild_static(&mut self) {
        self.geometry.clear();
        self.land_vertices = triangulate::triangulate_land(&self.land, &self.config, &mut self.geometry);
        self.placement = placement::place_objects(&self.land, &self.config, &mut self.rng);
        self.object_vertices =
            mesh::build_meshes(&self.placement.instances, &mut self.geometry, &mut self.rng);
        self.skybox_vertices = 0;
        self.water_vertices = 0;
        log::debug!(
            "static geometry: {} vertices, {} degenerate triangles",
            self.geometry.len(),
            self.geometry.degenerate_triangles()
        );
    }

    /// Move the wave to the next frame of its cycle.
    pub fn advance_wave(&mut self) {
        let frame_count = self.config.animation.frame_count;
        self.phase = TAU / frame_count as f32 * self.frame as f32;
        self.frame = (self.frame + 1) % frame_count;
    }

    /// Cut the buffers back to the static boundary and append a fresh skybox
    /// and water surface for the current wave phase.
    pub fn rebuild_dynamic(&mut self) -> Result<()> {
        let sea = water::generate_water(&self.config, self.phase, &mut self.rng)?;
        self.geometry.truncate(self.static_len());
        self.skybox_vertices =
            skybox::generate_skybox(self.config.terrain.map_size - SKYBOX_INSET, &mut self.geometry);
        self.water_vertices =
            water::triangulate_water(&sea, &self.land, &self.config, &mut self.geometry);
        Ok(())
    }

    /// Vertex ranges for every pass, in draw order.
    pub fn draw_ranges(&self) -> [DrawRange; 4] {
        let static_len = self.static_len();
        [
            DrawRange::new(DrawPass::Skybox, static_len, self.skybox_vertices),
            DrawRange::new(
                DrawPass::Water,
                static_len + self.skybox_vertices,
                self.water_vertices,
            ),
            DrawRange::new(DrawPass::Land, 0, self.land_vertices),
            DrawRange::new(DrawPass::Objects, self.land_vertices, self.object_vertices),
        ]
    }

    /// Length of the part of the buffers that survives animation steps.
    pub fn static_len(&self) -> usize {
        self.land_vertices + self.object_vertices
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn land(&self) -> &HeightGrid {
        &self.land
    }

    pub fn land_params(&self) -> &LandParams {
        &self.land_params
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn geometry(&self) -> &SceneGeometry {
        &self.geometry
    }

    pub fn land_vertices(&self) -> usize {
        self.land_vertices
    }

    pub fn object_vertices(&self) -> usize {
        self.object_vertices
    }

    pub fn skybox_vertices(&self) -> usize {
        self.skybox_vertices
    }

    pub fn water_vertices(&self) -> usize {
        self.water_vertices
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

/// Vertices for a fully drawn land grid, the skybox and an uncut sea.
fn initial_capacity(config: &SceneConfig) -> usize {
    let cells = |resolution: usize| resolution.saturating_sub(1).pow(2);
    6 * cells(config.terrain.land_resolution) + SKYBOX_VERTEX_COUNT + 6 * cells(config.water.resolution)
}
