//! Scene tunables with defaults matching the reference world and TOML loading.
//!
//! Every section is `#[serde(default)]`, so a config file only needs to name
//! the values it overrides:
//!
//! ```toml
//! seed = 7
//!
//! [water]
//! sea_level = -1.4
//!
//! [placement]
//! house_density = 0.002
//! ```

use std::path::Path;

use instant::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

/// Top-level scene configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for the scene's random generator. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub terrain: TerrainConfig,
    pub water: WaterConfig,
    pub biome: BiomeConfig,
    pub placement: PlacementConfig,
    pub animation: AnimationConfig,
    pub camera: CameraConfig,
}

/// Land heightfield settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Half-width of the square domain; the lattice spans `[-map_size, map_size]`.
    pub map_size: f32,
    /// Lattice points per side of the land grid.
    pub land_resolution: usize,
    /// Upper bound of the random part of each ridge amplitude.
    pub max_mountain_height: f32,
    /// Upper bound of the random part of each ridge frequency.
    pub max_peak_spacing: f32,
    /// Uniform per-point elevation jitter.
    pub bump_offset: f32,
    /// Constant subtracted from every elevation.
    pub baseline: f32,
    pub shininess: f32,
}

/// Animated sea settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WaterConfig {
    /// Lattice points per side of the water grid.
    pub resolution: usize,
    /// Half-width of the water domain. Unset, the sea covers the land domain.
    pub map_size: Option<f32>,
    pub sea_level: f32,
    pub wave_amplitude: f32,
    /// Spatial frequency of the wave along the x axis, per lattice index.
    pub wave_frequency: f32,
    /// Uniform jitter applied to interior water points on all three axes.
    pub bump_offset: f32,
    /// How far land must rise above a water quad before the quad is culled.
    pub occlusion_margin: f32,
    pub shininess: f32,
}

/// Elevation ladder used for land colouring and placement bands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BiomeConfig {
    pub peak_offset: f32,
    /// Peaks start at `peak_offset + peak_sea_factor * sea_level`.
    pub peak_sea_factor: f32,
    /// Beach band ends (grass begins) at `sea_level + beach_offset`.
    pub beach_offset: f32,
    /// Mud ends at `sea_level + wave_amplitude + waterline_offset`.
    pub waterline_offset: f32,
    /// Land cells below `sea_level - wave_amplitude - sea_floor_margin` are not emitted.
    pub sea_floor_margin: f32,
}

/// Object placement densities and spacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlacementConfig {
    pub tree_density: f32,
    pub rock_density: f32,
    pub grass_density: f32,
    pub house_density: f32,
    /// Radius of the keep-out zone around every placed house.
    pub exclusion_radius: f32,
    /// Houses are moved by this vector away from their cell.
    pub house_offset: [f32; 3],
    /// Houses need `sea_level + wave_amplitude + house_clearance` of ground.
    pub house_clearance: f32,
    /// Rock density multiplier inside the grass band.
    pub grass_band_rock_factor: f32,
    /// Tree density multiplier on beaches.
    pub beach_tree_factor: f32,
    /// Inclusive range of blades per grass clump.
    pub grass_clump: [u32; 2],
    /// Maximum horizontal offset of a blade from its cell.
    pub grass_jitter: f32,
}

/// Fastest supported cadence: one animation step per millisecond.
pub const MAX_FRAME_COUNT: u32 = 1000;

/// Frame loop cadence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Steps per wave cycle, at most [`MAX_FRAME_COUNT`]. One cycle lasts a
    /// second, so steps are `1 / frame_count` s apart.
    pub frame_count: u32,
    /// Animation steps between full world regenerations.
    pub regeneration_steps: u32,
}

/// Automated orbit camera.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Wave cycles per orbit; higher is slower.
    pub speed: u32,
    pub radius_inset: f32,
    /// Eye height above ground or sea, whichever is higher.
    pub height: f32,
    /// Look-at height above the sea.
    pub target_height: f32,
    pub fovy_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            map_size: 4.0,
            land_resolution: 68,
            max_mountain_height: 0.5,
            max_peak_spacing: 0.5,
            bump_offset: 0.003,
            baseline: 1.5,
            shininess: 1.0e15,
        }
    }
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            resolution: 44,
            map_size: None,
            sea_level: -1.6,
            wave_amplitude: 0.02,
            wave_frequency: 5.7,
            bump_offset: 0.005,
            occlusion_margin: 0.1,
            shininess: 90.0,
        }
    }
}

impl Default for BiomeConfig {
    fn default() -> Self {
        Self {
            peak_offset: 0.5,
            peak_sea_factor: 0.65,
            beach_offset: 0.16,
            waterline_offset: 0.03,
            sea_floor_margin: 0.1,
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            tree_density: 0.03,
            rock_density: 0.07,
            grass_density: 0.6,
            house_density: 0.0005,
            exclusion_radius: 0.2,
            house_offset: [0.1, 0.0, 0.1],
            house_clearance: 0.05,
            grass_band_rock_factor: 0.25,
            beach_tree_factor: 0.25,
            grass_clump: [10, 12],
            grass_jitter: 0.075,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_count: 20,
            regeneration_steps: 400,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: 10,
            radius_inset: 0.1,
            height: 0.7,
            target_height: 1.0,
            fovy_degrees: 70.0,
            near: 0.1,
            far: 100.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl SceneConfig {
    /// Parse a TOML document. Missing keys fall back to their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SceneConfig = toml::from_str(text).map_err(SceneError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(SceneError::ConfigRead)?;
        Self::from_toml_str(&text)
    }

    /// Half-width of the square the sea is sampled over.
    pub fn water_half_width(&self) -> f32 {
        self.water.map_size.unwrap_or(self.terrain.map_size)
    }

    /// Time between two animation steps.
    pub fn step_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.animation.frame_count.max(1)))
    }

    /// Reject values the generators cannot turn into finite geometry.
    pub fn validate(&self) -> Result<()> {
        let t = &self.terrain;
        resolution("terrain.land_resolution", t.land_resolution)?;
        positive("terrain.map_size", t.map_size)?;
        non_negative("terrain.max_mountain_height", t.max_mountain_height)?;
        non_negative("terrain.max_peak_spacing", t.max_peak_spacing)?;
        non_negative("terrain.bump_offset", t.bump_offset)?;
        finite("terrain.baseline", t.baseline)?;
        non_negative("terrain.shininess", t.shininess)?;

        let w = &self.water;
        resolution("water.resolution", w.resolution)?;
        if let Some(size) = w.map_size {
            positive("water.map_size", size)?;
        }
        finite("water.sea_level", w.sea_level)?;
        non_negative("water.wave_amplitude", w.wave_amplitude)?;
        finite("water.wave_frequency", w.wave_frequency)?;
        non_negative("water.bump_offset", w.bump_offset)?;
        finite("water.occlusion_margin", w.occlusion_margin)?;
        non_negative("water.shininess", w.shininess)?;

        let b = &self.biome;
        finite("biome.peak_offset", b.peak_offset)?;
        finite("biome.peak_sea_factor", b.peak_sea_factor)?;
        finite("biome.beach_offset", b.beach_offset)?;
        finite("biome.waterline_offset", b.waterline_offset)?;
        finite("biome.sea_floor_margin", b.sea_floor_margin)?;

        let p = &self.placement;
        probability("placement.tree_density", p.tree_density)?;
        probability("placement.rock_density", p.rock_density)?;
        probability("placement.grass_density", p.grass_density)?;
        probability("placement.house_density", p.house_density)?;
        probability("placement.grass_band_rock_factor", p.grass_band_rock_factor)?;
        probability("placement.beach_tree_factor", p.beach_tree_factor)?;
        non_negative("placement.exclusion_radius", p.exclusion_radius)?;
        non_negative("placement.grass_jitter", p.grass_jitter)?;
        finite("placement.house_clearance", p.house_clearance)?;
        for component in p.house_offset {
            finite("placement.house_offset", component)?;
        }
        if p.grass_clump[0] > p.grass_clump[1] {
            return Err(SceneError::invalid(
                "placement.grass_clump",
                format!("min {} exceeds max {}", p.grass_clump[0], p.grass_clump[1]),
            ));
        }

        let a = &self.animation;
        if a.frame_count == 0 {
            return Err(SceneError::invalid("animation.frame_count", "must be at least 1"));
        }
        if a.frame_count > MAX_FRAME_COUNT {
            return Err(SceneError::invalid(
                "animation.frame_count",
                format!("{} exceeds {} steps per second", a.frame_count, MAX_FRAME_COUNT),
            ));
        }
        if a.regeneration_steps == 0 {
            return Err(SceneError::invalid(
                "animation.regeneration_steps",
                "must be at least 1",
            ));
        }

        let c = &self.camera;
        if c.speed == 0 {
            return Err(SceneError::invalid("camera.speed", "must be at least 1"));
        }
        finite("camera.radius_inset", c.radius_inset)?;
        finite("camera.height", c.height)?;
        finite("camera.target_height", c.target_height)?;
        positive("camera.fovy_degrees", c.fovy_degrees)?;
        positive("camera.near", c.near)?;
        positive("camera.aspect", c.aspect)?;
        if !(c.far.is_finite() && c.far > c.near) {
            return Err(SceneError::invalid(
                "camera.far",
                format!("{} must be finite and beyond near plane {}", c.far, c.near),
            ));
        }
        Ok(())
    }
}

fn resolution(field: &'static str, value: usize) -> Result<()> {
    if value < 2 {
        return Err(SceneError::invalid(
            field,
            format!("{value} lattice points cannot form a cell, need at least 2"),
        ));
    }
    Ok(())
}

fn finite(field: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(SceneError::invalid(field, format!("{value} is not finite")));
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(SceneError::invalid(field, format!("{value} must be positive")));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(SceneError::invalid(field, format!("{value} must not be negative")));
    }
    Ok(())
}

fn probability(field: &'static str, value: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SceneError::invalid(field, format!("{value} is not within [0, 1]")));
    }
    Ok(())
}
