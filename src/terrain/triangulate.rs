//! Land triangulation and biome colouring.
//!
//! Each lattice cell becomes two flat-shaded triangles coloured by the
//! elevation of its first corner. Colouring consumes no randomness: the same
//! grid and thresholds always produce the same output.

use crate::{
    config::SceneConfig,
    data_structures::{buffers::SceneGeometry, grid::HeightGrid},
    math::Vec4,
};

pub const PEAK_COLOR: Vec4 = Vec4::new(0.6, 0.7, 0.55, 1.0);
pub const GRASS_COLOR: Vec4 = Vec4::new(0.3, 0.6, 0.3, 1.0);
pub const BEACH_COLOR: Vec4 = Vec4::new(0.7, 0.5, 0.4, 1.0);
pub const MUD_COLOR: Vec4 = Vec4::new(0.5, 0.4, 0.2, 1.0);

/// Elevation bands for the current sea level.
///
/// Land ordering from the top: peak, grass, beach, mud. Anything below
/// `sea_floor` is submerged far enough to never be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiomeThresholds {
    /// At or above: bare rock. Below: grass band.
    pub peak: f32,
    /// Below: beach.
    pub beach: f32,
    /// Below: mud.
    pub waterline: f32,
    /// Below: not emitted.
    pub sea_floor: f32,
    /// Lower bound of the beach band used for placement.
    pub shore: f32,
    /// Houses need ground above this.
    pub house_ground: f32,
}

impl BiomeThresholds {
    pub fn from_config(config: &SceneConfig) -> Self {
        let sea = config.water.sea_level;
        let waves = config.water.wave_amplitude;
        let biome = &config.biome;
        Self {
            peak: biome.peak_offset + biome.peak_sea_factor * sea,
            beach: sea + biome.beach_offset,
            waterline: sea + waves + biome.waterline_offset,
            sea_floor: sea - waves - biome.sea_floor_margin,
            shore: sea + waves,
            house_ground: sea + waves + config.placement.house_clearance,
        }
    }

    /// Colour for land at elevation `y`.
    ///
    /// The checks run top-down and each one that matches overwrites the
    /// previous pick, so the lowest matching band wins.
    pub fn land_color(&self, y: f32) -> Vec4 {
        let mut color = PEAK_COLOR;
        if y < self.peak {
            color = GRASS_COLOR;
        }
        if y < self.beach {
            color = BEACH_COLOR;
        }
        if y < self.waterline {
            color = MUD_COLOR;
        }
        color
    }

    pub fn is_submerged(&self, y: f32) -> bool {
        y < self.sea_floor
    }
}

/// Triangulate every non-submerged land cell into `geometry`.
///
/// Returns the number of vertices appended.
pub fn triangulate_land(land: &HeightGrid, config: &SceneConfig, geometry: &mut SceneGeometry) -> usize {
    let thresholds = BiomeThresholds::from_config(config);
    let shininess = config.terrain.shininess;
    let start = geometry.len();
    let mut submerged = 0usize;
    for cell in land.cells() {
        if thresholds.is_submerged(cell.tl.y) {
            submerged += 1;
            continue;
        }
        let color = thresholds.land_color(cell.tl.y);
        geometry.push_quad(cell.tl, cell.bl, cell.br, cell.tr, color, shininess);
    }
    log::debug!(
        "land: {} of {} cells submerged",
        submerged,
        land.cell_count()
    );
    geometry.len() - start
}
