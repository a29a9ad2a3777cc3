//! Animated sea surface.
//!
//! The sea is rebuilt every animation step: a travelling sine wave along x on
//! its own lattice, jittered everywhere except the boundary so the seams
//! against the skybox stay closed. Quads that land clearly pokes through are
//! skipped. The land lookup uses a nearest-index rescale between the two
//! lattices, which is approximate; small gaps at the shoreline are accepted.
//! A sea sampled over a different domain than the land looks the land up by
//! position instead.

use rand::Rng;

use crate::{
    config::SceneConfig,
    data_structures::{
        buffers::SceneGeometry,
        grid::{Cell, HeightGrid, is_edge_index},
    },
    error::Result,
    math::{Vec4, lerp_color, vec3},
    terrain::heightfield::jitter,
};

/// Colour of the lowest wave troughs.
pub const WATER_FLOOR_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.5, 1.0);
/// Colour of the highest wave crests.
pub const WATER_CREST_COLOR: Vec4 = Vec4::new(0.1, 0.1, 0.5, 1.0);

/// Map `index` on a lattice of `source_res` points onto a lattice of
/// `target_res` points covering the same domain.
///
/// The result is floored and clamped into `[0, target_res - 1]`, so any pair of
/// resolutions is safe, including ones that do not divide evenly.
pub fn rescale_index(source_res: usize, target_res: usize, index: usize) -> usize {
    if source_res == 0 || target_res == 0 {
        return 0;
    }
    let scaled = (target_res as f64 / source_res as f64 * index as f64).floor() as usize;
    scaled.min(target_res - 1)
}

/// Sample the sea surface for wave phase `phase`.
pub fn generate_water<R: Rng + ?Sized>(
    config: &SceneConfig,
    phase: f32,
    rng: &mut R,
) -> Result<HeightGrid> {
    config.validate()?;
    let water = &config.water;
    let resolution = water.resolution;
    let bump = water.bump_offset;
    Ok(HeightGrid::from_fn(
        resolution,
        config.water_half_width(),
        |i, j, x, z| {
            let y = (i as f32 * water.wave_frequency + phase).sin() * water.wave_amplitude
                + water.sea_level;
            if is_edge_index(i, j, resolution) {
                vec3(x, y, z)
            } else {
                vec3(
                    x + jitter(bump, rng),
                    y + jitter(bump, rng),
                    z + jitter(bump, rng),
                )
            }
        },
    ))
}

/// True when the land under `cell` rises clearly above the water surface.
pub fn is_occluded(cell: &Cell, water: &HeightGrid, land: &HeightGrid, config: &SceneConfig) -> bool {
    let ground = if water.half_width() == land.half_width() {
        let li = rescale_index(water.resolution(), land.resolution(), cell.i);
        let lj = rescale_index(water.resolution(), land.resolution(), cell.j);
        land.get(li, lj).y
    } else {
        land.elevation_near(cell.tl.x, cell.tl.z)
    };
    ground > cell.tl.y + config.water.wave_amplitude + config.water.occlusion_margin
}

/// Crest highlight for a cell by its average height within the wave band.
pub fn water_color(average_elevation: f32, sea_level: f32, wave_amplitude: f32) -> Vec4 {
    let low = sea_level - wave_amplitude;
    let high = sea_level + wave_amplitude;
    let span = high - low;
    if span <= f32::EPSILON {
        return WATER_FLOOR_COLOR;
    }
    lerp_color(WATER_FLOOR_COLOR, WATER_CREST_COLOR, (average_elevation - low) / span)
}

/// Triangulate the visible part of `water` into `geometry`.
///
/// Returns the number of vertices appended.
pub fn triangulate_water(
    water: &HeightGrid,
    land: &HeightGrid,
    config: &SceneConfig,
    geometry: &mut SceneGeometry,
) -> usize {
    let start = geometry.len();
    let shininess = config.water.shininess;
    for cell in water.cells() {
        if is_occluded(&cell, water, land, config) {
            continue;
        }
        let color = water_color(
            cell.average_elevation(),
            config.water.sea_level,
            config.water.wave_amplitude,
        );
        geometry.push_quad(cell.tl, cell.bl, cell.br, cell.tr, color, shininess);
    }
    geometry.len() - start
}
