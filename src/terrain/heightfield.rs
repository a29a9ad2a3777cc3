//! Land heightfield synthesis.
//!
//! Elevation is two phase-shifted ridges (a sine along x and a cosine along
//! z) with random amplitude and frequency, plus a fixed diagonal swell, minus
//! a baseline. The random parameters are drawn once per regeneration so the
//! result is a coherent mountain range rather than per-point noise; only the
//! tiny bump jitter is drawn per point.

use rand::Rng;

use crate::{
    config::SceneConfig,
    data_structures::grid::HeightGrid,
    error::Result,
    math::vec3,
};

/// Random floor of each ridge amplitude.
const MIN_AMPLITUDE: f32 = 0.2;
/// Random floor of the x and z ridge frequencies.
const MIN_FREQUENCY: [f32; 2] = [0.4, 0.2];
/// Phase shifts are drawn from `[0, MAX_PHASE)`.
const MAX_PHASE: f32 = 10.0;
/// The fixed swell: `SWELL_AMPLITUDE * sin(x * SWELL_X + z * SWELL_Z)`.
const SWELL_AMPLITUDE: f32 = 0.4;
const SWELL_X: f32 = 0.15;
const SWELL_Z: f32 = 0.3;

/// Ridge parameters shared by every point of one land grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandParams {
    pub amplitudes: [f32; 2],
    pub frequencies: [f32; 2],
    pub phases: [f32; 2],
}

impl LandParams {
    /// Draw a fresh set of ridge parameters.
    pub fn random<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let height = config.terrain.max_mountain_height;
        let spacing = config.terrain.max_peak_spacing;
        let mut amplitude = || MIN_AMPLITUDE + rng.r#gen::<f32>() * height;
        let amplitudes = [amplitude(), amplitude()];
        let frequencies = [
            MIN_FREQUENCY[0] + rng.r#gen::<f32>() * spacing,
            MIN_FREQUENCY[1] + rng.r#gen::<f32>() * spacing,
        ];
        let phases = [rng.gen_range(0.0..MAX_PHASE), rng.gen_range(0.0..MAX_PHASE)];
        Self {
            amplitudes,
            frequencies,
            phases,
        }
    }

    /// Jitter-free elevation at world position `(x, z)`.
    pub fn elevation(&self, x: f32, z: f32, baseline: f32) -> f32 {
        self.amplitudes[0] * (self.frequencies[0] * x + self.phases[0]).sin()
            + self.amplitudes[1] * (self.frequencies[1] * z + self.phases[1]).cos()
            + SWELL_AMPLITUDE * (x * SWELL_X + z * SWELL_Z).sin()
            - baseline
    }
}

/// Sample the land surface on the configured lattice.
pub fn generate_land<R: Rng + ?Sized>(
    config: &SceneConfig,
    params: &LandParams,
    rng: &mut R,
) -> Result<HeightGrid> {
    config.validate()?;
    let terrain = &config.terrain;
    let bump = terrain.bump_offset;
    Ok(HeightGrid::from_fn(
        terrain.land_resolution,
        terrain.map_size,
        |_, _, x, z| {
            let y = params.elevation(x, z, terrain.baseline) + jitter(bump, rng);
            vec3(x, y, z)
        },
    ))
}

/// Uniform sample in `[-magnitude, magnitude)`; zero when `magnitude` is zero.
pub(crate) fn jitter<R: Rng + ?Sized>(magnitude: f32, rng: &mut R) -> f32 {
    if magnitude > 0.0 {
        rng.gen_range(-magnitude..magnitude)
    } else {
        0.0
    }
}
