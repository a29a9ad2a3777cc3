//! Stochastic object placement over the land grid.
//!
//! One pass visits every cell in lattice order and rolls independent
//! Bernoulli trials against the configured densities, in priority order:
//!
//! 1. a house, anywhere with enough ground above the waterline
//! 2. on peaks, a rock
//! 3. in the grass band, a tree, else a rarer rock, else a clump of grass
//! 4. on beaches, a rarer tree
//!
//! Houses carve a circular keep-out zone. Only houses placed earlier in the
//! pass suppress later cells, so the result depends on iteration order.

use cgmath::Vector3;
use rand::Rng;

use crate::{
    config::SceneConfig,
    data_structures::{
        grid::HeightGrid,
        instance::{MeshInstance, MeshKind},
    },
    math::{Vec3, horizontal_distance2, vec3},
    terrain::{heightfield::jitter, triangulate::BiomeThresholds},
};

/// Output of one placement pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placement {
    /// Objects in the order they were placed.
    pub instances: Vec<MeshInstance>,
    /// House origins, in placement order.
    pub houses: Vec<Vec3>,
}

impl Placement {
    pub fn count(&self, kind: MeshKind) -> usize {
        self.instances.iter().filter(|m| m.kind == kind).count()
    }
}

/// Houses placed so far and the radius they keep clear.
struct KeepOut {
    radius2: f32,
    houses: Vec<Vec3>,
}

impl KeepOut {
    fn is_taken(&self, position: Vec3) -> bool {
        self.houses
            .iter()
            .any(|house| horizontal_distance2(position, *house) < self.radius2)
    }
}

fn spawns<R: Rng + ?Sized>(chance: f32, rng: &mut R) -> bool {
    rng.r#gen::<f32>() < chance
}

/// Walk the land grid once and decide what grows where.
pub fn place_objects<R: Rng + ?Sized>(land: &HeightGrid, config: &SceneConfig, rng: &mut R) -> Placement {
    let rules = &config.placement;
    let bands = BiomeThresholds::from_config(config);
    let house_offset: Vector3<f32> = rules.house_offset.into();
    let mut keep_out = KeepOut {
        radius2: rules.exclusion_radius * rules.exclusion_radius,
        houses: Vec::new(),
    };
    let mut instances = Vec::new();

    for cell in land.cells() {
        let position = cell.tl;
        if keep_out.is_taken(position) {
            continue;
        }
        let y = position.y;

        if y > bands.house_ground && spawns(rules.house_density, rng) {
            let origin = position + house_offset;
            instances.push(MeshInstance::random(MeshKind::House, origin, rng));
            keep_out.houses.push(origin);
            continue;
        }

        if y > bands.peak {
            if spawns(rules.rock_density, rng) {
                instances.push(MeshInstance::random(MeshKind::Rock, position, rng));
            }
        } else if y > bands.beach {
            if spawns(rules.tree_density, rng) {
                instances.push(MeshInstance::random(MeshKind::Tree, position, rng));
            } else if spawns(rules.rock_density * rules.grass_band_rock_factor, rng) {
                instances.push(MeshInstance::random(MeshKind::Rock, position, rng));
            } else if spawns(rules.grass_density, rng) {
                let [min, max] = rules.grass_clump;
                let blades = rng.gen_range(min..=max);
                for _ in 0..blades {
                    let blade = position
                        + vec3(
                            jitter(rules.grass_jitter, rng),
                            0.0,
                            jitter(rules.grass_jitter, rng),
                        );
                    if keep_out.is_taken(blade) {
                        continue;
                    }
                    instances.push(MeshInstance::random(MeshKind::Grass, blade, rng));
                }
            }
        } else if y > bands.shore && spawns(rules.tree_density * rules.beach_tree_factor, rng) {
            instances.push(MeshInstance::random(MeshKind::Tree, position, rng));
        }
    }

    Placement {
        instances,
        houses: keep_out.houses,
    }
}
