mod common;

use cgmath::Vector3;
use common::test_utils::{rng, small_config};
use scenery_ngin::{
    SceneConfig,
    data_structures::{grid::HeightGrid, instance::MeshKind},
    math::horizontal_distance2,
    placement::place_objects,
};

fn densities(config: &mut SceneConfig, tree: f32, rock: f32, grass: f32, house: f32) {
    config.placement.tree_density = tree;
    config.placement.rock_density = rock;
    config.placement.grass_density = grass;
    config.placement.house_density = house;
}

#[test]
fn should_keep_later_objects_out_of_earlier_house_zones() {
    let mut config = small_config();
    config.terrain.map_size = 1.0;
    densities(&mut config, 0.1, 0.1, 1.0, 0.2);
    let land = HeightGrid::flat(config.terrain.land_resolution, config.terrain.map_size, -1.0);
    let offset: Vector3<f32> = config.placement.house_offset.into();
    let radius2 = config.placement.exclusion_radius * config.placement.exclusion_radius;

    let placement = place_objects(&land, &config, &mut rng(21));

    assert!(placement.count(MeshKind::House) > 0);
    let mut houses_so_far = Vec::new();
    for mesh in &placement.instances {
        let checked = match mesh.kind {
            MeshKind::House => mesh.origin - offset,
            _ => mesh.origin,
        };
        for house in &houses_so_far {
            assert!(
                horizontal_distance2(checked, *house) >= radius2,
                "{:?} at {:?} inside the zone of {:?}",
                mesh.kind,
                checked,
                house
            );
        }
        if mesh.kind == MeshKind::House {
            houses_so_far.push(mesh.origin);
        }
    }
    assert_eq!(houses_so_far, placement.houses);
}

#[test]
fn should_place_the_same_objects_for_the_same_seed() {
    let config = small_config();
    let land = HeightGrid::from_fn(config.terrain.land_resolution, config.terrain.map_size, |i, j, x, z| {
        scenery_ngin::math::vec3(x, -1.7 + (i + j) as f32 * 0.05, z)
    });

    let first = place_objects(&land, &config, &mut rng(22));
    let second = place_objects(&land, &config, &mut rng(22));

    assert_eq!(first, second);
    assert!(!first.instances.is_empty());
}

#[test]
fn should_fill_grass_cells_with_clumps() {
    let mut config = small_config();
    densities(&mut config, 0.0, 0.0, 1.0, 0.0);
    let land = HeightGrid::flat(config.terrain.land_resolution, config.terrain.map_size, -1.0);
    let cells = land.cell_count();

    let placement = place_objects(&land, &config, &mut rng(23));

    let blades = placement.count(MeshKind::Grass);
    assert_eq!(blades, placement.instances.len());
    assert!(blades >= 10 * cells && blades <= 12 * cells, "{} blades", blades);
    let jitter = config.placement.grass_jitter;
    for blade in &placement.instances {
        assert_eq!(blade.origin.y, -1.0);
        let i = land.nearest_index(blade.origin.x);
        assert!((blade.origin.x - land.get(i, 0).x).abs() <= jitter + 1.0e-5);
    }
}

#[test]
fn should_leave_the_shoreline_and_sea_empty() {
    let mut config = small_config();
    densities(&mut config, 1.0, 1.0, 1.0, 1.0);
    let land = HeightGrid::flat(config.terrain.land_resolution, config.terrain.map_size, -1.59);

    let placement = place_objects(&land, &config, &mut rng(24));

    assert!(placement.instances.is_empty());
    assert!(placement.houses.is_empty());
}

#[test]
fn should_only_grow_rocks_on_peaks() {
    let mut config = small_config();
    densities(&mut config, 1.0, 1.0, 1.0, 0.0);
    let land = HeightGrid::flat(config.terrain.land_resolution, config.terrain.map_size, 0.0);

    let placement = place_objects(&land, &config, &mut rng(25));

    assert_eq!(placement.count(MeshKind::Rock), land.cell_count());
    assert_eq!(placement.instances.len(), land.cell_count());
}

#[test]
fn should_plant_rare_trees_on_beaches() {
    let mut config = small_config();
    densities(&mut config, 1.0, 1.0, 1.0, 0.0);
    // between the shore and the beach threshold
    let land = HeightGrid::flat(config.terrain.land_resolution, config.terrain.map_size, -1.5);

    let placement = place_objects(&land, &config, &mut rng(26));

    assert_eq!(placement.count(MeshKind::Tree), placement.instances.len());
    assert!(placement.count(MeshKind::Tree) > 0);
    assert!(placement.count(MeshKind::Tree) < land.cell_count());
}

#[test]
fn should_lift_houses_by_the_configured_offset() {
    let mut config = small_config();
    densities(&mut config, 0.0, 0.0, 0.0, 1.0);
    let land = HeightGrid::flat(config.terrain.land_resolution, config.terrain.map_size, -1.0);

    let placement = place_objects(&land, &config, &mut rng(27));

    let first = land.get(0, 0);
    assert_eq!(placement.houses[0].x, first.x + 0.1);
    assert_eq!(placement.houses[0].z, first.z + 0.1);
    assert_eq!(placement.count(MeshKind::House), placement.instances.len());
}
