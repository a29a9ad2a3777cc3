mod common;

use common::test_utils::{approx_eq, assert_consistent, rng, small_config};
use scenery_ngin::{
    SceneError,
    data_structures::{buffers::SceneGeometry, grid::HeightGrid},
    terrain::water::{
        WATER_CREST_COLOR, WATER_FLOOR_COLOR, generate_water, rescale_index, triangulate_water,
        water_color,
    },
};

#[test]
fn should_rescale_indices_between_lattices() {
    assert_eq!(rescale_index(44, 68, 43), 66);
    assert_eq!(rescale_index(68, 44, 67), 43);
    assert_eq!(rescale_index(10, 3, 9), 2);
    assert_eq!(rescale_index(3, 10, 5), 9);
    assert_eq!(rescale_index(44, 44, 17), 17);
    assert_eq!(rescale_index(0, 10, 4), 0);
    assert_eq!(rescale_index(10, 0, 4), 0);
}

#[test]
fn should_draw_every_cell_of_a_sea_above_the_land() {
    let mut config = small_config();
    config.water.resolution = 4;
    config.water.sea_level = 1.0;
    let land = HeightGrid::flat(config.terrain.land_resolution, config.terrain.map_size, 0.0);
    let water = generate_water(&config, 0.0, &mut rng(1)).unwrap();
    let mut geometry = SceneGeometry::new();

    let vertices = triangulate_water(&water, &land, &config, &mut geometry);

    assert_eq!(vertices, 54);
    assert_consistent(&geometry);
    for shininess in geometry.shininess() {
        assert_eq!(*shininess, config.water.shininess);
    }
}

#[test]
fn should_cull_water_hidden_under_the_land() {
    let mut config = small_config();
    config.water.resolution = 4;
    config.water.sea_level = -10.0;
    let land = HeightGrid::flat(config.terrain.land_resolution, config.terrain.map_size, 0.0);
    let water = generate_water(&config, 0.0, &mut rng(2)).unwrap();
    let mut geometry = SceneGeometry::new();

    assert_eq!(triangulate_water(&water, &land, &config, &mut geometry), 0);
    assert!(geometry.is_empty());
}

#[test]
fn should_keep_water_that_land_barely_tops() {
    let mut config = small_config();
    config.water.resolution = 6;
    config.water.bump_offset = 0.0;
    config.water.sea_level = 0.0;
    // inside amplitude + margin: still drawn
    let land = HeightGrid::flat(config.terrain.land_resolution, config.terrain.map_size, 0.05);
    let water = generate_water(&config, 0.0, &mut rng(3)).unwrap();
    let mut geometry = SceneGeometry::new();

    assert_eq!(triangulate_water(&water, &land, &config, &mut geometry), 25 * 6);
}

#[test]
fn should_pin_boundary_points_to_the_lattice() {
    let config = small_config();
    let water = generate_water(&config, 0.3, &mut rng(4)).unwrap();
    let n = water.resolution();
    let size = config.terrain.map_size;
    let w = &config.water;

    for i in 0..n {
        for j in 0..n {
            let point = water.get(i, j);
            let wave = (i as f32 * w.wave_frequency + 0.3).sin() * w.wave_amplitude + w.sea_level;
            if water.is_edge(i, j) {
                let x = -size + 2.0 * size * i as f32 / (n - 1) as f32;
                let z = -size + 2.0 * size * j as f32 / (n - 1) as f32;
                assert!(approx_eq(point.x, x));
                assert!(approx_eq(point.z, z));
                assert!(approx_eq(point.y, wave));
            } else {
                assert!((point.y - wave).abs() <= w.bump_offset + 1.0e-5);
            }
        }
    }
}

#[test]
fn should_move_the_wave_with_the_phase() {
    let mut config = small_config();
    config.water.bump_offset = 0.0;
    let calm = generate_water(&config, 0.0, &mut rng(5)).unwrap();
    let moved = generate_water(&config, 1.0, &mut rng(5)).unwrap();

    assert_ne!(calm.get(3, 3).y, moved.get(3, 3).y);
    assert_eq!(calm.get(3, 3).x, moved.get(3, 3).x);
}

#[test]
fn should_blend_water_colour_within_the_wave_band() {
    let sea = -1.6;
    let amp = 0.02;

    assert_eq!(water_color(sea - amp, sea, amp), WATER_FLOOR_COLOR);
    assert_eq!(water_color(sea - 1.0, sea, amp), WATER_FLOOR_COLOR);
    assert_eq!(water_color(sea + 1.0, sea, amp), WATER_CREST_COLOR);
    assert_eq!(water_color(sea, 0.0, 0.0), WATER_FLOOR_COLOR);

    let middle = water_color(sea, sea, amp);
    assert!(middle.x > WATER_FLOOR_COLOR.x && middle.x < WATER_CREST_COLOR.x);
    assert!(approx_eq(middle.z, 0.5));
}

#[test]
fn should_sample_the_sea_over_its_own_domain() {
    let mut config = small_config();
    config.water.map_size = Some(2.0);
    config.water.resolution = 4;
    let water = generate_water(&config, 0.0, &mut rng(6)).unwrap();

    assert_eq!(water.half_width(), 2.0);
    assert!(approx_eq(water.get(0, 0).x, -2.0));
    assert!(approx_eq(water.get(3, 3).z, 2.0));

    config.water.map_size = None;
    let shared = generate_water(&config, 0.0, &mut rng(6)).unwrap();
    assert_eq!(shared.half_width(), config.terrain.map_size);
}

#[test]
fn should_cull_a_smaller_sea_against_the_land_beneath_it() {
    let mut config = small_config();
    config.water.map_size = Some(2.0);
    config.water.resolution = 4;
    config.water.sea_level = 0.0;
    // cliffs only outside the sea's domain
    let land = HeightGrid::from_fn(
        config.terrain.land_resolution,
        config.terrain.map_size,
        |_, _, x, z| {
            let y = if x.abs() > 2.5 || z.abs() > 2.5 { 5.0 } else { -10.0 };
            scenery_ngin::math::vec3(x, y, z)
        },
    );
    let water = generate_water(&config, 0.0, &mut rng(7)).unwrap();
    let mut geometry = SceneGeometry::new();

    assert_eq!(triangulate_water(&water, &land, &config, &mut geometry), 54);
}

#[test]
fn should_reject_an_empty_sea_domain() {
    let mut config = small_config();
    config.water.map_size = Some(0.0);

    match generate_water(&config, 0.0, &mut rng(8)) {
        Err(SceneError::InvalidConfig { field, .. }) => assert_eq!(field, "water.map_size"),
        other => panic!("expected an invalid config, got {:?}", other),
    }
}
