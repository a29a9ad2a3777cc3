mod common;

use common::test_utils::{approx_eq, assert_consistent, rng, small_config};
use scenery_ngin::{
    SceneError,
    data_structures::{
        buffers::SceneGeometry,
        grid::{HeightGrid, is_edge_index, lattice_coordinate},
    },
    math::Vec4,
    terrain::{
        heightfield::{LandParams, generate_land},
        triangulate::{
            BEACH_COLOR, BiomeThresholds, GRASS_COLOR, MUD_COLOR, PEAK_COLOR, triangulate_land,
        },
    },
};

fn color_of(rgba: [f32; 4]) -> Vec4 {
    Vec4::new(rgba[0], rgba[1], rgba[2], rgba[3])
}

#[test]
fn should_span_the_whole_map_with_the_lattice() {
    let config = small_config();
    let mut rng = rng(1);
    let params = LandParams::random(&config, &mut rng);
    let land = generate_land(&config, &params, &mut rng).unwrap();

    let n = config.terrain.land_resolution;
    let size = config.terrain.map_size;
    assert_eq!(land.resolution(), n);
    assert_eq!(land.half_width(), size);
    assert_eq!(land.points().len(), n * n);
    assert_eq!(land.cell_count(), (n - 1) * (n - 1));
    assert!(approx_eq(land.get(0, 0).x, -size));
    assert!(approx_eq(land.get(0, 0).z, -size));
    assert!(approx_eq(land.get(n - 1, n - 1).x, size));
    assert!(approx_eq(land.get(n - 1, n - 1).z, size));
    assert!(approx_eq(lattice_coordinate(n - 1, n, size), size));
}

#[test]
fn should_keep_jitter_within_the_bump_offset() {
    let config = small_config();
    let mut rng = rng(2);
    let params = LandParams::random(&config, &mut rng);
    let land = generate_land(&config, &params, &mut rng).unwrap();

    let bump = config.terrain.bump_offset;
    for point in land.points() {
        let smooth = params.elevation(point.x, point.z, config.terrain.baseline);
        assert!(
            (point.y - smooth).abs() <= bump + 1.0e-5,
            "{} strays from {}",
            point.y,
            smooth
        );
    }
}

#[test]
fn should_draw_ridge_parameters_within_their_ranges() {
    let config = small_config();
    let mut rng = rng(3);
    for _ in 0..50 {
        let params = LandParams::random(&config, &mut rng);
        for amplitude in params.amplitudes {
            assert!((0.2..=0.2 + config.terrain.max_mountain_height).contains(&amplitude));
        }
        assert!(params.frequencies[0] >= 0.4);
        assert!(params.frequencies[1] >= 0.2);
        for phase in params.phases {
            assert!((0.0..10.0).contains(&phase));
        }
    }
}

#[test]
fn should_colour_land_by_elevation_band() {
    let thresholds = BiomeThresholds::from_config(&small_config());

    assert_eq!(thresholds.land_color(0.0), PEAK_COLOR);
    assert_eq!(thresholds.land_color(-1.0), GRASS_COLOR);
    assert_eq!(thresholds.land_color(-1.5), BEACH_COLOR);
    assert_eq!(thresholds.land_color(-1.6), MUD_COLOR);
}

#[test]
fn should_let_the_lowest_matching_band_win_when_bands_overlap() {
    let mut config = small_config();
    // push the beach threshold above the peak threshold
    config.biome.beach_offset = 5.0;
    let thresholds = BiomeThresholds::from_config(&config);

    assert_eq!(thresholds.land_color(thresholds.peak - 0.01), BEACH_COLOR);
}

#[test]
fn should_skip_cells_deep_under_water() {
    let config = small_config();
    let land = HeightGrid::flat(10, config.terrain.map_size, -10.0);
    let mut geometry = SceneGeometry::new();

    assert_eq!(triangulate_land(&land, &config, &mut geometry), 0);
    assert!(geometry.is_empty());
}

#[test]
fn should_emit_two_upward_triangles_per_flat_cell() {
    let config = small_config();
    let land = HeightGrid::flat(5, config.terrain.map_size, -1.0);
    let mut geometry = SceneGeometry::new();

    let vertices = triangulate_land(&land, &config, &mut geometry);

    assert_eq!(vertices, 16 * 6);
    assert_consistent(&geometry);
    assert_eq!(geometry.degenerate_triangles(), 0);
    for normal in geometry.normals() {
        assert!(approx_eq(normal[0], 0.0));
        assert!(approx_eq(normal[1], 1.0));
        assert!(approx_eq(normal[2], 0.0));
    }
    for color in geometry.colors() {
        assert_eq!(color_of(*color), GRASS_COLOR);
    }
    for shininess in geometry.shininess() {
        assert_eq!(*shininess, config.terrain.shininess);
    }
}

#[test]
fn should_triangulate_the_same_grid_identically() {
    let config = small_config();
    let mut rng = rng(4);
    let params = LandParams::random(&config, &mut rng);
    let land = generate_land(&config, &params, &mut rng).unwrap();

    let mut first = SceneGeometry::new();
    let mut second = SceneGeometry::new();
    triangulate_land(&land, &config, &mut first);
    triangulate_land(&land, &config, &mut second);

    assert_eq!(first, second);
    assert_consistent(&first);
}

#[test]
fn should_reject_a_single_point_lattice() {
    let mut config = small_config();
    config.terrain.land_resolution = 1;
    let mut rng = rng(5);
    let params = LandParams::random(&config, &mut rng);

    match generate_land(&config, &params, &mut rng) {
        Err(SceneError::InvalidConfig { field, .. }) => {
            assert_eq!(field, "terrain.land_resolution")
        }
        other => panic!("expected an invalid config, got {:?}", other),
    }
}

#[test]
fn should_look_up_the_nearest_lattice_point() {
    let land = HeightGrid::from_fn(5, 2.0, |i, j, x, z| {
        scenery_ngin::math::vec3(x, (i * 10 + j) as f32, z)
    });

    assert_eq!(land.nearest_index(-2.0), 0);
    assert_eq!(land.nearest_index(2.0), 4);
    assert_eq!(land.nearest_index(0.1), 2);
    assert_eq!(land.nearest_index(100.0), 4);
    assert_eq!(land.nearest_index(-100.0), 0);
    assert_eq!(land.elevation_near(1.0, -1.0), 31.0);
}

#[test]
fn should_judge_submersion_by_the_first_corner_only() {
    let config = small_config();
    let size = config.terrain.map_size;
    let mut geometry = SceneGeometry::new();

    // one cell; only its (0, 0) corner is deep under water
    let sunken_corner = HeightGrid::from_fn(2, size, |i, j, x, z| {
        let y = if (i, j) == (0, 0) { -10.0 } else { -1.0 };
        scenery_ngin::math::vec3(x, y, z)
    });
    assert_eq!(triangulate_land(&sunken_corner, &config, &mut geometry), 0);

    // the mirror case: only the first corner is dry
    let dry_corner = HeightGrid::from_fn(2, size, |i, j, x, z| {
        let y = if (i, j) == (0, 0) { -1.0 } else { -10.0 };
        scenery_ngin::math::vec3(x, y, z)
    });
    assert_eq!(triangulate_land(&dry_corner, &config, &mut geometry), 6);
    assert_eq!(color_of(geometry.colors()[0]), GRASS_COLOR);
}

#[test]
fn should_only_flag_border_indices_as_edges() {
    let land = HeightGrid::flat(4, 1.0, 0.0);

    assert!(is_edge_index(0, 2, 4));
    assert!(is_edge_index(2, 3, 4));
    assert!(!is_edge_index(1, 2, 4));
    assert!(is_edge_index(0, 0, 1));
    assert_eq!(land.is_edge(1, 1), is_edge_index(1, 1, 4));
    assert_eq!(land.is_edge(3, 1), is_edge_index(3, 1, 4));
}
