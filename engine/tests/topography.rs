use engine::topography::{canyon_cross_section, synthetic_canyon_topography};

#[test]
fn grid_dimensions_match_request() {
    let grid = synthetic_canyon_topography(101, 101);
    assert_eq!(grid.nx, 101);
    assert_eq!(grid.ny, 101);
    assert_eq!(grid.x_km.len(), 101);
    assert_eq!(grid.y_km.len(), 101);
    assert_eq!(grid.elevation_m.len(), 101 * 101);
    assert_eq!(grid.x_km[0], -100.0);
    assert_eq!(grid.x_km[100], 100.0);
}

#[test]
fn seafloor_never_rises_above_sea_level() {
    let grid = synthetic_canyon_topography(60, 40);
    for &z in &grid.elevation_m {
        assert!(z <= 0.0, "elevation {z} above sea level");
        assert!(z.is_finite());
    }
}

#[test]
fn deepest_point_sits_in_the_main_canyon() {
    let grid = synthetic_canyon_topography(101, 101);
    let mut min_idx = 0;
    for (i, &z) in grid.elevation_m.iter().enumerate() {
        if z < grid.elevation_m[min_idx] {
            min_idx = i;
        }
    }
    let row = min_idx / grid.nx;
    let col = min_idx % grid.nx;
    // The side depression pulls the minimum slightly off the (20, 30) center.
    assert!((grid.x_km[col] - 20.0).abs() <= 4.0, "min at x = {}", grid.x_km[col]);
    assert!((grid.y_km[row] - 30.0).abs() <= 4.0, "min at y = {}", grid.y_km[row]);
    // Main depression is ~1000 m deep plus a small side-canyon contribution.
    let min = grid.elevation_m[min_idx];
    assert!(min < -1000.0 && min > -1100.0, "unexpected canyon depth {min}");
}

#[test]
fn cross_section_follows_a_grid_row() {
    let grid = synthetic_canyon_topography(51, 21);
    let (distance, elevation) = canyon_cross_section(&grid, 10).expect("row in range");
    assert_eq!(distance.len(), 51);
    assert_eq!(elevation.len(), 51);
    assert_eq!(distance[0], 0.0);
    assert!((distance[50] - 200.0).abs() < 1e-9);
    assert_eq!(elevation[25], grid.at(10, 25));
    assert!(canyon_cross_section(&grid, 21).is_none());
}
