//! Properties of the KMA grid projection.

use pet_common::GridCell;
use projection::{project_to_grid, LambertGrid, ServiceArea};
use test_utils::{assert_approx_eq, assert_coords_approx_eq, fixtures::places};

// ============================================================================
// Forward projection
// ============================================================================

#[test]
fn test_projection_is_deterministic() {
    let grid = LambertGrid::kma();
    for &(lat, lon) in &[places::SEOUL, places::BUSAN, places::PNU_CAMPUS, places::JEJU] {
        let first = grid.geo_to_grid(lat, lon);
        for _ in 0..10 {
            assert_eq!(grid.geo_to_grid(lat, lon), first);
        }
        assert_eq!(project_to_grid(lat, lon), first);
    }
}

#[test]
fn test_known_cells() {
    assert_eq!(project_to_grid(38.0, 126.0), GridCell::new(43, 136));
    assert_eq!(project_to_grid(places::SEOUL.0, places::SEOUL.1), GridCell::new(60, 127));
    assert_eq!(project_to_grid(places::BUSAN.0, places::BUSAN.1), GridCell::new(98, 76));
    assert_eq!(
        project_to_grid(places::DEFAULT_SNAPSHOT.0, places::DEFAULT_SNAPSHOT.1),
        GridCell::new(98, 77)
    );
    assert_eq!(project_to_grid(places::JEJU.0, places::JEJU.1), GridCell::new(52, 38));
}

#[test]
fn test_longitude_wraparound() {
    for &(lat, lon) in &[places::SEOUL, places::BUSAN, places::JEJU] {
        assert_eq!(project_to_grid(lat, lon), project_to_grid(lat, lon + 360.0));
        assert_eq!(project_to_grid(lat, lon), project_to_grid(lat, lon - 360.0));
    }
}

#[test]
fn test_out_of_domain_input_still_projects() {
    // New York: meaningless, but defined and finite
    let cell = project_to_grid(40.7, -74.0);
    assert_eq!(cell, GridCell::new(1234, 2045));
}

// ============================================================================
// Inverse projection
// ============================================================================

#[test]
fn test_every_service_cell_roundtrips() {
    let grid = LambertGrid::kma();
    let area = ServiceArea::kma();
    for nx in area.min_nx..=area.max_nx {
        for ny in area.min_ny..=area.max_ny {
            let cell = GridCell::new(nx, ny);
            let coord = grid.grid_to_geo(cell);
            assert_eq!(grid.geo_to_grid(coord.lat, coord.lon), cell, "cell {cell}");
        }
    }
}

#[test]
fn test_inverse_of_seoul_cell_is_near_seoul() {
    let grid = LambertGrid::kma();
    let coord = grid.grid_to_geo(GridCell::new(60, 127));
    assert_approx_eq!(coord.lat, 37.5799, 1e-3);
    assert_approx_eq!(coord.lon, 126.9894, 1e-3);
}

#[test]
fn test_continuous_roundtrip() {
    let grid = LambertGrid::kma();
    let (x, y) = grid.geo_to_grid_f64(places::PNU_CAMPUS.0, places::PNU_CAMPUS.1);
    let back = grid.grid_to_geo_f64(x, y);
    assert_coords_approx_eq!(
        (back.lat, back.lon),
        (places::PNU_CAMPUS.0, places::PNU_CAMPUS.1),
        1e-9
    );
}

// ============================================================================
// Service area
// ============================================================================

#[test]
fn test_korean_locations_have_no_warning() {
    let grid = LambertGrid::kma();
    for &(lat, lon) in &[places::SEOUL, places::BUSAN, places::JEJU, places::PNU_CAMPUS] {
        let (_, warning) = grid.project_checked(lat, lon);
        assert!(warning.is_none(), "unexpected warning at {lat}, {lon}");
    }
}

#[test]
fn test_custom_service_area() {
    let narrow = ServiceArea {
        min_nx: 90,
        max_nx: 100,
        min_ny: 70,
        max_ny: 80,
    };
    let grid = LambertGrid::kma().with_service_area(narrow);
    let (_, busan) = grid.project_checked(places::BUSAN.0, places::BUSAN.1);
    let (cell, seoul) = grid.project_checked(places::SEOUL.0, places::SEOUL.1);
    assert!(busan.is_none());
    let warning = seoul.expect("Seoul is outside the narrow area");
    assert_eq!(warning.cell, cell);
    assert_eq!(warning.area, narrow);
}
