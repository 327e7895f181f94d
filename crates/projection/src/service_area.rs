//! Service area of the forecast grid.
//!
//! The projection is defined everywhere, but the provider only publishes
//! data for a fixed rectangle of cells. Cells outside it are still returned
//! to callers together with a [`DomainWarning`].

use pet_common::GridCell;

/// Inclusive rectangle of grid cells the provider serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceArea {
    pub min_nx: i32,
    pub max_nx: i32,
    pub min_ny: i32,
    pub max_ny: i32,
}

impl ServiceArea {
    /// KMA village forecast grid: 149 x 253 cells, 1-based.
    pub const fn kma() -> Self {
        Self {
            min_nx: 1,
            max_nx: 149,
            min_ny: 1,
            max_ny: 253,
        }
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        (self.min_nx..=self.max_nx).contains(&cell.nx)
            && (self.min_ny..=self.max_ny).contains(&cell.ny)
    }

    /// Return a warning when `cell` lies outside the area.
    pub fn check(&self, cell: GridCell) -> Option<DomainWarning> {
        if self.contains(cell) {
            None
        } else {
            Some(DomainWarning { cell, area: *self })
        }
    }
}

impl Default for ServiceArea {
    fn default() -> Self {
        Self::kma()
    }
}

/// Non-fatal: the projected cell has no provider data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "grid cell {cell} is outside the service area nx {}..={}, ny {}..={}",
    area.min_nx, area.max_nx, area.min_ny, area.max_ny
)]
pub struct DomainWarning {
    pub cell: GridCell,
    pub area: ServiceArea,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_inside() {
        let area = ServiceArea::kma();
        assert!(area.contains(GridCell::new(1, 1)));
        assert!(area.contains(GridCell::new(149, 253)));
    }

    #[test]
    fn test_edges_outside() {
        let area = ServiceArea::kma();
        assert!(!area.contains(GridCell::new(0, 100)));
        assert!(!area.contains(GridCell::new(150, 100)));
        assert!(!area.contains(GridCell::new(50, 0)));
        assert!(!area.contains(GridCell::new(50, 254)));
    }

    #[test]
    fn test_warning_message() {
        let warning = ServiceArea::kma().check(GridCell::new(-2241, 1509)).unwrap();
        assert_eq!(
            warning.to_string(),
            "grid cell (-2241, 1509) is outside the service area nx 1..=149, ny 1..=253"
        );
    }
}
