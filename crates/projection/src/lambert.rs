//! Lambert Conformal Conic projection on the KMA forecast grid.
//!
//! The Korea Meteorological Administration addresses its short-range
//! forecast products by integer cells on a 5 km grid laid over a secant
//! Lambert cone. This module reproduces that grid exactly.
//!
//! The projection parameters are:
//! - Earth radius: 6371.00877 km
//! - Grid spacing: 5.0 km
//! - Standard parallels: 30.0°N and 60.0°N
//! - Origin: 38.0°N, 126.0°E
//! - Origin offset on the grid: (43, 136)

use std::f64::consts::PI;

use pet_common::{Coordinate, GridCell};

use crate::service_area::{DomainWarning, ServiceArea};

const DEGRAD: f64 = PI / 180.0;
const RADDEG: f64 = 180.0 / PI;

/// Lambert Conformal Conic grid parameters.
///
/// The derived cone constants are computed once in [`LambertGrid::new`] so a
/// single value can be shared across queries.
#[derive(Debug, Clone)]
pub struct LambertGrid {
    /// Earth radius (km)
    pub earth_radius_km: f64,
    /// Grid spacing (km)
    pub grid_km: f64,
    /// First standard parallel in radians
    pub slat1: f64,
    /// Second standard parallel in radians
    pub slat2: f64,
    /// Origin longitude in radians
    pub olon: f64,
    /// Origin latitude in radians
    pub olat: f64,
    /// Grid X coordinate of the origin
    pub xo: f64,
    /// Grid Y coordinate of the origin
    pub yo: f64,
    /// Earth radius in grid units
    re: f64,
    /// Cone constant
    sn: f64,
    /// Scale factor
    sf: f64,
    /// Radius of the origin parallel in grid units
    ro: f64,
    service_area: ServiceArea,
}

impl LambertGrid {
    /// Create a projection from explicit parameters.
    ///
    /// # Arguments
    /// * `earth_radius_km` - Earth radius (km)
    /// * `grid_km` - Grid spacing (km)
    /// * `slat1_deg` - First standard parallel (degrees)
    /// * `slat2_deg` - Second standard parallel (degrees)
    /// * `olon_deg` - Origin longitude (degrees)
    /// * `olat_deg` - Origin latitude (degrees)
    /// * `xo` - Grid X coordinate of the origin
    /// * `yo` - Grid Y coordinate of the origin
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        earth_radius_km: f64,
        grid_km: f64,
        slat1_deg: f64,
        slat2_deg: f64,
        olon_deg: f64,
        olat_deg: f64,
        xo: f64,
        yo: f64,
    ) -> Self {
        let re = earth_radius_km / grid_km;
        let slat1 = slat1_deg * DEGRAD;
        let slat2 = slat2_deg * DEGRAD;
        let olon = olon_deg * DEGRAD;
        let olat = olat_deg * DEGRAD;

        // Cone constant from the two secant parallels
        let tan_ratio = (PI * 0.25 + slat2 * 0.5).tan() / (PI * 0.25 + slat1 * 0.5).tan();
        let sn = (slat1.cos() / slat2.cos()).ln() / tan_ratio.ln();

        let sf = (PI * 0.25 + slat1 * 0.5).tan();
        let sf = sf.powf(sn) * slat1.cos() / sn;

        let ro = (PI * 0.25 + olat * 0.5).tan();
        let ro = re * sf / ro.powf(sn);

        Self {
            earth_radius_km,
            grid_km,
            slat1,
            slat2,
            olon,
            olat,
            xo,
            yo,
            re,
            sn,
            sf,
            ro,
            service_area: ServiceArea::kma(),
        }
    }

    /// The KMA village forecast grid.
    pub fn kma() -> Self {
        Self::new(
            6371.00877, // earth radius
            5.0,        // grid spacing
            30.0,       // slat1
            60.0,       // slat2
            126.0,      // origin longitude
            38.0,       // origin latitude
            43.0,       // xo
            136.0,      // yo
        )
    }

    /// Replace the service area used by [`LambertGrid::project_checked`].
    pub fn with_service_area(mut self, service_area: ServiceArea) -> Self {
        self.service_area = service_area;
        self
    }

    pub fn service_area(&self) -> &ServiceArea {
        &self.service_area
    }

    /// Cone constant `sn`.
    pub fn cone_constant(&self) -> f64 {
        self.sn
    }

    /// Convert geographic coordinates (degrees) to continuous grid coordinates.
    ///
    /// The result includes the origin offset but not the half-cell shift
    /// applied before truncation in [`LambertGrid::geo_to_grid`].
    pub fn geo_to_grid_f64(&self, lat_deg: f64, lon_deg: f64) -> (f64, f64) {
        let ra = (PI * 0.25 + lat_deg * DEGRAD * 0.5).tan();
        let ra = self.re * self.sf / ra.powf(self.sn);

        // One period of correction at most
        let mut theta = lon_deg * DEGRAD - self.olon;
        if theta > PI {
            theta -= 2.0 * PI;
        }
        if theta < -PI {
            theta += 2.0 * PI;
        }
        theta *= self.sn;

        let x = ra * theta.sin() + self.xo;
        let y = self.ro - ra * theta.cos() + self.yo;
        (x, y)
    }

    /// Convert geographic coordinates (degrees) to a grid cell.
    ///
    /// Performs no range validation. Coordinates far from the service area
    /// still yield a cell, just not a meaningful one.
    pub fn geo_to_grid(&self, lat_deg: f64, lon_deg: f64) -> GridCell {
        let (x, y) = self.geo_to_grid_f64(lat_deg, lon_deg);
        // `as` truncates toward zero
        GridCell::new((x + 0.5) as i32, (y + 0.5) as i32)
    }

    /// Project and flag cells outside the service area.
    pub fn project_checked(&self, lat_deg: f64, lon_deg: f64) -> (GridCell, Option<DomainWarning>) {
        let cell = self.geo_to_grid(lat_deg, lon_deg);
        let warning = self.service_area.check(cell);
        if let Some(ref w) = warning {
            tracing::debug!(lat = lat_deg, lon = lon_deg, %w, "Projected outside service area");
        }
        (cell, warning)
    }

    /// Convert continuous grid coordinates back to geographic coordinates.
    pub fn grid_to_geo_f64(&self, x: f64, y: f64) -> Coordinate {
        let xn = x - self.xo;
        let yn = self.ro - y + self.yo;

        let mut ra = (xn * xn + yn * yn).sqrt();
        if self.sn < 0.0 {
            ra = -ra;
        }
        let alat = (self.re * self.sf / ra).powf(1.0 / self.sn);
        let alat = 2.0 * alat.atan() - PI * 0.5;

        let theta = if xn.abs() <= 0.0 {
            0.0
        } else if yn.abs() <= 0.0 {
            if xn < 0.0 {
                -PI * 0.5
            } else {
                PI * 0.5
            }
        } else {
            xn.atan2(yn)
        };
        let alon = theta / self.sn + self.olon;

        Coordinate::new_unchecked(alat * RADDEG, alon * RADDEG)
    }

    /// Reference coordinate of a grid cell.
    pub fn grid_to_geo(&self, cell: GridCell) -> Coordinate {
        self.grid_to_geo_f64(cell.nx as f64, cell.ny as f64)
    }
}

impl Default for LambertGrid {
    fn default() -> Self {
        Self::kma()
    }
}

/// Project a coordinate onto the KMA forecast grid.
pub fn project_to_grid(lat_deg: f64, lon_deg: f64) -> GridCell {
    LambertGrid::kma().geo_to_grid(lat_deg, lon_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assert_approx_eq;

    #[test]
    fn test_origin_maps_to_offset() {
        let cell = project_to_grid(38.0, 126.0);
        assert_eq!(cell, GridCell::new(43, 136));
    }

    #[test]
    fn test_origin_continuous() {
        let grid = LambertGrid::kma();
        let (x, y) = grid.geo_to_grid_f64(38.0, 126.0);
        assert_approx_eq!(x, 43.0, 1e-9);
        assert_approx_eq!(y, 136.0, 1e-9);
    }

    #[test]
    fn test_cone_constant() {
        let grid = LambertGrid::kma();
        assert_approx_eq!(grid.cone_constant(), 0.715566847180628, 1e-12);
    }

    #[test]
    fn test_seoul_cell() {
        assert_eq!(project_to_grid(37.5665, 126.9780), GridCell::new(60, 127));
    }

    #[test]
    fn test_busan_cell() {
        assert_eq!(project_to_grid(35.1796, 129.0756), GridCell::new(98, 76));
    }

    #[test]
    fn test_truncates_negative_toward_zero() {
        // x ≈ -2241.67 before the half shift
        let cell = project_to_grid(0.0, 0.0);
        assert_eq!(cell, GridCell::new(-2241, 1509));
    }

    #[test]
    fn test_longitude_periodicity() {
        for (lat, lon) in [(35.233, 129.08), (37.5665, 126.978), (33.5, 126.5)] {
            assert_eq!(project_to_grid(lat, lon), project_to_grid(lat, lon + 360.0));
        }
    }

    #[test]
    fn test_inverse_of_origin() {
        let grid = LambertGrid::kma();
        let c = grid.grid_to_geo(GridCell::new(43, 136));
        assert_approx_eq!(c.lat, 38.0, 1e-9);
        assert_approx_eq!(c.lon, 126.0, 1e-9);
    }

    #[test]
    fn test_project_checked_inside() {
        let grid = LambertGrid::kma();
        let (cell, warning) = grid.project_checked(35.233, 129.08);
        assert_eq!(cell, GridCell::new(98, 77));
        assert!(warning.is_none());
    }

    #[test]
    fn test_project_checked_outside() {
        let grid = LambertGrid::kma();
        let (_, warning) = grid.project_checked(51.5, -0.12);
        assert!(warning.is_some());
    }
}
