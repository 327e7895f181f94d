//! KMA forecast grid projection.
//!
//! Forward and inverse Lambert Conformal Conic transform onto the 5 km
//! village forecast grid, plus the service-area check.

pub mod lambert;
pub mod service_area;

pub use lambert::{project_to_grid, LambertGrid};
pub use service_area::{DomainWarning, ServiceArea};
