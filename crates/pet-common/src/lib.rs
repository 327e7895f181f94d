//! Common types and utilities shared across the PET estimation crates.

pub mod coord;
pub mod error;
pub mod grid;
pub mod weather;

pub use coord::{Coordinate, CoordinateError};
pub use error::{PetError, PetResult};
pub use grid::GridCell;
pub use weather::WeatherObservation;
