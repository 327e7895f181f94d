//! Forecast grid addressing.

use serde::{Deserialize, Serialize};

/// Integer address of a cell on the KMA forecast grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub nx: i32,
    pub ny: i32,
}

impl GridCell {
    pub fn new(nx: i32, ny: i32) -> Self {
        Self { nx, ny }
    }
}

impl From<(i32, i32)> for GridCell {
    fn from((nx, ny): (i32, i32)) -> Self {
        Self { nx, ny }
    }
}

impl std::fmt::Display for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.nx, self.ny)
    }
}
