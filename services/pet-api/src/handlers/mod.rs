//! HTTP request handlers for the PET API.

pub mod common;
pub mod estimate;
pub mod grid;
pub mod health;
pub mod nearest;
pub mod points;
pub mod predict;
pub mod weather;
