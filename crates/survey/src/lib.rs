//! Survey measurement points and nearest-point resolution.
//!
//! Survey points carry the street-level view indices (SVF, GVI, BVI)
//! measured on site. A map query is answered with the closest point that
//! has a usable coordinate.

pub mod distance;
pub mod dms;
pub mod error;
pub mod nearest;
pub mod point;
pub mod point_set;

pub use distance::DistanceMetric;
pub use dms::{parse_dms, DmsParseError};
pub use error::SurveyError;
pub use nearest::{resolve_nearest, Nearest};
pub use point::{MeasurementPoint, ObservedConditions, RawAngle, SurveyRecord, ViewIndices};
pub use point_set::{LoadReport, PointSet};
