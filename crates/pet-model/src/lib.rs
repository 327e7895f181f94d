//! Physiological Equivalent Temperature (PET) scoring.
//!
//! A model maps six features (SVF, GVI, BVI, air temperature, humidity,
//! wind speed) to a PET value in °C. [`LinearPetModel`] expresses the
//! formula as data; any other regression model can sit behind
//! [`PetModel`].

pub mod error;
pub mod features;
pub mod linear;
pub mod model;

pub use error::ModelError;
pub use features::{Feature, FeatureRange, InputRanges, PetFeatures};
pub use linear::{LinearCoefficients, LinearPetModel};
pub use model::{Contributions, PetEstimate, PetModel};
