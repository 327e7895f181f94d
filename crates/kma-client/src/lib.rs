//! Client for the KMA short-range forecast open API
//! (`VilageFcstInfoService_2.0`).
//!
//! Two products are supported:
//! - Ultra short-term nowcast (`getUltraSrtNcst`): hourly observations
//! - Village forecast (`getVilageFcst`): 3-hourly forecast runs
//!
//! Both are addressed by KMA grid cell and a base date/time. The rules for
//! choosing the base time live in [`base_time`] and take an explicit clock
//! so they can be tested.

pub mod base_time;
pub mod client;
pub mod error;
pub mod response;
pub mod source;

pub use base_time::{forecast_base, kst_now, nowcast_base, BaseTime};
pub use client::{KmaClient, KmaConfig, Product};
pub use error::KmaError;
pub use response::{decode_forecast, decode_nowcast};
pub use source::WeatherSource;
