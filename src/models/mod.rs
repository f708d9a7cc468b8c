//! Data models
//!
//! Fuel profiles and the request/result values of a blend calculation.

mod blend;
mod fuel_profile;

pub use blend::{BlendDisplay, BlendRequest, BlendResult, RawBlendInput, ShareConvention, Split};
pub use fuel_profile::{FuelProfile, FuelType, ProfileRevision, M5, M5_NAME};
