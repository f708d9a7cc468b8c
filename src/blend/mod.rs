//! Blend calculation module
//!
//! Validation, mass to volume conversion and AFR targets for a primary fuel
//! blended with the M5 additive.

pub mod calculator;
pub mod error;
pub mod input;
pub mod units;

pub use calculator::{check_split, compute, mixture_afr};
pub use error::{BlendError, BlendOutcome};
pub use input::{parse_number, parse_request};
