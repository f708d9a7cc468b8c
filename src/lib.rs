//! Fuel Blend Calculator Library
//!
//! Mixing volumes and AFR targets for a primary racing fuel blended with M5.

pub mod blend;
pub mod build_info;
pub mod mcp;
pub mod models;
pub mod tools;
