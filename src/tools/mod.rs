//! Fuel Blend Tools module
//!
//! MCP tool implementations for the fuel blend calculator.

pub mod blend;
pub mod status;
