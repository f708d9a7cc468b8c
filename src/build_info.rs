//! Build information module
//!
//! Build number and timestamp embedded by `build.rs`, plus package metadata.

use serde::Serialize;

/// Build number, incremented on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("FUELBLEND_BUILD_NUMBER") {
    Some(s) => digits_to_u64(s),
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("FUELBLEND_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Compile-time decimal parse; any non-digit yields 0
const fn digits_to_u64(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut value: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return 0;
        }
        value = value * 10 + (bytes[i] - b'0') as u64;
        i += 1;
    }
    value
}

/// Build metadata reported by the status tool
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }

    /// Banner lines shown on server startup
    pub fn banner(&self) -> Vec<String> {
        let rule = "=".repeat(47);
        vec![
            rule.clone(),
            "  Fuel Blend Calculator".to_string(),
            format!("  Version: {} | Build: {}", self.version, self.build_number),
            format!("  Compiled: {}", self.build_timestamp),
            rule,
        ]
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    for line in BuildInfo::current().banner() {
        eprintln!("{}", line);
    }
}
