//! Fuel Blend Status Tool
//!
//! Provides runtime status information about the fuel blend service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::models::ProfileRevision;

/// Blend calculation instructions for AI assistants
pub const BLEND_INSTRUCTIONS: &str = r#"
# Fuel Blend Calculator Instructions

This guide explains how to size a two-component fuel blend with the fuel blend tools.

## Overview

A blend is a primary racing fuel (Nitro+ or V-Power) mixed with the M5 additive.
Given a total mass in grams and the mass split between the two, `calculate_blend` returns:

| Field | Unit | Meaning |
|-------|------|---------|
| volume_primary | ml | Volume of primary fuel to measure out |
| volume_secondary | ml | Volume of M5 to measure out |
| total_volume | ml | Sum of both volumes |
| lube_volume | ml | Lubricant to add (5 ml per liter of blend) |
| afr_mixture | - | Stoichiometric AFR of the blend |
| afr_rich | - | Rich target (0.9 x mixture) for maximum power |
| afr_lean | - | Lean target (1.05 x mixture) for efficiency |

All values are rounded to 2 decimals.

---

## Share Conventions

Pass `convention` explicitly. Never mix the two in one call.

| convention | primary_share + secondary_share | Tolerance |
|------------|--------------------------------|-----------|
| **percent** (default) | 100 | 0.0001 |
| **fraction** | 1.0 | machine epsilon |

Example: 70% Nitro+ and 30% M5 is `primary_share: "70", secondary_share: "30"`
with `convention: "percent"`, or `"0.7"` / `"0.3"` with `convention: "fraction"`.

---

## Profile Revisions

Fuel constants are versioned. Call `list_fuel_profiles` to see them.

- **current** (default): Nitro+ AFR 14.7, density 0.74; V-Power AFR 14.7, density 0.72
- **initial**: Nitro+ AFR 13.0, density 0.74 (V-Power not available)

M5 is always AFR 6.5, density 0.80.

---

## Errors

A rejected call returns `success: false` with a `code`:

- `invalid_number` - a field is not a finite number
- `non_positive_mass` - total mass is zero or negative
- `share_out_of_range` - a share is below 0 or above the whole (beyond the tolerance)
- `percentage_sum_mismatch` - shares do not add up to the whole
- `unknown_fuel_type` - fuel type is not offered by the selected revision
- `result_overflow` - total mass is so large a volume or AFR is not a finite number

Fix the input and call again. No partial results are returned.
"#;

/// Runtime status of the fuel blend service
#[derive(Debug, Clone, Serialize)]
pub struct BlendServiceStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Revision used when a call does not name one
    pub default_revision: ProfileRevision,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    default_revision: ProfileRevision,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(default_revision: ProfileRevision) -> Self {
        Self {
            start_time: Instant::now(),
            default_revision,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> BlendServiceStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        BlendServiceStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            default_revision: self.default_revision,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
