//! Fuel profile model
//!
//! Stoichiometric AFR and density for each named fuel, grouped into
//! versioned constant tables.

use serde::{Deserialize, Serialize};

use crate::blend::{BlendError, BlendOutcome};

/// Selectable primary fuel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    #[serde(rename = "Nitro+")]
    NitroPlus,
    #[serde(rename = "V-Power")]
    VPower,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::NitroPlus => "Nitro+",
            FuelType::VPower => "V-Power",
        }
    }

    /// Resolve a selector token. Unmapped tokens fail closed.
    pub fn parse(s: &str) -> BlendOutcome<Self> {
        match s.trim().to_lowercase().as_str() {
            "nitro+" | "nitro" | "nitro_plus" | "nitroplus" => Ok(FuelType::NitroPlus),
            "v-power" | "vpower" | "v_power" => Ok(FuelType::VPower),
            _ => Err(BlendError::UnknownFuelType {
                fuel_type: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combustion constants for one fuel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelProfile {
    /// Stoichiometric air-fuel ratio of the neat fuel
    pub afr: f64,
    /// Density in g/ml
    pub density: f64,
}

/// The fixed secondary additive. Not selectable.
pub const M5: FuelProfile = FuelProfile {
    afr: 6.5,
    density: 0.80,
};

/// Display name of the secondary additive
pub const M5_NAME: &str = "M5";

/// Versioned fuel constant table
///
/// `Initial` carries the first published Nitro+ AFR (13.0); `Current` uses
/// 14.7 and adds V-Power. The two are kept side by side, never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileRevision {
    Initial,
    #[default]
    Current,
}

impl ProfileRevision {
    pub fn all() -> &'static [ProfileRevision] {
        &[ProfileRevision::Initial, ProfileRevision::Current]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileRevision::Initial => "initial",
            ProfileRevision::Current => "current",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "initial" | "v1" => Some(ProfileRevision::Initial),
            "current" | "v2" => Some(ProfileRevision::Current),
            _ => None,
        }
    }

    /// Fuel types offered by this revision
    pub fn fuel_types(&self) -> &'static [FuelType] {
        match self {
            ProfileRevision::Initial => &[FuelType::NitroPlus],
            ProfileRevision::Current => &[FuelType::NitroPlus, FuelType::VPower],
        }
    }

    /// Look up the profile for a fuel type in this revision's table
    pub fn profile(&self, fuel_type: FuelType) -> BlendOutcome<FuelProfile> {
        let profile = match (self, fuel_type) {
            (ProfileRevision::Initial, FuelType::NitroPlus) => Some(FuelProfile {
                afr: 13.0,
                density: 0.74,
            }),
            (ProfileRevision::Initial, FuelType::VPower) => None,
            (ProfileRevision::Current, FuelType::NitroPlus) => Some(FuelProfile {
                afr: 14.7,
                density: 0.74,
            }),
            (ProfileRevision::Current, FuelType::VPower) => Some(FuelProfile {
                afr: 14.7,
                density: 0.72,
            }),
        };

        profile.ok_or_else(|| BlendError::UnknownFuelType {
            fuel_type: fuel_type.as_str().to_string(),
        })
    }
}

impl std::fmt::Display for ProfileRevision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
