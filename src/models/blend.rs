//! Blend request and result models
//!
//! Both are plain values built fresh for each calculation.

use serde::{Deserialize, Serialize};

use super::fuel_profile::{FuelType, ProfileRevision};
use crate::blend::units::{round2, FRACTION_SUM_TOLERANCE, PERCENT_SUM_TOLERANCE};

/// How the two shares of a split are expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareConvention {
    /// 0-1 fractions summing to 1.0
    Fraction,
    /// 0-100 percentages summing to 100
    Percent,
}

impl ShareConvention {
    /// The value both shares must add up to
    pub fn whole(&self) -> f64 {
        match self {
            ShareConvention::Fraction => 1.0,
            ShareConvention::Percent => 100.0,
        }
    }

    /// Allowed deviation of the share sum from `whole()`
    pub fn tolerance(&self) -> f64 {
        match self {
            ShareConvention::Fraction => FRACTION_SUM_TOLERANCE,
            ShareConvention::Percent => PERCENT_SUM_TOLERANCE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShareConvention::Fraction => "fraction",
            ShareConvention::Percent => "percent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fraction" | "fractions" => Some(ShareConvention::Fraction),
            "percent" | "percentage" | "percentages" | "%" => Some(ShareConvention::Percent),
            _ => None,
        }
    }
}

impl std::fmt::Display for ShareConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary/secondary mass shares, both in the same convention
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "convention", rename_all = "lowercase")]
pub enum Split {
    Fraction { primary: f64, secondary: f64 },
    Percent { primary: f64, secondary: f64 },
}

impl Split {
    pub fn new(convention: ShareConvention, primary: f64, secondary: f64) -> Self {
        match convention {
            ShareConvention::Fraction => Split::Fraction { primary, secondary },
            ShareConvention::Percent => Split::Percent { primary, secondary },
        }
    }

    pub fn convention(&self) -> ShareConvention {
        match self {
            Split::Fraction { .. } => ShareConvention::Fraction,
            Split::Percent { .. } => ShareConvention::Percent,
        }
    }

    /// Raw (primary, secondary) in the split's own convention
    pub fn shares(&self) -> (f64, f64) {
        match *self {
            Split::Fraction { primary, secondary } | Split::Percent { primary, secondary } => {
                (primary, secondary)
            }
        }
    }

    /// (primary, secondary) normalised to the 0-1 range
    pub fn fractions(&self) -> (f64, f64) {
        let (primary, secondary) = self.shares();
        let whole = self.convention().whole();
        (primary / whole, secondary / whole)
    }
}

/// Input for one blend calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendRequest {
    /// Total blend mass in grams
    pub total_mass: f64,
    pub split: Split,
    pub fuel_type: FuelType,
    #[serde(default)]
    pub revision: ProfileRevision,
}

/// Unparsed field values as they arrive from a form or tool call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBlendInput {
    pub total_mass: String,
    pub primary_share: String,
    pub secondary_share: String,
    pub fuel_type: String,
}

/// Full-precision calculation output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendResult {
    /// Grams
    pub mass_primary: f64,
    pub mass_secondary: f64,
    /// Milliliters
    pub volume_primary: f64,
    pub volume_secondary: f64,
    pub total_volume: f64,
    pub lube_volume: f64,
    pub afr_mixture: f64,
    pub afr_rich: f64,
    pub afr_lean: f64,
}

impl BlendResult {
    /// Copy with every field rounded to 2 decimal places
    pub fn rounded(&self) -> Self {
        Self {
            mass_primary: round2(self.mass_primary),
            mass_secondary: round2(self.mass_secondary),
            volume_primary: round2(self.volume_primary),
            volume_secondary: round2(self.volume_secondary),
            total_volume: round2(self.total_volume),
            lube_volume: round2(self.lube_volume),
            afr_mixture: round2(self.afr_mixture),
            afr_rich: round2(self.afr_rich),
            afr_lean: round2(self.afr_lean),
        }
    }

    /// Two-decimal strings for direct display
    pub fn display(&self) -> BlendDisplay {
        BlendDisplay {
            mass_primary: format!("{:.2}", self.mass_primary),
            mass_secondary: format!("{:.2}", self.mass_secondary),
            volume_primary: format!("{:.2}", self.volume_primary),
            volume_secondary: format!("{:.2}", self.volume_secondary),
            total_volume: format!("{:.2}", self.total_volume),
            lube_volume: format!("{:.2}", self.lube_volume),
            afr_mixture: format!("{:.2}", self.afr_mixture),
            afr_rich: format!("{:.2}", self.afr_rich),
            afr_lean: format!("{:.2}", self.afr_lean),
        }
    }
}

/// Display form of a [`BlendResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlendDisplay {
    pub mass_primary: String,
    pub mass_secondary: String,
    pub volume_primary: String,
    pub volume_secondary: String,
    pub total_volume: String,
    pub lube_volume: String,
    pub afr_mixture: String,
    pub afr_rich: String,
    pub afr_lean: String,
}
