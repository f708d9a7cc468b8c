//! Blend MCP Tools
//!
//! Tool-facing wrappers around the blend calculator.

use serde::Serialize;

use crate::blend::{self, BlendError};
use crate::models::{
    BlendDisplay, FuelType, ProfileRevision, RawBlendInput, ShareConvention, M5, M5_NAME,
};

/// Response for a successful calculate_blend
#[derive(Debug, Serialize)]
pub struct CalculateBlendResponse {
    pub success: bool,
    pub fuel_type: String,
    pub additive: &'static str,
    pub total_mass_g: f64,
    pub convention: ShareConvention,
    pub revision: ProfileRevision,
    /// Volumes in ml, AFRs dimensionless, all to 2 decimals
    pub result: BlendDisplay,
    pub calculated_at: String,
}

/// Response for a rejected calculate_blend
#[derive(Debug, Serialize)]
pub struct BlendErrorResponse {
    pub success: bool,
    pub code: &'static str,
    pub error: String,
}

impl From<BlendError> for BlendErrorResponse {
    fn from(err: BlendError) -> Self {
        Self {
            success: false,
            code: err.code(),
            error: err.to_string(),
        }
    }
}

/// Parse, validate and compute a blend from raw tool input
pub fn calculate_blend(
    raw: &RawBlendInput,
    convention: ShareConvention,
    revision: ProfileRevision,
) -> Result<CalculateBlendResponse, BlendErrorResponse> {
    let request = blend::parse_request(raw, convention, revision)?;
    let result = blend::compute(&request)?;

    Ok(CalculateBlendResponse {
        success: true,
        fuel_type: request.fuel_type.to_string(),
        additive: M5_NAME,
        total_mass_g: request.total_mass,
        convention,
        revision,
        result: result.display(),
        calculated_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    })
}

/// One row of the fuel profile table
#[derive(Debug, Serialize)]
pub struct FuelProfileEntry {
    pub name: String,
    pub afr: f64,
    pub density_g_per_ml: f64,
    pub selectable: bool,
}

/// Response for list_fuel_profiles
#[derive(Debug, Serialize)]
pub struct ListFuelProfilesResponse {
    pub revision: ProfileRevision,
    pub fuels: Vec<FuelProfileEntry>,
    pub additive: FuelProfileEntry,
}

/// List the primary fuels offered by a revision plus the fixed additive
pub fn list_fuel_profiles(revision: ProfileRevision) -> Result<ListFuelProfilesResponse, String> {
    let fuels = revision
        .fuel_types()
        .iter()
        .map(|fuel: &FuelType| {
            revision.profile(*fuel).map(|p| FuelProfileEntry {
                name: fuel.to_string(),
                afr: p.afr,
                density_g_per_ml: p.density,
                selectable: true,
            })
        })
        .collect::<Result<Vec<_>, BlendError>>()
        .map_err(|e| e.to_string())?;

    Ok(ListFuelProfilesResponse {
        revision,
        fuels,
        additive: FuelProfileEntry {
            name: M5_NAME.to_string(),
            afr: M5.afr,
            density_g_per_ml: M5.density,
            selectable: false,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(total_mass: &str, primary: &str, secondary: &str, fuel_type: &str) -> RawBlendInput {
        RawBlendInput {
            total_mass: total_mass.to_string(),
            primary_share: primary.to_string(),
            secondary_share: secondary.to_string(),
            fuel_type: fuel_type.to_string(),
        }
    }

    #[test]
    fn test_calculate_blend_success() {
        let resp = calculate_blend(
            &raw("1000", "0.7", "0.3", "Nitro+"),
            ShareConvention::Fraction,
            ProfileRevision::Current,
        )
        .unwrap();
        assert!(resp.success);
        assert_eq!(resp.fuel_type, "Nitro+");
        assert_eq!(resp.additive, "M5");
        assert_eq!(resp.result.total_volume, "1320.95");
        assert_eq!(resp.result.lube_volume, "6.60");
    }

    #[test]
    fn test_calculate_blend_sum_mismatch() {
        let err = calculate_blend(
            &raw("1000", "60", "30", "Nitro+"),
            ShareConvention::Percent,
            ProfileRevision::Current,
        )
        .unwrap_err();
        assert!(!err.success);
        assert_eq!(err.code, "percentage_sum_mismatch");
    }

    #[test]
    fn test_calculate_blend_invalid_number() {
        let err = calculate_blend(
            &raw("abc", "70", "30", "Nitro+"),
            ShareConvention::Percent,
            ProfileRevision::Current,
        )
        .unwrap_err();
        assert_eq!(err.code, "invalid_number");
        assert!(err.error.contains("abc"));
    }

    #[test]
    fn test_error_response_serializes_without_result() {
        let err = calculate_blend(
            &raw("1000", "70", "30", "Unobtainium"),
            ShareConvention::Percent,
            ProfileRevision::Current,
        )
        .unwrap_err();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "unknown_fuel_type");
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_list_fuel_profiles() {
        let current = list_fuel_profiles(ProfileRevision::Current).unwrap();
        assert_eq!(current.fuels.len(), 2);
        assert_eq!(current.additive.name, "M5");
        assert!(!current.additive.selectable);

        let initial = list_fuel_profiles(ProfileRevision::Initial).unwrap();
        assert_eq!(initial.fuels.len(), 1);
        assert_eq!(initial.fuels[0].afr, 13.0);
    }
}
