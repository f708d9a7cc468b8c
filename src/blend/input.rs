//! Raw input parsing
//!
//! Converts field values from the presentation layer into a typed request.

use crate::models::{BlendRequest, FuelType, ProfileRevision, RawBlendInput, ShareConvention, Split};

use super::error::{BlendError, BlendOutcome};

/// Parse a single numeric field. Empty, non-numeric and non-finite values fail.
pub fn parse_number(field: &'static str, value: &str) -> BlendOutcome<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| BlendError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Build a [`BlendRequest`] from raw field values
///
/// Numbers are checked before the fuel type, so a form with both a bad
/// number and a bad selection reports the number.
pub fn parse_request(
    raw: &RawBlendInput,
    convention: ShareConvention,
    revision: ProfileRevision,
) -> BlendOutcome<BlendRequest> {
    let total_mass = parse_number("total_mass", &raw.total_mass)?;
    let primary = parse_number("primary_share", &raw.primary_share)?;
    let secondary = parse_number("secondary_share", &raw.secondary_share)?;
    let fuel_type = FuelType::parse(&raw.fuel_type)?;

    Ok(BlendRequest {
        total_mass,
        split: Split::new(convention, primary, secondary),
        fuel_type,
        revision,
    })
}
