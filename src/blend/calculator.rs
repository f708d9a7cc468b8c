//! Blend calculation
//!
//! Turns a validated [`BlendRequest`] into mixing volumes and an AFR target window.

use crate::models::{BlendRequest, BlendResult, FuelProfile, Split, M5};

use super::error::{BlendError, BlendOutcome};
use super::units::{grams_to_ml, lube_volume_ml, AFR_LEAN_FACTOR, AFR_RICH_FACTOR};

/// Compute mixing volumes and AFR targets for a two-component blend
///
/// Checks run in order: finite numbers, positive mass, share range, share
/// sum, fuel profile. The first failure is returned and nothing is computed.
/// A result whose fields overflow `f64` is rejected as a whole.
pub fn compute(request: &BlendRequest) -> BlendOutcome<BlendResult> {
    let result = validate(request)
        .map(|primary| blend(request, &primary))
        .and_then(require_finite_result);

    match &result {
        Ok(r) => tracing::debug!(
            fuel_type = %request.fuel_type,
            revision = %request.revision,
            total_volume = r.total_volume,
            afr_mixture = r.afr_mixture,
            "Blend computed"
        ),
        Err(e) => tracing::warn!(code = e.code(), "Blend rejected: {}", e),
    }

    result
}

/// Run every input check, returning the resolved primary profile
fn validate(request: &BlendRequest) -> BlendOutcome<FuelProfile> {
    let (primary, secondary) = request.split.shares();

    require_finite("total_mass", request.total_mass)?;
    require_finite("primary_share", primary)?;
    require_finite("secondary_share", secondary)?;

    if request.total_mass <= 0.0 {
        return Err(BlendError::NonPositiveMass {
            value: request.total_mass,
        });
    }

    check_split(&request.split)?;

    request.revision.profile(request.fuel_type)
}

fn require_finite(field: &'static str, value: f64) -> BlendOutcome<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BlendError::InvalidNumber {
            field,
            value: value.to_string(),
        })
    }
}

fn require_finite_result(result: BlendResult) -> BlendOutcome<BlendResult> {
    let fields = [
        ("mass_primary", result.mass_primary),
        ("mass_secondary", result.mass_secondary),
        ("volume_primary", result.volume_primary),
        ("volume_secondary", result.volume_secondary),
        ("total_volume", result.total_volume),
        ("lube_volume", result.lube_volume),
        ("afr_mixture", result.afr_mixture),
        ("afr_rich", result.afr_rich),
        ("afr_lean", result.afr_lean),
    ];

    match fields.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((field, _)) => Err(BlendError::ResultOverflow { field }),
        None => Ok(result),
    }
}

/// Range and sum check in the split's own convention
///
/// Both checks allow the convention's tolerance, so a share that rounds to
/// the whole is not rejected by the range check.
pub fn check_split(split: &Split) -> BlendOutcome<()> {
    let convention = split.convention();
    let whole = convention.whole();
    let tolerance = convention.tolerance();
    let (primary, secondary) = split.shares();

    for (field, value) in [("primary_share", primary), ("secondary_share", secondary)] {
        if !(-tolerance..=whole + tolerance).contains(&value) {
            return Err(BlendError::ShareOutOfRange { field, value, whole });
        }
    }

    let actual = primary + secondary;
    let delta = actual - whole;
    if delta.abs() > tolerance {
        return Err(BlendError::PercentageSumMismatch {
            expected: whole,
            actual,
            delta,
            convention,
        });
    }

    Ok(())
}

fn blend(request: &BlendRequest, primary: &FuelProfile) -> BlendResult {
    let (primary_fraction, secondary_fraction) = request.split.fractions();

    let mass_primary = request.total_mass * primary_fraction;
    let mass_secondary = request.total_mass * secondary_fraction;

    let volume_primary = grams_to_ml(mass_primary, primary.density);
    let volume_secondary = grams_to_ml(mass_secondary, M5.density);

    let total_volume = volume_primary + volume_secondary;
    let lube_volume = lube_volume_ml(total_volume);

    let afr_mixture = mixture_afr(primary_fraction, primary.afr, secondary_fraction, M5.afr);

    BlendResult {
        mass_primary,
        mass_secondary,
        volume_primary,
        volume_secondary,
        total_volume,
        lube_volume,
        afr_mixture,
        afr_rich: afr_mixture * AFR_RICH_FACTOR,
        afr_lean: afr_mixture * AFR_LEAN_FACTOR,
    }
}

/// Stoichiometric AFR of a blend from mass fractions
///
/// Weighted harmonic combination by mass fraction: `1 / (f_a/afr_a + f_b/afr_b)`.
/// This is the blend rule itself, not an approximation of the arithmetic mean.
pub fn mixture_afr(fraction_a: f64, afr_a: f64, fraction_b: f64, afr_b: f64) -> f64 {
    1.0 / (fraction_a / afr_a + fraction_b / afr_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FuelType, ProfileRevision, ShareConvention};

    fn request(total_mass: f64, split: Split, fuel_type: FuelType) -> BlendRequest {
        BlendRequest {
            total_mass,
            split,
            fuel_type,
            revision: ProfileRevision::Current,
        }
    }

    fn percent(primary: f64, secondary: f64) -> Split {
        Split::new(ShareConvention::Percent, primary, secondary)
    }

    fn fraction(primary: f64, secondary: f64) -> Split {
        Split::new(ShareConvention::Fraction, primary, secondary)
    }

    #[test]
    fn test_nitro_70_30_percent() {
        let r = compute(&request(1000.0, percent(70.0, 30.0), FuelType::NitroPlus)).unwrap();
        assert!((r.mass_primary - 700.0).abs() < 1e-9);
        assert!((r.mass_secondary - 300.0).abs() < 1e-9);
        assert!((r.volume_primary - 945.9459459).abs() < 1e-6);
        assert!((r.volume_secondary - 375.0).abs() < 1e-9);
        assert!((r.total_volume - 1320.9459459).abs() < 1e-6);
        assert!((r.lube_volume - 6.6047297).abs() < 1e-6);
        assert!((r.afr_mixture - 10.6640625).abs() < 1e-9);

        let d = r.display();
        assert_eq!(d.volume_primary, "945.95");
        assert_eq!(d.volume_secondary, "375.00");
        assert_eq!(d.total_volume, "1320.95");
        assert_eq!(d.lube_volume, "6.60");
        assert_eq!(d.afr_mixture, "10.66");
        assert_eq!(d.afr_rich, "9.60");
        assert_eq!(d.afr_lean, "11.20");
    }

    #[test]
    fn test_fraction_and_percent_agree() {
        let a = compute(&request(1000.0, fraction(0.7, 0.3), FuelType::NitroPlus)).unwrap();
        let b = compute(&request(1000.0, percent(70.0, 30.0), FuelType::NitroPlus)).unwrap();
        assert!((a.total_volume - b.total_volume).abs() < 1e-9);
        assert!((a.afr_mixture - b.afr_mixture).abs() < 1e-9);
    }

    #[test]
    fn test_vpower_uses_its_density() {
        let r = compute(&request(1000.0, percent(60.0, 40.0), FuelType::VPower)).unwrap();
        assert!((r.volume_primary - 833.3333333).abs() < 1e-6);
        assert!((r.volume_secondary - 500.0).abs() < 1e-9);
        assert_eq!(r.display().afr_mixture, "9.77");
    }

    #[test]
    fn test_initial_revision_nitro_afr() {
        let mut req = request(1000.0, percent(70.0, 30.0), FuelType::NitroPlus);
        req.revision = ProfileRevision::Initial;
        let r = compute(&req).unwrap();
        assert!((r.afr_mixture - 10.0).abs() < 1e-9);
        assert!((r.afr_rich - 9.0).abs() < 1e-9);
        assert!((r.afr_lean - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_initial_revision_rejects_vpower() {
        let mut req = request(1000.0, percent(70.0, 30.0), FuelType::VPower);
        req.revision = ProfileRevision::Initial;
        assert!(matches!(
            compute(&req),
            Err(BlendError::UnknownFuelType { .. })
        ));
    }

    #[test]
    fn test_percent_sum_mismatch() {
        let err = compute(&request(1000.0, percent(60.0, 30.0), FuelType::NitroPlus)).unwrap_err();
        match err {
            BlendError::PercentageSumMismatch {
                expected,
                actual,
                delta,
                convention,
            } => {
                assert_eq!(expected, 100.0);
                assert_eq!(actual, 90.0);
                assert_eq!(delta, -10.0);
                assert_eq!(convention, ShareConvention::Percent);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_percent_tolerance_is_loose() {
        assert!(check_split(&percent(70.00004, 29.99999)).is_ok());
        assert!(check_split(&percent(70.001, 30.0)).is_err());
    }

    #[test]
    fn test_fraction_tolerance_is_strict() {
        assert!(check_split(&fraction(0.7, 0.3)).is_ok());
        assert!(check_split(&fraction(0.70001, 0.3)).is_err());
        // Accepted under the percent regime, not under the fraction regime
        assert!(check_split(&fraction(0.700000001, 0.3)).is_err());
    }

    #[test]
    fn test_pure_primary_and_pure_additive() {
        let all_nitro = compute(&request(740.0, percent(100.0, 0.0), FuelType::NitroPlus)).unwrap();
        assert!((all_nitro.total_volume - 1000.0).abs() < 1e-9);
        assert!((all_nitro.afr_mixture - 14.7).abs() < 1e-9);

        let all_m5 = compute(&request(800.0, percent(0.0, 100.0), FuelType::NitroPlus)).unwrap();
        assert!((all_m5.total_volume - 1000.0).abs() < 1e-9);
        assert!((all_m5.afr_mixture - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_negative_share_rejected_even_if_sum_matches() {
        let err = compute(&request(1000.0, percent(120.0, -20.0), FuelType::NitroPlus)).unwrap_err();
        assert!(matches!(err, BlendError::ShareOutOfRange { field: "primary_share", .. }));
    }

    #[test]
    fn test_share_at_whole_within_tolerance_is_accepted() {
        assert!(check_split(&percent(100.00005, 0.0)).is_ok());
        assert!(check_split(&percent(0.0, 100.00005)).is_ok());
        let r = compute(&request(1000.0, percent(100.00005, 0.0), FuelType::NitroPlus)).unwrap();
        assert!((r.afr_mixture - 14.7).abs() < 1e-4);
        // Beyond the tolerance is still out of range
        assert!(matches!(
            check_split(&percent(100.001, 0.0)),
            Err(BlendError::ShareOutOfRange { field: "primary_share", .. })
        ));
    }

    #[test]
    fn test_overflowing_mass_is_rejected() {
        let err = compute(&request(1.7e308, percent(70.0, 30.0), FuelType::NitroPlus)).unwrap_err();
        assert!(matches!(err, BlendError::ResultOverflow { .. }));
        assert_eq!(err.code(), "result_overflow");
    }

    #[test]
    fn test_non_positive_mass_rejected() {
        let err = compute(&request(0.0, percent(70.0, 30.0), FuelType::NitroPlus)).unwrap_err();
        assert_eq!(err, BlendError::NonPositiveMass { value: 0.0 });
    }

    #[test]
    fn test_nan_rejected_as_invalid_number() {
        let err = compute(&request(f64::NAN, percent(70.0, 30.0), FuelType::NitroPlus)).unwrap_err();
        assert!(matches!(err, BlendError::InvalidNumber { field: "total_mass", .. }));

        let err = compute(&request(1000.0, percent(70.0, f64::INFINITY), FuelType::NitroPlus))
            .unwrap_err();
        assert!(matches!(err, BlendError::InvalidNumber { field: "secondary_share", .. }));
    }

    #[test]
    fn test_mixture_afr_is_harmonic() {
        // Equal mass of 14.7 and 6.5 -> 2 / (1/14.7 + 1/6.5)
        let afr = mixture_afr(0.5, 14.7, 0.5, 6.5);
        let expected = 2.0 / (1.0 / 14.7 + 1.0 / 6.5);
        assert!((afr - expected).abs() < 1e-12);
        // Lies below the mass-weighted arithmetic mean
        assert!(afr < 0.5 * 14.7 + 0.5 * 6.5);
    }
}
