//! Blend constants and unit helpers
//!
//! Fixed domain ratios plus the gram/milliliter conversion used by the calculator.

// ============================================================================
// Lubricant
// ============================================================================

/// Milliliters of lubricant per liter of fuel blend
pub const LUBE_ML_PER_LITER: f64 = 5.0;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Lubricant volume per unit volume of blend (5 ml per 1000 ml)
pub const LUBE_RATIO: f64 = LUBE_ML_PER_LITER / ML_PER_LITER;

// ============================================================================
// AFR Target Window
// ============================================================================

/// Multiplier applied to the mixture AFR for the rich (maximum power) target
pub const AFR_RICH_FACTOR: f64 = 0.9;
/// Multiplier applied to the mixture AFR for the lean (efficiency) target
pub const AFR_LEAN_FACTOR: f64 = 1.05;

// ============================================================================
// Share Tolerances
// ============================================================================

/// Sum tolerance when shares are given as 0-1 fractions
pub const FRACTION_SUM_TOLERANCE: f64 = f64::EPSILON;
/// Sum tolerance when shares are given as 0-100 percentages
pub const PERCENT_SUM_TOLERANCE: f64 = 1e-4;

/// Convert a mass in grams to a volume in milliliters
pub fn grams_to_ml(mass_g: f64, density_g_per_ml: f64) -> f64 {
    mass_g / density_g_per_ml
}

/// Convert a volume in milliliters to a mass in grams
pub fn ml_to_grams(volume_ml: f64, density_g_per_ml: f64) -> f64 {
    volume_ml * density_g_per_ml
}

/// Lubricant volume for a given blend volume
pub fn lube_volume_ml(total_volume_ml: f64) -> f64 {
    total_volume_ml * LUBE_RATIO
}

/// Round to 2 decimal places for display
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lube_ratio() {
        assert_eq!(LUBE_RATIO, 0.005);
        assert!((lube_volume_ml(1000.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_mass_volume_conversion() {
        // 700g at 0.74 g/ml = ~945.95 ml
        let ml = grams_to_ml(700.0, 0.74);
        assert!((ml - 945.9459).abs() < 0.001);
        assert!((ml_to_grams(ml, 0.74) - 700.0).abs() < 1e-9);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(945.945945), 945.95);
        assert_eq!(round2(6.604729), 6.6);
        assert_eq!(round2(375.0), 375.0);
    }

    #[test]
    fn test_afr_window_brackets_mixture() {
        assert!(AFR_RICH_FACTOR < 1.0);
        assert!(AFR_LEAN_FACTOR > 1.0);
    }
}
