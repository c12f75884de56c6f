//! # Maximum Lidocaine Dose
//!
//! Weight-based maximum lidocaine doses with and without epinephrine.
//! The per-kilogram formulas are capped by absolute ceilings regardless
//! of weight, and the milligram maxima are also expressed as injection
//! volumes at the two common stock concentrations.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// 4.5 mg/kg without epinephrine, hard-capped at 300 mg
const MG_PER_KG_PLAIN: f64 = 4.5;
const MAX_PLAIN_MG: f64 = 300.0;

/// 7 mg/kg with epinephrine, hard-capped at 500 mg
const MG_PER_KG_WITH_EPI: f64 = 7.0;
const MAX_WITH_EPI_MG: f64 = 500.0;

/// 1% lidocaine = 10 mg/ml, 2% = 20 mg/ml
const ONE_PERCENT_MG_PER_ML: f64 = 10.0;
const TWO_PERCENT_MG_PER_ML: f64 = 20.0;

/// Input parameters for the lidocaine dose calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LidocaineInput {
    /// Patient weight in kilograms
    pub weight_kg: f64,
}

impl LidocaineInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(CalcError::invalid_input(
                "weight_kg",
                self.weight_kg.to_string(),
                "Weight must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from the lidocaine dose calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LidocaineResult {
    /// Maximum dose without epinephrine (mg)
    pub max_plain_mg: f64,
    /// Maximum dose with epinephrine (mg)
    pub max_with_epi_mg: f64,
    /// Plain maximum as 1% lidocaine volume (ml)
    pub plain_1pct_ml: f64,
    /// Plain maximum as 2% lidocaine volume (ml)
    pub plain_2pct_ml: f64,
    /// With-epinephrine maximum as 1% volume (ml)
    pub with_epi_1pct_ml: f64,
    /// With-epinephrine maximum as 2% volume (ml)
    pub with_epi_2pct_ml: f64,
}

/// Calculate maximum lidocaine doses for a patient weight.
pub fn calculate(input: &LidocaineInput) -> CalcResult<LidocaineResult> {
    input.validate()?;

    let max_plain_mg = (input.weight_kg * MG_PER_KG_PLAIN).min(MAX_PLAIN_MG);
    let max_with_epi_mg = (input.weight_kg * MG_PER_KG_WITH_EPI).min(MAX_WITH_EPI_MG);

    Ok(LidocaineResult {
        max_plain_mg,
        max_with_epi_mg,
        plain_1pct_ml: max_plain_mg / ONE_PERCENT_MG_PER_ML,
        plain_2pct_ml: max_plain_mg / TWO_PERCENT_MG_PER_ML,
        with_epi_1pct_ml: max_with_epi_mg / ONE_PERCENT_MG_PER_ML,
        with_epi_2pct_ml: max_with_epi_mg / TWO_PERCENT_MG_PER_ML,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_kilogram_doses() {
        let result = calculate(&LidocaineInput { weight_kg: 20.0 }).unwrap();
        assert_eq!(result.max_plain_mg, 90.0);
        assert_eq!(result.max_with_epi_mg, 140.0);
    }

    #[test]
    fn test_absolute_ceilings_override_formula() {
        // 100 kg * 4.5 = 450 mg, but the ceiling is 300 mg.
        let result = calculate(&LidocaineInput { weight_kg: 100.0 }).unwrap();
        assert_eq!(result.max_plain_mg, 300.0);
        // 100 kg * 7 = 700 mg, ceiling 500 mg.
        assert_eq!(result.max_with_epi_mg, 500.0);
    }

    #[test]
    fn test_volume_derivation() {
        let result = calculate(&LidocaineInput { weight_kg: 100.0 }).unwrap();
        assert_eq!(result.plain_1pct_ml, 30.0);
        assert_eq!(result.plain_2pct_ml, 15.0);
        assert_eq!(result.with_epi_1pct_ml, 50.0);
        assert_eq!(result.with_epi_2pct_ml, 25.0);
    }

    #[test]
    fn test_invalid_weight_rejected() {
        assert!(calculate(&LidocaineInput { weight_kg: 0.0 }).is_err());
        assert!(calculate(&LidocaineInput { weight_kg: -70.0 }).is_err());
        assert!(calculate(&LidocaineInput {
            weight_kg: f64::INFINITY,
        })
        .is_err());
    }
}
