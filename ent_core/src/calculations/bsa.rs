//! # Body Surface Area
//!
//! BSA from height and weight, used for systemic drug dosing. Computes
//! the Mosteller and Du Bois formulas side by side; the two differ by a
//! few percent and charts quote either, so both are returned at full
//! precision and rounding is left to the caller.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input parameters for body surface area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BsaInput {
    /// Patient height in centimeters
    pub height_cm: f64,
    /// Patient weight in kilograms
    pub weight_kg: f64,
}

impl BsaInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(CalcError::invalid_input(
                "height_cm",
                self.height_cm.to_string(),
                "Height must be positive",
            ));
        }
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

/// Results from body surface area calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BsaResult {
    /// Mosteller: sqrt(height * weight / 3600), m^2
    pub mosteller_m2: f64,
    /// Du Bois: 0.007184 * height^0.725 * weight^0.425, m^2
    pub du_bois_m2: f64,
}

/// Calculate body surface area by both formulas.
pub fn calculate(input: &BsaInput) -> CalcResult<BsaResult> {
    input.validate()?;

    let mosteller_m2 = (input.height_cm * input.weight_kg / 3600.0).sqrt();
    let du_bois_m2 = 0.007184 * input.height_cm.powf(0.725) * input.weight_kg.powf(0.425);

    Ok(BsaResult {
        mosteller_m2,
        du_bois_m2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mosteller_reference_value() {
        let result = calculate(&BsaInput {
            height_cm: 170.0,
            weight_kg: 70.0,
        })
        .unwrap();
        // sqrt(170 * 70 / 3600) = 1.8184...
        assert!((result.mosteller_m2 - 1.819).abs() < 1e-3);
    }

    #[test]
    fn test_du_bois_tracks_mosteller() {
        let result = calculate(&BsaInput {
            height_cm: 170.0,
            weight_kg: 70.0,
        })
        .unwrap();
        // The two formulas agree within a few percent for typical adults.
        assert!((result.du_bois_m2 - result.mosteller_m2).abs() < 0.05);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(calculate(&BsaInput {
            height_cm: 0.0,
            weight_kg: 70.0,
        })
        .is_err());
        assert!(calculate(&BsaInput {
            height_cm: 170.0,
            weight_kg: -1.0,
        })
        .is_err());
        assert!(calculate(&BsaInput {
            height_cm: f64::NAN,
            weight_kg: 70.0,
        })
        .is_err());
    }

    #[test]
    fn test_serialization() {
        let input = BsaInput {
            height_cm: 170.0,
            weight_kg: 70.0,
        };
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: BsaInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.height_cm, roundtrip.height_cm);
        assert_eq!(input.weight_kg, roundtrip.weight_kg);
    }
}
