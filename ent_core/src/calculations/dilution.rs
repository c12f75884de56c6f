//! # Epinephrine Dilution
//!
//! Volumes for diluting a stock "1:N" epinephrine solution to a weaker
//! target ratio: how much stock to draw up and how much normal saline to
//! add to reach the requested total volume.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input parameters for an epinephrine dilution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DilutionInput {
    /// Starting "1:N" ratio denominator (e.g. 1000 for 1:1,000)
    pub start_ratio: f64,
    /// Desired "1:N" ratio denominator (e.g. 10000 for 1:10,000).
    /// A smaller denominator is a stronger solution.
    pub desired_ratio: f64,
    /// Target total volume (ml)
    pub total_volume_ml: f64,
}

impl DilutionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.start_ratio.is_finite() || self.start_ratio <= 0.0 {
            return Err(CalcError::invalid_input(
                "start_ratio",
                self.start_ratio.to_string(),
                "Starting ratio denominator must be positive",
            ));
        }
        if !self.desired_ratio.is_finite() || self.desired_ratio <= 0.0 {
            return Err(CalcError::invalid_input(
                "desired_ratio",
                self.desired_ratio.to_string(),
                "Desired ratio denominator must be positive",
            ));
        }
        if !self.total_volume_ml.is_finite() || self.total_volume_ml <= 0.0 {
            return Err(CalcError::invalid_input(
                "total_volume_ml",
                self.total_volume_ml.to_string(),
                "Volume must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from an epinephrine dilution calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DilutionResult {
    /// Stock epinephrine volume to draw up (ml)
    pub stock_ml: f64,
    /// Normal saline to add (ml)
    pub diluent_ml: f64,
}

/// Calculate dilution volumes.
///
/// Fails with `InvalidDilution` when the target is not strictly weaker
/// than the stock, or when the computed stock volume would exceed the
/// requested total.
pub fn calculate(input: &DilutionInput) -> CalcResult<DilutionResult> {
    input.validate()?;

    if input.desired_ratio <= input.start_ratio {
        return Err(CalcError::invalid_dilution(
            input.start_ratio,
            input.desired_ratio,
            "desired solution must be weaker than the starting stock",
        ));
    }

    let stock_ml = input.total_volume_ml * input.start_ratio / input.desired_ratio;
    if stock_ml > input.total_volume_ml {
        return Err(CalcError::invalid_dilution(
            input.start_ratio,
            input.desired_ratio,
            "computed stock volume exceeds the target volume",
        ));
    }

    Ok(DilutionResult {
        stock_ml,
        diluent_ml: input.total_volume_ml - stock_ml,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenfold_dilution() {
        // 1:1,000 down to 1:10,000 in 10 ml: 1 ml stock + 9 ml saline.
        let result = calculate(&DilutionInput {
            start_ratio: 1000.0,
            desired_ratio: 10000.0,
            total_volume_ml: 10.0,
        })
        .unwrap();
        assert!((result.stock_ml - 1.0).abs() < 1e-9);
        assert!((result.diluent_ml - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_topical_dilution() {
        // 1:1,000 to 1:100,000 in 20 ml.
        let result = calculate(&DilutionInput {
            start_ratio: 1000.0,
            desired_ratio: 100000.0,
            total_volume_ml: 20.0,
        })
        .unwrap();
        assert!((result.stock_ml - 0.2).abs() < 1e-9);
        assert!((result.diluent_ml - 19.8).abs() < 1e-9);
    }

    #[test]
    fn test_cannot_concentrate() {
        let error = calculate(&DilutionInput {
            start_ratio: 10000.0,
            desired_ratio: 1000.0,
            total_volume_ml: 10.0,
        })
        .unwrap_err();
        assert!(matches!(error, CalcError::InvalidDilution { .. }));
    }

    #[test]
    fn test_equal_ratios_rejected() {
        assert!(matches!(
            calculate(&DilutionInput {
                start_ratio: 1000.0,
                desired_ratio: 1000.0,
                total_volume_ml: 10.0,
            }),
            Err(CalcError::InvalidDilution { .. })
        ));
    }

    #[test]
    fn test_invalid_volume_rejected() {
        assert!(matches!(
            calculate(&DilutionInput {
                start_ratio: 1000.0,
                desired_ratio: 10000.0,
                total_volume_ml: 0.0,
            }),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_volumes_sum_to_total() {
        let input = DilutionInput {
            start_ratio: 1000.0,
            desired_ratio: 200000.0,
            total_volume_ml: 50.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.stock_ml + result.diluent_ml - input.total_volume_ml).abs() < 1e-9);
    }
}
