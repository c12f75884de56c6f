//! # Endotracheal Tube Insertion Depth
//!
//! Two linear estimates of oral ETT insertion depth at the lips:
//!
//! - Age-based: `12 + age/2` cm, for pediatric patients 0-18 years.
//! - Weight-based "Rule of Seven": `6 + weight` cm, for infants 1-4 kg
//!   (1 kg = 7 cm, 2 kg = 8 cm, 3 kg = 9 cm, 4 kg = 10 cm).
//!
//! Inputs outside a formula's validity window are rejected, not clamped.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Which estimate produced a depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthMethod {
    AgeBased,
    RuleOfSeven,
}

/// An insertion depth estimate at full precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EtDepth {
    pub depth_cm: f64,
    pub method: DepthMethod,
}

/// Estimate insertion depth from age in years (0-18 only).
pub fn by_age(age_years: f64) -> CalcResult<EtDepth> {
    if !age_years.is_finite() || age_years < 0.0 {
        return Err(CalcError::invalid_input(
            "age_years",
            age_years.to_string(),
            "Age must be a non-negative number",
        ));
    }
    if age_years > 18.0 {
        return Err(CalcError::invalid_input(
            "age_years",
            age_years.to_string(),
            "Age-based formula is valid for pediatric patients (0-18 years)",
        ));
    }
    Ok(EtDepth {
        depth_cm: 12.0 + age_years / 2.0,
        method: DepthMethod::AgeBased,
    })
}

/// Estimate insertion depth from weight in kilograms (1-4 kg only).
pub fn by_weight(weight_kg: f64) -> CalcResult<EtDepth> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CalcError::invalid_input(
            "weight_kg",
            weight_kg.to_string(),
            "Weight must be positive",
        ));
    }
    if !(1.0..=4.0).contains(&weight_kg) {
        return Err(CalcError::invalid_input(
            "weight_kg",
            weight_kg.to_string(),
            "Rule of Seven is valid for infants weighing 1-4 kg",
        ));
    }
    Ok(EtDepth {
        depth_cm: 6.0 + weight_kg,
        method: DepthMethod::RuleOfSeven,
    })
}
