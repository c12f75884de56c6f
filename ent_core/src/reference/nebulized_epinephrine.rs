//! # Nebulized Epinephrine Dosing
//!
//! Croup-dose nebulized epinephrine (1 mg/ml), dosed either by age
//! category or by weight. The weight table uses closed bands, inclusive
//! on both ends: a weight must fall inside one declared interval, and
//! anything below the 4.5 kg floor (or in a gap between bands) is a hard
//! `OutOfRange` failure - absent guidance at these weights is clinically
//! significant, not a silent no-match.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::bands::{Band, BandBounds, BandTable, CategoryTable, Resolved};
use crate::errors::{CalcError, CalcResult};

/// One dosing row: epinephrine volume, diluent volume, and the
/// documented counterpart (approximate weight for the age table,
/// approximate age for the weight table).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpinephrineDose {
    /// Epinephrine 1 mg/ml volume to nebulize (ml)
    pub epi_ml: f64,
    /// 0.9% NaCl diluent to add (ml); 0 means none needed
    pub nacl_ml: f64,
    /// Documented approximate weight or age for this row
    pub approx: &'static str,
}

const fn dose(epi_ml: f64, nacl_ml: f64, approx: &'static str) -> EpinephrineDose {
    EpinephrineDose {
        epi_ml,
        nacl_ml,
        approx,
    }
}

static BY_AGE: Lazy<CategoryTable<EpinephrineDose>> = Lazy::new(|| {
    CategoryTable::new(
        "patient_age",
        vec![
            ("1month", dose(2.0, 2.0, "4.5 kg")),
            ("2months", dose(2.5, 2.0, "5 kg")),
            ("3months", dose(3.0, 1.0, "6 kg")),
            ("4-6months", dose(3.5, 1.0, "7 kg")),
            ("7-9months", dose(4.0, 0.0, "8 kg")),
            ("10-11months", dose(4.5, 0.0, "9 kg")),
            ("1-4years", dose(5.0, 0.0, "10-17 kg")),
            (">4years", dose(5.0, 0.0, "> 17 kg")),
        ],
    )
});

static BY_WEIGHT: Lazy<BandTable<EpinephrineDose>> = Lazy::new(|| {
    BandTable::new(
        "weight_kg",
        BandBounds::Closed,
        vec![
            Band {
                label: "1 month",
                min: Some(4.5),
                max: Some(4.9),
                payload: dose(2.0, 2.0, "1 month"),
            },
            Band {
                label: "2 months",
                min: Some(5.0),
                max: Some(5.9),
                payload: dose(2.5, 2.0, "2 months"),
            },
            Band {
                label: "3 months",
                min: Some(6.0),
                max: Some(6.9),
                payload: dose(3.0, 1.0, "3 months"),
            },
            Band {
                label: "4-6 months",
                min: Some(7.0),
                max: Some(7.9),
                payload: dose(3.5, 1.0, "4-6 months"),
            },
            Band {
                label: "7-9 months",
                min: Some(8.0),
                max: Some(8.9),
                payload: dose(4.0, 0.0, "7-9 months"),
            },
            Band {
                label: "10-11 months",
                min: Some(9.0),
                max: Some(9.9),
                payload: dose(4.5, 0.0, "10-11 months"),
            },
            Band {
                label: "1-4 years",
                min: Some(10.0),
                max: Some(17.0),
                payload: dose(5.0, 0.0, "1-4 years"),
            },
            Band {
                label: "> 4 years",
                min: Some(17.1),
                max: Some(999.0),
                payload: dose(5.0, 0.0, "> 4 years"),
            },
        ],
    )
});

/// Age categories in selector order
pub fn age_keys() -> impl Iterator<Item = &'static str> {
    BY_AGE.keys()
}

/// Resolve a dose from an age-category selector value
pub fn dose_by_age(age_key: Option<&str>) -> CalcResult<Resolved<'static, EpinephrineDose>> {
    BY_AGE.resolve(age_key)
}

/// Resolve a dose from a patient weight in kilograms.
///
/// Weights below the 4.5 kg floor, above the table, or in a gap between
/// the closed bands fail with `OutOfRange`.
pub fn dose_by_weight(weight_kg: f64) -> CalcResult<Resolved<'static, EpinephrineDose>> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CalcError::invalid_input(
            "weight_kg",
            weight_kg.to_string(),
            "Weight must be a positive number",
        ));
    }
    BY_WEIGHT.resolve(weight_kg)
}
