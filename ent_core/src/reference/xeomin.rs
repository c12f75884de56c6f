//! # XEOMIN Dosing for Chronic Sialorrhea
//!
//! Weight-banded incobotulinumtoxinA dosing: parotid and submandibular
//! gland doses (units) with injection volumes (ml) and the combined
//! total. Bands are right-open - a weight exactly on a cutoff takes the
//! higher band - and the product is not indicated below 12 kg, so
//! lighter weights are `OutOfRange`.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::bands::{Band, BandBounds, BandTable, Resolved};
use crate::errors::{CalcError, CalcResult};

/// Dosing row for one weight band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct XeominDose {
    /// Documented band, e.g. "\u{2265} 12 to < 15 kg"
    pub range_label: &'static str,
    pub parotid_units: f64,
    pub parotid_ml: f64,
    pub submandibular_units: f64,
    pub submandibular_ml: f64,
    pub total_units: f64,
}

static BY_WEIGHT: Lazy<BandTable<XeominDose>> = Lazy::new(|| {
    BandTable::new(
        "weight_kg",
        BandBounds::RightOpen,
        vec![
            Band {
                label: "12-15",
                min: Some(12.0),
                max: Some(15.0),
                payload: XeominDose {
                    range_label: "\u{2265} 12 to < 15 kg",
                    parotid_units: 6.0,
                    parotid_ml: 0.24,
                    submandibular_units: 4.0,
                    submandibular_ml: 0.16,
                    total_units: 20.0,
                },
            },
            Band {
                label: "15-19",
                min: Some(15.0),
                max: Some(19.0),
                payload: XeominDose {
                    range_label: "\u{2265} 15 to < 19 kg",
                    parotid_units: 9.0,
                    parotid_ml: 0.36,
                    submandibular_units: 6.0,
                    submandibular_ml: 0.24,
                    total_units: 30.0,
                },
            },
            Band {
                label: "19-23",
                min: Some(19.0),
                max: Some(23.0),
                payload: XeominDose {
                    range_label: "\u{2265} 19 to < 23 kg",
                    parotid_units: 12.0,
                    parotid_ml: 0.48,
                    submandibular_units: 8.0,
                    submandibular_ml: 0.32,
                    total_units: 40.0,
                },
            },
            Band {
                label: "23-27",
                min: Some(23.0),
                max: Some(27.0),
                payload: XeominDose {
                    range_label: "\u{2265} 23 to < 27 kg",
                    parotid_units: 15.0,
                    parotid_ml: 0.60,
                    submandibular_units: 10.0,
                    submandibular_ml: 0.40,
                    total_units: 50.0,
                },
            },
            Band {
                label: "27-30",
                min: Some(27.0),
                max: Some(30.0),
                payload: XeominDose {
                    range_label: "\u{2265} 27 to < 30 kg",
                    parotid_units: 18.0,
                    parotid_ml: 0.72,
                    submandibular_units: 12.0,
                    submandibular_ml: 0.48,
                    total_units: 60.0,
                },
            },
            Band {
                label: "30+",
                min: Some(30.0),
                max: None,
                payload: XeominDose {
                    range_label: "\u{2265} 30 kg",
                    parotid_units: 22.5,
                    parotid_ml: 0.90,
                    submandibular_units: 15.0,
                    submandibular_ml: 0.60,
                    total_units: 75.0,
                },
            },
        ],
    )
});

/// Resolve the dosing band for a patient weight in kilograms.
///
/// Weights below the 12 kg indication floor fail with `OutOfRange`.
pub fn dose_for_weight(weight_kg: f64) -> CalcResult<Resolved<'static, XeominDose>> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CalcError::invalid_input(
            "weight_kg",
            weight_kg.to_string(),
            "Weight must be a positive number",
        ));
    }
    BY_WEIGHT.resolve(weight_kg)
}
