//! Age Groups for Airway Equipment Sizing
//!
//! The sizing charts station patients into eight age groups. A weight in
//! kilograms maps to a group through right-open bands: a weight exactly
//! on a cutoff belongs to the heavier group (6 kg is the "6-10 kg"
//! station, not "1-6 kg").

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::bands::{Band, BandBounds, BandTable, CategoryTable};
use crate::errors::{CalcError, CalcResult};

/// Patient age group used by the airway sizing charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Preterm, under 1 kg
    Premature,
    /// 0-6 months (1-6 kg)
    ZeroToSixMonths,
    /// 6-18 months (6-10 kg)
    SixToEighteenMonths,
    /// 18 months - 3 years (10-15 kg)
    EighteenMonthsToThreeYears,
    /// 3-5 years (15-20 kg)
    ThreeToFiveYears,
    /// 5-8 years (20-30 kg)
    FiveToEightYears,
    /// 8-12 years (30-45 kg)
    EightToTwelveYears,
    /// Over 12 years (>45 kg)
    Adult,
}

/// Weight cutoffs in kilograms, ascending. Comparisons are strict `<`
/// against each cutoff in turn, so boundary weights land in the higher
/// group.
static WEIGHT_BANDS: Lazy<BandTable<AgeGroup>> = Lazy::new(|| {
    BandTable::new(
        "weight_kg",
        BandBounds::RightOpen,
        vec![
            Band {
                label: "premature",
                min: None,
                max: Some(1.0),
                payload: AgeGroup::Premature,
            },
            Band {
                label: "0-6mo",
                min: Some(1.0),
                max: Some(6.0),
                payload: AgeGroup::ZeroToSixMonths,
            },
            Band {
                label: "6-18mo",
                min: Some(6.0),
                max: Some(10.0),
                payload: AgeGroup::SixToEighteenMonths,
            },
            Band {
                label: "18mo-3yr",
                min: Some(10.0),
                max: Some(15.0),
                payload: AgeGroup::EighteenMonthsToThreeYears,
            },
            Band {
                label: "3-5yr",
                min: Some(15.0),
                max: Some(20.0),
                payload: AgeGroup::ThreeToFiveYears,
            },
            Band {
                label: "5-8yr",
                min: Some(20.0),
                max: Some(30.0),
                payload: AgeGroup::FiveToEightYears,
            },
            Band {
                label: "8-12yr",
                min: Some(30.0),
                max: Some(45.0),
                payload: AgeGroup::EightToTwelveYears,
            },
            Band {
                label: "adult",
                min: Some(45.0),
                max: None,
                payload: AgeGroup::Adult,
            },
        ],
    )
});

/// Selector keys in chart order, resolved with the usual categorical
/// semantics (blank selector, unknown key).
static KEY_TABLE: Lazy<CategoryTable<AgeGroup>> = Lazy::new(|| {
    CategoryTable::new(
        "patient_age",
        AgeGroup::ALL
            .iter()
            .map(|group| (group.key(), *group))
            .collect(),
    )
});

impl AgeGroup {
    /// All age groups in chart order, for selector population
    pub const ALL: [AgeGroup; 8] = [
        AgeGroup::Premature,
        AgeGroup::ZeroToSixMonths,
        AgeGroup::SixToEighteenMonths,
        AgeGroup::EighteenMonthsToThreeYears,
        AgeGroup::ThreeToFiveYears,
        AgeGroup::FiveToEightYears,
        AgeGroup::EightToTwelveYears,
        AgeGroup::Adult,
    ];

    /// Stable selector key for this group
    pub fn key(&self) -> &'static str {
        match self {
            AgeGroup::Premature => "premature",
            AgeGroup::ZeroToSixMonths => "0-6mo",
            AgeGroup::SixToEighteenMonths => "6-18mo",
            AgeGroup::EighteenMonthsToThreeYears => "18mo-3yr",
            AgeGroup::ThreeToFiveYears => "3-5yr",
            AgeGroup::FiveToEightYears => "5-8yr",
            AgeGroup::EightToTwelveYears => "8-12yr",
            AgeGroup::Adult => "adult",
        }
    }

    /// Human-readable group name
    pub fn display_name(&self) -> &'static str {
        match self {
            AgeGroup::Premature => "Premature",
            AgeGroup::ZeroToSixMonths => "0-6 months",
            AgeGroup::SixToEighteenMonths => "6-18 months",
            AgeGroup::EighteenMonthsToThreeYears => "18 months - 3 years",
            AgeGroup::ThreeToFiveYears => "3-5 years",
            AgeGroup::FiveToEightYears => "5-8 years",
            AgeGroup::EightToTwelveYears => "8-12 years",
            AgeGroup::Adult => "Adult (>12 years)",
        }
    }

    /// Find the group for a selector key, without selection-state handling
    pub fn from_key(key: &str) -> Option<AgeGroup> {
        AgeGroup::ALL.iter().find(|group| group.key() == key).copied()
    }

    /// Resolve a selector value with full categorical semantics:
    /// `None`/empty is `NoSelection`, an unrecognized key is `UnknownKey`.
    pub fn resolve_key(key: Option<&str>) -> CalcResult<AgeGroup> {
        KEY_TABLE.resolve(key).map(|resolved| *resolved.payload)
    }

    /// Station a patient by weight in kilograms.
    ///
    /// Weights under 1 kg are premature; 45 kg and above is adult.
    pub fn from_weight_kg(weight_kg: f64) -> CalcResult<AgeGroup> {
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(CalcError::invalid_input(
                "weight_kg",
                weight_kg.to_string(),
                "Weight must be a non-negative number",
            ));
        }
        WEIGHT_BANDS.resolve(weight_kg).map(|resolved| *resolved.payload)
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premature_band_is_under_one_kilogram() {
        assert_eq!(AgeGroup::from_weight_kg(0.0).unwrap(), AgeGroup::Premature);
        assert_eq!(AgeGroup::from_weight_kg(0.5).unwrap(), AgeGroup::Premature);
        assert_eq!(AgeGroup::from_weight_kg(0.99).unwrap(), AgeGroup::Premature);
        // Exactly 1 kg belongs to the next group up.
        assert_eq!(
            AgeGroup::from_weight_kg(1.0).unwrap(),
            AgeGroup::ZeroToSixMonths
        );
    }

    #[test]
    fn test_boundary_weights_belong_to_higher_group() {
        assert_eq!(
            AgeGroup::from_weight_kg(6.0).unwrap(),
            AgeGroup::SixToEighteenMonths
        );
        assert_eq!(
            AgeGroup::from_weight_kg(30.0).unwrap(),
            AgeGroup::EightToTwelveYears
        );
        assert_eq!(AgeGroup::from_weight_kg(45.0).unwrap(), AgeGroup::Adult);
    }

    #[test]
    fn test_interior_weights() {
        assert_eq!(
            AgeGroup::from_weight_kg(12.0).unwrap(),
            AgeGroup::EighteenMonthsToThreeYears
        );
        assert_eq!(
            AgeGroup::from_weight_kg(22.5).unwrap(),
            AgeGroup::FiveToEightYears
        );
        assert_eq!(AgeGroup::from_weight_kg(80.0).unwrap(), AgeGroup::Adult);
    }

    #[test]
    fn test_invalid_weights_rejected() {
        assert!(matches!(
            AgeGroup::from_weight_kg(-1.0),
            Err(CalcError::InvalidInput { .. })
        ));
        assert!(matches!(
            AgeGroup::from_weight_kg(f64::NAN),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_key_round_trip() {
        for group in AgeGroup::ALL {
            assert_eq!(AgeGroup::from_key(group.key()), Some(group));
            assert_eq!(AgeGroup::resolve_key(Some(group.key())).unwrap(), group);
        }
    }

    #[test]
    fn test_key_resolution_outcomes() {
        assert!(matches!(
            AgeGroup::resolve_key(None),
            Err(CalcError::NoSelection { .. })
        ));
        assert!(matches!(
            AgeGroup::resolve_key(Some("teenager")),
            Err(CalcError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let group = AgeGroup::SixToEighteenMonths;
        let json = serde_json::to_string(&group).unwrap();
        let parsed: AgeGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(group, parsed);
    }
}
