//! # Airway Obstruction Grading
//!
//! Cotton-Myer grading of subglottic stenosis: the percentage of lumen
//! obstructed, inferred from the largest ETT that passes relative to the
//! age-appropriate size, classified into grades I-IV.
//!
//! A chart cell with no percentage means the ETT size is age-appropriate.
//! That is a distinct "no obstruction" state, not 0% - it must never be
//! coerced to a number.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::bands::CategoryTable;
use crate::errors::{CalcError, CalcResult};

/// Cotton-Myer severity grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstructionGrade {
    I,
    II,
    III,
    IV,
}

impl ObstructionGrade {
    /// Grade for a lumen obstruction percentage.
    ///
    /// Bands are fixed: up to 50% is grade I, 51-70% grade II, 71-99%
    /// grade III, and 100% (no detectable lumen) grade IV.
    pub fn from_percent(percent: f64) -> CalcResult<ObstructionGrade> {
        if !percent.is_finite() {
            return Err(CalcError::invalid_input(
                "obstruction_percent",
                percent.to_string(),
                "must be a finite number",
            ));
        }
        Ok(if percent <= 50.0 {
            ObstructionGrade::I
        } else if percent <= 70.0 {
            ObstructionGrade::II
        } else if percent < 100.0 {
            ObstructionGrade::III
        } else {
            ObstructionGrade::IV
        })
    }

    /// Roman numeral for display
    pub fn numeral(&self) -> &'static str {
        match self {
            ObstructionGrade::I => "I",
            ObstructionGrade::II => "II",
            ObstructionGrade::III => "III",
            ObstructionGrade::IV => "IV",
        }
    }

    /// Chart label including the band description
    pub fn display_name(&self) -> &'static str {
        match self {
            ObstructionGrade::I => "Grade I (0-50% obstruction)",
            ObstructionGrade::II => "Grade II (51-70% obstruction)",
            ObstructionGrade::III => "Grade III (71-99% obstruction)",
            ObstructionGrade::IV => "Grade IV (No detectable lumen)",
        }
    }
}

impl std::fmt::Display for ObstructionGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.numeral())
    }
}

/// Outcome of an obstruction lookup or classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "finding")]
pub enum ObstructionFinding {
    /// The ETT size is age-appropriate; distinct from 0% obstruction
    NoObstruction,
    Obstructed {
        percent: f64,
        grade: ObstructionGrade,
    },
}

impl ObstructionFinding {
    /// Classify an optional obstruction percentage. `None` is the
    /// "no obstruction" sentinel and stays one.
    pub fn classify(percent: Option<f64>) -> CalcResult<ObstructionFinding> {
        Ok(match percent {
            None => ObstructionFinding::NoObstruction,
            Some(percent) => ObstructionFinding::Obstructed {
                percent,
                grade: ObstructionGrade::from_percent(percent)?,
            },
        })
    }
}

/// ETT sizes charted, in selector order
const ETT_SIZES: [&str; 8] = ["2.0", "2.5", "3.0", "3.5", "4.0", "4.5", "5.0", "5.5"];

fn row(cells: [Option<f64>; 8]) -> CategoryTable<Option<f64>> {
    CategoryTable::new(
        "ett_size",
        ETT_SIZES.iter().copied().zip(cells).collect(),
    )
}

/// Obstruction percentages by patient age and largest passing ETT.
/// `None` cells mean the size is age-appropriate.
static OBSTRUCTION: Lazy<CategoryTable<CategoryTable<Option<f64>>>> = Lazy::new(|| {
    CategoryTable::new(
        "patient_age",
        vec![
            (
                "preterm1",
                row([
                    Some(40.0),
                    None,
                    None,
                    None,
                    None,
                    None,
                    None,
                    None,
                ]),
            ),
            (
                "preterm2",
                row([
                    Some(58.0),
                    Some(30.0),
                    None,
                    None,
                    None,
                    None,
                    None,
                    None,
                ]),
            ),
            (
                "0-3mo",
                row([
                    Some(68.0),
                    Some(48.0),
                    Some(26.0),
                    None,
                    None,
                    None,
                    None,
                    None,
                ]),
            ),
            (
                "3-9mo",
                row([
                    Some(75.0),
                    Some(59.0),
                    Some(41.0),
                    Some(22.0),
                    None,
                    None,
                    None,
                    None,
                ]),
            ),
            (
                "9mo-2yr",
                row([
                    Some(80.0),
                    Some(67.0),
                    Some(53.0),
                    Some(38.0),
                    Some(20.0),
                    None,
                    None,
                    None,
                ]),
            ),
            (
                "2yr",
                row([
                    Some(84.0),
                    Some(74.0),
                    Some(62.0),
                    Some(50.0),
                    Some(35.0),
                    Some(19.0),
                    None,
                    None,
                ]),
            ),
            (
                "4yr",
                row([
                    Some(86.0),
                    Some(78.0),
                    Some(68.0),
                    Some(57.0),
                    Some(45.0),
                    Some(32.0),
                    Some(17.0),
                    None,
                ]),
            ),
            (
                "6yr",
                row([
                    Some(98.0),
                    Some(81.0),
                    Some(73.0),
                    Some(64.0),
                    Some(54.0),
                    Some(43.0),
                    Some(30.0),
                    Some(16.0),
                ]),
            ),
        ],
    )
});

/// Charted age keys in selector order
pub fn age_keys() -> impl Iterator<Item = &'static str> {
    OBSTRUCTION.keys()
}

/// Charted ETT sizes in selector order
pub fn ett_sizes() -> impl Iterator<Item = &'static str> {
    ETT_SIZES.into_iter()
}

/// Look up and grade the obstruction for an age / largest-passing-ETT
/// pair. Either selector left blank is `NoSelection`.
pub fn lookup(age_key: Option<&str>, ett_key: Option<&str>) -> CalcResult<ObstructionFinding> {
    let age_row = OBSTRUCTION.resolve(age_key)?;
    let cell = age_row.payload.resolve(ett_key)?;
    ObstructionFinding::classify(*cell.payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bands_cover_percent_axis() {
        assert_eq!(
            ObstructionGrade::from_percent(0.0).unwrap(),
            ObstructionGrade::I
        );
        assert_eq!(
            ObstructionGrade::from_percent(50.0).unwrap(),
            ObstructionGrade::I
        );
        assert_eq!(
            ObstructionGrade::from_percent(50.1).unwrap(),
            ObstructionGrade::II
        );
        assert_eq!(
            ObstructionGrade::from_percent(70.0).unwrap(),
            ObstructionGrade::II
        );
        assert_eq!(
            ObstructionGrade::from_percent(70.1).unwrap(),
            ObstructionGrade::III
        );
        assert_eq!(
            ObstructionGrade::from_percent(99.9).unwrap(),
            ObstructionGrade::III
        );
        assert_eq!(
            ObstructionGrade::from_percent(100.0).unwrap(),
            ObstructionGrade::IV
        );
    }

    #[test]
    fn test_non_finite_percent_rejected() {
        assert!(ObstructionGrade::from_percent(f64::NAN).is_err());
        assert!(ObstructionGrade::from_percent(f64::INFINITY).is_err());
    }

    #[test]
    fn test_absent_percent_is_not_zero() {
        let absent = ObstructionFinding::classify(None).unwrap();
        let zero = ObstructionFinding::classify(Some(0.0)).unwrap();
        assert_eq!(absent, ObstructionFinding::NoObstruction);
        assert_ne!(absent, zero);
        assert!(matches!(
            zero,
            ObstructionFinding::Obstructed {
                grade: ObstructionGrade::I,
                ..
            }
        ));
    }

    #[test]
    fn test_chart_lookup() {
        match lookup(Some("6yr"), Some("2.0")).unwrap() {
            ObstructionFinding::Obstructed { percent, grade } => {
                assert_eq!(percent, 98.0);
                assert_eq!(grade, ObstructionGrade::III);
            }
            other => panic!("expected obstruction, got {other:?}"),
        }
        match lookup(Some("preterm2"), Some("2.0")).unwrap() {
            ObstructionFinding::Obstructed { percent, grade } => {
                assert_eq!(percent, 58.0);
                assert_eq!(grade, ObstructionGrade::II);
            }
            other => panic!("expected obstruction, got {other:?}"),
        }
    }

    #[test]
    fn test_age_appropriate_cell() {
        assert_eq!(
            lookup(Some("preterm1"), Some("2.5")).unwrap(),
            ObstructionFinding::NoObstruction
        );
    }

    #[test]
    fn test_selection_state() {
        assert!(matches!(
            lookup(None, Some("2.0")),
            Err(CalcError::NoSelection { .. })
        ));
        assert!(matches!(
            lookup(Some("6yr"), None),
            Err(CalcError::NoSelection { .. })
        ));
        assert!(matches!(
            lookup(Some("12yr"), Some("2.0")),
            Err(CalcError::UnknownKey { .. })
        ));
        assert!(matches!(
            lookup(Some("6yr"), Some("9.0")),
            Err(CalcError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_chart_dimensions() {
        assert_eq!(age_keys().count(), 8);
        assert_eq!(ett_sizes().count(), 8);
    }

    #[test]
    fn test_finding_serialization() {
        let finding = ObstructionFinding::classify(Some(62.0)).unwrap();
        let json = serde_json::to_string(&finding).unwrap();
        let parsed: ObstructionFinding = serde_json::from_str(&json).unwrap();
        assert_eq!(finding, parsed);
    }
}
