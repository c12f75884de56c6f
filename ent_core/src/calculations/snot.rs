//! # SNOT Symptom Score (Simplified)
//!
//! Simplified sino-nasal outcome scoring: each presented symptom is
//! rated 0-5, unanswered items are skipped, and the total is banded into
//! a quality-of-life impact class. The full SNOT-22 instrument has 22
//! items; the simplified form scores whatever subset was answered and
//! reports the maximum alongside.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Maximum rating for a single symptom item
pub const ITEM_MAX_SCORE: f64 = 5.0;

/// Quality-of-life impact classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnotSeverity {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

impl SnotSeverity {
    /// Band a total score.
    pub fn classify(total: f64) -> SnotSeverity {
        if total <= 10.0 {
            SnotSeverity::Minimal
        } else if total <= 20.0 {
            SnotSeverity::Mild
        } else if total <= 30.0 {
            SnotSeverity::Moderate
        } else {
            SnotSeverity::Severe
        }
    }

    /// Chart label for the classification
    pub fn display_name(&self) -> &'static str {
        match self {
            SnotSeverity::Minimal => "Minimal Impact",
            SnotSeverity::Mild => "Mild Impact",
            SnotSeverity::Moderate => "Moderate Impact",
            SnotSeverity::Severe => "Severe Impact",
        }
    }
}

/// Results from scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnotResult {
    /// Sum of answered item scores
    pub total: f64,
    /// How many items were answered
    pub answered: usize,
    /// Maximum achievable with that many items (answered * 5)
    pub max_possible: f64,
    /// Total as a percentage of the maximum
    pub percent_of_max: f64,
    pub severity: SnotSeverity,
}

/// Score a set of symptom ratings. `None` entries are unanswered items.
///
/// Fails with `NoSelection` when nothing was answered and
/// `InvalidInput` when an answered rating is outside 0-5.
pub fn calculate(scores: &[Option<f64>]) -> CalcResult<SnotResult> {
    let mut total = 0.0;
    let mut answered = 0usize;
    for (index, score) in scores.iter().enumerate() {
        if let Some(score) = *score {
            if !score.is_finite() || !(0.0..=ITEM_MAX_SCORE).contains(&score) {
                return Err(CalcError::invalid_input(
                    format!("item_{index}"),
                    score.to_string(),
                    "Symptom ratings run from 0 to 5",
                ));
            }
            total += score;
            answered += 1;
        }
    }
    if answered == 0 {
        return Err(CalcError::no_selection("snot_items"));
    }

    let max_possible = answered as f64 * ITEM_MAX_SCORE;
    Ok(SnotResult {
        total,
        answered,
        max_possible,
        percent_of_max: total / max_possible * 100.0,
        severity: SnotSeverity::classify(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_answer_set() {
        let scores: Vec<Option<f64>> = vec![Some(3.0); 8];
        let result = calculate(&scores).unwrap();
        assert_eq!(result.total, 24.0);
        assert_eq!(result.answered, 8);
        assert_eq!(result.max_possible, 40.0);
        assert_eq!(result.percent_of_max, 60.0);
        assert_eq!(result.severity, SnotSeverity::Moderate);
    }

    #[test]
    fn test_unanswered_items_skipped() {
        let result = calculate(&[Some(5.0), None, Some(2.0), None]).unwrap();
        assert_eq!(result.total, 7.0);
        assert_eq!(result.answered, 2);
        assert_eq!(result.max_possible, 10.0);
        assert_eq!(result.severity, SnotSeverity::Minimal);
    }

    #[test]
    fn test_severity_bands() {
        assert_eq!(SnotSeverity::classify(10.0), SnotSeverity::Minimal);
        assert_eq!(SnotSeverity::classify(10.5), SnotSeverity::Mild);
        assert_eq!(SnotSeverity::classify(20.0), SnotSeverity::Mild);
        assert_eq!(SnotSeverity::classify(30.0), SnotSeverity::Moderate);
        assert_eq!(SnotSeverity::classify(30.5), SnotSeverity::Severe);
    }

    #[test]
    fn test_nothing_answered() {
        assert!(matches!(
            calculate(&[None, None, None]),
            Err(CalcError::NoSelection { .. })
        ));
        assert!(matches!(
            calculate(&[]),
            Err(CalcError::NoSelection { .. })
        ));
    }

    #[test]
    fn test_out_of_scale_rating_rejected() {
        assert!(matches!(
            calculate(&[Some(6.0)]),
            Err(CalcError::InvalidInput { .. })
        ));
        assert!(matches!(
            calculate(&[Some(-1.0)]),
            Err(CalcError::InvalidInput { .. })
        ));
    }
}
