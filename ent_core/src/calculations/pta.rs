//! # Pure Tone Average
//!
//! Audiometric PTA: the mean hearing threshold at 500/1000/2000 Hz,
//! extended to a 4-frequency average when a positive 4000 Hz threshold
//! is supplied. The average is then classified on the standard
//! hearing-loss scale.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Which frequencies the average was taken over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PtaMethod {
    ThreeFrequency,
    FourFrequency,
}

impl PtaMethod {
    /// Chart label for the averaging method
    pub fn display_name(&self) -> &'static str {
        match self {
            PtaMethod::ThreeFrequency => "3-frequency average (500, 1000, 2000 Hz)",
            PtaMethod::FourFrequency => "4-frequency average (500, 1000, 2000, 4000 Hz)",
        }
    }
}

/// Hearing-loss classification of a pure tone average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HearingLevel {
    Normal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
    Profound,
}

impl HearingLevel {
    /// Classify a PTA in dB HL.
    pub fn classify(pta_db: f64) -> HearingLevel {
        if pta_db <= 25.0 {
            HearingLevel::Normal
        } else if pta_db <= 40.0 {
            HearingLevel::Mild
        } else if pta_db <= 55.0 {
            HearingLevel::Moderate
        } else if pta_db <= 70.0 {
            HearingLevel::ModeratelySevere
        } else if pta_db <= 90.0 {
            HearingLevel::Severe
        } else {
            HearingLevel::Profound
        }
    }

    /// Chart label for the classification
    pub fn display_name(&self) -> &'static str {
        match self {
            HearingLevel::Normal => "Normal Hearing",
            HearingLevel::Mild => "Mild Hearing Loss",
            HearingLevel::Moderate => "Moderate Hearing Loss",
            HearingLevel::ModeratelySevere => "Moderately Severe Hearing Loss",
            HearingLevel::Severe => "Severe Hearing Loss",
            HearingLevel::Profound => "Profound Hearing Loss",
        }
    }
}

/// Input thresholds in dB HL. Thresholds may legitimately be negative
/// (better than audiometric zero); the 4000 Hz value is optional and
/// only counted when positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PtaInput {
    pub hz500: f64,
    pub hz1000: f64,
    pub hz2000: f64,
    pub hz4000: Option<f64>,
}

impl PtaInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("hz500", self.hz500),
            ("hz1000", self.hz1000),
            ("hz2000", self.hz2000),
        ] {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Threshold must be a finite number",
                ));
            }
        }
        if let Some(hz4000) = self.hz4000 {
            if !hz4000.is_finite() {
                return Err(CalcError::invalid_input(
                    "hz4000",
                    hz4000.to_string(),
                    "Threshold must be a finite number",
                ));
            }
        }
        Ok(())
    }
}

/// Results from the PTA calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PtaResult {
    /// Average threshold in dB HL, full precision
    pub pta_db: f64,
    pub method: PtaMethod,
    pub level: HearingLevel,
}

/// Calculate and classify the pure tone average.
pub fn calculate(input: &PtaInput) -> CalcResult<PtaResult> {
    input.validate()?;

    let (pta_db, method) = match input.hz4000 {
        Some(hz4000) if hz4000 > 0.0 => (
            (input.hz500 + input.hz1000 + input.hz2000 + hz4000) / 4.0,
            PtaMethod::FourFrequency,
        ),
        _ => (
            (input.hz500 + input.hz1000 + input.hz2000) / 3.0,
            PtaMethod::ThreeFrequency,
        ),
    };

    Ok(PtaResult {
        pta_db,
        method,
        level: HearingLevel::classify(pta_db),
    })
}
