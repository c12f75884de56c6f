//! # Parsed Range Strings
//!
//! Clinical charts document expected values as strings: `"1-6 kg"`,
//! `"<1 kg"`, `"> 17 kg"`, or a bare `"4.5 kg"`. These are parsed once
//! when a reference table is built, never on every advisory check.

use serde::Serialize;

/// An inclusive numeric range, open-ended where a bound is absent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValueRange {
    /// Parse a documented range string.
    ///
    /// Accepted forms (a trailing unit such as `kg` is ignored):
    /// - `"min-max"` - both bounds inclusive
    /// - `"<max"` - unbounded below
    /// - `"> min"` - unbounded above
    /// - `"value"` - degenerate range containing exactly one value
    ///
    /// Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim().trim_end_matches("kg").trim();
        if let Some(rest) = text.strip_prefix('<') {
            return Some(Self {
                min: None,
                max: Some(number(rest)?),
            });
        }
        if let Some(rest) = text.strip_prefix('>') {
            return Some(Self {
                min: Some(number(rest)?),
                max: None,
            });
        }
        if let Some((low, high)) = text.split_once('-') {
            return Some(Self {
                min: Some(number(low)?),
                max: Some(number(high)?),
            });
        }
        let value = number(text)?;
        Some(Self {
            min: Some(value),
            max: Some(value),
        })
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

fn number(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
