//! # Error Types
//!
//! Structured error types for ent_core. Each variant carries enough context
//! for the presentation layer to phrase its own message - the engine never
//! formats user-facing prose beyond these diagnostic `Display` impls.
//!
//! Two variants (`NoSelection`, `UnknownKey`) are not faults at all: they
//! mean "nothing to show yet" and callers suppress output instead of
//! raising an error banner. Use [`CalcError::is_silent`] to tell them apart
//! from real validation failures.
//!
//! ## Example
//!
//! ```rust
//! use ent_core::errors::{CalcError, CalcResult};
//!
//! fn validate_weight(weight_kg: f64) -> CalcResult<()> {
//!     if weight_kg <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "weight_kg".to_string(),
//!             value: weight_kg.to_string(),
//!             reason: "Weight must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ent_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for resolution and calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by the presentation layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required selection has not been made yet (blank selector,
    /// no answered items). Output is withheld, not flagged as a fault.
    #[error("No selection for '{field}'")]
    NoSelection { field: String },

    /// A selection references a key absent from its reference table.
    /// Indicates a selector/table mismatch; logged and suppressed.
    #[error("Unknown key '{key}' in table '{table}'")]
    UnknownKey { table: String, key: String },

    /// A numeric input falls outside every defined band of a table that
    /// requires one. Carries the nearest valid bounds on either side so
    /// the caller can state them.
    #[error("Value {value} for '{field}' is outside all defined bands")]
    OutOfRange {
        field: String,
        value: f64,
        nearest_below: Option<f64>,
        nearest_above: Option<f64>,
    },

    /// An input value is invalid (non-finite, negative, outside a
    /// formula's validity window, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A dilution's preconditions are violated
    #[error("Invalid dilution from 1:{start} to 1:{desired}: {reason}")]
    InvalidDilution {
        start: f64,
        desired: f64,
        reason: String,
    },
}

impl CalcError {
    /// Create a NoSelection error
    pub fn no_selection(field: impl Into<String>) -> Self {
        CalcError::NoSelection {
            field: field.into(),
        }
    }

    /// Create an UnknownKey error
    pub fn unknown_key(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::UnknownKey {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(
        field: impl Into<String>,
        value: f64,
        nearest_below: Option<f64>,
        nearest_above: Option<f64>,
    ) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value,
            nearest_below,
            nearest_above,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidDilution error
    pub fn invalid_dilution(start: f64, desired: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidDilution {
            start,
            desired,
            reason: reason.into(),
        }
    }

    /// Check whether the presentation layer should suppress this outcome
    /// silently rather than surface a validation message
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            CalcError::NoSelection { .. } | CalcError::UnknownKey { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::NoSelection { .. } => "NO_SELECTION",
            CalcError::UnknownKey { .. } => "UNKNOWN_KEY",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidDilution { .. } => "INVALID_DILUTION",
        }
    }
}
