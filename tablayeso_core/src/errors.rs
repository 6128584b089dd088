//! # Error Types
//!
//! Structured error types for tablayeso_core. Validation collects several of
//! these per item; their `Display` text is the human-readable message shown
//! verbatim in the report, so keep them short and free of internal detail.
//!
//! ## Example
//!
//! ```rust
//! use tablayeso_core::errors::{CalcError, CalcResult};
//!
//! fn validate_spacing(spacing_m: f64) -> CalcResult<()> {
//!     if spacing_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "stud_spacing",
//!             spacing_m.to_string(),
//!             "must be > 0",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tablayeso_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for estimation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A numeric input is out of range or missing a usable value
    #[error("Invalid {field} ({value}): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A selection field holds a value outside its catalogue
    #[error("Unrecognized {field}: '{value}'")]
    UnknownOption { field: String, value: String },

    /// A wall or ceiling has no measurement segments at all
    #[error("{kind} must have at least one measurement segment")]
    NoSegments { kind: String },

    /// A wall or ceiling has segments but none usable for materials
    #[error("{kind} must have at least one segment with both dimensions > 0")]
    NoValidSegments { kind: String },

    /// Arithmetic produced something unusable (NaN, infinity)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// Project item lookup failed
    #[error("Item not found: {id}")]
    ItemNotFound { id: String },

    /// Edit rejected because it would break a project invariant
    #[error("Invalid operation: {reason}")]
    InvalidOperation { reason: String },

    /// The project holds no items to calculate
    #[error("No items to calculate. Add at least one wall, ceiling or soffit.")]
    EmptyProject,
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownOption error
    pub fn unknown_option(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::UnknownOption {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidOperation error
    pub fn invalid_operation(reason: impl Into<String>) -> Self {
        CalcError::InvalidOperation {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownOption { .. } => "UNKNOWN_OPTION",
            CalcError::NoSegments { .. } => "NO_SEGMENTS",
            CalcError::NoValidSegments { .. } => "NO_VALID_SEGMENTS",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::ItemNotFound { .. } => "ITEM_NOT_FOUND",
            CalcError::InvalidOperation { .. } => "INVALID_OPERATION",
            CalcError::EmptyProject => "EMPTY_PROJECT",
        }
    }

    /// Whether this error came from checking user input (as opposed to
    /// a computation or project-editing fault)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::UnknownOption { .. }
                | CalcError::NoSegments { .. }
                | CalcError::NoValidSegments { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("plenum", "-0.5", "must be >= 0");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("faces").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_option("panel type", "Wood").error_code(), "UNKNOWN_OPTION");
        assert_eq!(CalcError::EmptyProject.error_code(), "EMPTY_PROJECT");
    }

    #[test]
    fn test_display_messages() {
        let e = CalcError::invalid_input("stud spacing", "0", "must be > 0");
        assert_eq!(e.to_string(), "Invalid stud spacing (0): must be > 0");

        let e = CalcError::NoSegments { kind: "Wall".to_string() };
        assert_eq!(e.to_string(), "Wall must have at least one measurement segment");
    }

    #[test]
    fn test_every_code_is_distinct() {
        let all = [
            CalcError::invalid_input("x", "0", "must be > 0"),
            CalcError::missing_field("x"),
            CalcError::unknown_option("x", "y"),
            CalcError::NoSegments { kind: "Wall".to_string() },
            CalcError::NoValidSegments { kind: "Wall".to_string() },
            CalcError::calculation_failed("Wall", "NaN"),
            CalcError::ItemNotFound { id: "1".to_string() },
            CalcError::invalid_operation("x"),
            CalcError::EmptyProject,
        ];
        let mut codes: Vec<_> = all.iter().map(CalcError::error_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_is_validation() {
        assert!(CalcError::missing_field("length").is_validation());
        assert!(!CalcError::calculation_failed("Wall", "NaN").is_validation());
        assert!(!CalcError::EmptyProject.is_validation());
    }
}
