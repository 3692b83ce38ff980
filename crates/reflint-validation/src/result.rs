//! Validation findings and per-reference results

use serde::{Deserialize, Serialize};

/// Severity of a validation finding
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

/// A single validation finding for one reference field
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

/// Result of validating a single reference
///
/// Warnings never affect validity: `valid` is true exactly when `errors` is
/// empty. A result can be valid and still carry warnings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Build a result from accumulated findings
    pub fn from_findings(errors: Vec<ValidationError>, warnings: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Whether the reference passed validation
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Serialize to JSON for a reporting layer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
