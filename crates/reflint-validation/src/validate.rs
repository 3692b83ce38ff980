//! Reference validation and best-effort repair

use reflint_domain::{ParsedReference, ReferenceType};
use tracing::debug;

use crate::result::{ValidationError, ValidationResult, ValidationSeverity};
use crate::validators::{is_valid_arxiv_id, is_valid_doi, is_valid_github_repo, is_valid_url};

// The repair step recognizes URL errors by this prefix
const MALFORMED_URL_PREFIX: &str = "Invalid or malformed URL";

/// Validate a single parsed reference
///
/// Runs every applicable check and collects all findings; never stops at the
/// first failure. Check order: year, type-specific identifier format, URL
/// syntax, then paper completeness.
pub fn validate_reference(reference: &ParsedReference) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Year must parse and fall in the supported range. An out-of-range year
    // is an error and suppresses the future-year warning.
    if let Some(year) = reference.year.as_deref().filter(|y| !y.is_empty()) {
        match year.parse::<i32>() {
            Ok(year_int) => {
                if !(1900..=2099).contains(&year_int) {
                    errors.push(ValidationError {
                        field: "year".to_string(),
                        message: format!("Year {} is outside valid range (1900-2099)", year),
                        severity: ValidationSeverity::Error,
                    });
                } else if year_int > 2030 {
                    warnings.push(ValidationError {
                        field: "year".to_string(),
                        message: format!("Year {} is in the future", year),
                        severity: ValidationSeverity::Warning,
                    });
                }
            }
            Err(_) => {
                errors.push(ValidationError {
                    field: "year".to_string(),
                    message: format!("Year '{}' is not a valid integer", year),
                    severity: ValidationSeverity::Error,
                });
            }
        }
    }

    // Identifier format for the reference kind
    match reference.reference_type {
        ReferenceType::Doi => {
            if !is_valid_doi(&reference.value) {
                errors.push(ValidationError {
                    field: "value".to_string(),
                    message: format!("Invalid DOI format: {}", reference.value),
                    severity: ValidationSeverity::Error,
                });
            }
        }
        ReferenceType::Arxiv => {
            if !is_valid_arxiv_id(&reference.value) {
                errors.push(ValidationError {
                    field: "value".to_string(),
                    message: format!("Invalid arXiv ID format: {}", reference.value),
                    severity: ValidationSeverity::Error,
                });
            }
        }
        ReferenceType::Github => {
            if !is_valid_github_repo(&reference.value) {
                errors.push(ValidationError {
                    field: "value".to_string(),
                    message: format!("Invalid GitHub repository format: {}", reference.value),
                    severity: ValidationSeverity::Error,
                });
            }
        }
        ReferenceType::Paper | ReferenceType::Website => {}
    }

    // URL syntax, checked independently of the identifier value
    if let Some(url) = reference.url.as_deref().filter(|u| !u.is_empty()) {
        if !is_valid_url(url) {
            errors.push(ValidationError {
                field: "url".to_string(),
                message: format!("{}: {}", MALFORMED_URL_PREFIX, url),
                severity: ValidationSeverity::Error,
            });
        }
    }

    // Papers should carry basic metadata
    if reference.reference_type == ReferenceType::Paper {
        if reference.title.as_deref().filter(|t| !t.is_empty()).is_none() {
            warnings.push(ValidationError {
                field: "title".to_string(),
                message: "Paper reference missing title".to_string(),
                severity: ValidationSeverity::Warning,
            });
        }
        if reference.authors.is_empty() {
            warnings.push(ValidationError {
                field: "authors".to_string(),
                message: "Paper reference missing authors".to_string(),
                severity: ValidationSeverity::Info,
            });
        }
    }

    ValidationResult::from_findings(errors, warnings)
}

/// Validate a batch of references, optionally repairing trivial issues
///
/// Returns the accepted references plus one result per input, in input order.
/// With `fix` enabled, a failing reference gets one repair attempt and is
/// re-validated; on success the repaired copy is accepted and its result
/// replaces the failing one. References that stay invalid are dropped from
/// the accepted list but keep their failing result.
pub fn validate_references(
    references: &[ParsedReference],
    fix: bool,
) -> (Vec<ParsedReference>, Vec<ValidationResult>) {
    let mut accepted = Vec::new();
    let mut results = Vec::new();

    for reference in references {
        let mut result = validate_reference(reference);

        if result.is_valid() {
            accepted.push(reference.clone());
        } else if fix {
            if let Some(fixed) = fix_reference(reference, &result) {
                let revalidated = validate_reference(&fixed);
                if revalidated.is_valid() {
                    debug!(value = %fixed.value, "repaired reference passed re-validation");
                    accepted.push(fixed);
                    result = revalidated;
                }
            }
        }

        results.push(result);
    }

    debug!(
        total = references.len(),
        accepted = accepted.len(),
        fix,
        "validated reference batch"
    );

    (accepted, results)
}

/// Attempt a best-effort repair of a failing reference
///
/// Single rule: append the missing closing parenthesis to a malformed URL.
/// Returns `None` when no rule applies. The input reference is never
/// mutated; a repaired candidate is a fresh copy.
pub fn fix_reference(
    reference: &ParsedReference,
    result: &ValidationResult,
) -> Option<ParsedReference> {
    let has_url_error = result
        .errors
        .iter()
        .any(|e| e.field == "url" && e.message.starts_with(MALFORMED_URL_PREFIX));
    if !has_url_error {
        return None;
    }

    let url = reference.url.as_deref()?;
    if url.contains('(') && url.matches('(').count() > url.matches(')').count() {
        debug!(url = %url, "appending missing closing parenthesis");
        let mut fixed = reference.clone();
        fixed.url = Some(format!("{})", url));
        Some(fixed)
    } else {
        None
    }
}

// FFI exports
#[cfg(feature = "uniffi")]
mod ffi {
    use super::*;

    #[uniffi::export]
    pub fn validate_reference_ffi(reference: ParsedReference) -> ValidationResult {
        validate_reference(&reference)
    }
}
