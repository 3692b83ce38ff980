//! Format validation for parsed bibliographic references
//!
//! This crate checks references produced by the upstream parser:
//! - DOI, arXiv ID, GitHub repository, and URL format predicates
//! - Per-reference validation with structured errors and warnings
//! - Batch validation with opt-in best-effort repair
//! - DOI normalization

pub mod result;
pub mod validate;
pub mod validators;

pub use result::*;
pub use validate::*;
pub use validators::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
