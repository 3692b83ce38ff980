//! Reference domain types shared across the reflint suite
//!
//! This crate provides the canonical models for parsed bibliographic
//! references:
//! - ReferenceType: closed set of reference kind tags (paper, doi, arxiv, ...)
//! - ParsedReference: one reference as emitted by the upstream parser

pub mod reference;

pub use reference::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
