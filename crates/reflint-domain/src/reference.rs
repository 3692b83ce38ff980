//! Parsed reference records produced by the upstream reference parser

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of bibliographic reference
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ReferenceType {
    Paper,
    Doi,
    Arxiv,
    Github,
    Website,
}

/// Error returned when a reference type tag is not recognized
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown reference type: {0}")]
pub struct ReferenceTypeParseError(pub String);

impl ReferenceType {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceType::Paper => "paper",
            ReferenceType::Doi => "doi",
            ReferenceType::Arxiv => "arxiv",
            ReferenceType::Github => "github",
            ReferenceType::Website => "website",
        }
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferenceType {
    type Err = ReferenceTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paper" => Ok(ReferenceType::Paper),
            "doi" => Ok(ReferenceType::Doi),
            "arxiv" => Ok(ReferenceType::Arxiv),
            "github" => Ok(ReferenceType::Github),
            "website" => Ok(ReferenceType::Website),
            _ => Err(ReferenceTypeParseError(s.to_string())),
        }
    }
}

/// A reference as parsed from a document
///
/// `value` holds the raw identifier for the reference kind: the DOI string,
/// the arXiv ID, or the GitHub `owner/name` pair. Metadata fields stay as raw
/// strings; the validation layer decides what they mean. An empty `authors`
/// list means the parser found none.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ParsedReference {
    pub reference_type: ReferenceType,
    pub value: String,
    pub year: Option<String>,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub url: Option<String>,
}

impl ParsedReference {
    /// Create a reference with just a kind and raw identifier value
    pub fn new(reference_type: ReferenceType, value: String) -> Self {
        Self {
            reference_type,
            value,
            year: None,
            title: None,
            authors: Vec::new(),
            url: None,
        }
    }

    /// Builder: set year (raw string, not yet parsed to an integer)
    pub fn with_year(mut self, year: String) -> Self {
        self.year = Some(year);
        self
    }

    /// Builder: set title
    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    /// Builder: set authors
    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    /// Builder: set URL
    pub fn with_url(mut self, url: String) -> Self {
        self.url = Some(url);
        self
    }

    /// Serialize to JSON for cross-layer transfer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
