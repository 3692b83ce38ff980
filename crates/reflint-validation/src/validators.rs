//! Field-level format validators for reference identifiers

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    // DOI: "10." prefix, registrant code of 4+ digits, slash, non-empty suffix
    static ref DOI_PATTERN: Regex = Regex::new(r"^10\.\d{4,}/\S+$").unwrap();

    // arXiv ID (new format: YYMM.NNNNN with optional version, old format: archive/NNNNNNN)
    static ref ARXIV_NEW_PATTERN: Regex = Regex::new(r"^\d{4}\.\d{4,5}(v\d+)?$").unwrap();
    static ref ARXIV_OLD_PATTERN: Regex = Regex::new(r"^[a-z-]+/\d{7}$").unwrap();

    // GitHub owner and repository name segments
    static ref GITHUB_SEGMENT_PATTERN: Regex = Regex::new(r"^[a-zA-Z0-9_.-]+$").unwrap();
}

/// Resolver prefixes stripped by [`normalize_doi`]
const DOI_RESOLVER_PREFIXES: &[&str] = &[
    "https://doi.org/",
    "http://doi.org/",
    "https://dx.doi.org/",
    "http://dx.doi.org/",
    "doi:",
    "DOI:",
];

/// Check DOI format
pub fn is_valid_doi(doi: &str) -> bool {
    DOI_PATTERN.is_match(doi)
}

/// Check arXiv ID format (either new or old style)
pub fn is_valid_arxiv_id(arxiv_id: &str) -> bool {
    ARXIV_NEW_PATTERN.is_match(arxiv_id) || ARXIV_OLD_PATTERN.is_match(arxiv_id)
}

/// Check URL syntax without touching the network
///
/// A URL passes when it parses, has a non-empty host, uses an http/https/ftp
/// scheme, and has balanced parentheses in the raw string. Unbalanced
/// parentheses usually mean the parser captured a truncated link.
pub fn is_valid_url(url: &str) -> bool {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    if !matches!(parsed.scheme(), "http" | "https" | "ftp") {
        return false;
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return false,
    }

    url.matches('(').count() == url.matches(')').count()
}

/// Check GitHub repository format (`owner/name`)
pub fn is_valid_github_repo(repo: &str) -> bool {
    let parts: Vec<&str> = repo.split('/').collect();
    if parts.len() != 2 {
        return false;
    }

    let (owner, name) = (parts[0], parts[1]);
    if owner.is_empty() || name.is_empty() {
        return false;
    }

    GITHUB_SEGMENT_PATTERN.is_match(owner) && GITHUB_SEGMENT_PATTERN.is_match(name)
}

/// Normalize a DOI by stripping resolver prefixes and trailing punctuation
///
/// Callers that clean identifiers before validating use this; none of the
/// validators call it implicitly.
pub fn normalize_doi(doi: &str) -> String {
    let mut result = doi.trim();

    for prefix in DOI_RESOLVER_PREFIXES {
        if let Some(stripped) = result.strip_prefix(prefix) {
            result = stripped;
            break;
        }
    }

    result.trim_end_matches(['.', ',', ';']).to_string()
}

// FFI exports
#[cfg(feature = "uniffi")]
mod ffi {
    #[uniffi::export]
    pub fn is_valid_doi_ffi(doi: String) -> bool {
        super::is_valid_doi(&doi)
    }

    #[uniffi::export]
    pub fn is_valid_arxiv_id_ffi(arxiv_id: String) -> bool {
        super::is_valid_arxiv_id(&arxiv_id)
    }

    #[uniffi::export]
    pub fn is_valid_url_ffi(url: String) -> bool {
        super::is_valid_url(&url)
    }

    #[uniffi::export]
    pub fn is_valid_github_repo_ffi(repo: String) -> bool {
        super::is_valid_github_repo(&repo)
    }

    #[uniffi::export]
    pub fn normalize_doi_ffi(doi: String) -> String {
        super::normalize_doi(&doi)
    }
}
