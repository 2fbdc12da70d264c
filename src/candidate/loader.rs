//! Candidate file loading
//!
//! Candidates are described in TOML, one `[[candidate]]` table each:
//!
//! ```toml
//! [[candidate]]
//! uri = "http://greglu.com/blog/post1"
//! via = ["http://greglu.com/index.html", "http://greglu.com/"]
//! ```
//!
//! `via` lists referrers nearest first. Any link whose URI is a known seed is
//! flagged as a seed, so the chain can be walked back to it.

use crate::candidate::CandidateUri;
use crate::url::validate_uri;
use crate::{Result, ScopeError};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct CandidateFile {
    #[serde(rename = "candidate", default)]
    candidates: Vec<CandidateEntry>,
}

#[derive(Debug, Deserialize)]
struct CandidateEntry {
    uri: String,

    #[serde(default)]
    via: Vec<String>,

    #[serde(rename = "base-uri")]
    base_uri: Option<String>,

    #[serde(rename = "source-tag")]
    source_tag: Option<String>,
}

/// Loads candidates from a TOML file
///
/// # Arguments
///
/// * `path` - Path to the candidate file
/// * `known_seeds` - Seed URIs used to flag seeds in the file
///
/// # Returns
///
/// * `Ok(Vec<CandidateUri>)` - Candidates in file order
/// * `Err(ScopeError)` - The file could not be read or a URI is malformed
pub fn load_candidates(path: &Path, known_seeds: &HashSet<String>) -> Result<Vec<CandidateUri>> {
    let content = std::fs::read_to_string(path)?;
    parse_candidates(&content, known_seeds)
}

/// Parses candidates from a TOML string
pub fn parse_candidates(content: &str, known_seeds: &HashSet<String>) -> Result<Vec<CandidateUri>> {
    let file: CandidateFile = toml::from_str(content)?;

    file.candidates
        .into_iter()
        .map(|entry| build_candidate(entry, known_seeds))
        .collect()
}

fn build_candidate(entry: CandidateEntry, known_seeds: &HashSet<String>) -> Result<CandidateUri> {
    check_uri(&entry.uri, &entry.uri)?;
    for link in &entry.via {
        check_uri(&entry.uri, link)?;
    }

    // Build from the farthest referrer inwards so each link owns its parent
    let mut parent: Option<Arc<CandidateUri>> = None;
    for link in entry.via.iter().rev() {
        let node = match parent.take() {
            Some(p) => CandidateUri::discovered(link.as_str(), p),
            None => CandidateUri::new(link.as_str()),
        };
        parent = Some(Arc::new(node.with_seed(known_seeds.contains(link))));
    }

    let mut candidate = match parent {
        Some(p) => CandidateUri::discovered(entry.uri.as_str(), p),
        None => CandidateUri::new(entry.uri.as_str()),
    }
    .with_seed(known_seeds.contains(&entry.uri));

    if let Some(base_uri) = entry.base_uri {
        candidate = candidate.with_base_uri(base_uri);
    }
    if let Some(source_tag) = entry.source_tag {
        candidate = candidate.with_source_tag(source_tag);
    }

    Ok(candidate)
}

fn check_uri(candidate: &str, uri: &str) -> Result<()> {
    validate_uri(uri).map_err(|e| {
        ScopeError::InvalidCandidate(format!("'{}' (in candidate '{}'): {}", uri, candidate, e))
    })
}
