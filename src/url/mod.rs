//! URI helpers for Seed-Scope
//!
//! The scope filter works on URIs exactly as the pipeline hands them over,
//! so these helpers are textual. Parsing with the `url` crate is only used to
//! reject malformed seeds and candidates at load time.

mod matcher;

pub use matcher::{is_robots_txt, is_rooted_under};

use crate::{UrlError, UrlResult};
use ::url::Url;

/// Checks that a string is an absolute URI
///
/// The input is only parsed, never rewritten.
///
/// # Examples
///
/// ```
/// use seed_scope::url::validate_uri;
///
/// assert!(validate_uri("http://greglu.com/").is_ok());
/// assert!(validate_uri("greglu.com").is_err());
/// assert!(validate_uri("").is_err());
/// ```
pub fn validate_uri(uri: &str) -> UrlResult<()> {
    if uri.is_empty() {
        return Err(UrlError::Empty);
    }

    Url::parse(uri).map_err(|e| UrlError::Parse(e.to_string()))?;
    Ok(())
}
