//! Seed-Scope: per-seed regular-expression scoping for crawl candidates
//!
//! This crate decides whether a URI discovered during a crawl stays in scope.
//! The originating seed of each candidate is resolved from its referrer chain,
//! looked up in an operator-supplied rule table, and the seed's pattern is
//! applied to the full candidate URI.

pub mod candidate;
pub mod chain;
pub mod config;
pub mod rules;
pub mod scope;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Seed-Scope operations
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to parse candidate file: {0}")]
    CandidateParse(#[from] toml::de::Error),

    #[error("Invalid candidate: {0}")]
    InvalidCandidate(String),

    #[error("Processor '{processor}' failed on {uri}: {message}")]
    Processor {
        processor: String,
        uri: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid seed pattern: {0}")]
    InvalidPattern(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("URL is empty")]
    Empty,
}

/// Result type alias for Seed-Scope operations
pub type Result<T> = std::result::Result<T, ScopeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use candidate::{CandidateUri, Referrer};
pub use chain::{CandidateChain, ProcessResult, Processor};
pub use config::Config;
pub use rules::{RuleTable, SeedPattern};
pub use scope::{SeedResolution, SeedScopeFilter};
pub use state::CandidateStatus;
