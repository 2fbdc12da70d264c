//! Configuration module for Seed-Scope
//!
//! This module handles loading, parsing, and validating the TOML file that
//! carries the seed -> pattern rule table and the seed resolution settings.
//!
//! # Example
//!
//! ```no_run
//! use seed_scope::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scope.toml")).unwrap();
//! println!("Walking at most {} referrer hops", config.scope.max_via_hops);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ScopeConfig, DEFAULT_MAX_VIA_HOPS};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
