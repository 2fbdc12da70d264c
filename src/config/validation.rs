use crate::config::types::{Config, ScopeConfig};
use crate::rules::RuleTable;
use crate::url::validate_uri;
use crate::ConfigError;
use std::collections::BTreeMap;

/// Upper bound accepted for `max-via-hops`
const MAX_VIA_HOPS_LIMIT: usize = 10_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scope_config(&config.scope)?;
    validate_seed_filters(&config.seed_filters)?;
    Ok(())
}

/// Validates seed resolution settings
fn validate_scope_config(config: &ScopeConfig) -> Result<(), ConfigError> {
    if config.max_via_hops < 1 || config.max_via_hops > MAX_VIA_HOPS_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max_via_hops must be between 1 and {}, got {}",
            MAX_VIA_HOPS_LIMIT, config.max_via_hops
        )));
    }

    for seed in &config.seeds {
        validate_seed(seed)?;
    }

    Ok(())
}

/// Validates every seed key, then compiles the patterns into a throwaway table
fn validate_seed_filters(filters: &BTreeMap<String, String>) -> Result<(), ConfigError> {
    for seed in filters.keys() {
        validate_seed(seed)?;
    }

    RuleTable::from_map(filters)?;

    Ok(())
}

/// Seeds are used verbatim as rule keys, but must still be well-formed URIs
fn validate_seed(seed: &str) -> Result<(), ConfigError> {
    validate_uri(seed)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))
}
