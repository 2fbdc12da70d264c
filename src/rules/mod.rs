//! Seed rule table
//!
//! The rule table maps each seed URI, exactly as it appears in the crawl's
//! seed list, to the single pattern every URI discovered under that seed must
//! match. It is built once from configuration and never mutated afterwards,
//! so a single `Arc<RuleTable>` can be read by any number of workers without
//! locking.

mod pattern;

pub use pattern::SeedPattern;

use crate::config::Config;
use crate::ConfigError;
use std::collections::HashMap;

/// Immutable seed -> pattern mapping
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: HashMap<String, SeedPattern>,
}

impl RuleTable {
    /// Creates a table with no rules; every candidate bypasses filtering
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a table from seed/pattern pairs, compiling every pattern
    ///
    /// # Returns
    ///
    /// * `Ok(RuleTable)` - All patterns compiled
    /// * `Err(ConfigError::InvalidPattern)` - A pattern is empty or malformed
    /// * `Err(ConfigError::Validation)` - A seed is empty or appears twice
    ///
    /// # Examples
    ///
    /// ```
    /// use seed_scope::rules::RuleTable;
    ///
    /// let table = RuleTable::from_map([("http://greglu.com/", "http://greglu.com/blog.*")]).unwrap();
    /// assert!(table.contains_seed("http://greglu.com/"));
    /// assert!(!table.contains_seed("http://greglu.com"));
    /// ```
    pub fn from_map<I, K, V>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut rules: HashMap<String, SeedPattern> = HashMap::new();

        for (seed, pattern) in entries {
            let seed: String = seed.into();
            let pattern = pattern.as_ref();

            // An empty key would catch every candidate with no referrer
            if seed.is_empty() {
                return Err(ConfigError::Validation(
                    "Seed filter key cannot be empty".to_string(),
                ));
            }

            if pattern.is_empty() {
                return Err(ConfigError::InvalidPattern(format!(
                    "Pattern for seed '{}' cannot be empty",
                    seed
                )));
            }

            let compiled = SeedPattern::compile(pattern).map_err(|e| {
                ConfigError::InvalidPattern(format!("Pattern for seed '{}': {}", seed, e))
            })?;

            if rules.contains_key(&seed) {
                return Err(ConfigError::Validation(format!(
                    "Seed '{}' has more than one pattern",
                    seed
                )));
            }
            rules.insert(seed, compiled);
        }

        Ok(Self { rules })
    }

    /// Builds the table from the `[seed-filters]` section of a configuration
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::from_map(&config.seed_filters)
    }

    /// Returns the pattern registered for `seed`, if any
    pub fn get(&self, seed: &str) -> Option<&SeedPattern> {
        self.rules.get(seed)
    }

    /// Returns true if `seed` has a pattern
    pub fn contains_seed(&self, seed: &str) -> bool {
        self.rules.contains_key(seed)
    }

    /// Returns the filtered seeds in sorted order
    pub fn seeds(&self) -> Vec<&str> {
        let mut seeds: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        seeds.sort_unstable();
        seeds
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
