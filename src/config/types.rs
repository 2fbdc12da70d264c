use crate::scope::SeedResolution;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Default bound on referrer hops followed during chain-walk resolution
pub const DEFAULT_MAX_VIA_HOPS: usize = 50;

/// Main configuration structure for Seed-Scope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scope: ScopeConfig,

    /// Seed URI -> full-match regular expression
    #[serde(rename = "seed-filters", default)]
    pub seed_filters: BTreeMap<String, String>,
}

/// Seed resolution behavior
#[derive(Debug, Clone, Deserialize)]
pub struct ScopeConfig {
    /// Strategy used to find the seed a candidate descends from
    #[serde(default)]
    pub resolution: SeedResolution,

    /// Maximum number of referrer hops followed when walking the via chain
    #[serde(rename = "max-via-hops", default = "default_max_via_hops")]
    pub max_via_hops: usize,

    /// Additional seeds that have no filter attached
    #[serde(default)]
    pub seeds: Vec<String>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            resolution: SeedResolution::default(),
            max_via_hops: DEFAULT_MAX_VIA_HOPS,
            seeds: Vec::new(),
        }
    }
}

fn default_max_via_hops() -> usize {
    DEFAULT_MAX_VIA_HOPS
}

impl Config {
    /// Returns every seed URI known to the configuration, filtered or not
    pub fn known_seeds(&self) -> impl Iterator<Item = &str> {
        self.seed_filters
            .keys()
            .map(String::as_str)
            .chain(self.scope.seeds.iter().map(String::as_str))
    }
}
