use crate::candidate::CandidateUri;
use crate::chain::{ProcessResult, Processor};
use crate::config::{Config, DEFAULT_MAX_VIA_HOPS};
use crate::rules::RuleTable;
use crate::scope::SeedResolution;
use crate::state::CandidateStatus;
use crate::url::{is_robots_txt, is_rooted_under};
use crate::{ConfigResult, Result};
use std::sync::Arc;

/// Candidate-chain stage applying per-seed patterns
///
/// Every non-seed candidate whose discovering page lies under a filtered seed
/// must fully match that seed's pattern, otherwise it is marked out of scope
/// and its chain is finished. Candidates discovered on robots.txt, under an
/// unfiltered seed, or with no resolvable seed pass through untouched.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use seed_scope::{CandidateStatus, CandidateUri, ProcessResult, Processor, RuleTable, SeedScopeFilter};
///
/// let rules = RuleTable::from_map([("http://greglu.com/", "http://greglu.com/blog.*")]).unwrap();
/// let filter = SeedScopeFilter::new(Arc::new(rules));
///
/// let seed = Arc::new(CandidateUri::seed("http://greglu.com/"));
/// let mut shop = CandidateUri::discovered("http://greglu.com/shop/item1", seed);
///
/// assert_eq!(filter.process(&mut shop).unwrap(), ProcessResult::Finish);
/// assert_eq!(shop.status(), CandidateStatus::OutOfScope);
/// ```
#[derive(Debug, Clone)]
pub struct SeedScopeFilter {
    rules: Arc<RuleTable>,
    resolution: SeedResolution,
    max_via_hops: usize,
}

impl SeedScopeFilter {
    /// Creates a filter using chain-walk resolution and the default hop bound
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self {
            rules,
            resolution: SeedResolution::default(),
            max_via_hops: DEFAULT_MAX_VIA_HOPS,
        }
    }

    /// Builds the rule table and resolution settings from configuration
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        let rules = RuleTable::from_config(config)?;
        Ok(Self::new(Arc::new(rules))
            .with_resolution(config.scope.resolution)
            .with_max_via_hops(config.scope.max_via_hops))
    }

    pub fn with_resolution(mut self, resolution: SeedResolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the chain-walk bound; at least the immediate referrer is visited
    pub fn with_max_via_hops(mut self, max_via_hops: usize) -> Self {
        self.max_via_hops = max_via_hops.max(1);
        self
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn resolution(&self) -> SeedResolution {
        self.resolution
    }

    pub fn max_via_hops(&self) -> usize {
        self.max_via_hops
    }

    /// Returns the rule table key for the seed `candidate` descends from
    pub fn resolve_seed<'a>(&self, candidate: &'a CandidateUri) -> &'a str {
        self.resolution.resolve(candidate, self.max_via_hops)
    }

    /// Decides whether `candidate` is in scope without modifying it
    ///
    /// Filtering only applies when the discovering page is not robots.txt,
    /// starts with the resolved seed, and that seed has a pattern. In every
    /// other case the candidate is in scope.
    pub fn is_in_scope(&self, candidate: &CandidateUri) -> bool {
        let seed = self.resolve_seed(candidate);
        let base_uri = candidate.base_uri();

        if is_robots_txt(base_uri) || !is_rooted_under(base_uri, seed) {
            return true;
        }

        match self.rules.get(seed) {
            Some(pattern) => pattern.is_full_match(candidate.uri()),
            None => true,
        }
    }
}

impl Processor for SeedScopeFilter {
    fn name(&self) -> &str {
        "seed-scope-filter"
    }

    /// Seeds are always in scope
    fn should_process(&self, candidate: &CandidateUri) -> bool {
        !candidate.is_seed()
    }

    fn inner_process_result(&self, candidate: &mut CandidateUri) -> Result<ProcessResult> {
        tracing::debug!("Checking {} for filter matches", candidate);

        if self.is_in_scope(candidate) {
            return Ok(ProcessResult::Proceed);
        }

        tracing::info!(
            "{} does not match the filter for seed {}, marking out of scope",
            candidate,
            self.resolve_seed(candidate)
        );
        candidate.set_status(CandidateStatus::OutOfScope);
        Ok(ProcessResult::Finish)
    }
}
