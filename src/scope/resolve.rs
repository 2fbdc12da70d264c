use crate::candidate::{CandidateUri, Referrer};
use serde::Deserialize;
use std::fmt;

/// How the originating seed of a candidate is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedResolution {
    /// The immediate referrer is taken as the seed
    ///
    /// Only meaningful when every candidate is one hop from its seed.
    DirectVia,

    /// The source tag inherited along discovery names the seed
    SourceTag,

    /// The referrer chain is walked back until a seed or the hop bound
    #[default]
    ChainWalk,
}

impl SeedResolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DirectVia => "direct-via",
            Self::SourceTag => "source-tag",
            Self::ChainWalk => "chain-walk",
        }
    }

    /// Returns the seed key for `candidate` under this strategy
    ///
    /// A candidate without the needed referrer information resolves to the
    /// empty string, which no rule table entry matches.
    pub fn resolve<'a>(&self, candidate: &'a CandidateUri, max_hops: usize) -> &'a str {
        match self {
            Self::DirectVia => candidate.via().unwrap_or(""),
            Self::SourceTag => candidate.source_tag().unwrap_or(""),
            Self::ChainWalk => walk_to_seed(Referrer::full_via(candidate), max_hops).seed_key,
        }
    }
}

impl fmt::Display for SeedResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a referrer chain walk stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOutcome<'a> {
    /// URI of the last link reached, or empty if there was no referrer
    pub seed_key: &'a str,

    /// Number of links visited, the immediate referrer counting as one
    pub hops: usize,

    /// Whether the last link reached is flagged as a seed
    pub reached_seed: bool,
}

/// Follows a referrer chain towards its seed, visiting at most `max_hops` links
///
/// The walk stops at the first link flagged as a seed, at the end of the
/// chain, or after `max_hops` links, whichever comes first. Stopping on the
/// bound is not an error: the last link reached is returned as a best-effort
/// key. Cyclic chains therefore terminate as well.
///
/// The immediate referrer is always visited, so a `max_hops` of zero is
/// treated as one.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use seed_scope::CandidateUri;
/// use seed_scope::candidate::Referrer;
/// use seed_scope::scope::walk_to_seed;
///
/// let seed = Arc::new(CandidateUri::seed("http://greglu.com/"));
/// let page = Arc::new(CandidateUri::discovered("http://greglu.com/a", seed));
/// let link = CandidateUri::discovered("http://greglu.com/b", page);
///
/// let walk = walk_to_seed(Referrer::full_via(&link), 50);
/// assert_eq!(walk.seed_key, "http://greglu.com/");
/// assert_eq!(walk.hops, 2);
/// assert!(walk.reached_seed);
/// ```
pub fn walk_to_seed<'a>(start: Option<&'a dyn Referrer>, max_hops: usize) -> WalkOutcome<'a> {
    let Some(mut current) = start else {
        return WalkOutcome {
            seed_key: "",
            hops: 0,
            reached_seed: false,
        };
    };

    let max_hops = max_hops.max(1);
    let mut hops = 1;
    while !current.is_seed() && hops < max_hops {
        match current.full_via() {
            Some(next) => {
                current = next;
                hops += 1;
            }
            None => break,
        }
    }

    WalkOutcome {
        seed_key: current.uri(),
        hops,
        reached_seed: current.is_seed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, OnceLock};

    /// Builds `seed <- link1 <- ... <- linkN`, returning the innermost link
    fn chain(seed: &str, links: usize) -> Arc<CandidateUri> {
        let mut current = Arc::new(CandidateUri::seed(seed));
        for i in 1..=links {
            current = Arc::new(CandidateUri::discovered(
                format!("{}page{}", seed, links + 1 - i),
                current,
            ));
        }
        current
    }

    /// A chain link whose referrer can be set after construction, allowing cycles
    struct LoopLink {
        uri: String,
        next: OnceLock<Arc<LoopLink>>,
    }

    impl Referrer for LoopLink {
        fn uri(&self) -> &str {
            &self.uri
        }

        fn is_seed(&self) -> bool {
            false
        }

        fn full_via(&self) -> Option<&dyn Referrer> {
            self.next.get().map(|next| &**next as &dyn Referrer)
        }
    }

    #[test]
    fn test_no_referrer_resolves_empty() {
        let walk = walk_to_seed(None, 50);
        assert_eq!(walk.seed_key, "");
        assert_eq!(walk.hops, 0);
        assert!(!walk.reached_seed);
    }

    #[test]
    fn test_immediate_seed() {
        let seed = CandidateUri::seed("http://example.com/");
        let walk = walk_to_seed(Some(&seed), 50);
        assert_eq!(walk.seed_key, "http://example.com/");
        assert_eq!(walk.hops, 1);
        assert!(walk.reached_seed);
    }

    #[test]
    fn test_walks_to_seed() {
        let start = chain("http://example.com/", 10);
        let walk = walk_to_seed(Some(&*start), 50);
        assert_eq!(walk.seed_key, "http://example.com/");
        assert_eq!(walk.hops, 11);
        assert!(walk.reached_seed);
    }

    #[test]
    fn test_stops_at_bound() {
        // 60 non-seed links stand between the start and the seed
        let start = chain("http://example.com/", 60);
        let walk = walk_to_seed(Some(&*start), 50);

        assert_eq!(walk.hops, 50);
        assert!(!walk.reached_seed);
        assert_eq!(walk.seed_key, "http://example.com/page50");
    }

    #[test]
    fn test_zero_bound_visits_immediate_referrer() {
        let start = chain("http://example.com/", 3);
        let walk = walk_to_seed(Some(&*start), 0);

        assert_eq!(walk.hops, 1);
        assert_eq!(walk.seed_key, "http://example.com/page1");
        assert_eq!(walk, walk_to_seed(Some(&*start), 1));
    }

    #[test]
    fn test_chain_end_without_seed() {
        let root = Arc::new(CandidateUri::new("http://example.com/orphan"));
        let start = CandidateUri::discovered("http://example.com/a", root);
        let walk = walk_to_seed(Some(&start), 50);

        assert_eq!(walk.seed_key, "http://example.com/orphan");
        assert_eq!(walk.hops, 2);
        assert!(!walk.reached_seed);
    }

    #[test]
    fn test_self_cycle_terminates() {
        let link = Arc::new(LoopLink {
            uri: "http://example.com/loop".to_string(),
            next: OnceLock::new(),
        });
        let _ = link.next.set(Arc::clone(&link));

        let walk = walk_to_seed(Some(&*link), 50);
        assert_eq!(walk.hops, 50);
        assert_eq!(walk.seed_key, "http://example.com/loop");
    }

    #[test]
    fn test_two_link_cycle_terminates() {
        let a = Arc::new(LoopLink {
            uri: "http://example.com/a".to_string(),
            next: OnceLock::new(),
        });
        let b = Arc::new(LoopLink {
            uri: "http://example.com/b".to_string(),
            next: OnceLock::new(),
        });
        let _ = a.next.set(Arc::clone(&b));
        let _ = b.next.set(Arc::clone(&a));

        let walk = walk_to_seed(Some(&*a), 50);
        assert_eq!(walk.hops, 50);
        // Odd hops land on a, even hops on b
        assert_eq!(walk.seed_key, "http://example.com/b");
    }

    #[test]
    fn test_direct_via_resolution() {
        let candidate = CandidateUri::new("http://example.com/a").with_via("http://example.com/");
        assert_eq!(
            SeedResolution::DirectVia.resolve(&candidate, 50),
            "http://example.com/"
        );
        assert_eq!(
            SeedResolution::DirectVia.resolve(&CandidateUri::new("http://example.com/a"), 50),
            ""
        );
    }

    #[test]
    fn test_source_tag_resolution() {
        let start = chain("http://example.com/", 3);
        let candidate = CandidateUri::discovered("http://example.com/deep", start);
        assert_eq!(
            SeedResolution::SourceTag.resolve(&candidate, 50),
            "http://example.com/"
        );
        assert_eq!(
            SeedResolution::SourceTag.resolve(&CandidateUri::new("http://example.com/a"), 50),
            ""
        );
    }

    #[test]
    fn test_chain_walk_resolution() {
        let start = chain("http://example.com/", 3);
        let candidate = CandidateUri::discovered("http://example.com/deep", start);
        assert_eq!(
            SeedResolution::ChainWalk.resolve(&candidate, 50),
            "http://example.com/"
        );
        // A via string alone is not enough to walk
        let candidate = CandidateUri::new("http://example.com/a").with_via("http://example.com/");
        assert_eq!(SeedResolution::ChainWalk.resolve(&candidate, 50), "");
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(SeedResolution::default(), SeedResolution::ChainWalk);
        assert_eq!(SeedResolution::DirectVia.to_string(), "direct-via");
        assert_eq!(SeedResolution::SourceTag.to_string(), "source-tag");
        assert_eq!(SeedResolution::ChainWalk.to_string(), "chain-walk");
    }
}
