use crate::candidate::Referrer;
use crate::state::CandidateStatus;
use std::fmt;
use std::sync::Arc;

/// A URI offered to the candidate chain, together with the referrer
/// information the pipeline recorded when it was discovered
#[derive(Debug, Clone, Default)]
pub struct CandidateUri {
    /// Full string form of the URI
    uri: String,

    /// Whether this URI is one of the crawl's seeds
    seed: bool,

    /// URI of the page the candidate was discovered on, when it differs
    /// from the immediate referrer
    base_uri: Option<String>,

    /// String form of the immediate referrer
    via: Option<String>,

    /// The immediate referrer itself, for chain traversal
    full_via: Option<Arc<CandidateUri>>,

    /// Seed this candidate was discovered under, inherited along discovery
    source_tag: Option<String>,

    status: CandidateStatus,

    non_fatal_failures: Vec<String>,
}

impl CandidateUri {
    /// Creates a candidate with no referrer information
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            seed: false,
            base_uri: None,
            via: None,
            full_via: None,
            source_tag: None,
            status: CandidateStatus::default(),
            non_fatal_failures: Vec::new(),
        }
    }

    /// Creates a seed candidate
    pub fn seed(uri: impl Into<String>) -> Self {
        Self::new(uri).with_seed(true)
    }

    /// Creates a candidate discovered on `parent`
    ///
    /// The parent becomes both the via and the base URI, and the parent's
    /// source tag is inherited.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use seed_scope::CandidateUri;
    ///
    /// let seed = Arc::new(CandidateUri::seed("http://greglu.com/"));
    /// let page = CandidateUri::discovered("http://greglu.com/blog/", seed);
    ///
    /// assert_eq!(page.via(), Some("http://greglu.com/"));
    /// assert_eq!(page.base_uri(), "http://greglu.com/");
    /// assert_eq!(page.source_tag(), Some("http://greglu.com/"));
    /// ```
    pub fn discovered(uri: impl Into<String>, parent: Arc<CandidateUri>) -> Self {
        Self {
            uri: uri.into(),
            seed: false,
            base_uri: None,
            via: Some(parent.uri.clone()),
            source_tag: parent.source_tag.clone(),
            full_via: Some(parent),
            status: CandidateStatus::default(),
            non_fatal_failures: Vec::new(),
        }
    }

    /// Sets the seed flag; a seed is its own source tag
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        if seed {
            self.source_tag = Some(self.uri.clone());
        }
        self
    }

    /// Overrides the URI of the discovering page
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Sets the via string without attaching a full referrer object
    pub fn with_via(mut self, via: impl Into<String>) -> Self {
        self.via = Some(via.into());
        self
    }

    pub fn with_source_tag(mut self, source_tag: impl Into<String>) -> Self {
        self.source_tag = Some(source_tag.into());
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn is_seed(&self) -> bool {
        self.seed
    }

    /// Returns the URI of the discovering page
    ///
    /// Falls back to the immediate referrer, then to the candidate's own URI.
    pub fn base_uri(&self) -> &str {
        self.base_uri
            .as_deref()
            .or(self.via.as_deref())
            .unwrap_or(&self.uri)
    }

    pub fn via(&self) -> Option<&str> {
        self.via.as_deref()
    }

    pub fn full_via(&self) -> Option<&CandidateUri> {
        self.full_via.as_deref()
    }

    pub fn source_tag(&self) -> Option<&str> {
        self.source_tag.as_deref()
    }

    pub fn status(&self) -> CandidateStatus {
        self.status
    }

    pub fn set_status(&mut self, status: CandidateStatus) {
        self.status = status;
    }

    /// Errors recorded by the candidate chain that did not stop the crawl
    pub fn non_fatal_failures(&self) -> &[String] {
        &self.non_fatal_failures
    }

    pub fn add_non_fatal_failure(&mut self, message: impl Into<String>) {
        self.non_fatal_failures.push(message.into());
    }
}

impl Referrer for CandidateUri {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn is_seed(&self) -> bool {
        self.seed
    }

    fn full_via(&self) -> Option<&dyn Referrer> {
        self.full_via.as_deref().map(|via| via as &dyn Referrer)
    }
}

// Solely owned referrers are unlinked in a loop; chains of any length drop
// without recursion.
impl Drop for CandidateUri {
    fn drop(&mut self) {
        let mut next = self.full_via.take();
        while let Some(parent) = next {
            next = match Arc::into_inner(parent) {
                Some(mut parent) => parent.full_via.take(),
                None => None,
            };
        }
    }
}

impl fmt::Display for CandidateUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_candidate_defaults() {
        let candidate = CandidateUri::new("http://example.com/page");
        assert!(!candidate.is_seed());
        assert_eq!(candidate.via(), None);
        assert!(candidate.full_via().is_none());
        assert_eq!(candidate.source_tag(), None);
        assert_eq!(candidate.base_uri(), "http://example.com/page");
        assert_eq!(candidate.status(), CandidateStatus::Discovered);
        assert!(candidate.non_fatal_failures().is_empty());
    }

    #[test]
    fn test_seed_is_own_source() {
        let seed = CandidateUri::seed("http://example.com/");
        assert!(seed.is_seed());
        assert_eq!(seed.source_tag(), Some("http://example.com/"));
    }

    #[test]
    fn test_discovered_links_parent() {
        let seed = Arc::new(CandidateUri::seed("http://example.com/"));
        let page = Arc::new(CandidateUri::discovered(
            "http://example.com/index.html",
            Arc::clone(&seed),
        ));
        let link = CandidateUri::discovered("http://example.com/blog/post1", Arc::clone(&page));

        assert_eq!(link.via(), Some("http://example.com/index.html"));
        assert_eq!(link.base_uri(), "http://example.com/index.html");
        assert_eq!(link.source_tag(), Some("http://example.com/"));
        assert_eq!(
            link.full_via().and_then(|v| v.full_via()).map(|v| v.uri()),
            Some("http://example.com/")
        );
    }

    #[test]
    fn test_base_uri_override() {
        let candidate = CandidateUri::new("http://example.com/a")
            .with_via("http://example.com/")
            .with_base_uri("http://example.com/robots.txt");
        assert_eq!(candidate.base_uri(), "http://example.com/robots.txt");
        assert_eq!(candidate.via(), Some("http://example.com/"));
    }

    #[test]
    fn test_status_and_failures() {
        let mut candidate = CandidateUri::new("http://example.com/a");
        candidate.set_status(CandidateStatus::OutOfScope);
        candidate.add_non_fatal_failure("boom");

        assert_eq!(candidate.status(), CandidateStatus::OutOfScope);
        assert_eq!(candidate.non_fatal_failures(), ["boom".to_string()]);
    }

    #[test]
    fn test_referrer_view() {
        let seed = Arc::new(CandidateUri::seed("http://example.com/"));
        let page = CandidateUri::discovered("http://example.com/a", seed);

        let referrer: &dyn Referrer = &page;
        let via = referrer.full_via().unwrap();
        assert_eq!(via.uri(), "http://example.com/");
        assert!(via.is_seed());
        assert!(via.full_via().is_none());
    }

    #[test]
    fn test_drop_long_chain() {
        let mut current = Arc::new(CandidateUri::seed("http://example.com/"));
        for i in 0..250_000 {
            current = Arc::new(CandidateUri::discovered(
                format!("http://example.com/page{}", i),
                current,
            ));
        }
        let candidate = CandidateUri::discovered("http://example.com/last", current);
        drop(candidate);
    }

    #[test]
    fn test_drop_keeps_shared_parent() {
        let seed = Arc::new(CandidateUri::seed("http://example.com/"));
        let page = Arc::new(CandidateUri::discovered(
            "http://example.com/index.html",
            Arc::clone(&seed),
        ));
        let first = CandidateUri::discovered("http://example.com/a", Arc::clone(&page));
        let second = CandidateUri::discovered("http://example.com/b", Arc::clone(&page));

        drop(first);
        assert_eq!(Arc::strong_count(&page), 2);
        assert_eq!(
            second.full_via().and_then(|v| v.full_via()).map(|v| v.uri()),
            Some("http://example.com/")
        );

        drop(second);
        drop(page);
        assert_eq!(Arc::strong_count(&seed), 1);
    }

    #[test]
    fn test_display() {
        let candidate = CandidateUri::new("http://example.com/a");
        assert_eq!(candidate.to_string(), "http://example.com/a");
    }
}
