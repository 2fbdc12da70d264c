//! Candidate URIs and their referrer chains
//!
//! A candidate carries everything the scope filter reads: its URI, whether it
//! is a seed, the page it was discovered on, and the chain of referrers back
//! towards the seed. Chain traversal goes through the [`Referrer`] trait so
//! that any pipeline representation of the via chain can be walked.

mod loader;
mod uri;

pub use loader::{load_candidates, parse_candidates};
pub use uri::CandidateUri;

/// Read access to one link of a referrer chain
pub trait Referrer {
    /// Full string form of this link's URI
    fn uri(&self) -> &str;

    /// Whether this link is one of the crawl's seeds
    fn is_seed(&self) -> bool;

    /// The link this one was discovered on, if known
    fn full_via(&self) -> Option<&dyn Referrer>;
}
