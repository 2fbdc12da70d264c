//! Scope decisions for crawl candidates
//!
//! This module contains the seed scope filter and the strategies it uses to
//! find the seed a candidate descends from:
//! - direct via: the immediate referrer is the seed
//! - source tag: the seed recorded when the candidate was discovered
//! - chain walk: the referrer chain followed back to a seed, bounded by a hop count

mod filter;
mod resolve;

pub use filter::SeedScopeFilter;
pub use resolve::{walk_to_seed, SeedResolution, WalkOutcome};
