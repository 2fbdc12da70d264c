//! Status values a candidate URI can carry while it moves through the pipeline

use std::fmt;

/// Represents the current status of a candidate URI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CandidateStatus {
    // ===== Active States =====
    /// Candidate has been discovered and not yet scheduled
    #[default]
    Discovered,

    /// Candidate is queued in the frontier
    Queued,

    // ===== Terminal States =====
    /// Candidate was fetched by the crawler
    Fetched,

    /// Candidate was excluded by a scope rule
    OutOfScope,

    /// Candidate processing failed
    Failed,
}

impl CandidateStatus {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// Returns true if the candidate may still be processed
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Discovered | Self::Queued)
    }

    /// Returns true if a scope rule excluded the candidate
    pub fn is_out_of_scope(&self) -> bool {
        matches!(self, Self::OutOfScope)
    }

    /// Converts the status to its stable string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discovered => "discovered",
            Self::Queued => "queued",
            Self::Fetched => "fetched",
            Self::OutOfScope => "out_of_scope",
            Self::Failed => "failed",
        }
    }

    /// Parses a status from its string representation
    ///
    /// Returns None if the string doesn't match any known status.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "discovered" => Some(Self::Discovered),
            "queued" => Some(Self::Queued),
            "fetched" => Some(Self::Fetched),
            "out_of_scope" => Some(Self::OutOfScope),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Returns all possible statuses
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Discovered,
            Self::Queued,
            Self::Fetched,
            Self::OutOfScope,
            Self::Failed,
        ]
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
