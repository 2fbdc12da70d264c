//! Candidate chain: ordered processing stages applied to each candidate
//!
//! Each stage implements [`Processor`]. The chain runs stages in order and
//! stops a candidate as soon as one of them returns [`ProcessResult::Finish`].
//! A stage that fails does not take the run down with it: the error is
//! logged, recorded on the candidate and counted.

mod stats;

pub use stats::{print_statistics, ChainStatistics, ChainStats};

use crate::candidate::CandidateUri;
use crate::Result;
use std::fmt;
use std::sync::Arc;

/// Outcome of a single processing stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessResult {
    /// Continue with the next stage
    Proceed,

    /// Stop processing this candidate in the current chain
    Finish,
}

impl fmt::Display for ProcessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proceed => f.pad("PROCEED"),
            Self::Finish => f.pad("FINISH"),
        }
    }
}

/// A stage of the candidate chain
///
/// Implementations hold no per-candidate state; the same instance is shared
/// by every worker.
pub trait Processor: Send + Sync {
    /// Name used in logs and error reports
    fn name(&self) -> &str;

    /// Returns false to let the candidate pass this stage untouched
    fn should_process(&self, candidate: &CandidateUri) -> bool;

    /// Performs the stage's work on an eligible candidate
    fn inner_process_result(&self, candidate: &mut CandidateUri) -> Result<ProcessResult>;

    /// Hook run after `inner_process_result` succeeds
    fn post_process(&self, _candidate: &CandidateUri, _result: ProcessResult) {}

    /// Runs the eligibility gate, the stage's work and the post-process hook
    fn process(&self, candidate: &mut CandidateUri) -> Result<ProcessResult> {
        if !self.should_process(candidate) {
            return Ok(ProcessResult::Proceed);
        }

        let result = self.inner_process_result(candidate)?;
        self.post_process(candidate, result);
        Ok(result)
    }
}

/// Ordered list of processors with shared counters
#[derive(Default)]
pub struct CandidateChain {
    processors: Vec<Arc<dyn Processor>>,
    stats: ChainStats,
}

impl CandidateChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a processor to the end of the chain
    pub fn with_processor(mut self, processor: Arc<dyn Processor>) -> Self {
        self.processors.push(processor);
        self
    }

    pub fn processors(&self) -> &[Arc<dyn Processor>] {
        &self.processors
    }

    pub fn stats(&self) -> &ChainStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Runs every processor on `candidate` in order
    ///
    /// # Returns
    ///
    /// * `ProcessResult::Proceed` - Every stage let the candidate through
    /// * `ProcessResult::Finish` - A stage finished the candidate or failed on it
    pub fn run(&self, candidate: &mut CandidateUri) -> ProcessResult {
        self.stats.record_evaluated();

        for processor in &self.processors {
            match processor.process(candidate) {
                Ok(ProcessResult::Proceed) => continue,
                Ok(ProcessResult::Finish) => {
                    tracing::debug!(
                        "{} finished by {} (status: {})",
                        candidate,
                        processor.name(),
                        candidate.status()
                    );
                    self.stats.record_finished(candidate.status());
                    return ProcessResult::Finish;
                }
                Err(e) => {
                    tracing::warn!("{} failed on {}: {}", processor.name(), candidate, e);
                    candidate.add_non_fatal_failure(format!("{}: {}", processor.name(), e));
                    self.stats.record_error();
                    return ProcessResult::Finish;
                }
            }
        }

        self.stats.record_proceeded();
        ProcessResult::Proceed
    }
}

impl fmt::Debug for CandidateChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.processors.iter().map(|p| p.name()).collect();
        f.debug_struct("CandidateChain")
            .field("processors", &names)
            .field("stats", &self.stats.snapshot())
            .finish()
    }
}
