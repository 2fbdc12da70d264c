//! Counters for candidate chain runs
//!
//! Workers update the counters concurrently, so they are plain atomics;
//! `snapshot` copies them into a value that can be printed or compared.

use crate::state::CandidateStatus;
use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters shared by every worker running a chain
#[derive(Debug, Default)]
pub struct ChainStats {
    evaluated: AtomicU64,
    proceeded: AtomicU64,
    finished: AtomicU64,
    out_of_scope: AtomicU64,
    errors: AtomicU64,
}

impl ChainStats {
    pub fn record_evaluated(&self) {
        self.evaluated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_proceeded(&self) {
        self.proceeded.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a candidate finished by a stage, noting scope rejections
    pub fn record_finished(&self, status: CandidateStatus) {
        self.finished.fetch_add(1, Ordering::Relaxed);
        if status.is_out_of_scope() {
            self.out_of_scope.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Copies the current counter values
    pub fn snapshot(&self) -> ChainStatistics {
        ChainStatistics {
            evaluated: self.evaluated.load(Ordering::Relaxed),
            proceeded: self.proceeded.load(Ordering::Relaxed),
            finished: self.finished.load(Ordering::Relaxed),
            out_of_scope: self.out_of_scope.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the chain counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainStatistics {
    /// Candidates offered to the chain
    pub evaluated: u64,

    /// Candidates that passed every stage
    pub proceeded: u64,

    /// Candidates a stage finished early
    pub finished: u64,

    /// Finished candidates that were marked out of scope
    pub out_of_scope: u64,

    /// Candidates on which a stage failed
    pub errors: u64,
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &ChainStatistics) {
    println!("=== Scope Statistics ===\n");

    println!("Overview:");
    println!("  Candidates evaluated: {}", stats.evaluated);
    println!("  Proceeded: {}", stats.proceeded);
    println!("  Finished: {}", stats.finished);
    println!("  Out of scope: {}", stats.out_of_scope);
    println!("  Errors: {}", stats.errors);
    println!();

    let in_scope_rate = if stats.evaluated > 0 {
        (stats.proceeded as f64 / stats.evaluated as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "In-scope Rate: {:.1}% ({} / {} candidates proceeded)",
        in_scope_rate, stats.proceeded, stats.evaluated
    );
}
