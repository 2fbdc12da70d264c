//! State module for candidate status tracking
//!
//! The scope filter's only side effect is moving a candidate to
//! `CandidateStatus::OutOfScope`; the remaining values belong to the
//! surrounding pipeline.

mod candidate_status;

pub use candidate_status::CandidateStatus;
