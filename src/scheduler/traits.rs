/*!
 * Scheduler Traits
 * Interface shared by every scheduling policy
 */

use super::types::Policy;
use crate::metrics::ResultRow;
use crate::process::Process;
use crate::timeline::Timeline;

/// Raw output of one policy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub timeline: Timeline,
    /// Rows in the order the policy presents them
    pub results: Vec<ResultRow>,
}

/// A single-CPU scheduling algorithm
///
/// Implementations receive a private snapshot of the registry and must be
/// deterministic: the same snapshot always yields the same schedule.
pub trait SchedulingAlgorithm {
    fn policy(&self) -> Policy;

    /// Run every process to completion
    ///
    /// `processes` is non-empty and each burst is positive.
    fn schedule(&self, processes: Vec<Process>) -> Schedule;
}
