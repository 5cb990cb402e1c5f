/*!
 * Shortest-Job-First (non-preemptive)
 */

use super::sequential::run_to_completion;
use super::traits::{Schedule, SchedulingAlgorithm};
use super::types::Policy;
use crate::process::Process;

/// Runs the shortest burst first, ties broken by pid
///
/// The order is computed once before execution. With every process
/// present at time 0 this is equivalent to re-evaluating a ready queue.
/// Rows stay in execution order and are not re-sorted by pid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingAlgorithm for Sjf {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn schedule(&self, mut processes: Vec<Process>) -> Schedule {
        processes.sort_by(|a, b| a.burst.cmp(&b.burst).then_with(|| a.pid.cmp(&b.pid)));
        run_to_completion(processes)
    }
}
