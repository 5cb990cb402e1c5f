/*!
 * First-Come-First-Served
 */

use super::sequential::run_to_completion;
use super::traits::{Schedule, SchedulingAlgorithm};
use super::types::Policy;
use crate::metrics::sort_by_pid;
use crate::process::Process;

/// Runs processes in arrival (insertion) order
///
/// Result rows are re-sorted by pid for presentation; the timeline keeps
/// execution order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingAlgorithm for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn schedule(&self, mut processes: Vec<Process>) -> Schedule {
        // Snapshots are already in insertion order; sort anyway so an
        // unordered input still runs correctly
        processes.sort_by_key(|p| p.arrival_order);

        let mut schedule = run_to_completion(processes);
        sort_by_pid(&mut schedule.results);
        schedule
    }
}
