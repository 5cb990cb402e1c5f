/*!
 * Round-Robin
 * Preemptive scheduling with a fixed time quantum
 */

use super::entry::Entry;
use super::traits::{Schedule, SchedulingAlgorithm};
use super::types::{Policy, TimeQuantum};
use crate::core::limits::MAX_PREALLOCATED_SEGMENTS;
use crate::core::types::Ticks;
use crate::metrics::{sort_by_pid, ResultRow};
use crate::process::Process;
use crate::timeline::Timeline;
use std::collections::VecDeque;
use tracing::trace;

/// FIFO ready queue with a fixed slice per turn
///
/// Each turn runs the head for `min(quantum, remaining)`. Unfinished
/// processes go to the tail. Result rows are sorted by pid.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: TimeQuantum,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn schedule(&self, processes: Vec<Process>) -> Schedule {
        let quantum = self.quantum.ticks();

        // Every slice but the last of a process is a full quantum
        let slices = processes
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.burst.div_ceil(quantum)));
        let capacity = usize::try_from(slices)
            .unwrap_or(usize::MAX)
            .min(MAX_PREALLOCATED_SEGMENTS);
        let mut timeline = Timeline::with_capacity(capacity);
        let mut results = Vec::with_capacity(processes.len());

        let mut queue: VecDeque<Entry> = processes.into_iter().map(Entry::new).collect();
        let mut clock: Ticks = 0;

        while let Some(mut entry) = queue.pop_front() {
            let start = clock;
            clock = clock.saturating_add(entry.run_slice(quantum));
            timeline.record(entry.process.pid.clone(), start, clock);

            if entry.is_finished() {
                trace!(pid = %entry.process.pid, completion = clock, "process finished");
                results.push(ResultRow::new(
                    entry.process.pid,
                    entry.process.burst,
                    clock,
                ));
            } else {
                trace!(
                    pid = %entry.process.pid,
                    remaining = entry.remaining,
                    at = clock,
                    "preempted"
                );
                queue.push_back(entry);
            }
        }

        sort_by_pid(&mut results);
        Schedule { timeline, results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProcessId;

    fn process(pid: &str, arrival_order: usize, burst: u64) -> Process {
        Process {
            pid: ProcessId::new(pid).unwrap(),
            arrival_order,
            burst,
        }
    }

    fn rr(quantum: u64) -> RoundRobin {
        RoundRobin::new(TimeQuantum::new(quantum).unwrap())
    }

    #[test]
    fn test_two_process_interleaving() {
        let schedule = rr(2).schedule(vec![process("A", 0, 5), process("B", 1, 3)]);

        let spans: Vec<(&str, u64, u64)> = schedule
            .timeline
            .iter()
            .map(|s| (s.pid.as_str(), s.start, s.end))
            .collect();
        assert_eq!(
            spans,
            vec![("A", 0, 2), ("B", 2, 4), ("A", 4, 6), ("B", 6, 7), ("A", 7, 8)]
        );

        let rows: Vec<(&str, u64, u64)> = schedule
            .results
            .iter()
            .map(|r| (r.pid.as_str(), r.completion, r.waiting))
            .collect();
        assert_eq!(rows, vec![("A", 8, 3), ("B", 7, 4)]);
    }

    #[test]
    fn test_quantum_one_alternates() {
        let schedule = rr(1).schedule(vec![process("X", 0, 2), process("Y", 1, 2)]);
        let order: Vec<&str> = schedule.timeline.iter().map(|s| s.pid.as_str()).collect();
        assert_eq!(order, vec!["X", "Y", "X", "Y"]);
    }

    #[test]
    fn test_large_quantum_is_single_slice() {
        let schedule = rr(100).schedule(vec![process("A", 0, 5), process("B", 1, 3)]);
        assert_eq!(schedule.timeline.len(), 2);
        assert_eq!(schedule.timeline.makespan(), 8);
    }

    #[test]
    fn test_seeded_in_snapshot_order() {
        // Seeding follows the snapshot order, not pid order
        let schedule = rr(2).schedule(vec![process("Z", 0, 1), process("A", 1, 1)]);
        assert_eq!(schedule.timeline.segments()[0].pid.as_str(), "Z");
        assert_eq!(schedule.results[0].pid.as_str(), "A");
    }

    #[test]
    fn test_bursts_near_ticks_limit() {
        let half = u64::MAX / 2;
        let schedule = rr(half).schedule(vec![process("A", 0, half), process("B", 1, half)]);

        assert_eq!(schedule.timeline.len(), 2);
        assert_eq!(schedule.timeline.makespan(), u64::MAX - 1);
        assert_eq!(schedule.results[1].completion, u64::MAX - 1);
        assert_eq!(schedule.results[1].waiting, half);
    }
}
