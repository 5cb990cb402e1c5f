/*!
 * Scheduler Entry Types
 * Working state of a process inside the Round-Robin ready queue
 */

use crate::core::types::Ticks;
use crate::process::Process;

/// Ready-queue entry
///
/// `remaining` is created from the burst at the start of every run, so no
/// state leaks between runs.
#[derive(Debug, Clone)]
pub(super) struct Entry {
    pub process: Process,
    pub remaining: Ticks,
}

impl Entry {
    pub fn new(process: Process) -> Self {
        let remaining = process.burst;
        Self { process, remaining }
    }

    /// Consume up to one quantum of CPU time; returns the ticks actually used
    pub fn run_slice(&mut self, quantum: Ticks) -> Ticks {
        let exec = quantum.min(self.remaining);
        self.remaining -= exec;
        exec
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}
