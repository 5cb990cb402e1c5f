/*!
 * Process Registry
 * Caller-owned, insertion-ordered set of processes to simulate
 */

use super::types::{Process, ProcessInfo};
use super::validation::{parse_burst, validate_burst};
use crate::core::types::Ticks;
use crate::core::{ProcessId, SimError, SimResult};
use tracing::{debug, warn};

/// Ordered process list
///
/// Policies only ever see a [`snapshot`](Self::snapshot); nothing in the
/// scheduler holds a reference into the registry's own storage.
#[derive(Debug, Clone, Default)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
    total_burst: Ticks,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a process; its arrival order is its insertion index
    ///
    /// Duplicate ids are accepted and logged. Sorting is stable, so runs
    /// over duplicates stay deterministic.
    ///
    /// The sum of all bursts bounds every simulated clock value and must
    /// fit in [`Ticks`].
    pub fn add(&mut self, pid: &str, burst: Ticks) -> SimResult<Process> {
        let pid = ProcessId::new(pid)?;
        let burst = validate_burst(burst)?;
        let total_burst = self.total_burst.checked_add(burst).ok_or_else(|| {
            SimError::InvalidProcess(format!(
                "burst time {} of '{}' overflows the total burst of {}",
                burst, pid, self.total_burst
            ))
        })?;

        if self.contains(pid.as_str()) {
            warn!(pid = %pid, "duplicate process id registered");
        }

        let process = Process {
            pid,
            arrival_order: self.processes.len(),
            burst,
        };
        debug!(
            pid = %process.pid,
            burst = process.burst,
            arrival_order = process.arrival_order,
            "process registered"
        );
        self.processes.push(process.clone());
        self.total_burst = total_burst;
        Ok(process)
    }

    /// Register a process whose burst time is still raw text
    pub fn add_parsed(&mut self, pid: &str, burst: &str) -> SimResult<Process> {
        // Validate the id first so an empty id is reported before a bad burst
        ProcessId::new(pid)?;
        let burst = parse_burst(burst)?;
        self.add(pid, burst)
    }

    /// Remove every process
    pub fn clear(&mut self) {
        debug!(count = self.processes.len(), "registry cleared");
        self.processes.clear();
        self.total_burst = 0;
    }

    /// Owned copy of the processes in insertion order
    pub fn snapshot(&self) -> Vec<Process> {
        self.processes.clone()
    }

    /// Pid and burst of every process, for display
    pub fn list(&self) -> Vec<ProcessInfo> {
        self.processes.iter().map(Process::info).collect()
    }

    pub fn contains(&self, pid: &str) -> bool {
        self.processes.iter().any(|p| p.pid.as_str() == pid)
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all bursts, i.e. the makespan of any policy
    pub fn total_burst(&self) -> Ticks {
        self.total_burst
    }
}
